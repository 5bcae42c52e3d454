//! Script command implementation.

use super::run_tool;
use crate::agent::ToolCall;
use crate::cli::ScriptAction;
use crate::config::Settings;
use anyhow::{Context, Result};
use std::io::Read;

/// Run the script command. A missing body is read from stdin.
pub async fn run_script(action: &ScriptAction, settings: &Settings) -> Result<()> {
    let tool = match action {
        ScriptAction::Write { title, content } => {
            let content = match content {
                Some(c) => c.clone(),
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read script body from stdin")?;
                    buf
                }
            };
            ToolCall::WriteScript {
                title: title.clone(),
                content,
            }
        }
        ScriptAction::Edit { filename, edits } => ToolCall::EditScript {
            filename: filename.clone(),
            edits: edits.clone(),
        },
    };

    run_tool(tool, settings).await
}
