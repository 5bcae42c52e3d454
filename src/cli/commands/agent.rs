//! Agent command implementation.

use super::tool::load_prompts;
use crate::agent::{Agent, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::report::truncate;
use anyhow::Result;

/// Run the content-manager agent on a task.
pub async fn run_agent(
    task: &str,
    focus: Option<&str>,
    model: Option<String>,
    max_iterations: usize,
    settings: &Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Agent, settings) {
        Output::error(&e.to_string());
        Output::info("Run 'creator-agency doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    for (op, tools) in [
        (Operation::YouTube, "YouTube analytics"),
        (Operation::Search, "web search and trend"),
    ] {
        if preflight::check(op, settings).is_err() {
            Output::warning(&format!("{} tools are unavailable (API key not set)", tools));
        }
    }

    let mut openai = settings.openai.clone();
    if let Some(model) = model {
        openai.model = model;
    }

    let prompts = load_prompts(settings)?;
    let tools = ToolContext::from_settings(settings, &prompts)?;
    let agent = Agent::new(tools, &openai, &prompts, focus)?.with_max_iterations(max_iterations);

    let spinner = Output::spinner("Agent working...");
    let result = agent.run(task).await;
    spinner.finish_and_clear();

    match result {
        Ok(response) => {
            println!("\n{}\n", response.content);

            if !response.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", response.tool_calls.len()));
                for call in &response.tool_calls {
                    let line = format!("  {} {}", call.name, truncate(&call.arguments, 60));
                    if call.failed {
                        Output::warning(&line);
                    } else {
                        Output::info(&line);
                    }
                }
                println!();
            }

            Output::info(&format!("Completed in {} iteration(s)", response.iterations));
            Ok(())
        }
        Err(e) => {
            Output::failure(&e);
            Err(e.into())
        }
    }
}
