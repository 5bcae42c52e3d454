//! Single-shot tool commands (channel, video, comments, search, ...).

use crate::agent::{ToolCall, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use anyhow::Result;

/// Which keys a tool needs before it can run.
pub(crate) fn operation_for(tool: &ToolCall) -> Operation {
    match tool {
        ToolCall::ChannelAnalytics { .. }
        | ToolCall::VideoPerformance { .. }
        | ToolCall::CommentSentiment { .. }
        | ToolCall::CompetitorAnalysis { .. } => Operation::YouTube,
        ToolCall::GenerateContent { .. } => Operation::Generate,
        ToolCall::WebSearch { .. } | ToolCall::TrendAnalysis { .. } => Operation::Search,
        ToolCall::WriteScript { .. }
        | ToolCall::EditScript { .. }
        | ToolCall::ExtractKeywords { .. } => Operation::Local,
    }
}

pub(crate) fn load_prompts(settings: &Settings) -> crate::Result<Prompts> {
    Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )
}

/// Run one tool and print its report.
pub async fn run_tool(tool: ToolCall, settings: &Settings) -> Result<()> {
    if let Err(e) = preflight::check(operation_for(&tool), settings) {
        Output::error(&e.to_string());
        Output::info("Run 'creator-agency doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let prompts = load_prompts(settings)?;
    let context = ToolContext::from_settings(settings, &prompts)?;

    let spinner = Output::spinner(&format!("Running {}...", tool.name()));
    let result = context.execute(&tool).await;
    spinner.finish_and_clear();

    match result {
        Ok(output) => {
            Output::tool_output(&output);
            Ok(())
        }
        Err(e) => {
            Output::failure(&e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ChannelMetric;

    #[test]
    fn test_operation_for_tools() {
        assert_eq!(
            operation_for(&ToolCall::ChannelAnalytics {
                channel: None,
                metric: ChannelMetric::Videos,
            }),
            Operation::YouTube
        );
        assert_eq!(
            operation_for(&ToolCall::TrendAnalysis { keyword: "ai".into() }),
            Operation::Search
        );
        assert_eq!(
            operation_for(&ToolCall::GenerateContent { prompt: "ideas".into() }),
            Operation::Generate
        );
        assert_eq!(
            operation_for(&ToolCall::ExtractKeywords { keywords: "a, b".into() }),
            Operation::Local
        );
    }
}
