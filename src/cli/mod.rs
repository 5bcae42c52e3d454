//! CLI module for creator-agency.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::report::ChannelMetric;
use clap::{Parser, Subcommand};

/// Creator Agency - YouTube analytics and content tools
///
/// Channel and video reports from the YouTube Data API, comment sentiment,
/// trend research, and markdown scripts, plus an agent that combines them.
#[derive(Parser, Debug)]
#[command(name = "creator-agency")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Channel overview with recent videos, statistics or playlists
    Channel {
        /// Channel ID, URL, handle or name (defaults to the configured channel)
        channel: Option<String>,

        /// What to show: videos, statistics or playlists
        #[arg(short, long, default_value_t = ChannelMetric::Videos)]
        metric: ChannelMetric,
    },

    /// Performance report for one video
    Video {
        /// Video ID or URL
        video: String,
    },

    /// Sentiment analysis of a video's comments
    Comments {
        /// Video ID or URL
        video: String,

        /// Maximum number of comments to analyze
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Size and recent uploads of another channel
    Competitor {
        /// Channel ID, URL, handle or name (defaults to the configured channel)
        channel: Option<String>,
    },

    /// Generate content ideas from a prompt
    Generate {
        /// What to generate (e.g., "5 video ideas about local LLMs")
        prompt: String,
    },

    /// Write or edit markdown scripts
    Script {
        #[command(subcommand)]
        action: ScriptAction,
    },

    /// Search the web
    Search {
        /// Search query
        query: String,
    },

    /// Trend report for a topic
    Trends {
        /// Topic or keyword
        keyword: String,
    },

    /// Normalize a comma-separated keyword list
    Keywords {
        /// Keywords, e.g. "AI, robotics, LLMs"
        keywords: String,
    },

    /// Run the content-manager agent on a task
    Agent {
        /// The task for the agent (e.g., "Plan next week's uploads")
        task: String,

        /// Channel focus for the agent's system prompt
        #[arg(short, long)]
        focus: Option<String>,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Maximum number of model calls
        #[arg(long, default_value = "10")]
        max_iterations: usize,
    },

    /// Check API keys and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScriptAction {
    /// Save a new script
    Write {
        /// Script title
        title: String,

        /// Script body (read from stdin if omitted)
        content: Option<String>,
    },

    /// Append edits to an existing script
    Edit {
        /// Script file name or path
        filename: String,

        /// Edit notes to append
        edits: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_metric() {
        let cli = Cli::try_parse_from(["creator-agency", "channel", "@mkbhd", "-m", "stats"]).unwrap();
        match cli.command {
            Commands::Channel { channel, metric } => {
                assert_eq!(channel.as_deref(), Some("@mkbhd"));
                assert_eq!(metric, ChannelMetric::Statistics);
            }
            other => panic!("Expected channel command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_script_edit() {
        let cli = Cli::try_parse_from([
            "creator-agency",
            "-vv",
            "script",
            "edit",
            "draft.md",
            "Shorter intro",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Script { action: ScriptAction::Edit { .. } }
        ));
    }

    #[test]
    fn test_rejects_unknown_metric() {
        assert!(Cli::try_parse_from(["creator-agency", "channel", "-m", "likes"]).is_err());
    }
}
