//! Creator Agency - YouTube analytics and content tools
//!
//! A CLI toolkit for running a YouTube channel: reports built from the
//! YouTube Data API, comment sentiment, web research, and markdown scripts.
//!
//! # Overview
//!
//! - Resolve channel and video references (IDs, URLs, handles, names)
//! - Fetch channel, video, playlist and comment metadata
//! - Render human-readable channel, video, competitor and comment reports
//! - Score comment sentiment with a built-in lexicon
//! - Generate ideas, search the web, and write or edit scripts
//! - Combine all of the above in an LLM content-manager agent
//!
//! # Architecture
//!
//! - `youtube` - Identifier resolution, the metadata API client, and the fetcher
//! - `report` - Report synthesis and number/date/duration formatting
//! - `sentiment` - Lexicon scoring and summaries
//! - `trends` - Web search and keyword handling
//! - `content` - Text generation and the script store
//! - `agent` - Tool dispatch and the agent loop
//! - `config` - Settings and prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use creator_agency::agent::{ToolCall, ToolContext};
//! use creator_agency::config::{Prompts, Settings};
//! use creator_agency::report::ChannelMetric;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let prompts = Prompts::default();
//!     let tools = ToolContext::from_settings(&settings, &prompts)?;
//!
//!     let output = tools
//!         .execute(&ToolCall::ChannelAnalytics {
//!             channel: Some("@3blue1brown".to_string()),
//!             metric: ChannelMetric::Statistics,
//!         })
//!         .await?;
//!     println!("{}", output);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod openai;
pub mod report;
pub mod sentiment;
pub mod trends;
pub mod youtube;

pub use error::{AgencyError, Result};
