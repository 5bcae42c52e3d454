//! Creator Agency CLI entry point.

use anyhow::Result;
use clap::Parser;
use creator_agency::agent::ToolCall;
use creator_agency::cli::{commands, Cli, Commands};
use creator_agency::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("creator_agency={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match cli.command {
        Commands::Channel { channel, metric } => {
            commands::run_tool(ToolCall::ChannelAnalytics { channel, metric }, &settings).await?;
        }

        Commands::Video { video } => {
            commands::run_tool(ToolCall::VideoPerformance { video }, &settings).await?;
        }

        Commands::Comments { video, limit } => {
            commands::run_tool(ToolCall::CommentSentiment { video, limit }, &settings).await?;
        }

        Commands::Competitor { channel } => {
            commands::run_tool(ToolCall::CompetitorAnalysis { channel }, &settings).await?;
        }

        Commands::Generate { prompt } => {
            commands::run_tool(ToolCall::GenerateContent { prompt }, &settings).await?;
        }

        Commands::Script { action } => {
            commands::run_script(&action, &settings).await?;
        }

        Commands::Search { query } => {
            commands::run_tool(ToolCall::WebSearch { query }, &settings).await?;
        }

        Commands::Trends { keyword } => {
            commands::run_tool(ToolCall::TrendAnalysis { keyword }, &settings).await?;
        }

        Commands::Keywords { keywords } => {
            commands::run_tool(ToolCall::ExtractKeywords { keywords }, &settings).await?;
        }

        Commands::Agent {
            task,
            focus,
            model,
            max_iterations,
        } => {
            commands::run_agent(&task, focus.as_deref(), model, max_iterations, &settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, &settings, cli.config.as_deref())?;
        }
    }

    Ok(())
}
