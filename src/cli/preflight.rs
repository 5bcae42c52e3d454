//! Pre-flight checks before remote operations.
//!
//! Validates that the API keys an operation needs are configured before any
//! request is made, so failures name the missing key instead of an HTTP 403.

use crate::config::Settings;
use crate::error::{AgencyError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// YouTube reports need a YouTube Data API key.
    YouTube,
    /// Content generation needs an OpenAI key.
    Generate,
    /// Web search and trend reports need a Tavily key.
    Search,
    /// The agent needs an OpenAI key; other keys only enable more tools.
    Agent,
    /// Script files and keyword lists are local.
    Local,
}

/// Run pre-flight checks for the given operation.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    check_with(operation, settings, |key| std::env::var(key).ok())
}

fn check_with<F>(operation: Operation, settings: &Settings, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    match operation {
        Operation::YouTube => require(
            settings.youtube.api_key.as_deref(),
            "YOUTUBE_API_KEY",
            "export YOUTUBE_API_KEY='AIza...'",
        ),
        Operation::Generate | Operation::Agent => require(
            env("OPENAI_API_KEY").as_deref(),
            "OPENAI_API_KEY",
            "export OPENAI_API_KEY='sk-...'",
        ),
        Operation::Search => require(
            settings.search.api_key.as_deref(),
            "TAVILY_API_KEY",
            "export TAVILY_API_KEY='tvly-...'",
        ),
        Operation::Local => Ok(()),
    }
}

fn require(value: Option<&str>, name: &str, hint: &str) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        Some(_) => Err(AgencyError::Config(format!(
            "{} is empty. Set it with: {}",
            name, hint
        ))),
        None => Err(AgencyError::Config(format!(
            "{} not set. Set it with: {}",
            name, hint
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_has_no_requirements() {
        assert!(check_with(Operation::Local, &Settings::default(), |_| None).is_ok());
    }

    #[test]
    fn test_youtube_requires_key() {
        let mut settings = Settings::default();
        match check_with(Operation::YouTube, &settings, |_| None) {
            Err(AgencyError::Config(msg)) => assert!(msg.starts_with("YOUTUBE_API_KEY not set")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        settings.youtube.api_key = Some("  ".to_string());
        match check_with(Operation::YouTube, &settings, |_| None) {
            Err(AgencyError::Config(msg)) => assert!(msg.starts_with("YOUTUBE_API_KEY is empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        settings.youtube.api_key = Some("AIzaSyExample".to_string());
        assert!(check_with(Operation::YouTube, &settings, |_| None).is_ok());
    }

    #[test]
    fn test_agent_reads_openai_key_from_env() {
        let settings = Settings::default();
        assert!(check_with(Operation::Agent, &settings, |_| None).is_err());
        assert!(check_with(Operation::Agent, &settings, |k| {
            (k == "OPENAI_API_KEY").then(|| "sk-test".to_string())
        })
        .is_ok());
    }

    #[test]
    fn test_search_requires_tavily_key() {
        let mut settings = Settings::default();
        assert!(check_with(Operation::Search, &settings, |_| None).is_err());
        settings.search.api_key = Some("tvly-key".to_string());
        assert!(check_with(Operation::Search, &settings, |_| None).is_ok());
    }
}
