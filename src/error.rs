//! Error types for creator-agency.

use thiserror::Error;

/// Library-level error type for agency operations.
///
/// The first five variants are the remote-failure kinds every YouTube
/// operation classifies into at the point of the call.
#[derive(Error, Debug)]
pub enum AgencyError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Comments are disabled for this video: {0}")]
    CommentsDisabled(String),

    #[error("API quota exceeded, try again later: {0}")]
    QuotaExceeded(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Web search failed: {0}")]
    Search(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AgencyError {
    /// Short, user-facing headline for the failure kind.
    pub fn headline(&self) -> &'static str {
        match self {
            AgencyError::NotFound(_) => "Nothing matched",
            AgencyError::CommentsDisabled(_) => "Comments are disabled",
            AgencyError::QuotaExceeded(_) => "YouTube API quota exceeded",
            AgencyError::Transport(_) => "Could not reach the remote service",
            AgencyError::InvalidInput(_) => "Invalid input",
            AgencyError::Config(_) => "Configuration problem",
            AgencyError::OpenAI(_) => "OpenAI request failed",
            AgencyError::Search(_) => "Web search failed",
            AgencyError::Script(_) => "Script file problem",
            AgencyError::Agent(_) => "Agent failed",
            AgencyError::Io(_) | AgencyError::Json(_) | AgencyError::TomlParse(_) => {
                "Internal error"
            }
        }
    }
}

impl From<reqwest::Error> for AgencyError {
    fn from(e: reqwest::Error) -> Self {
        AgencyError::Transport(e.to_string())
    }
}

/// Result type alias for agency operations.
pub type Result<T> = std::result::Result<T, AgencyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines_are_distinct_for_remote_kinds() {
        let kinds = [
            AgencyError::NotFound("x".into()),
            AgencyError::CommentsDisabled("x".into()),
            AgencyError::QuotaExceeded("x".into()),
            AgencyError::Transport("x".into()),
            AgencyError::InvalidInput("x".into()),
        ];
        let mut headlines: Vec<_> = kinds.iter().map(|k| k.headline()).collect();
        headlines.sort();
        headlines.dedup();
        assert_eq!(headlines.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = AgencyError::NotFound("channel 'foo'".into());
        assert_eq!(err.to_string(), "Not found: channel 'foo'");
    }
}
