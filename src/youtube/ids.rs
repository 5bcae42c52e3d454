//! Canonical channel/video identifiers and reference parsing.

use crate::error::{AgencyError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CHANNEL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UC[A-Za-z0-9_-]{22}$").expect("Invalid regex"));

// Path shapes a channel URL can take. Only `/channel/` carries an ID.
static CHANNEL_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        /channel/(?P<id>[\w-]+)
        |
        /(?P<handle>@[\w.-]+)
        |
        /(?:c|user)/(?P<name>[^/?&\#]+)
    ",
    )
    .expect("Invalid regex")
});

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Invalid regex"));

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:
            youtube\.com/watch\?(?:[^\#]*&)?v=
            | youtu\.be/
            | youtube\.com/(?:shorts|embed|live|v)/
        )
        ([\w-]{11})
    ",
    )
    .expect("Invalid regex")
});

/// Canonical channel identifier: `UC` followed by 22 URL-safe characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    /// Accept `input` only if it already has the canonical shape.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        CHANNEL_ID.is_match(input).then(|| Self(input.to_string()))
    }

    /// Wrap an ID returned by the platform's own search.
    pub(crate) fn from_search(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        format!("https://youtube.com/channel/{}", self.0)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Video identifier as sent to the metadata service.
///
/// Usually an 11-character token; unrecognized input is passed through as-is
/// and left for the service to reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Extract a video ID from a bare ID or a watch/short-link/shorts URL.
    pub fn extract(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AgencyError::InvalidInput("empty video reference".to_string()));
        }

        if VIDEO_ID.is_match(input) {
            return Ok(Self(input.to_string()));
        }

        let id = VIDEO_URL
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(input);

        Ok(Self(id.to_string()))
    }

    /// Whether the ID has the canonical 11-character shape.
    pub fn is_canonical(&self) -> bool {
        VIDEO_ID.is_match(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        format!("https://youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a user-supplied channel reference turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelReference {
    /// Already canonical; no lookup needed.
    Id(ChannelId),
    /// Needs a remote search.
    Query(String),
}

impl ChannelReference {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if let Some(id) = ChannelId::parse(input) {
            return ChannelReference::Id(id);
        }

        if let Some(caps) = CHANNEL_PATH.captures(input) {
            if let Some(token) = caps.name("id") {
                if let Some(id) = ChannelId::parse(token.as_str()) {
                    return ChannelReference::Id(id);
                }
                return ChannelReference::Query(token.as_str().to_string());
            }
            if let Some(token) = caps.name("handle").or_else(|| caps.name("name")) {
                return ChannelReference::Query(token.as_str().to_string());
            }
        }

        ChannelReference::Query(input.to_string())
    }
}
