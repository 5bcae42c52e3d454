//! Read-only seam over the YouTube Data API.

use super::models::{
    ChannelResource, CommentThreadResource, ListResponse, PlaylistItemResource,
    PlaylistResource, SearchQuery, SearchResult, VideoResource,
};
use crate::error::{AgencyError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// One method per list endpoint the agency reads from.
///
/// Implementations classify every failure into an [`AgencyError`] kind
/// before returning; callers never see raw transport errors.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// `search.list`, relevance-ordered.
    async fn search(&self, query: &SearchQuery) -> Result<ListResponse<SearchResult>>;

    /// `channels.list` by channel ID.
    async fn channels(&self, channel_id: &str) -> Result<ListResponse<ChannelResource>>;

    /// `videos.list` for a batch of IDs (comma-joined on the wire).
    async fn videos(&self, video_ids: &[String]) -> Result<ListResponse<VideoResource>>;

    /// One page of `playlistItems.list`.
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItemResource>>;

    /// `playlists.list` for a channel.
    async fn playlists(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<ListResponse<PlaylistResource>>;

    /// One page of `commentThreads.list`.
    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThreadResource>>;
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: String,
}

/// Map a failed API response onto an error kind.
///
/// The `reason` codes in the error body decide first; the HTTP status is the
/// fallback when the body is missing or unrecognized.
pub fn classify_api_error(status: u16, body: &str) -> AgencyError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let message = parsed
        .as_ref()
        .map(|e| e.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status));
    let reasons: Vec<&str> = parsed
        .as_ref()
        .map(|e| e.error.errors.iter().map(|d| d.reason.as_str()).collect())
        .unwrap_or_default();

    for reason in reasons {
        match reason {
            "quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded"
            | "userRateLimitExceeded" => return AgencyError::QuotaExceeded(message),
            "commentsDisabled" => return AgencyError::CommentsDisabled(message),
            "videoNotFound" | "channelNotFound" | "playlistNotFound" | "notFound"
            | "commentThreadNotFound" => return AgencyError::NotFound(message),
            "invalidVideoId" | "invalidChannelId" | "invalidPlaylistId" | "invalidParameter" => {
                return AgencyError::InvalidInput(message)
            }
            "keyInvalid" | "keyExpired" | "accessNotConfigured" => {
                return AgencyError::Config(format!("YouTube API key rejected: {}", message))
            }
            _ => {}
        }
    }

    match status {
        404 => AgencyError::NotFound(message),
        429 => AgencyError::QuotaExceeded(message),
        400 => AgencyError::InvalidInput(message),
        _ => AgencyError::Transport(format!("HTTP {}: {}", status, message)),
    }
}
