//! HTTP implementation of [`MetadataApi`] against YouTube Data API v3.

use super::api::{classify_api_error, MetadataApi};
use super::models::{
    ChannelResource, CommentThreadResource, ListResponse, PlaylistItemResource,
    PlaylistResource, SearchQuery, SearchResult, VideoResource,
};
use crate::config::YoutubeSettings;
use crate::error::{AgencyError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

const CHANNEL_PARTS: &str = "snippet,statistics,contentDetails,brandingSettings,topicDetails";
const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";

/// API-key authenticated YouTube Data API client.
pub struct YoutubeClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl YoutubeClient {
    /// Build a client from settings. Requires an API key.
    pub fn from_settings(settings: &YoutubeSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AgencyError::Config(
                    "YouTube API key not set. Set YOUTUBE_API_KEY or youtube.api_key".to_string(),
                )
            })?;

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout())
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AgencyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Self::new(http, &settings.base_url, api_key)
    }

    pub fn new(http: reqwest::Client, base_url: &str, api_key: String) -> Result<Self> {
        // Trailing slash so `join` appends instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| AgencyError::Config(format!("Invalid YouTube base URL: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, resource: &str) -> Result<Url> {
        self.base_url
            .join(resource)
            .map_err(|e| AgencyError::Config(format!("Invalid endpoint {}: {}", resource, e)))
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(resource)?;
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AgencyError::Transport(format!("Malformed {} response: {}", resource, e)))
    }
}

#[async_trait]
impl MetadataApi for YoutubeClient {
    #[instrument(skip(self), fields(q = %query.q))]
    async fn search(&self, query: &SearchQuery) -> Result<ListResponse<SearchResult>> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("q", query.q.clone()),
            ("type", query.kind.as_str().to_string()),
            ("order", "relevance".to_string()),
            ("maxResults", query.max_results.to_string()),
        ];
        if let Some(lang) = &query.relevance_language {
            params.push(("relevanceLanguage", lang.clone()));
        }
        self.get("search", &params).await
    }

    #[instrument(skip(self))]
    async fn channels(&self, channel_id: &str) -> Result<ListResponse<ChannelResource>> {
        self.get(
            "channels",
            &[("part", CHANNEL_PARTS.to_string()), ("id", channel_id.to_string())],
        )
        .await
    }

    #[instrument(skip(self), fields(count = video_ids.len()))]
    async fn videos(&self, video_ids: &[String]) -> Result<ListResponse<VideoResource>> {
        self.get(
            "videos",
            &[("part", VIDEO_PARTS.to_string()), ("id", video_ids.join(","))],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItemResource>> {
        let mut params = vec![
            ("part", "snippet,contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", max_results.to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }
        self.get("playlistItems", &params).await
    }

    #[instrument(skip(self))]
    async fn playlists(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<ListResponse<PlaylistResource>> {
        self.get(
            "playlists",
            &[
                ("part", "snippet,contentDetails".to_string()),
                ("channelId", channel_id.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThreadResource>> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("textFormat", "plainText".to_string()),
            ("order", "relevance".to_string()),
            ("maxResults", max_results.to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }
        self.get("commentThreads", &params).await
    }
}
