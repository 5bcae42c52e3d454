//! Read-only metadata queries built on [`MetadataApi`].

use super::api::MetadataApi;
use super::ids::{ChannelId, VideoId};
use super::models::{ChannelSnapshot, CommentRecord, PlaylistSummary, VideoSnapshot};
use crate::error::{AgencyError, Result};
use crate::sentiment::SentimentAnalyzer;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Largest page the comment endpoint serves.
const COMMENT_PAGE_SIZE: usize = 100;
/// Largest ID batch `videos.list` accepts.
const VIDEO_BATCH_SIZE: usize = 50;
/// Largest page `playlistItems.list` serves.
const PLAYLIST_PAGE_SIZE: usize = 50;

/// Comments gathered for one video.
#[derive(Debug)]
pub struct CommentBatch {
    pub records: Vec<CommentRecord>,
    pub requested: usize,
    /// Set when a page failed after some records were already gathered.
    pub interrupted: Option<AgencyError>,
}

impl CommentBatch {
    pub fn is_partial(&self) -> bool {
        self.interrupted.is_some()
    }
}

pub struct MetricsFetcher {
    api: Arc<dyn MetadataApi>,
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl MetricsFetcher {
    pub fn new(api: Arc<dyn MetadataApi>, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { api, analyzer }
    }

    #[instrument(skip(self), fields(channel = %id))]
    pub async fn fetch_channel(&self, id: &ChannelId) -> Result<ChannelSnapshot> {
        let response = self.api.channels(id.as_str()).await?;
        response
            .items
            .into_iter()
            .next()
            .map(ChannelSnapshot::from)
            .ok_or_else(|| AgencyError::NotFound(format!("Channel {} not found", id)))
    }

    /// Most recent uploads of a channel, newest first.
    pub async fn fetch_recent_videos(
        &self,
        id: &ChannelId,
        limit: usize,
    ) -> Result<Vec<VideoSnapshot>> {
        let channel = self.fetch_channel(id).await?;
        self.recent_uploads(&channel, limit).await
    }

    /// Recent uploads for an already-fetched channel.
    #[instrument(skip(self, channel), fields(channel = %channel.id))]
    pub async fn recent_uploads(
        &self,
        channel: &ChannelSnapshot,
        limit: usize,
    ) -> Result<Vec<VideoSnapshot>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let Some(uploads) = channel.uploads_playlist.as_deref() else {
            warn!("Channel {} has no uploads playlist", channel.id);
            return Ok(Vec::new());
        };

        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        while items.len() < limit {
            let page_size = (limit - items.len()).min(PLAYLIST_PAGE_SIZE);
            let page = self
                .api
                .playlist_items(uploads, page_size as u32, page_token.as_deref())
                .await?;
            if page.items.is_empty() {
                break;
            }

            let remaining = limit - items.len();
            items.extend(page.items.into_iter().take(remaining));
            debug!("Gathered {} of {} uploads", items.len(), limit);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = items
            .iter()
            .map(|item| item.content_details.video_id.clone())
            .collect();
        let mut details = self.video_details(&ids).await?;

        // Keep upload order; fall back to playlist metadata when stats are withheld.
        Ok(items
            .into_iter()
            .map(|item| {
                details
                    .remove(&item.content_details.video_id)
                    .unwrap_or_else(|| VideoSnapshot::from(item))
            })
            .collect())
    }

    async fn video_details(&self, ids: &[String]) -> Result<HashMap<String, VideoSnapshot>> {
        let mut details = HashMap::with_capacity(ids.len());
        for batch in ids.chunks(VIDEO_BATCH_SIZE) {
            let response = self.api.videos(batch).await?;
            for resource in response.items {
                details.insert(resource.id.clone(), VideoSnapshot::from(resource));
            }
        }
        Ok(details)
    }

    #[instrument(skip(self), fields(video = %id))]
    pub async fn fetch_video(&self, id: &VideoId) -> Result<VideoSnapshot> {
        let response = self.api.videos(&[id.as_str().to_string()]).await?;
        response
            .items
            .into_iter()
            .next()
            .map(VideoSnapshot::from)
            .ok_or_else(|| AgencyError::NotFound(format!("Video {} not found", id)))
    }

    #[instrument(skip(self), fields(channel = %id))]
    pub async fn fetch_playlists(
        &self,
        id: &ChannelId,
        limit: usize,
    ) -> Result<Vec<PlaylistSummary>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let response = self
            .api
            .playlists(id.as_str(), limit.min(PLAYLIST_PAGE_SIZE) as u32)
            .await?;
        Ok(response
            .items
            .into_iter()
            .take(limit)
            .map(PlaylistSummary::from)
            .collect())
    }

    /// Page through top-level comments until `limit` records are gathered.
    ///
    /// A failing page ends pagination. Records gathered before it are kept and
    /// the error is reported on the batch; with nothing gathered the error is
    /// returned.
    #[instrument(skip(self), fields(video = %id))]
    pub async fn fetch_comments(&self, id: &VideoId, limit: usize) -> Result<CommentBatch> {
        let mut records: Vec<CommentRecord> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut interrupted = None;

        while records.len() < limit {
            let page_size = (limit - records.len()).min(COMMENT_PAGE_SIZE);
            let page = match self
                .api
                .comment_threads(id.as_str(), page_size as u32, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) if records.is_empty() => return Err(e),
                Err(e) => {
                    warn!("Comment pagination stopped after {} records: {}", records.len(), e);
                    interrupted = Some(e);
                    break;
                }
            };

            if page.items.is_empty() {
                break;
            }

            let remaining = limit - records.len();
            for thread in page.items.into_iter().take(remaining) {
                let snippet = thread.snippet.top_level_comment.snippet;
                let sentiment = self.analyzer.analyze(&snippet.text_display);
                records.push(CommentRecord::new(snippet, sentiment));
            }
            debug!("Gathered {} of {} comments", records.len(), limit);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(CommentBatch {
            records,
            requested: limit,
            interrupted,
        })
    }
}
