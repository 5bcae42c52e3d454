//! In-memory [`MetadataApi`] for tests.

use super::api::MetadataApi;
use super::models::{
    ChannelResource, CommentThreadResource, ListResponse, PlaylistItemResource,
    PlaylistResource, SearchQuery, SearchResult, VideoResource,
};
use crate::error::{AgencyError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

pub fn channel(id: &str, title: &str) -> ChannelResource {
    serde_json::from_value(json!({
        "id": id,
        "snippet": {
            "title": title,
            "description": format!("{} makes videos about AI tools.", title),
            "publishedAt": "2019-06-01T12:00:00Z",
            "country": "US"
        },
        "statistics": {
            "subscriberCount": "15300",
            "videoCount": "120",
            "viewCount": "2400000"
        },
        "contentDetails": { "relatedPlaylists": { "uploads": format!("UU{}", &id[2..]) } },
        "topicDetails": {
            "topicCategories": ["https://en.wikipedia.org/wiki/Artificial_intelligence"]
        }
    }))
    .unwrap()
}

pub fn video(id: &str, title: &str, views: u64) -> VideoResource {
    serde_json::from_value(json!({
        "id": id,
        "snippet": {
            "title": title,
            "channelTitle": "Agency Labs",
            "publishedAt": "2024-03-15T10:00:00Z",
            "description": format!("All about {}", title),
            "tags": ["ai", "tools"]
        },
        "statistics": {
            "viewCount": views.to_string(),
            "likeCount": (views / 20).to_string(),
            "commentCount": (views / 100).to_string()
        },
        "contentDetails": { "duration": "PT12M5S" }
    }))
    .unwrap()
}

pub fn playlist(id: &str, title: &str, items: u64) -> PlaylistResource {
    serde_json::from_value(json!({
        "id": id,
        "snippet": { "title": title, "description": format!("{} playlist", title) },
        "contentDetails": { "itemCount": items }
    }))
    .unwrap()
}

fn upload(video_id: &str) -> PlaylistItemResource {
    serde_json::from_value(json!({
        "snippet": {
            "title": format!("Upload {}", video_id),
            "channelTitle": "Agency Labs",
            "publishedAt": "2024-03-16T08:00:00Z",
            "description": "Uploaded video"
        },
        "contentDetails": { "videoId": video_id, "videoPublishedAt": "2024-03-15T10:00:00Z" }
    }))
    .unwrap()
}

pub fn comment(author: &str, text: &str) -> CommentThreadResource {
    serde_json::from_value(json!({
        "snippet": {
            "topLevelComment": {
                "snippet": {
                    "authorDisplayName": author,
                    "textDisplay": text,
                    "publishedAt": "2024-03-16T09:30:00Z",
                    "likeCount": 3
                }
            }
        }
    }))
    .unwrap()
}

#[derive(Default)]
struct Calls {
    searches: Vec<SearchQuery>,
    video_batches: Vec<usize>,
    upload_page_sizes: Vec<u32>,
    comment_page_sizes: Vec<u32>,
}

/// Scripted metadata service that records the requests it receives.
#[derive(Default)]
pub struct FakeApi {
    search_hits: Vec<String>,
    channels: Vec<ChannelResource>,
    videos: Vec<VideoResource>,
    uploads: Vec<String>,
    playlists: Vec<PlaylistResource>,
    comment_pages: Vec<Vec<CommentThreadResource>>,
    comment_failure: Mutex<Option<(usize, AgencyError)>>,
    calls: Mutex<Calls>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_hit(mut self, channel_id: &str) -> Self {
        self.search_hits.push(channel_id.to_string());
        self
    }

    pub fn with_channel(mut self, channel: ChannelResource) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn with_video(mut self, video: VideoResource) -> Self {
        self.videos.push(video);
        self
    }

    pub fn with_uploads(mut self, video_ids: &[&str]) -> Self {
        self.uploads = video_ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_playlist(mut self, playlist: PlaylistResource) -> Self {
        self.playlists.push(playlist);
        self
    }

    /// One page of comments with the given bodies.
    pub fn with_comments(mut self, texts: &[&str]) -> Self {
        self.comment_pages.push(
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| comment(&format!("viewer{}", i), text))
                .collect(),
        );
        self
    }

    /// Pages of generated comments with the given sizes.
    pub fn with_comment_pages(mut self, sizes: &[usize]) -> Self {
        let mut n = 0;
        for &size in sizes {
            let page = (0..size)
                .map(|_| {
                    n += 1;
                    comment(&format!("viewer{}", n), &format!("Comment number {}", n))
                })
                .collect();
            self.comment_pages.push(page);
        }
        self
    }

    /// Fail the `page`-th comment request (zero-based).
    pub fn with_comment_failure_at(self, page: usize, error: AgencyError) -> Self {
        *self.comment_failure.lock().unwrap() = Some((page, error));
        self
    }

    pub fn search_calls(&self) -> usize {
        self.calls.lock().unwrap().searches.len()
    }

    pub fn last_search(&self) -> Option<SearchQuery> {
        self.calls.lock().unwrap().searches.last().cloned()
    }

    pub fn video_batches(&self) -> Vec<usize> {
        self.calls.lock().unwrap().video_batches.clone()
    }

    pub fn upload_page_sizes(&self) -> Vec<u32> {
        self.calls.lock().unwrap().upload_page_sizes.clone()
    }

    pub fn comment_page_sizes(&self) -> Vec<u32> {
        self.calls.lock().unwrap().comment_page_sizes.clone()
    }
}

#[async_trait]
impl MetadataApi for FakeApi {
    async fn search(&self, query: &SearchQuery) -> Result<ListResponse<SearchResult>> {
        self.calls.lock().unwrap().searches.push(query.clone());
        let items = self
            .search_hits
            .iter()
            .take(query.max_results as usize)
            .map(|id| {
                serde_json::from_value(json!({
                    "id": { "kind": "youtube#channel", "channelId": id },
                    "snippet": { "channelId": id, "title": "Match" }
                }))
                .unwrap()
            })
            .collect();
        Ok(ListResponse {
            items,
            next_page_token: None,
        })
    }

    async fn channels(&self, channel_id: &str) -> Result<ListResponse<ChannelResource>> {
        Ok(ListResponse {
            items: self
                .channels
                .iter()
                .filter(|c| c.id == channel_id)
                .cloned()
                .collect(),
            next_page_token: None,
        })
    }

    async fn videos(&self, video_ids: &[String]) -> Result<ListResponse<VideoResource>> {
        self.calls.lock().unwrap().video_batches.push(video_ids.len());
        Ok(ListResponse {
            items: self
                .videos
                .iter()
                .filter(|v| video_ids.contains(&v.id))
                .cloned()
                .collect(),
            next_page_token: None,
        })
    }

    async fn playlist_items(
        &self,
        _playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItemResource>> {
        self.calls.lock().unwrap().upload_page_sizes.push(max_results);

        // Tokens are the offset of the next page.
        let start = page_token.and_then(|t| t.parse().ok()).unwrap_or(0);
        let end = (start + max_results as usize).min(self.uploads.len());
        let items = self
            .uploads
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|id| upload(id))
            .collect();

        Ok(ListResponse {
            items,
            next_page_token: (end < self.uploads.len()).then(|| end.to_string()),
        })
    }

    async fn playlists(
        &self,
        _channel_id: &str,
        max_results: u32,
    ) -> Result<ListResponse<PlaylistResource>> {
        Ok(ListResponse {
            items: self
                .playlists
                .iter()
                .take(max_results as usize)
                .cloned()
                .collect(),
            next_page_token: None,
        })
    }

    async fn comment_threads(
        &self,
        _video_id: &str,
        max_results: u32,
        _page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThreadResource>> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.comment_page_sizes.push(max_results);
            calls.comment_page_sizes.len() - 1
        };

        let mut failure = self.comment_failure.lock().unwrap();
        if matches!(failure.as_ref(), Some((page, _)) if *page == index) {
            if let Some((_, error)) = failure.take() {
                return Err(error);
            }
        }

        let items = self
            .comment_pages
            .get(index)
            .map(|page| page.iter().take(max_results as usize).cloned().collect())
            .unwrap_or_default();
        let next_page_token =
            (index + 1 < self.comment_pages.len()).then(|| format!("page-{}", index + 1));

        Ok(ListResponse {
            items,
            next_page_token,
        })
    }
}
