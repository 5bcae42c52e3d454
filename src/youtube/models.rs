//! YouTube Data API v3 resources and the snapshots built from them.

use crate::sentiment::Sentiment;
use serde::{Deserialize, Deserializer, Serialize};

/// Paged list envelope shared by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: None,
        }
    }
}

/// Resource type a search is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Channel,
    Video,
    Playlist,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Channel => "channel",
            ResourceKind::Video => "video",
            ResourceKind::Playlist => "playlist",
        }
    }
}

/// Parameters for `search.list`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub q: String,
    pub kind: ResourceKind,
    pub max_results: u32,
    pub relevance_language: Option<String>,
}

// The API encodes counts as decimal strings.
fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.parse().ok(),
        None => None,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub channel_id: Option<String>,
}

impl SearchResult {
    /// ID of the matched resource for the given kind.
    pub fn resource_id(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Channel => self
                .id
                .channel_id
                .as_deref()
                .or_else(|| self.snippet.as_ref().and_then(|s| s.channel_id.as_deref())),
            ResourceKind::Video => self.id.video_id.as_deref(),
            ResourceKind::Playlist => self.id.playlist_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResource {
    pub id: String,
    pub snippet: ChannelSnippet,
    pub statistics: Option<ChannelStatistics>,
    pub content_details: Option<ChannelContentDetails>,
    pub branding_settings: Option<BrandingSettings>,
    pub topic_details: Option<TopicDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: String,
    pub country: Option<String>,
    pub default_language: Option<String>,
    pub custom_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "count")]
    pub subscriber_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub video_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub hidden_subscriber_count: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    pub channel: Option<BrandingChannel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingChannel {
    #[serde(default)]
    pub custom_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetails {
    #[serde(default)]
    pub topic_categories: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    pub id: String,
    pub snippet: VideoSnippet,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemResource {
    pub snippet: PlaylistItemSnippet,
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
    pub video_published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResource {
    pub id: String,
    pub snippet: PlaylistSnippet,
    pub content_details: Option<PlaylistContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    #[serde(default)]
    pub item_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadResource {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub author_display_name: String,
    #[serde(default)]
    pub text_display: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub like_count: u64,
}

/// Channel metadata as of fetch time.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    /// `None` when the owner hides the subscriber count.
    pub subscriber_count: Option<u64>,
    pub video_count: u64,
    pub view_count: u64,
    pub country: Option<String>,
    pub language: Option<String>,
    pub topic_categories: Vec<String>,
    pub social_links: Vec<String>,
    pub uploads_playlist: Option<String>,
}

impl ChannelSnapshot {
    pub fn url(&self) -> String {
        format!("https://youtube.com/channel/{}", self.id)
    }

    /// Average views per uploaded video.
    pub fn average_views(&self) -> u64 {
        self.view_count / self.video_count.max(1)
    }
}

impl From<ChannelResource> for ChannelSnapshot {
    fn from(resource: ChannelResource) -> Self {
        let stats = resource.statistics.unwrap_or_default();

        let mut social_links = Vec::new();
        if let Some(custom) = resource.snippet.custom_url.as_deref() {
            social_links.push(format!("https://youtube.com/{}", custom));
        }
        if let Some(channel) = resource.branding_settings.and_then(|b| b.channel) {
            social_links.extend(channel.custom_urls);
        }

        Self {
            id: resource.id,
            title: resource.snippet.title,
            description: resource.snippet.description,
            published_at: resource.snippet.published_at,
            subscriber_count: if stats.hidden_subscriber_count {
                None
            } else {
                stats.subscriber_count
            },
            video_count: stats.video_count.unwrap_or(0),
            view_count: stats.view_count.unwrap_or(0),
            country: resource.snippet.country,
            language: resource.snippet.default_language,
            topic_categories: resource
                .topic_details
                .map(|t| t.topic_categories)
                .unwrap_or_default(),
            social_links,
            uploads_playlist: resource
                .content_details
                .and_then(|c| c.related_playlists.uploads),
        }
    }
}

/// Video metadata as of fetch time.
#[derive(Debug, Clone, Serialize)]
pub struct VideoSnapshot {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
    /// ISO-8601 duration, e.g. `PT4M13S`.
    pub duration: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub description: String,
    pub tags: Vec<String>,
}

impl VideoSnapshot {
    pub fn url(&self) -> String {
        format!("https://youtube.com/watch?v={}", self.id)
    }

    /// Whether any public statistics came back for this video.
    pub fn has_statistics(&self) -> bool {
        self.view_count.is_some() || self.like_count.is_some() || self.comment_count.is_some()
    }
}

impl From<VideoResource> for VideoSnapshot {
    fn from(resource: VideoResource) -> Self {
        let stats = resource.statistics.unwrap_or_default();
        Self {
            id: resource.id,
            title: resource.snippet.title,
            channel_title: resource.snippet.channel_title,
            published_at: resource.snippet.published_at,
            duration: resource.content_details.and_then(|c| c.duration),
            view_count: stats.view_count,
            like_count: stats.like_count,
            comment_count: stats.comment_count,
            description: resource.snippet.description,
            tags: resource.snippet.tags,
        }
    }
}

impl From<PlaylistItemResource> for VideoSnapshot {
    /// Snapshot for an upload whose statistics were not returned.
    fn from(item: PlaylistItemResource) -> Self {
        Self {
            id: item.content_details.video_id,
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            published_at: item
                .content_details
                .video_published_at
                .unwrap_or(item.snippet.published_at),
            duration: None,
            view_count: None,
            like_count: None,
            comment_count: None,
            description: item.snippet.description,
            tags: Vec::new(),
        }
    }
}

/// Summary of one playlist on a channel.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub item_count: u64,
}

impl PlaylistSummary {
    pub fn url(&self) -> String {
        format!("https://youtube.com/playlist?list={}", self.id)
    }
}

impl From<PlaylistResource> for PlaylistSummary {
    fn from(resource: PlaylistResource) -> Self {
        Self {
            id: resource.id,
            title: resource.snippet.title,
            description: resource.snippet.description,
            item_count: resource.content_details.map(|c| c.item_count).unwrap_or(0),
        }
    }
}

/// A top-level comment with its derived sentiment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRecord {
    pub author: String,
    pub text: String,
    pub published_at: String,
    pub like_count: u64,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl CommentRecord {
    pub fn new(snippet: CommentSnippet, sentiment: Sentiment) -> Self {
        Self {
            author: snippet.author_display_name,
            text: snippet.text_display,
            published_at: snippet.published_at,
            like_count: snippet.like_count,
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
        }
    }
}
