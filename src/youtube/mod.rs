//! YouTube Data API access: reference resolution and metadata fetching.

mod api;
mod client;
mod fetcher;
mod ids;
mod models;
mod resolver;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{classify_api_error, MetadataApi};
pub use client::YoutubeClient;
pub use fetcher::{CommentBatch, MetricsFetcher};
pub use ids::{ChannelId, ChannelReference, VideoId};
pub use models::{
    ChannelSnapshot, CommentRecord, ListResponse, PlaylistSummary, ResourceKind, SearchQuery,
    VideoSnapshot,
};
pub use resolver::Resolver;
