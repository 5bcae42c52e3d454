//! Turns user-supplied channel/video references into canonical identifiers.

use super::api::MetadataApi;
use super::ids::{ChannelId, ChannelReference, VideoId};
use super::models::{ResourceKind, SearchQuery};
use crate::error::{AgencyError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves references, falling back to a single remote search.
pub struct Resolver {
    api: Arc<dyn MetadataApi>,
    relevance_language: Option<String>,
}

impl Resolver {
    pub fn new(api: Arc<dyn MetadataApi>, relevance_language: Option<String>) -> Self {
        Self {
            api,
            relevance_language,
        }
    }

    /// Resolve a channel reference to its canonical ID.
    ///
    /// Canonical IDs and `/channel/<id>` URLs never touch the network.
    /// Everything else issues exactly one relevance-ranked channel search and
    /// takes the top hit.
    pub async fn resolve_channel(&self, reference: &str) -> Result<ChannelId> {
        let query = match ChannelReference::parse(reference) {
            ChannelReference::Id(id) => {
                debug!("Channel reference already canonical: {}", id);
                return Ok(id);
            }
            ChannelReference::Query(q) => q,
        };

        let response = self
            .api
            .search(&SearchQuery {
                q: query.clone(),
                kind: ResourceKind::Channel,
                max_results: 1,
                relevance_language: self.relevance_language.clone(),
            })
            .await?;

        let id = response
            .items
            .first()
            .and_then(|item| item.resource_id(ResourceKind::Channel))
            .ok_or_else(|| AgencyError::NotFound(format!("No channel matches '{}'", query)))?;

        // Search hits are trusted as IDs even if they fail the local shape check.
        let resolved = ChannelId::parse(id).unwrap_or_else(|| ChannelId::from_search(id));
        info!("Resolved '{}' to channel {}", query, resolved);
        Ok(resolved)
    }

    /// Extract a video ID. Never calls the network.
    pub fn resolve_video(&self, reference: &str) -> Result<VideoId> {
        VideoId::extract(reference)
    }
}
