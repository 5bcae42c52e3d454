//! Trend research: web search and keyword handling.

mod keywords;
mod search;

pub use keywords::parse_keywords;
pub use search::{SearchHit, SearchResponse, TavilyClient, WebSearch};
