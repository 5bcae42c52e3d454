//! Web search through the Tavily API.

use crate::config::SearchSettings;
use crate::error::{AgencyError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    /// Short synthesized answer, when requested.
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// Trait for web search backends.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    include_answer: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    include_domains: &'a [String],
    max_results: u32,
}

pub struct TavilyClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    search_depth: String,
    include_domains: Vec<String>,
    max_results: u32,
}

impl TavilyClient {
    pub fn from_settings(settings: &SearchSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AgencyError::Config(
                    "Search API key not set. Set TAVILY_API_KEY or search.api_key".to_string(),
                )
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AgencyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/search", settings.base_url.trim_end_matches('/')),
            api_key,
            search_depth: settings.search_depth.clone(),
            include_domains: settings.include_domains.clone(),
            max_results: settings.max_results,
        })
    }

    fn request<'a>(&'a self, query: &'a str) -> SearchRequest<'a> {
        SearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: &self.search_depth,
            include_answer: true,
            include_domains: &self.include_domains,
            max_results: self.max_results,
        }
    }
}

/// Map a failed search response onto an error kind.
fn classify_search_error(status: u16, body: &str) -> AgencyError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(|d| d.get("error").or(Some(d)))
                .and_then(|e| e.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| format!("HTTP {}", status));

    match status {
        401 | 403 => AgencyError::Config(format!("Search API key rejected: {}", detail)),
        429 | 432 | 433 => AgencyError::QuotaExceeded(detail),
        400 => AgencyError::InvalidInput(detail),
        _ => AgencyError::Search(format!("HTTP {}: {}", status, detail)),
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AgencyError::InvalidInput("empty search query".to_string()));
        }

        debug!("POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_search_error(status.as_u16(), &body));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| AgencyError::Search(format!("Malformed search response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SearchSettings {
        SearchSettings {
            api_key: Some("tvly-test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        let result = TavilyClient::from_settings(&SearchSettings::default());
        assert!(matches!(result, Err(AgencyError::Config(_))));
    }

    #[test]
    fn test_request_body() {
        let client = TavilyClient::from_settings(&settings()).unwrap();
        assert_eq!(client.endpoint, "https://api.tavily.com/search");

        let body = serde_json::to_value(client.request("ai agents")).unwrap();
        assert_eq!(body["query"], "ai agents");
        assert_eq!(body["search_depth"], "advanced");
        assert_eq!(body["include_answer"], true);
        assert_eq!(body["include_domains"][0], "techcrunch.com");
        assert_eq!(body["max_results"], 5);
    }

    #[test]
    fn test_empty_domains_are_omitted() {
        let client = TavilyClient::from_settings(&SearchSettings {
            include_domains: vec![],
            ..settings()
        })
        .unwrap();
        let body = serde_json::to_value(client.request("q")).unwrap();
        assert!(body.get("include_domains").is_none());
    }

    #[test]
    fn test_classify_search_error() {
        assert!(matches!(
            classify_search_error(401, r#"{"detail":{"error":"Unauthorized"}}"#),
            AgencyError::Config(_)
        ));
        assert!(matches!(classify_search_error(429, ""), AgencyError::QuotaExceeded(_)));
        match classify_search_error(500, "oops") {
            AgencyError::Search(msg) => assert_eq!(msg, "HTTP 500: HTTP 500"),
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_response() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "query": "ai agents",
            "answer": "Agents are everywhere.",
            "results": [
                { "title": "Agents", "url": "https://wired.com/agents", "content": "text", "score": 0.9 }
            ],
            "response_time": 1.2
        }))
        .unwrap();
        assert_eq!(response.answer.as_deref(), Some("Agents are everywhere."));
        assert_eq!(response.results[0].url, "https://wired.com/agents");
    }
}
