//! Tool definitions and implementations for the agency.
//!
//! Every tool is a single request/response operation. The CLI calls
//! [`ToolContext::execute`] directly; the agent reaches the same code through
//! OpenAI function calling.

use crate::config::{Prompts, Settings, YoutubeSettings};
use crate::content::{OpenAIGenerator, ScriptStore, TextGenerator};
use crate::error::{AgencyError, Result};
use crate::report::{
    channel_report, comments_report, competitor_report, keywords_report, search_report,
    trend_report, video_report, ChannelAnalysis, ChannelMetric,
};
use crate::sentiment::{summarize, LexiconAnalyzer, SentimentAnalyzer};
use crate::trends::{parse_keywords, TavilyClient, WebSearch};
use crate::youtube::{MetadataApi, MetricsFetcher, Resolver, YoutubeClient};
use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Names of all tools, in definition order.
pub const TOOL_NAMES: &[&str] = &[
    "channel_analytics",
    "video_performance",
    "comment_sentiment",
    "competitor_analysis",
    "generate_content",
    "write_script",
    "edit_script",
    "web_search",
    "trend_analysis",
    "extract_keywords",
];

/// Available tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Channel statistics, recent uploads, or playlists.
    ChannelAnalytics {
        #[serde(default)]
        channel: Option<String>,
        #[serde(default)]
        metric: ChannelMetric,
    },

    /// Public metrics of one video.
    VideoPerformance { video: String },

    /// Sentiment over a video's top-level comments.
    CommentSentiment {
        video: String,
        #[serde(default)]
        limit: Option<usize>,
    },

    /// Another channel's size and recent uploads.
    CompetitorAnalysis {
        #[serde(default)]
        channel: Option<String>,
    },

    /// Content ideas from the language model.
    GenerateContent { prompt: String },

    /// Save a markdown script.
    WriteScript { title: String, content: String },

    /// Append edits to an existing script.
    EditScript { filename: String, edits: String },

    /// Web search for recent coverage.
    WebSearch { query: String },

    /// Search-backed trend report for one keyword.
    TrendAnalysis { keyword: String },

    /// Normalize a comma-separated keyword list.
    ExtractKeywords { keywords: String },
}

impl ToolCall {
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::ChannelAnalytics { .. } => "channel_analytics",
            ToolCall::VideoPerformance { .. } => "video_performance",
            ToolCall::CommentSentiment { .. } => "comment_sentiment",
            ToolCall::CompetitorAnalysis { .. } => "competitor_analysis",
            ToolCall::GenerateContent { .. } => "generate_content",
            ToolCall::WriteScript { .. } => "write_script",
            ToolCall::EditScript { .. } => "edit_script",
            ToolCall::WebSearch { .. } => "web_search",
            ToolCall::TrendAnalysis { .. } => "trend_analysis",
            ToolCall::ExtractKeywords { .. } => "extract_keywords",
        }
    }
}

/// Result of a tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    /// Non-fatal problem worth surfacing, e.g. a partial comment fetch.
    pub warning: Option<String>,
}

impl ToolOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.warning {
            Some(warning) => write!(f, "{}\n\nWarning: {}", self.text, warning),
            None => f.write_str(&self.text),
        }
    }
}

/// Services available to tools. Missing services fail only the tools that
/// need them.
pub struct ToolContext {
    youtube: Option<Arc<dyn MetadataApi>>,
    analyzer: Arc<dyn SentimentAnalyzer>,
    generator: Option<Arc<dyn TextGenerator>>,
    search: Option<Arc<dyn WebSearch>>,
    scripts: ScriptStore,
    settings: YoutubeSettings,
}

impl ToolContext {
    /// Context with no remote services and the built-in sentiment lexicon.
    pub fn new(settings: YoutubeSettings, scripts: ScriptStore) -> Self {
        Self {
            youtube: None,
            analyzer: Arc::new(LexiconAnalyzer::new()),
            generator: None,
            search: None,
            scripts,
            settings,
        }
    }

    /// Build every service whose credentials are configured.
    pub fn from_settings(settings: &Settings, prompts: &Prompts) -> Result<Self> {
        let mut context = Self::new(
            settings.youtube.clone(),
            ScriptStore::new(settings.scripts_dir()),
        );

        if settings.youtube.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            context.youtube = Some(Arc::new(YoutubeClient::from_settings(&settings.youtube)?));
        } else {
            debug!("YouTube API key not configured; YouTube tools disabled");
        }

        if settings.search.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            context.search = Some(Arc::new(TavilyClient::from_settings(&settings.search)?));
        } else {
            debug!("Search API key not configured; search tools disabled");
        }

        context.generator = Some(Arc::new(OpenAIGenerator::new(
            &settings.openai,
            &prompts.generator.system,
        )?));

        Ok(context)
    }

    pub fn with_youtube(mut self, api: Arc<dyn MetadataApi>) -> Self {
        self.youtube = Some(api);
        self
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_search(mut self, search: Arc<dyn WebSearch>) -> Self {
        self.search = Some(search);
        self
    }

    fn youtube(&self) -> Result<(Resolver, MetricsFetcher)> {
        let api = self.youtube.clone().ok_or_else(|| {
            AgencyError::Config(
                "YouTube API key not set. Set YOUTUBE_API_KEY or youtube.api_key".to_string(),
            )
        })?;
        Ok((
            Resolver::new(api.clone(), self.settings.relevance_language.clone()),
            MetricsFetcher::new(api, self.analyzer.clone()),
        ))
    }

    fn generator(&self) -> Result<&dyn TextGenerator> {
        self.generator
            .as_deref()
            .ok_or_else(|| AgencyError::Config("OpenAI generator not configured".to_string()))
    }

    fn search(&self) -> Result<&dyn WebSearch> {
        self.search.as_deref().ok_or_else(|| {
            AgencyError::Config(
                "Search API key not set. Set TAVILY_API_KEY or search.api_key".to_string(),
            )
        })
    }

    /// Explicit channel reference, else the configured default channel.
    fn channel_reference(&self, channel: Option<&str>) -> Result<String> {
        channel
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or(self.settings.default_channel.as_deref())
            .map(str::to_string)
            .ok_or_else(|| {
                AgencyError::InvalidInput(
                    "No channel given and no default channel configured (DEFAULT_CHANNEL_ID)"
                        .to_string(),
                )
            })
    }

    /// Execute a tool call.
    pub async fn execute(&self, tool: &ToolCall) -> Result<ToolOutput> {
        debug!("Executing tool {}", tool.name());
        match tool {
            ToolCall::ChannelAnalytics { channel, metric } => {
                self.channel_analytics(channel.as_deref(), *metric).await
            }
            ToolCall::VideoPerformance { video } => self.video_performance(video).await,
            ToolCall::CommentSentiment { video, limit } => {
                self.comment_sentiment(video, *limit).await
            }
            ToolCall::CompetitorAnalysis { channel } => {
                self.competitor_analysis(channel.as_deref()).await
            }
            ToolCall::GenerateContent { prompt } => {
                Ok(ToolOutput::new(self.generator()?.generate(prompt).await?))
            }
            ToolCall::WriteScript { title, content } => {
                let path = self.scripts.write(title, content)?;
                Ok(ToolOutput::new(format!(
                    "Script saved successfully to {}",
                    path.display()
                )))
            }
            ToolCall::EditScript { filename, edits } => {
                let edited = self.scripts.edit(filename, edits)?;
                Ok(ToolOutput::new(format!(
                    "Script edited successfully. Backup saved as {}",
                    edited.backup.display()
                )))
            }
            ToolCall::WebSearch { query } => {
                let response = self.search()?.search(query).await?;
                Ok(ToolOutput::new(search_report(query, &response).render()))
            }
            ToolCall::TrendAnalysis { keyword } => self.trend_analysis(keyword).await,
            ToolCall::ExtractKeywords { keywords } => {
                let keywords = parse_keywords(keywords);
                Ok(ToolOutput::new(
                    keywords_report(&keywords, &current_period()).render(),
                ))
            }
        }
    }

    async fn channel_analytics(
        &self,
        channel: Option<&str>,
        metric: ChannelMetric,
    ) -> Result<ToolOutput> {
        let reference = self.channel_reference(channel)?;
        let (resolver, fetcher) = self.youtube()?;

        let id = resolver.resolve_channel(&reference).await?;
        let snapshot = fetcher.fetch_channel(&id).await?;

        let recent_videos = match metric {
            ChannelMetric::Videos => {
                fetcher
                    .recent_uploads(&snapshot, self.settings.recent_videos)
                    .await?
            }
            _ => Vec::new(),
        };

        let playlist_limit = match metric {
            ChannelMetric::Playlists => self.settings.playlist_limit,
            _ => self.settings.featured_playlists,
        };
        let playlists = fetcher.fetch_playlists(&id, playlist_limit).await?;

        let report = channel_report(&ChannelAnalysis {
            channel: snapshot,
            metric,
            recent_videos,
            playlists,
        });
        Ok(ToolOutput::new(report.render()))
    }

    async fn video_performance(&self, video: &str) -> Result<ToolOutput> {
        let (resolver, fetcher) = self.youtube()?;
        let id = resolver.resolve_video(video)?;
        let snapshot = fetcher.fetch_video(&id).await?;
        Ok(ToolOutput::new(video_report(&snapshot).render()))
    }

    async fn comment_sentiment(&self, video: &str, limit: Option<usize>) -> Result<ToolOutput> {
        let (resolver, fetcher) = self.youtube()?;
        let id = resolver.resolve_video(video)?;
        let snapshot = fetcher.fetch_video(&id).await?;

        let limit = limit.unwrap_or(self.settings.comment_limit);
        let batch = fetcher.fetch_comments(&id, limit).await?;
        let summary = summarize(&batch.records);

        let output = ToolOutput::new(comments_report(&snapshot, &summary).render());
        match &batch.interrupted {
            Some(e) => {
                warn!("Partial comment fetch for {}: {}", id, e);
                Ok(output.with_warning(format!(
                    "Only {} of {} requested comments were retrieved ({})",
                    batch.records.len(),
                    batch.requested,
                    e
                )))
            }
            None if batch.records.len() < batch.requested => Ok(output.with_warning(format!(
                "Retrieved {} of {} requested comments; no more are available",
                batch.records.len(),
                batch.requested
            ))),
            None => Ok(output),
        }
    }

    async fn competitor_analysis(&self, channel: Option<&str>) -> Result<ToolOutput> {
        let reference = self.channel_reference(channel)?;
        let (resolver, fetcher) = self.youtube()?;

        let id = resolver.resolve_channel(&reference).await?;
        let snapshot = fetcher.fetch_channel(&id).await?;
        let videos = fetcher
            .recent_uploads(&snapshot, self.settings.competitor_videos)
            .await?;

        Ok(ToolOutput::new(competitor_report(&snapshot, &videos).render()))
    }

    async fn trend_analysis(&self, keyword: &str) -> Result<ToolOutput> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AgencyError::InvalidInput("empty trend keyword".to_string()));
        }
        let response = self
            .search()?
            .search(&format!("latest {} trends", keyword))
            .await?;
        Ok(ToolOutput::new(
            trend_report(keyword, &current_period(), &response).render(),
        ))
    }
}

/// Current month, e.g. `October 2026`.
fn current_period() -> String {
    chrono::Local::now().format("%B %Y").to_string()
}

fn function(name: &str, description: &str, parameters: serde_json::Value) -> ChatCompletionTool {
    ChatCompletionTool {
        r#type: ChatCompletionToolType::Function,
        function: FunctionObject {
            name: name.to_string(),
            description: Some(description.to_string()),
            parameters: Some(parameters),
            strict: None,
        },
    }
}

/// OpenAI function definitions for every tool.
pub fn tool_definitions() -> Vec<ChatCompletionTool> {
    use serde_json::json;

    vec![
        function(
            "channel_analytics",
            "Analyze a YouTube channel: overview, performance metrics, topics, and either \
            recent videos, statistics only, or playlists. Defaults to the configured channel.",
            json!({
                "type": "object",
                "properties": {
                    "channel": {
                        "type": "string",
                        "description": "Channel ID, URL, @handle, or name (optional)"
                    },
                    "metric": {
                        "type": "string",
                        "enum": ["statistics", "videos", "playlists"],
                        "description": "Type of analysis (default: videos)"
                    }
                }
            }),
        ),
        function(
            "video_performance",
            "Get public performance metrics (views, likes, comments, duration, tags) for a video.",
            json!({
                "type": "object",
                "properties": {
                    "video": { "type": "string", "description": "Video ID or URL" }
                },
                "required": ["video"]
            }),
        ),
        function(
            "comment_sentiment",
            "Analyze the sentiment of a video's top-level comments.",
            json!({
                "type": "object",
                "properties": {
                    "video": { "type": "string", "description": "Video ID or URL" },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of comments to analyze (default: 100)"
                    }
                },
                "required": ["video"]
            }),
        ),
        function(
            "competitor_analysis",
            "Analyze another channel's size and recent uploads.",
            json!({
                "type": "object",
                "properties": {
                    "channel": {
                        "type": "string",
                        "description": "Channel ID, URL, @handle, or name (optional)"
                    }
                }
            }),
        ),
        function(
            "generate_content",
            "Generate content ideas or draft text from a prompt.",
            json!({
                "type": "object",
                "properties": {
                    "prompt": { "type": "string", "description": "The prompt to generate from" }
                },
                "required": ["prompt"]
            }),
        ),
        function(
            "write_script",
            "Save a video script as a markdown file in the scripts directory.",
            json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Title of the script" },
                    "content": { "type": "string", "description": "Script body in markdown" }
                },
                "required": ["title", "content"]
            }),
        ),
        function(
            "edit_script",
            "Append edits to an existing script file, keeping a .bak backup.",
            json!({
                "type": "object",
                "properties": {
                    "filename": { "type": "string", "description": "Script file path or name" },
                    "edits": { "type": "string", "description": "Edits to apply" }
                },
                "required": ["filename", "edits"]
            }),
        ),
        function(
            "web_search",
            "Search recent tech news coverage on the web.",
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query" }
                },
                "required": ["query"]
            }),
        ),
        function(
            "trend_analysis",
            "Build a trend report for one keyword from recent web coverage.",
            json!({
                "type": "object",
                "properties": {
                    "keyword": { "type": "string", "description": "Keyword to analyze" }
                },
                "required": ["keyword"]
            }),
        ),
        function(
            "extract_keywords",
            "Normalize a comma-separated keyword list and suggest research queries.",
            json!({
                "type": "object",
                "properties": {
                    "keywords": { "type": "string", "description": "Comma-separated keywords" }
                },
                "required": ["keywords"]
            }),
        ),
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    if !TOOL_NAMES.contains(&name) {
        return Err(AgencyError::Agent(format!("Unknown tool: {}", name)));
    }

    let mut args: serde_json::Value = if arguments.trim().is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(arguments)
            .map_err(|e| AgencyError::Agent(format!("Invalid tool arguments: {}", e)))?
    };

    let object = args
        .as_object_mut()
        .ok_or_else(|| AgencyError::Agent("Tool arguments must be a JSON object".to_string()))?;
    object.insert("name".to_string(), serde_json::Value::from(name));

    serde_json::from_value(args)
        .map_err(|e| AgencyError::Agent(format!("Invalid arguments for {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::{SearchHit, SearchResponse};
    use crate::youtube::fake::{self, FakeApi};
    use async_trait::async_trait;
    use tempfile::TempDir;

    const ID: &str = "UCbmCqH_WOUviDUsV83qloZQ";

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("ideas for: {}", prompt))
        }
    }

    struct StaticSearch;

    #[async_trait]
    impl WebSearch for StaticSearch {
        async fn search(&self, query: &str) -> Result<SearchResponse> {
            Ok(SearchResponse {
                query: query.to_string(),
                answer: Some("Agents dominate coverage.".to_string()),
                results: vec![SearchHit {
                    title: "Agents everywhere".to_string(),
                    url: "https://techcrunch.com/agents".to_string(),
                    content: "Coverage of agents".to_string(),
                    score: 0.8,
                }],
            })
        }
    }

    fn settings(default_channel: Option<&str>) -> YoutubeSettings {
        YoutubeSettings {
            default_channel: default_channel.map(str::to_string),
            ..Default::default()
        }
    }

    fn youtube_api() -> Arc<FakeApi> {
        Arc::new(
            FakeApi::new()
                .with_channel(fake::channel(ID, "Agency Labs"))
                .with_uploads(&["vid00000001", "vid00000002"])
                .with_video(fake::video("vid00000001", "First upload", 4_200))
                .with_video(fake::video("vid00000002", "Second upload", 900))
                .with_video(fake::video("dQw4w9WgXcQ", "Commented", 12_000))
                .with_playlist(fake::playlist("PL1", "Tutorials", 12))
                .with_comments(&["This is a great video", "terrible audio", "first"]),
        )
    }

    fn context(dir: &TempDir, default_channel: Option<&str>) -> ToolContext {
        ToolContext::new(settings(default_channel), ScriptStore::new(dir.path()))
    }

    #[test]
    fn test_parse_tool_calls() {
        let tool = parse_tool_call("comment_sentiment", r#"{"video": "dQw4w9WgXcQ", "limit": 50}"#)
            .unwrap();
        assert_eq!(
            tool,
            ToolCall::CommentSentiment {
                video: "dQw4w9WgXcQ".to_string(),
                limit: Some(50)
            }
        );

        let tool = parse_tool_call("channel_analytics", "").unwrap();
        assert_eq!(
            tool,
            ToolCall::ChannelAnalytics {
                channel: None,
                metric: ChannelMetric::Videos
            }
        );

        let tool = parse_tool_call("channel_analytics", r#"{"metric": "playlists"}"#).unwrap();
        assert!(matches!(
            tool,
            ToolCall::ChannelAnalytics {
                metric: ChannelMetric::Playlists,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_tool_call_errors() {
        assert!(matches!(
            parse_tool_call("search_everything", "{}"),
            Err(AgencyError::Agent(msg)) if msg == "Unknown tool: search_everything"
        ));
        assert!(parse_tool_call("video_performance", "{}").is_err());
        assert!(parse_tool_call("video_performance", "[1, 2]").is_err());
        assert!(parse_tool_call("write_script", "{not json").is_err());
    }

    #[test]
    fn test_definitions_cover_every_tool() {
        let names: Vec<String> = tool_definitions()
            .into_iter()
            .map(|t| t.function.name)
            .collect();
        assert_eq!(names, TOOL_NAMES.to_vec());
    }

    #[tokio::test]
    async fn test_channel_analytics_uses_default_channel() {
        let dir = TempDir::new().unwrap();
        let api = youtube_api();
        let ctx = context(&dir, Some(ID)).with_youtube(api.clone());

        let output = ctx
            .execute(&ToolCall::ChannelAnalytics {
                channel: None,
                metric: ChannelMetric::Videos,
            })
            .await
            .unwrap();

        assert!(output.text.contains("Channel Name:    Agency Labs"));
        assert!(output.text.contains("1. First upload"));
        assert!(output.text.contains("2. Second upload"));
        assert!(output.text.contains("FEATURED PLAYLISTS"));
        assert!(output.warning.is_none());
        assert_eq!(api.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_channel_analytics_without_channel() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, None).with_youtube(youtube_api());
        let err = ctx
            .execute(&ToolCall::ChannelAnalytics {
                channel: None,
                metric: ChannelMetric::Statistics,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AgencyError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_youtube_tools_need_api() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, Some(ID));
        let err = ctx
            .execute(&ToolCall::VideoPerformance {
                video: "dQw4w9WgXcQ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AgencyError::Config(_)));
    }

    #[tokio::test]
    async fn test_video_and_comment_tools() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, None).with_youtube(youtube_api());

        let output = ctx
            .execute(&ToolCall::VideoPerformance {
                video: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            })
            .await
            .unwrap();
        assert!(output.text.contains("Views:           12.0K"));

        let output = ctx
            .execute(&ToolCall::CommentSentiment {
                video: "dQw4w9WgXcQ".to_string(),
                limit: None,
            })
            .await
            .unwrap();
        assert!(output.text.contains("Analyzed:        3 comments"));
        assert!(output.text.contains("Positive:        1 (33.3%)"));
    }

    #[tokio::test]
    async fn test_short_comment_section_becomes_warning() {
        let dir = TempDir::new().unwrap();
        let api = Arc::new(
            FakeApi::new()
                .with_video(fake::video("dQw4w9WgXcQ", "Quiet", 900))
                .with_comments(&["great", "nice", "ok"]),
        );
        let ctx = context(&dir, None).with_youtube(api);

        let output = ctx
            .execute(&ToolCall::CommentSentiment {
                video: "dQw4w9WgXcQ".to_string(),
                limit: Some(250),
            })
            .await
            .unwrap();

        assert!(output.text.contains("Analyzed:        3 comments"));
        assert_eq!(
            output.warning.as_deref(),
            Some("Retrieved 3 of 250 requested comments; no more are available")
        );
    }

    #[tokio::test]
    async fn test_full_comment_batch_has_no_warning() {
        let dir = TempDir::new().unwrap();
        let api = Arc::new(
            FakeApi::new()
                .with_video(fake::video("dQw4w9WgXcQ", "Busy", 12_000))
                .with_comment_pages(&[100, 100]),
        );
        let ctx = context(&dir, None).with_youtube(api);

        let output = ctx
            .execute(&ToolCall::CommentSentiment {
                video: "dQw4w9WgXcQ".to_string(),
                limit: Some(150),
            })
            .await
            .unwrap();

        assert!(output.text.contains("Analyzed:        150 comments"));
        assert!(output.warning.is_none());
    }

    #[tokio::test]
    async fn test_partial_comments_become_warning() {
        let dir = TempDir::new().unwrap();
        let api = Arc::new(
            FakeApi::new()
                .with_video(fake::video("dQw4w9WgXcQ", "Commented", 12_000))
                .with_comment_pages(&[100, 100])
                .with_comment_failure_at(1, AgencyError::QuotaExceeded("quota".into())),
        );
        let ctx = context(&dir, None).with_youtube(api);

        let output = ctx
            .execute(&ToolCall::CommentSentiment {
                video: "dQw4w9WgXcQ".to_string(),
                limit: Some(200),
            })
            .await
            .unwrap();

        assert!(output.text.contains("Analyzed:        100 comments"));
        let warning = output.warning.unwrap();
        assert!(warning.starts_with("Only 100 of 200 requested comments were retrieved"));
    }

    #[tokio::test]
    async fn test_competitor_analysis_resolves_name() {
        let dir = TempDir::new().unwrap();
        let api = Arc::new(
            FakeApi::new()
                .with_search_hit(ID)
                .with_channel(fake::channel(ID, "Rival Labs"))
                .with_uploads(&["vid00000001"])
                .with_video(fake::video("vid00000001", "Big hit", 2_000_000)),
        );
        let ctx = context(&dir, None).with_youtube(api.clone());

        let output = ctx
            .execute(&ToolCall::CompetitorAnalysis {
                channel: Some("Rival Labs".to_string()),
            })
            .await
            .unwrap();

        assert!(output.text.contains("Channel:         Rival Labs"));
        assert!(output.text.contains("1. Big hit (2.0M views)"));
        assert_eq!(api.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_script_tools() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, None);

        let output = ctx
            .execute(&ToolCall::WriteScript {
                title: "Launch Day".to_string(),
                content: "Hello".to_string(),
            })
            .await
            .unwrap();
        assert!(output.text.starts_with("Script saved successfully to "));
        let path = output.text.trim_start_matches("Script saved successfully to ").to_string();
        assert!(path.ends_with("_launch_day.md"));

        let output = ctx
            .execute(&ToolCall::EditScript {
                filename: path.clone(),
                edits: "Shorter intro".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            output.text,
            format!("Script edited successfully. Backup saved as {}.bak", path)
        );

        let err = ctx
            .execute(&ToolCall::EditScript {
                filename: "nope.md".to_string(),
                edits: "x".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AgencyError::Script(_)));

        let outside = TempDir::new().unwrap();
        let target = outside.path().join("authorized_keys");
        std::fs::write(&target, "ssh-ed25519 AAAA").unwrap();
        let err = ctx
            .execute(&ToolCall::EditScript {
                filename: target.to_string_lossy().to_string(),
                edits: "appended".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AgencyError::InvalidInput(_)));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "ssh-ed25519 AAAA");
    }

    #[tokio::test]
    async fn test_generate_content_passes_through() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, None).with_generator(Arc::new(EchoGenerator));
        let output = ctx
            .execute(&ToolCall::GenerateContent {
                prompt: "AI video ideas".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(output.text, "ideas for: AI video ideas");
    }

    #[tokio::test]
    async fn test_search_tools() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, None);
        let err = ctx
            .execute(&ToolCall::WebSearch {
                query: "ai".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AgencyError::Config(_)));

        let ctx = ctx.with_search(Arc::new(StaticSearch));
        let output = ctx
            .execute(&ToolCall::TrendAnalysis {
                keyword: "AI agents".to_string(),
            })
            .await
            .unwrap();
        assert!(output.text.contains("Topic:           AI agents"));
        assert!(output.text.contains("Agents dominate coverage."));

        let output = ctx
            .execute(&ToolCall::WebSearch {
                query: "ai agents".to_string(),
            })
            .await
            .unwrap();
        assert!(output.text.contains("https://techcrunch.com/agents"));
    }

    #[tokio::test]
    async fn test_extract_keywords() {
        let dir = TempDir::new().unwrap();
        let output = context(&dir, None)
            .execute(&ToolCall::ExtractKeywords {
                keywords: "AI, ai, Robotics".to_string(),
            })
            .await
            .unwrap();
        assert!(output.text.contains("Keywords:        AI, Robotics"));
    }

    #[test]
    fn test_from_settings_without_keys() {
        let settings = Settings::default();
        let ctx = ToolContext::from_settings(&settings, &Prompts::default()).unwrap();
        assert!(ctx.youtube.is_none());
        assert!(ctx.search.is_none());
        assert!(ctx.generator.is_some());
    }

    #[test]
    fn test_output_display() {
        let output = ToolOutput::new("report").with_warning("partial");
        assert_eq!(output.to_string(), "report\n\nWarning: partial");
    }
}
