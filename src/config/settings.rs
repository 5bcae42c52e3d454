//! Configuration settings for creator-agency.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub openai: OpenAISettings,
    pub search: SearchSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory where scripts are written.
    pub scripts_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            scripts_dir: "scripts".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// YouTube Data API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API key. Overridden by `YOUTUBE_API_KEY`.
    pub api_key: Option<String>,
    /// Channel analysed when no target is given. Overridden by `DEFAULT_CHANNEL_ID`.
    pub default_channel: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Relevance language hint for channel searches.
    pub relevance_language: Option<String>,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Recent uploads listed in a channel report.
    pub recent_videos: usize,
    /// Recent uploads listed in a competitor report.
    pub competitor_videos: usize,
    /// Playlists listed alongside recent videos.
    pub featured_playlists: usize,
    /// Playlists listed in a playlists report.
    pub playlist_limit: usize,
    /// Comments collected for sentiment analysis.
    pub comment_limit: usize,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            default_channel: None,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            relevance_language: Some("en".to_string()),
            connect_timeout_secs: 10,
            timeout_secs: 30,
            recent_videos: 5,
            competitor_videos: 10,
            featured_playlists: 3,
            playlist_limit: 10,
            comment_limit: 100,
        }
    }
}

impl YoutubeSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// OpenAI generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    /// Chat model used for content generation and the agent.
    pub model: String,
    /// Sampling temperature for content generation.
    pub temperature: f32,
    /// Sampling temperature for the content-manager agent.
    pub agent_temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.7,
            agent_temperature: 0.5,
            timeout_secs: 300,
        }
    }
}

/// Web search (Tavily) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Tavily API key. Overridden by `TAVILY_API_KEY`.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Search depth (basic, advanced).
    pub search_depth: String,
    /// Domains the search is restricted to. Empty means unrestricted.
    pub include_domains: Vec<String>,
    /// Maximum results per query.
    pub max_results: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.tavily.com".to_string(),
            search_depth: "advanced".to_string(),
            include_domains: vec![
                "techcrunch.com".to_string(),
                "wired.com".to_string(),
                "venturebeat.com".to_string(),
                "ai.gov".to_string(),
            ],
            max_results: 5,
            timeout_secs: 30,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// Environment variables are applied on top of the file.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Settings::default()
        };

        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Override values from environment-style lookups. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("YOUTUBE_API_KEY") {
            self.youtube.api_key = Some(key);
        }
        if let Some(channel) = non_empty("DEFAULT_CHANNEL_ID") {
            self.youtube.default_channel = Some(channel);
        }
        if let Some(key) = non_empty("TAVILY_API_KEY") {
            self.search.api_key = Some(key);
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::AgencyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("creator-agency")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded scripts directory path.
    pub fn scripts_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.scripts_dir)
    }
}
