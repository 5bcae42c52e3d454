//! Prompt templates for the content generator and the content-manager agent.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub generator: GeneratorPrompts,
    pub agent: AgentPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

/// Prompts for content-idea generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorPrompts {
    pub system: String,
}

impl Default for GeneratorPrompts {
    fn default() -> Self {
        Self {
            system: "You are a creative content strategist specialized in AI content.".to_string(),
        }
    }
}

/// Prompts for the content-manager agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentPrompts {
    pub system: String,
}

impl Default for AgentPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are the Content Manager of a small YouTube content agency.

You plan videos, research what is trending, study channels and audiences, and write scripts.
You have tools for each of these jobs. Think about what information you need, then call the tools.

Guidelines:
- Use 'channel_analytics' to study a channel's statistics, recent uploads or playlists
- Use 'video_performance' to look at one video's public metrics
- Use 'comment_sentiment' to understand how an audience reacted to a video
- Use 'competitor_analysis' to compare against another channel
- Use 'web_search' and 'trend_analysis' to research a topic, 'extract_keywords' to split a keyword list
- Use 'generate_content' for brainstorming ideas, titles and outlines
- Use 'write_script' to save a finished script and 'edit_script' to revise a saved one

Ground recommendations in the numbers the tools return.
Format your final answer clearly with headers and lists.
Channel focus: {{channel_focus}}"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let generator_path = custom_path.join("generator.toml");
            if generator_path.exists() {
                let content = std::fs::read_to_string(&generator_path)?;
                prompts.generator = toml::from_str(&content)?;
            }

            let agent_path = custom_path.join("agent.toml");
            if agent_path.exists() {
                let content = std::fs::read_to_string(&agent_path)?;
                prompts.agent = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}
