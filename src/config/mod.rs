//! Configuration module for creator-agency.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{AgentPrompts, GeneratorPrompts, Prompts};
pub use settings::{
    GeneralSettings, OpenAISettings, PromptSettings, SearchSettings, Settings, YoutubeSettings,
};
