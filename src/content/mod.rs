//! Content production: idea generation and script files.

mod generator;
mod scripts;

pub use generator::{OpenAIGenerator, TextGenerator};
pub use scripts::{slugify, EditedScript, ScriptStore};
