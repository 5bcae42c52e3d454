//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::{SearchSettings, Settings, YoutubeSettings};
use anyhow::Result;
use std::path::PathBuf;

const REDACTED: &str = "<redacted>";

/// Copy of the settings that is safe to print.
fn redacted(settings: &Settings) -> Settings {
    let mut shown = settings.clone();
    let YoutubeSettings { api_key, .. } = &mut shown.youtube;
    if api_key.is_some() {
        *api_key = Some(REDACTED.to_string());
    }
    let SearchSettings { api_key, .. } = &mut shown.search;
    if api_key.is_some() {
        *api_key = Some(REDACTED.to_string());
    }
    shown
}

/// Run the config command. `path` is the `--config` override, if any.
pub fn run_config(action: &ConfigAction, settings: &Settings, path: Option<&str>) -> Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&redacted(settings))
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Edit => {
            if !config_path.exists() {
                Settings::default().save_to(&config_path)?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}
