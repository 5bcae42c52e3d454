//! Markdown scripts on local disk.

use crate::error::{AgencyError, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory of generated scripts.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    dir: PathBuf,
}

/// Result of a script edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedScript {
    pub path: PathBuf,
    pub backup: PathBuf,
}

/// File stem for a title: lowercased, spaces replaced with underscores.
pub fn slugify(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "_")
}

impl ScriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `# {title}\n\n{content}` to `{YYYYmmdd_HHMMSS}_{slug}.md`.
    pub fn write(&self, title: &str, content: &str) -> Result<PathBuf> {
        self.write_at(Local::now(), title, content)
    }

    fn write_at(&self, now: DateTime<Local>, title: &str, content: &str) -> Result<PathBuf> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(AgencyError::InvalidInput("script title is empty".to_string()));
        }
        if slug.contains(['/', '\\']) {
            return Err(AgencyError::InvalidInput(format!(
                "script title cannot contain path separators: {}",
                title
            )));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{}_{}.md", now.format("%Y%m%d_%H%M%S"), slug));
        std::fs::write(&path, format!("# {}\n\n{}", title, content))?;

        info!("Saved script to {}", path.display());
        Ok(path)
    }

    /// Resolve a script name inside the store, or a path that points into it.
    fn locate(&self, filename: &str) -> Result<PathBuf> {
        let path = [self.dir.join(filename), PathBuf::from(filename)]
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(|| AgencyError::Script(format!("File {} not found", filename)))?;

        // Resolves `..` and symlinks before the containment check.
        let resolved = path.canonicalize()?;
        let root = self.dir.canonicalize().ok();
        if !root.is_some_and(|root| resolved.starts_with(root)) {
            return Err(AgencyError::InvalidInput(format!(
                "{} is outside the scripts directory {}",
                filename,
                self.dir.display()
            )));
        }
        Ok(path)
    }

    /// Append an `## Edits` section, keeping the prior text in `<file>.bak`.
    pub fn edit(&self, filename: &str, edits: &str) -> Result<EditedScript> {
        let path = self.locate(filename)?;

        let content = std::fs::read_to_string(&path)?;

        let mut backup = path.clone().into_os_string();
        backup.push(".bak");
        let backup = PathBuf::from(backup);
        std::fs::write(&backup, &content)?;

        std::fs::write(&path, format!("{}\n\n## Edits\n{}", content, edits))?;

        info!("Edited {} (backup {})", path.display(), backup.display());
        Ok(EditedScript { path, backup })
    }
}
