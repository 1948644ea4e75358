//! User configuration
//!
//! Settings are read from `.braid/config.yaml` in the project, falling back
//! to the per-user config directory. Environment variables win over both.

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::project::Project;

/// User-level settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default author for new entities
    pub author: Option<String>,

    /// Editor command for `--edit`
    pub editor: Option<String>,
}

impl Config {
    /// Load configuration, merging project settings over global ones
    pub fn load() -> Self {
        let global = Self::global_path()
            .and_then(|p| Self::read(&p))
            .unwrap_or_default();
        let project = Project::discover()
            .ok()
            .and_then(|p| Self::read(&p.root().join(".braid/config.yaml")))
            .unwrap_or_default();

        Self {
            author: project.author.or(global.author),
            editor: project.editor.or(global.editor),
        }
    }

    fn read(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str(&content).ok()
    }

    fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "braid")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Resolve the author name for new entities
    pub fn author(&self) -> String {
        std::env::var("BRAID_AUTHOR")
            .ok()
            .or_else(|| self.author.clone())
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Resolve the editor command
    pub fn editor(&self) -> String {
        std::env::var("EDITOR")
            .ok()
            .or_else(|| self.editor.clone())
            .unwrap_or_else(|| "vi".to_string())
    }
}
