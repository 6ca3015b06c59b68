//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use widgetry_types::RenderMode;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Render mode used when none is given on the command line
    #[serde(default)]
    pub default_render_mode: RenderMode,
    /// Seal the registry once built-in widgets are registered
    #[serde(default = "default_seal_after_bootstrap")]
    pub seal_after_bootstrap: bool,
    /// Built-in widget kinds that should not be registered
    #[serde(default)]
    pub disabled_widgets: Vec<String>,
    /// Log verbosity used when no -d flag is given (0=warn .. 3=trace)
    #[serde(default)]
    pub log_level: Option<u8>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_seal_after_bootstrap() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("dev", "widgetry", "widgetry")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_render_mode: RenderMode::default(),
            seal_after_bootstrap: default_seal_after_bootstrap(),
            disabled_widgets: Vec::new(),
            log_level: None,
        }
    }
}
