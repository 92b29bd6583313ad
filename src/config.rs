use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from ~/.config/barrelctl/config.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,
}

/// Configuration for interactive directory selection
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    /// External fuzzy finder command; empty string disables it
    #[serde(default = "default_finder")]
    pub finder: String,

    /// Directory names skipped when listing candidates
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_finder() -> String {
    "fzf".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![".git".to_string(), "node_modules".to_string()]
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            finder: default_finder(),
            exclude: default_exclude(),
        }
    }
}

impl Config {
    /// Load configuration from the default path (~/.config/barrelctl/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("barrelctl").join("config.toml"))
    }

    /// External finder command, if one is configured
    pub fn finder(&self) -> Option<&str> {
        let finder = self.selector.finder.trim();
        (!finder.is_empty()).then_some(finder)
    }
}
