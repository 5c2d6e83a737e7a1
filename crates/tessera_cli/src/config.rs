//! Tessera configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tessera_theme::ThemeConfig;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "tessera.toml";

/// Top-level Tessera configuration (tessera.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TesseraConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

/// Timed feedback configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct FeedbackConfig {
    /// How long the copy confirmation stays visible, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    2000
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl FeedbackConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl TesseraConfig {
    /// Load an explicit configuration file; it must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `tessera.toml` from a directory, falling back to defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
