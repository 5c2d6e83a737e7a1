//! Theme configuration (the `[theme]` table of `tessera.toml`)
//!
//! ```toml
//! disabled_opacity = 0.5
//! rounded_radius = 10.0
//!
//! [palette]
//! blue70 = "#1E66F5"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ThemeError};
use crate::tokens::PaletteToken;

/// Startup-time theme customization
///
/// Every field is optional; missing values keep the built-in tokens.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Opacity applied to disabled controls
    pub disabled_opacity: Option<f32>,
    /// Corner radius of `rounded` controls
    pub rounded_radius: Option<f32>,
    /// Hex color overrides keyed by palette token name
    pub palette: BTreeMap<PaletteToken, String>,
}

impl ThemeConfig {
    /// Parse a theme config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a theme config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
