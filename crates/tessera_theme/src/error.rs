//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

use crate::tokens::PaletteToken;

/// Theme configuration errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Config file could not be read
    #[error("failed to read theme config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ThemeConfig`](crate::ThemeConfig)
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Palette override is not a `#RRGGBB` / `#RRGGBBAA` color
    #[error("invalid color {value:?} for palette token `{token}`")]
    InvalidColor { token: PaletteToken, value: String },

    /// Token name does not exist in the palette
    #[error("unknown palette token `{0}`")]
    UnknownToken(String),

    /// Numeric setting outside its valid range
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// The global theme was already frozen
    #[error("theme state already initialized")]
    AlreadyInitialized,
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
