//! Tessera Theme System
//!
//! Design tokens and the frozen global theme used by every Tessera component.
//!
//! # Overview
//!
//! - **Palette**: a closed set of named colors ([`PaletteToken`]); an unknown
//!   color name is a compile error
//! - **Color references**: [`ColorRef`] pairs a token with an alpha so styles
//!   stay symbolic until render
//! - **Tokens**: opacity, corner radius, insets and font weights
//! - **Theme state**: built once at startup, optionally from a TOML
//!   [`ThemeConfig`], then never mutated
//!
//! # Quick Start
//!
//! ```rust
//! use tessera_theme::{ColorRef, PaletteToken, ThemeState};
//!
//! let theme = ThemeState::get();
//! let border = theme.resolve(ColorRef::solid(PaletteToken::Light60).with_alpha(0.3));
//! assert!(border.a < 1.0);
//! ```

pub mod config;
pub mod error;
pub mod state;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use tokens::*;
