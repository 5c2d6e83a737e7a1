//! Color references
//!
//! Resolved component styles carry [`ColorRef`]s rather than raw colors: a
//! palette token plus an alpha multiplier. The concrete [`Color`] is only
//! produced through the theme, so palette overrides apply everywhere.
//!
//! [`Color`]: tessera_core::Color

use serde::Serialize;

use super::PaletteToken;

/// A palette token with an alpha multiplier
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorRef {
    pub token: PaletteToken,
    pub alpha: f32,
}

impl ColorRef {
    /// Reference a token at full alpha
    pub const fn solid(token: PaletteToken) -> Self {
        Self { token, alpha: 1.0 }
    }

    /// The fully transparent reference
    pub const fn clear() -> Self {
        Self::solid(PaletteToken::Clear)
    }

    /// Return this reference with its alpha replaced
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether this reference paints nothing
    pub fn is_clear(&self) -> bool {
        self.token == PaletteToken::Clear || self.alpha == 0.0
    }
}

impl From<PaletteToken> for ColorRef {
    fn from(token: PaletteToken) -> Self {
        Self::solid(token)
    }
}
