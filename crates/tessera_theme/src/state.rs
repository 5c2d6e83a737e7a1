//! Global theme state
//!
//! The theme is frozen: it is built once (from defaults or a
//! [`ThemeConfig`]) and never changes afterwards. Widgets read it during
//! render through [`ThemeState::get`], which falls back to the built-in
//! tokens when the host never called [`ThemeState::init`].

use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use tessera_core::Color;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::tokens::*;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Immutable theme - accessed directly by components during style resolution
#[derive(Clone, Debug, Default)]
pub struct ThemeState {
    /// Palette overrides; tokens not listed use their built-in color
    palette_overrides: FxHashMap<PaletteToken, Color>,

    /// Opacity tokens
    opacities: OpacityTokens,

    /// Radius tokens
    radii: RadiusTokens,
}

impl ThemeState {
    /// Build a theme from a config, validating every override
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let mut theme = ThemeState::default();

        if let Some(opacity) = config.disabled_opacity {
            theme.opacities.disabled = check_range("disabled_opacity", opacity, 0.0, 1.0)?;
        }
        if let Some(radius) = config.rounded_radius {
            theme.radii.rounded = check_range("rounded_radius", radius, 0.0, f32::MAX)?;
        }

        for (&token, value) in &config.palette {
            let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                token,
                value: value.clone(),
            })?;
            theme.palette_overrides.insert(token, color);
        }

        Ok(theme)
    }

    /// Freeze the global theme (call once at app startup)
    pub fn init(config: &ThemeConfig) -> Result<&'static ThemeState> {
        let theme = Self::from_config(config)?;
        tracing::debug!(
            "ThemeState::init - {} palette override(s), disabled opacity {}",
            theme.palette_overrides.len(),
            theme.opacities.disabled
        );

        THEME_STATE.set(theme).map_err(|_| {
            tracing::warn!("ThemeState::init called after the theme was already frozen");
            ThemeError::AlreadyInitialized
        })?;

        Ok(Self::get())
    }

    /// Freeze the global theme with the built-in tokens
    pub fn init_default() -> Result<&'static ThemeState> {
        Self::init(&ThemeConfig::default())
    }

    /// Get the global theme, freezing the defaults on first use
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(ThemeState::default)
    }

    /// Get the global theme only if it has been frozen already
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Access ==========

    /// Get the color of a palette token (override first)
    pub fn color(&self, token: PaletteToken) -> Color {
        self.palette_overrides
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.color())
    }

    /// Resolve a color reference to a concrete color
    pub fn resolve(&self, color: ColorRef) -> Color {
        let base = self.color(color.token);
        base.with_alpha(base.a * color.alpha)
    }

    // ========== Opacity Access ==========

    /// Get an opacity token value
    pub fn opacity(&self, token: OpacityToken) -> f32 {
        self.opacities.get(token)
    }

    /// Get all opacity tokens
    pub fn opacities(&self) -> &OpacityTokens {
        &self.opacities
    }

    // ========== Radius Access ==========

    /// Get a radius token value
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    /// Get all radius tokens
    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<f32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ThemeError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_uses_builtin_palette() {
        let theme = ThemeState::default();
        assert_eq!(theme.color(PaletteToken::Blue70), PaletteToken::Blue70.color());
        assert_eq!(theme.opacity(OpacityToken::Disabled), 0.6);
        assert_eq!(theme.radius(RadiusToken::Rounded), 8.0);
    }

    #[test]
    fn test_palette_override_applies() {
        let mut config = ThemeConfig::default();
        config
            .palette
            .insert(PaletteToken::Red70, "#ff0000".to_string());

        let theme = ThemeState::from_config(&config).unwrap();
        assert_eq!(theme.color(PaletteToken::Red70), Color::from_hex(0xFF0000));
        assert_eq!(theme.color(PaletteToken::Red60), PaletteToken::Red60.color());
    }

    #[test]
    fn test_resolve_multiplies_alpha() {
        let theme = ThemeState::default();
        let color = theme.resolve(ColorRef::solid(PaletteToken::Light60).with_alpha(0.3));
        assert!((color.a - 0.3).abs() < f32::EPSILON);

        let clear = theme.resolve(ColorRef::clear());
        assert_eq!(clear.a, 0.0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut config = ThemeConfig::default();
        config
            .palette
            .insert(PaletteToken::Blue10, "blue".to_string());
        assert!(matches!(
            ThemeState::from_config(&config),
            Err(ThemeError::InvalidColor { token: PaletteToken::Blue10, .. })
        ));

        let config = ThemeConfig {
            disabled_opacity: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(
            ThemeState::from_config(&config),
            Err(ThemeError::OutOfRange { name: "disabled_opacity", .. })
        ));

        let config = ThemeConfig {
            rounded_radius: Some(-1.0),
            ..Default::default()
        };
        assert!(ThemeState::from_config(&config).is_err());
    }
}
