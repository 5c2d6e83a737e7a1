//! Variant resolution
//!
//! [`resolve`] is the single authority turning a component configuration
//! into concrete presentation values. It is a pure function of its input and
//! the frozen theme: equal configs always produce field-equal styles, so the
//! render layer can call it unconditionally on every frame.
//!
//! Precedence rules shared by every kind:
//! - a disabled control always takes the fixed disabled colors, whatever its
//!   variant
//! - opacity depends on the enabled flag only
//! - padding depends on the size only

use serde::Serialize;
use tessera_core::Color;
use tessera_theme::{
    ColorRef, EdgeInsets, FontWeight, OpacityToken, PaletteToken, RadiusToken, ThemeState,
};

use crate::components::badge::{resolve_badge, BadgeConfig};
use crate::components::button::{resolve_button, ButtonConfig};
use crate::components::circle_icon_button::{resolve_circle_icon_button, CircleIconButtonConfig};
use crate::components::input_field::{resolve_input_field, InputFieldConfig};

/// Background of every disabled control
pub const DISABLED_BACKGROUND: ColorRef = ColorRef::solid(PaletteToken::Light30);

/// Foreground of every disabled control
pub const DISABLED_FOREGROUND: ColorRef = ColorRef::solid(PaletteToken::Light60);

/// Border width of outline-family variants
pub const OUTLINE_BORDER_WIDTH: f32 = 1.5;

/// Component size tiers
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSize {
    Small,
    #[default]
    Medium,
    Large,
}

named_enum!(ComponentSize {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

/// Size-dependent metrics of one component kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SizeMetrics {
    pub min_height: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub padding: EdgeInsets,
}

/// Which attribute table a configuration is resolved against
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Button,
    InputField,
    Badge,
    CircleIconButton,
}

/// Declared configuration of a component
///
/// Each kind carries its own variant type, so a button variant can never be
/// paired with an input field.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentConfig {
    Button(ButtonConfig),
    InputField(InputFieldConfig),
    Badge(BadgeConfig),
    CircleIconButton(CircleIconButtonConfig),
}

impl ComponentConfig {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentConfig::Button(_) => ComponentKind::Button,
            ComponentConfig::InputField(_) => ComponentKind::InputField,
            ComponentConfig::Badge(_) => ComponentKind::Badge,
            ComponentConfig::CircleIconButton(_) => ComponentKind::CircleIconButton,
        }
    }
}

impl From<ButtonConfig> for ComponentConfig {
    fn from(config: ButtonConfig) -> Self {
        ComponentConfig::Button(config)
    }
}

impl From<InputFieldConfig> for ComponentConfig {
    fn from(config: InputFieldConfig) -> Self {
        ComponentConfig::InputField(config)
    }
}

impl From<BadgeConfig> for ComponentConfig {
    fn from(config: BadgeConfig) -> Self {
        ComponentConfig::Badge(config)
    }
}

impl From<CircleIconButtonConfig> for ComponentConfig {
    fn from(config: CircleIconButtonConfig) -> Self {
        ComponentConfig::CircleIconButton(config)
    }
}

/// Concrete presentation values of a component
///
/// Colors stay symbolic ([`ColorRef`]); use [`ResolvedStyle::colors`] to get
/// the concrete values from a theme.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub background: ColorRef,
    pub foreground: ColorRef,
    pub border_color: ColorRef,
    pub border_width: f32,
    pub corner_radius: f32,
    pub min_height: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub padding: EdgeInsets,
    pub opacity: f32,
}

/// Concrete colors of a resolved style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedColors {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

impl ResolvedStyle {
    /// Look up the concrete colors in a theme
    pub fn colors(&self, theme: &ThemeState) -> ResolvedColors {
        ResolvedColors {
            background: theme.resolve(self.background),
            foreground: theme.resolve(self.foreground),
            border: theme.resolve(self.border_color),
        }
    }
}

/// Resolve a configuration against the global theme
pub fn resolve(config: &ComponentConfig) -> ResolvedStyle {
    resolve_with(ThemeState::get(), config)
}

/// Resolve a configuration against an explicit theme
pub fn resolve_with(theme: &ThemeState, config: &ComponentConfig) -> ResolvedStyle {
    tracing::trace!("resolve {:?}", config.kind());
    match config {
        ComponentConfig::Button(button) => resolve_button(theme, button),
        ComponentConfig::InputField(field) => resolve_input_field(theme, field),
        ComponentConfig::Badge(badge) => resolve_badge(badge),
        ComponentConfig::CircleIconButton(icon) => resolve_circle_icon_button(theme, icon),
    }
}

// ========== Shared rules ==========

/// Background, foreground and border of a variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct VariantPaint {
    pub background: ColorRef,
    pub foreground: ColorRef,
    pub border: ColorRef,
}

impl VariantPaint {
    pub(crate) fn new(
        background: impl Into<ColorRef>,
        foreground: impl Into<ColorRef>,
        border: impl Into<ColorRef>,
    ) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
            border: border.into(),
        }
    }

    /// Apply disabled precedence: fixed colors regardless of variant
    pub(crate) fn or_disabled(self, theme: &ThemeState, enabled: bool) -> Self {
        if enabled {
            self
        } else {
            Self {
                background: DISABLED_BACKGROUND,
                foreground: DISABLED_FOREGROUND,
                border: disabled_border(theme),
            }
        }
    }
}

/// Low-opacity gray border of disabled controls
pub fn disabled_border(theme: &ThemeState) -> ColorRef {
    ColorRef::solid(PaletteToken::Light60).with_alpha(theme.opacity(OpacityToken::DisabledBorder))
}

pub(crate) fn opacity_for(theme: &ThemeState, enabled: bool) -> f32 {
    if enabled {
        1.0
    } else {
        theme.opacity(OpacityToken::Disabled)
    }
}

pub(crate) fn rounded_radius(theme: &ThemeState) -> f32 {
    theme.radius(RadiusToken::Rounded)
}

pub(crate) fn border_width(outlined: bool) -> f32 {
    if outlined {
        OUTLINE_BORDER_WIDTH
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::badge::BadgeVariant;
    use crate::components::button::{ButtonVariant, RoundType};
    use crate::components::circle_icon_button::CircleIconVariant;
    use crate::components::input_field::{InputFieldVariant, InputState};

    fn every_config() -> Vec<ComponentConfig> {
        let mut configs = Vec::new();
        for &size in ComponentSize::ALL {
            for &variant in ButtonVariant::ALL {
                for &round in RoundType::ALL {
                    for enabled in [true, false] {
                        configs.push(
                            ButtonConfig::new("Save")
                                .variant(variant)
                                .size(size)
                                .round_type(round)
                                .enabled(enabled)
                                .into(),
                        );
                    }
                }
            }
            for &variant in InputFieldVariant::ALL {
                for &state in InputState::ALL {
                    configs.push(
                        InputFieldConfig::new()
                            .variant(variant)
                            .size(size)
                            .state(state)
                            .into(),
                    );
                }
            }
            for &variant in BadgeVariant::ALL {
                for badge in [
                    BadgeConfig::new(),
                    BadgeConfig::count(0),
                    BadgeConfig::count(120),
                    BadgeConfig::label("New"),
                ] {
                    configs.push(badge.variant(variant).size(size).into());
                }
            }
            for &variant in CircleIconVariant::ALL {
                for enabled in [true, false] {
                    configs.push(
                        CircleIconButtonConfig::new("plus")
                            .variant(variant)
                            .size(size)
                            .enabled(enabled)
                            .into(),
                    );
                }
            }
        }
        configs
    }

    #[test]
    fn test_resolution_is_pure() {
        let theme = ThemeState::default();
        for config in every_config() {
            let first = resolve_with(&theme, &config);
            let second = resolve_with(&theme, &config.clone());
            assert_eq!(first, second, "{config:?}");
        }
    }

    #[test]
    fn test_resolved_values_stay_in_range() {
        let theme = ThemeState::default();
        for config in every_config() {
            let style = resolve_with(&theme, &config);
            assert!((0.0..=1.0).contains(&style.opacity), "{config:?}");
            assert!(style.border_width >= 0.0);
            assert!(style.corner_radius >= 0.0);
            assert!(style.corner_radius <= style.min_height / 2.0);
        }
    }

    #[test]
    fn test_kind_matches_config() {
        let config: ComponentConfig = BadgeConfig::count(3).into();
        assert_eq!(config.kind(), ComponentKind::Badge);
    }

    #[test]
    fn test_colors_resolve_through_theme() {
        let theme = ThemeState::default();
        let style = resolve_with(&theme, &ButtonConfig::new("Go").enabled(false).into());
        let colors = style.colors(&theme);
        assert_eq!(colors.background, PaletteToken::Light30.color());
        assert!((colors.border.a - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_size_names_parse() {
        assert_eq!("large".parse::<ComponentSize>().unwrap(), ComponentSize::Large);
        assert_eq!(" Small ".parse::<ComponentSize>().unwrap(), ComponentSize::Small);
        let err = "huge".parse::<ComponentSize>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown ComponentSize `huge` (expected one of: small, medium, large)"
        );
    }
}
