//! Input field molecule
//!
//! A text field whose border and helper message follow its validation
//! state. The variant only chooses the fill and whether a border is drawn.

use serde::Serialize;
use tessera_theme::{ColorRef, EdgeInsets, FontWeight, PaletteToken, ThemeState};

use crate::style::{
    border_width, opacity_for, rounded_radius, ComponentSize, ResolvedStyle, SizeMetrics,
    VariantPaint,
};

/// Input field fill variants
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFieldVariant {
    #[default]
    Default,
    Outline,
    Filled,
}

named_enum!(InputFieldVariant {
    Default => "default",
    Outline => "outline",
    Filled => "filled",
});

/// Validation state of an input field
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputState {
    /// Untouched or neutral
    #[default]
    Default,
    Error,
    Warning,
    Success,
    Disabled,
}

named_enum!(InputState {
    Default => "default",
    Error => "error",
    Warning => "warning",
    Success => "success",
    Disabled => "disabled",
});

impl InputState {
    pub fn is_enabled(self) -> bool {
        self != InputState::Disabled
    }

    /// Accent color of a validation state
    pub fn accent(self) -> Option<PaletteToken> {
        match self {
            InputState::Error => Some(PaletteToken::Red70),
            InputState::Warning => Some(PaletteToken::Orange70),
            InputState::Success => Some(PaletteToken::Green70),
            InputState::Default | InputState::Disabled => None,
        }
    }

    /// Helper text shown under the field when no custom message is set
    pub fn default_message(self) -> Option<&'static str> {
        match self {
            InputState::Error => Some("Please check this field"),
            InputState::Warning => Some("Please double-check this field"),
            InputState::Success => Some("Looks good!"),
            InputState::Default | InputState::Disabled => None,
        }
    }
}

/// Declared configuration of an input field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputFieldConfig {
    pub variant: InputFieldVariant,
    pub size: ComponentSize,
    pub state: InputState,
    /// Replaces the state's default helper text
    pub message: Option<String>,
}

impl InputFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: InputFieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn state(mut self, state: InputState) -> Self {
        self.state = state;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Helper text for the current state; none for default and disabled
    pub fn message_text(&self) -> Option<&str> {
        let fallback = self.state.default_message()?;
        Some(self.message.as_deref().unwrap_or(fallback))
    }

    /// Color of the helper text
    pub fn message_color(&self) -> Option<ColorRef> {
        self.state.accent().map(ColorRef::solid)
    }
}

fn metrics(size: ComponentSize) -> SizeMetrics {
    match size {
        ComponentSize::Small => SizeMetrics {
            min_height: 36.0,
            font_size: 13.0,
            font_weight: FontWeight::Regular,
            padding: EdgeInsets::symmetric(8.0, 12.0),
        },
        ComponentSize::Medium => SizeMetrics {
            min_height: 44.0,
            font_size: 14.0,
            font_weight: FontWeight::Regular,
            padding: EdgeInsets::symmetric(12.0, 14.0),
        },
        ComponentSize::Large => SizeMetrics {
            min_height: 52.0,
            font_size: 16.0,
            font_weight: FontWeight::Regular,
            padding: EdgeInsets::symmetric(14.0, 16.0),
        },
    }
}

pub(crate) fn resolve_input_field(theme: &ThemeState, config: &InputFieldConfig) -> ResolvedStyle {
    let metrics = metrics(config.size);
    let enabled = config.state.is_enabled();

    let background = match config.variant {
        InputFieldVariant::Default => PaletteToken::Light10,
        InputFieldVariant::Outline => PaletteToken::Clear,
        InputFieldVariant::Filled => PaletteToken::Light20,
    };
    let border = config.state.accent().unwrap_or(PaletteToken::Light40);
    let paint =
        VariantPaint::new(background, PaletteToken::Dark90, border).or_disabled(theme, enabled);

    ResolvedStyle {
        background: paint.background,
        foreground: paint.foreground,
        border_color: paint.border,
        border_width: border_width(config.variant == InputFieldVariant::Outline),
        corner_radius: rounded_radius(theme),
        min_height: metrics.min_height,
        font_size: metrics.font_size,
        font_weight: metrics.font_weight,
        padding: metrics.padding,
        opacity: opacity_for(theme, enabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DISABLED_BACKGROUND;

    fn style(config: InputFieldConfig) -> ResolvedStyle {
        resolve_input_field(&ThemeState::default(), &config)
    }

    #[test]
    fn test_error_state_end_to_end() {
        let config = InputFieldConfig::new().state(InputState::Error);
        let s = style(config.clone());
        assert_eq!(s.border_color, ColorRef::solid(PaletteToken::Red70));
        assert_eq!(config.message_text(), Some("Please check this field"));
        assert_eq!(config.message_color(), Some(ColorRef::solid(PaletteToken::Red70)));
    }

    #[test]
    fn test_message_presence_by_state() {
        for &state in InputState::ALL {
            let config = InputFieldConfig::new().state(state);
            let has_message = config.message_text().is_some_and(|m| !m.is_empty());
            let expected = matches!(
                state,
                InputState::Error | InputState::Warning | InputState::Success
            );
            assert_eq!(has_message, expected, "{state}");
        }
    }

    #[test]
    fn test_custom_message_only_replaces_state_text() {
        let config = InputFieldConfig::new()
            .state(InputState::Warning)
            .message("Password is weak");
        assert_eq!(config.message_text(), Some("Password is weak"));

        let neutral = InputFieldConfig::new().message("ignored");
        assert_eq!(neutral.message_text(), None);
    }

    #[test]
    fn test_state_colors_the_border() {
        let border = |state| style(InputFieldConfig::new().state(state)).border_color.token;
        assert_eq!(border(InputState::Default), PaletteToken::Light40);
        assert_eq!(border(InputState::Warning), PaletteToken::Orange70);
        assert_eq!(border(InputState::Success), PaletteToken::Green70);
    }

    #[test]
    fn test_disabled_state_dims_field() {
        for &variant in InputFieldVariant::ALL {
            let s = style(
                InputFieldConfig::new()
                    .variant(variant)
                    .state(InputState::Disabled),
            );
            assert_eq!(s.opacity, 0.6);
            assert_eq!(s.background, DISABLED_BACKGROUND);
        }
    }

    #[test]
    fn test_only_outline_variant_has_border_width() {
        assert_eq!(style(InputFieldConfig::new()).border_width, 0.0);
        assert_eq!(
            style(InputFieldConfig::new().variant(InputFieldVariant::Filled)).border_width,
            0.0
        );
        assert_eq!(
            style(InputFieldConfig::new().variant(InputFieldVariant::Outline)).border_width,
            1.5
        );
    }

    #[test]
    fn test_typography_has_no_weight_coupling() {
        for &size in ComponentSize::ALL {
            let s = style(InputFieldConfig::new().size(size));
            assert_eq!(s.font_weight, FontWeight::Regular);
            assert_eq!(s.corner_radius, 8.0);
        }
    }
}
