//! Button atom
//!
//! A titled push button with six color variants, three sizes and three
//! corner shapes.
//!
//! # Example
//!
//! ```
//! use tessera_kit::prelude::*;
//!
//! let button = Button::new(
//!     ButtonConfig::new("Delete")
//!         .variant(ButtonVariant::Danger)
//!         .round_type(RoundType::Pill),
//! )
//! .on_pressed(|| println!("deleted"));
//!
//! let style = button.style();
//! assert_eq!(style.corner_radius, 22.0);
//! assert!(button.press());
//! ```

use serde::Serialize;
use std::sync::Arc;
use tessera_theme::{EdgeInsets, FontWeight, PaletteToken, ThemeState};

use crate::style::{
    border_width, opacity_for, resolve, rounded_radius, ComponentSize, ResolvedStyle, SizeMetrics,
    VariantPaint,
};

/// Button color variants
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled brand blue
    #[default]
    Primary,
    /// Tinted blue
    Secondary,
    /// Transparent with a blue border
    Outline,
    /// Filled red with a matching border
    Danger,
    /// Filled green with a matching border
    Success,
    /// Filled orange with a matching border
    Warning,
}

named_enum!(ButtonVariant {
    Primary => "primary",
    Secondary => "secondary",
    Outline => "outline",
    Danger => "danger",
    Success => "success",
    Warning => "warning",
});

impl ButtonVariant {
    fn paint(self) -> VariantPaint {
        use PaletteToken::*;
        match self {
            ButtonVariant::Primary => VariantPaint::new(Blue70, White, Clear),
            ButtonVariant::Secondary => VariantPaint::new(Blue10, Blue70, Clear),
            ButtonVariant::Outline => VariantPaint::new(Clear, Blue70, Blue70),
            ButtonVariant::Danger => VariantPaint::new(Red70, White, Red70),
            ButtonVariant::Success => VariantPaint::new(Green70, White, Green70),
            ButtonVariant::Warning => VariantPaint::new(Orange70, White, Orange70),
        }
    }

    /// Whether this variant draws a border
    pub fn is_outlined(self) -> bool {
        matches!(
            self,
            ButtonVariant::Outline
                | ButtonVariant::Danger
                | ButtonVariant::Success
                | ButtonVariant::Warning
        )
    }
}

/// Corner shapes
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    /// Fixed theme radius
    #[default]
    Rounded,
    /// Half the button height
    Pill,
    /// No rounding
    Square,
}

named_enum!(RoundType {
    Rounded => "rounded",
    Pill => "pill",
    Square => "square",
});

/// Declared configuration of a button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonConfig {
    pub title: String,
    pub variant: ButtonVariant,
    pub size: ComponentSize,
    pub round_type: RoundType,
    pub enabled: bool,
    pub loading: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl ButtonConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            size: ComponentSize::default(),
            round_type: RoundType::default(),
            enabled: true,
            loading: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn round_type(mut self, round_type: RoundType) -> Self {
        self.round_type = round_type;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Label announced to assistive technology
    pub fn accessibility_label(&self) -> String {
        if self.loading {
            format!("{} - Loading", self.title)
        } else {
            self.title.clone()
        }
    }
}

fn metrics(size: ComponentSize) -> SizeMetrics {
    match size {
        ComponentSize::Small => SizeMetrics {
            min_height: 36.0,
            font_size: 14.0,
            font_weight: FontWeight::Medium,
            padding: EdgeInsets::symmetric(8.0, 12.0),
        },
        ComponentSize::Medium => SizeMetrics {
            min_height: 44.0,
            font_size: 16.0,
            font_weight: FontWeight::Semibold,
            padding: EdgeInsets::symmetric(12.0, 16.0),
        },
        ComponentSize::Large => SizeMetrics {
            min_height: 52.0,
            font_size: 18.0,
            font_weight: FontWeight::Semibold,
            padding: EdgeInsets::symmetric(16.0, 20.0),
        },
    }
}

pub(crate) fn resolve_button(theme: &ThemeState, config: &ButtonConfig) -> ResolvedStyle {
    let metrics = metrics(config.size);
    let paint = config.variant.paint().or_disabled(theme, config.enabled);

    let corner_radius = match config.round_type {
        RoundType::Rounded => rounded_radius(theme),
        RoundType::Pill => metrics.min_height / 2.0,
        RoundType::Square => 0.0,
    };

    ResolvedStyle {
        background: paint.background,
        foreground: paint.foreground,
        border_color: paint.border,
        border_width: border_width(config.variant.is_outlined()),
        corner_radius,
        min_height: metrics.min_height,
        font_size: metrics.font_size,
        font_weight: metrics.font_weight,
        padding: metrics.padding,
        opacity: opacity_for(theme, config.enabled),
    }
}

/// Press handler of a button
pub type PressHandler = Arc<dyn Fn() + Send + Sync>;

/// Interactive button: a configuration plus an optional press handler
///
/// A button without a handler is rendered and behaves as disabled.
#[derive(Clone)]
pub struct Button {
    config: ButtonConfig,
    on_pressed: Option<PressHandler>,
}

impl Button {
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            on_pressed: None,
        }
    }

    /// Set the press handler
    pub fn on_pressed<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_pressed = Some(Arc::new(handler));
        self
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Enabled by config and wired to a handler
    pub fn is_enabled(&self) -> bool {
        self.config.enabled && self.on_pressed.is_some()
    }

    /// Whether a press would reach the handler
    pub fn is_interactive(&self) -> bool {
        self.is_enabled() && !self.config.loading
    }

    /// Configuration as the renderer sees it, with the handler rule applied
    pub fn effective_config(&self) -> ButtonConfig {
        self.config.clone().enabled(self.is_enabled())
    }

    /// Resolve the style against the global theme
    pub fn style(&self) -> ResolvedStyle {
        resolve(&self.effective_config().into())
    }

    /// Invoke the handler if the button is interactive; returns whether it ran
    pub fn press(&self) -> bool {
        match &self.on_pressed {
            Some(handler) if self.is_interactive() => {
                handler();
                true
            }
            _ => {
                tracing::trace!("press ignored on `{}`", self.config.title);
                false
            }
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("config", &self.config)
            .field("has_handler", &self.on_pressed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DISABLED_BACKGROUND, DISABLED_FOREGROUND};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tessera_theme::ColorRef;

    fn style(config: ButtonConfig) -> ResolvedStyle {
        resolve_button(&ThemeState::default(), &config)
    }

    #[test]
    fn test_danger_medium_pill() {
        let s = style(
            ButtonConfig::new("Delete")
                .variant(ButtonVariant::Danger)
                .size(ComponentSize::Medium)
                .round_type(RoundType::Pill),
        );
        assert_eq!(s.background, ColorRef::solid(PaletteToken::Red70));
        assert_eq!(s.border_color, ColorRef::solid(PaletteToken::Red70));
        assert_eq!(s.border_width, 1.5);
        assert_eq!(s.corner_radius, 22.0);
        assert_eq!(s.opacity, 1.0);
    }

    #[test]
    fn test_pill_radius_tracks_size() {
        for (size, radius) in [
            (ComponentSize::Small, 18.0),
            (ComponentSize::Medium, 22.0),
            (ComponentSize::Large, 26.0),
        ] {
            let s = style(ButtonConfig::new("x").size(size).round_type(RoundType::Pill));
            assert_eq!(s.corner_radius, radius, "{size}");
        }
    }

    #[test]
    fn test_rounded_and_square_ignore_size() {
        for &size in ComponentSize::ALL {
            let rounded = style(ButtonConfig::new("x").size(size));
            let square = style(ButtonConfig::new("x").size(size).round_type(RoundType::Square));
            assert_eq!(rounded.corner_radius, 8.0);
            assert_eq!(square.corner_radius, 0.0);
        }
    }

    #[test]
    fn test_disabled_wins_over_every_variant() {
        for &variant in ButtonVariant::ALL {
            let s = style(ButtonConfig::new("x").variant(variant).enabled(false));
            assert_eq!(s.opacity, 0.6, "{variant}");
            assert_eq!(s.background, DISABLED_BACKGROUND, "{variant}");
            assert_eq!(s.foreground, DISABLED_FOREGROUND, "{variant}");
            assert_eq!(s.border_color.token, PaletteToken::Light60);
            assert!(s.border_color.alpha < 1.0);
        }
    }

    #[test]
    fn test_border_only_on_outline_family() {
        let widths: Vec<(ButtonVariant, f32)> = ButtonVariant::ALL
            .iter()
            .map(|&v| (v, style(ButtonConfig::new("x").variant(v)).border_width))
            .collect();
        assert_eq!(
            widths,
            vec![
                (ButtonVariant::Primary, 0.0),
                (ButtonVariant::Secondary, 0.0),
                (ButtonVariant::Outline, 1.5),
                (ButtonVariant::Danger, 1.5),
                (ButtonVariant::Success, 1.5),
                (ButtonVariant::Warning, 1.5),
            ]
        );
    }

    #[test]
    fn test_typography_couples_size_and_weight() {
        let small = style(ButtonConfig::new("x").size(ComponentSize::Small));
        let medium = style(ButtonConfig::new("x").size(ComponentSize::Medium));
        let large = style(ButtonConfig::new("x").size(ComponentSize::Large));

        assert_eq!((small.font_size, small.font_weight), (14.0, FontWeight::Medium));
        assert_eq!((medium.font_size, medium.font_weight), (16.0, FontWeight::Semibold));
        assert_eq!((large.font_size, large.font_weight), (18.0, FontWeight::Semibold));
    }

    #[test]
    fn test_padding_ignores_variant() {
        let base = style(ButtonConfig::new("x")).padding;
        for &variant in ButtonVariant::ALL {
            assert_eq!(style(ButtonConfig::new("x").variant(variant)).padding, base);
        }
    }

    #[test]
    fn test_accessibility_label() {
        let config = ButtonConfig::new("Submit");
        assert_eq!(config.accessibility_label(), "Submit");
        assert_eq!(config.loading(true).accessibility_label(), "Submit - Loading");
    }

    #[test]
    fn test_missing_handler_disables_button() {
        let button = Button::new(ButtonConfig::new("Orphan"));
        assert!(!button.is_enabled());
        assert!(!button.press());
        assert_eq!(button.style().opacity, 0.6);
        assert!(!button.effective_config().enabled);
    }

    #[test]
    fn test_press_runs_handler_only_when_interactive() {
        let presses = Arc::new(AtomicUsize::new(0));

        let counter = presses.clone();
        let button = Button::new(ButtonConfig::new("Go")).on_pressed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(button.press());
        assert_eq!(presses.load(Ordering::SeqCst), 1);

        let counter = presses.clone();
        let loading = Button::new(ButtonConfig::new("Go").loading(true)).on_pressed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(loading.is_enabled());
        assert!(!loading.press());
        // Loading keeps full opacity; only disabling dims the button
        assert_eq!(loading.style().opacity, 1.0);

        let counter = presses.clone();
        let disabled = Button::new(ButtonConfig::new("Go").enabled(false)).on_pressed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(!disabled.press());
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }
}
