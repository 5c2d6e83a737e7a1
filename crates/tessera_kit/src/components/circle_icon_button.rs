//! Circular icon button atom

use serde::Serialize;
use tessera_theme::{EdgeInsets, FontWeight, PaletteToken, ThemeState};

use crate::style::{border_width, opacity_for, ComponentSize, ResolvedStyle, VariantPaint};

/// Circle icon button variants
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleIconVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

named_enum!(CircleIconVariant {
    Primary => "primary",
    Secondary => "secondary",
    Outline => "outline",
});

impl CircleIconVariant {
    fn paint(self) -> VariantPaint {
        use PaletteToken::*;
        match self {
            CircleIconVariant::Primary => VariantPaint::new(Blue70, White, Clear),
            CircleIconVariant::Secondary => VariantPaint::new(Light20, Dark80, Clear),
            CircleIconVariant::Outline => VariantPaint::new(Clear, Blue70, Blue70),
        }
    }
}

/// Declared configuration of a circle icon button
#[derive(Clone, Debug, PartialEq)]
pub struct CircleIconButtonConfig {
    /// Symbol name of the glyph
    pub icon: String,
    pub variant: CircleIconVariant,
    pub size: ComponentSize,
    pub enabled: bool,
}

impl CircleIconButtonConfig {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            variant: CircleIconVariant::default(),
            size: ComponentSize::default(),
            enabled: true,
        }
    }

    pub fn variant(mut self, variant: CircleIconVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Diameter and glyph size
fn dimensions(size: ComponentSize) -> (f32, f32) {
    match size {
        ComponentSize::Small => (32.0, 14.0),
        ComponentSize::Medium => (40.0, 18.0),
        ComponentSize::Large => (48.0, 22.0),
    }
}

pub(crate) fn resolve_circle_icon_button(
    theme: &ThemeState,
    config: &CircleIconButtonConfig,
) -> ResolvedStyle {
    let (diameter, glyph) = dimensions(config.size);
    let paint = config.variant.paint().or_disabled(theme, config.enabled);

    ResolvedStyle {
        background: paint.background,
        foreground: paint.foreground,
        border_color: paint.border,
        border_width: border_width(config.variant == CircleIconVariant::Outline),
        corner_radius: diameter / 2.0,
        min_height: diameter,
        font_size: glyph,
        font_weight: FontWeight::Regular,
        padding: EdgeInsets::all((diameter - glyph) / 2.0),
        opacity: opacity_for(theme, config.enabled),
    }
}
