//! Badge atom
//!
//! A small pill carrying a count or a short label. A badge without content
//! is not shown at all, which is distinct from a badge showing `0`.

use serde::Serialize;
use tessera_theme::{EdgeInsets, FontWeight, PaletteToken};

use crate::count::format_count;
use crate::style::{border_width, ComponentSize, ResolvedStyle, SizeMetrics, VariantPaint};

/// Badge color variants
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Outline,
}

named_enum!(BadgeVariant {
    Primary => "primary",
    Secondary => "secondary",
    Success => "success",
    Warning => "warning",
    Danger => "danger",
    Outline => "outline",
});

impl BadgeVariant {
    fn paint(self) -> VariantPaint {
        use PaletteToken::*;
        match self {
            BadgeVariant::Primary => VariantPaint::new(Blue70, White, Clear),
            BadgeVariant::Secondary => VariantPaint::new(Light30, Dark60, Clear),
            BadgeVariant::Success => VariantPaint::new(Green70, White, Clear),
            BadgeVariant::Warning => VariantPaint::new(Orange70, White, Clear),
            BadgeVariant::Danger => VariantPaint::new(Red70, White, Clear),
            BadgeVariant::Outline => VariantPaint::new(Clear, Blue70, Blue70),
        }
    }
}

/// What a badge displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeContent {
    Count(i64),
    Label(String),
}

/// Declared configuration of a badge
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadgeConfig {
    pub variant: BadgeVariant,
    pub size: ComponentSize,
    pub content: Option<BadgeContent>,
}

impl BadgeConfig {
    /// Badge with no content (hidden)
    pub fn new() -> Self {
        Self::default()
    }

    /// Badge showing a count
    pub fn count(count: i64) -> Self {
        Self {
            content: Some(BadgeContent::Count(count)),
            ..Self::default()
        }
    }

    /// Badge showing a short label
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            content: Some(BadgeContent::Label(label.into())),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    /// Display text; `None` when the badge is hidden
    pub fn text(&self) -> Option<String> {
        match &self.content {
            Some(BadgeContent::Count(count)) => Some(format_count(*count)),
            Some(BadgeContent::Label(label)) => Some(label.clone()),
            None => None,
        }
    }
}

fn metrics(size: ComponentSize) -> SizeMetrics {
    match size {
        ComponentSize::Small => SizeMetrics {
            min_height: 16.0,
            font_size: 10.0,
            font_weight: FontWeight::Semibold,
            padding: EdgeInsets::symmetric(2.0, 6.0),
        },
        ComponentSize::Medium => SizeMetrics {
            min_height: 20.0,
            font_size: 12.0,
            font_weight: FontWeight::Semibold,
            padding: EdgeInsets::symmetric(3.0, 8.0),
        },
        ComponentSize::Large => SizeMetrics {
            min_height: 24.0,
            font_size: 14.0,
            font_weight: FontWeight::Semibold,
            padding: EdgeInsets::symmetric(4.0, 10.0),
        },
    }
}

pub(crate) fn resolve_badge(config: &BadgeConfig) -> ResolvedStyle {
    let metrics = metrics(config.size);
    let paint = config.variant.paint();

    ResolvedStyle {
        background: paint.background,
        foreground: paint.foreground,
        border_color: paint.border,
        border_width: border_width(config.variant == BadgeVariant::Outline),
        corner_radius: metrics.min_height / 2.0,
        min_height: metrics.min_height,
        font_size: metrics.font_size,
        font_weight: metrics.font_weight,
        padding: metrics.padding,
        opacity: 1.0,
    }
}
