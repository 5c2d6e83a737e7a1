//! Text atoms
//!
//! Unlike buttons, text roles pick size and weight independently.

use serde::Serialize;
use tessera_theme::{ColorRef, FontWeight, PaletteToken};

/// Typographic roles of text atoms
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Title,
    Headline,
    #[default]
    Body,
    Caption,
    Label,
}

named_enum!(TextRole {
    Title => "title",
    Headline => "headline",
    Body => "body",
    Caption => "caption",
    Label => "label",
});

/// Resolved typography of a text atom
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: ColorRef,
}

impl TextRole {
    pub fn style(self) -> TextStyle {
        let (font_size, font_weight, color) = match self {
            TextRole::Title => (24.0, FontWeight::Bold, PaletteToken::Dark90),
            TextRole::Headline => (18.0, FontWeight::Semibold, PaletteToken::Dark90),
            TextRole::Body => (16.0, FontWeight::Regular, PaletteToken::Dark80),
            TextRole::Caption => (12.0, FontWeight::Regular, PaletteToken::Light90),
            TextRole::Label => (14.0, FontWeight::Medium, PaletteToken::Dark70),
        };
        TextStyle {
            font_size,
            font_weight,
            color: ColorRef::solid(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_descend_in_size() {
        let sizes: Vec<f32> = [
            TextRole::Title,
            TextRole::Headline,
            TextRole::Body,
            TextRole::Caption,
        ]
        .iter()
        .map(|role| role.style().font_size)
        .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] > pair[1]), "{sizes:?}");
    }

    #[test]
    fn test_label_weight_is_not_tied_to_size() {
        let label = TextRole::Label.style();
        let body = TextRole::Body.style();
        assert!(label.font_size < body.font_size);
        assert!(label.font_weight > body.font_weight);
    }
}
