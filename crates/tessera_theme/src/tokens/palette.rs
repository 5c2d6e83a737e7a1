//! Palette tokens
//!
//! The palette is the single source of literal color values. Every other
//! part of the kit refers to colors through a [`PaletteToken`], so an unknown
//! color name is a compile error rather than a runtime lookup failure.
//!
//! Ramps run from `10` (lightest) to `90` (darkest).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tessera_core::Color;

use crate::error::ThemeError;

/// Named color in the palette
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteToken {
    // Brand blue ramp
    Blue10,
    Blue20,
    Blue30,
    Blue40,
    Blue50,
    Blue60,
    Blue70,
    Blue80,
    Blue90,
    // Danger / error ramp
    Red10,
    Red20,
    Red30,
    Red40,
    Red50,
    Red60,
    Red70,
    Red80,
    Red90,
    // Success ramp
    Green10,
    Green20,
    Green30,
    Green40,
    Green50,
    Green60,
    Green70,
    Green80,
    Green90,
    // Warning ramp
    Orange10,
    Orange20,
    Orange30,
    Orange40,
    Orange50,
    Orange60,
    Orange70,
    Orange80,
    Orange90,
    // Light neutral ramp (surfaces, dividers, disabled fills)
    Light10,
    Light20,
    Light30,
    Light40,
    Light50,
    Light60,
    Light70,
    Light80,
    Light90,
    // Dark neutral ramp (text, dark surfaces)
    Dark10,
    Dark20,
    Dark30,
    Dark40,
    Dark50,
    Dark60,
    Dark70,
    Dark80,
    Dark90,
    // Absolutes
    White,
    Black,
    /// Fully transparent
    Clear,
}

impl PaletteToken {
    /// Every palette token, ramp by ramp
    pub const ALL: [PaletteToken; 57] = [
        PaletteToken::Blue10,
        PaletteToken::Blue20,
        PaletteToken::Blue30,
        PaletteToken::Blue40,
        PaletteToken::Blue50,
        PaletteToken::Blue60,
        PaletteToken::Blue70,
        PaletteToken::Blue80,
        PaletteToken::Blue90,
        PaletteToken::Red10,
        PaletteToken::Red20,
        PaletteToken::Red30,
        PaletteToken::Red40,
        PaletteToken::Red50,
        PaletteToken::Red60,
        PaletteToken::Red70,
        PaletteToken::Red80,
        PaletteToken::Red90,
        PaletteToken::Green10,
        PaletteToken::Green20,
        PaletteToken::Green30,
        PaletteToken::Green40,
        PaletteToken::Green50,
        PaletteToken::Green60,
        PaletteToken::Green70,
        PaletteToken::Green80,
        PaletteToken::Green90,
        PaletteToken::Orange10,
        PaletteToken::Orange20,
        PaletteToken::Orange30,
        PaletteToken::Orange40,
        PaletteToken::Orange50,
        PaletteToken::Orange60,
        PaletteToken::Orange70,
        PaletteToken::Orange80,
        PaletteToken::Orange90,
        PaletteToken::Light10,
        PaletteToken::Light20,
        PaletteToken::Light30,
        PaletteToken::Light40,
        PaletteToken::Light50,
        PaletteToken::Light60,
        PaletteToken::Light70,
        PaletteToken::Light80,
        PaletteToken::Light90,
        PaletteToken::Dark10,
        PaletteToken::Dark20,
        PaletteToken::Dark30,
        PaletteToken::Dark40,
        PaletteToken::Dark50,
        PaletteToken::Dark60,
        PaletteToken::Dark70,
        PaletteToken::Dark80,
        PaletteToken::Dark90,
        PaletteToken::White,
        PaletteToken::Black,
        PaletteToken::Clear,
    ];

    /// Built-in color value of this token
    pub fn color(self) -> Color {
        match self {
            PaletteToken::Blue10 => Color::from_hex(0xE8F0FE),
            PaletteToken::Blue20 => Color::from_hex(0xC5D9FC),
            PaletteToken::Blue30 => Color::from_hex(0x9DBEF9),
            PaletteToken::Blue40 => Color::from_hex(0x70A0F6),
            PaletteToken::Blue50 => Color::from_hex(0x4A86F3),
            PaletteToken::Blue60 => Color::from_hex(0x2F72EE),
            PaletteToken::Blue70 => Color::from_hex(0x1E5FD9),
            PaletteToken::Blue80 => Color::from_hex(0x174BB0),
            PaletteToken::Blue90 => Color::from_hex(0x103784),
            PaletteToken::Red10 => Color::from_hex(0xFDECEC),
            PaletteToken::Red20 => Color::from_hex(0xF9CFCF),
            PaletteToken::Red30 => Color::from_hex(0xF3A9A9),
            PaletteToken::Red40 => Color::from_hex(0xEC7F7F),
            PaletteToken::Red50 => Color::from_hex(0xE45858),
            PaletteToken::Red60 => Color::from_hex(0xDB3B3B),
            PaletteToken::Red70 => Color::from_hex(0xC72A2A),
            PaletteToken::Red80 => Color::from_hex(0xA01F1F),
            PaletteToken::Red90 => Color::from_hex(0x731515),
            PaletteToken::Green10 => Color::from_hex(0xE9F7EE),
            PaletteToken::Green20 => Color::from_hex(0xC8EBD5),
            PaletteToken::Green30 => Color::from_hex(0x9FDCB6),
            PaletteToken::Green40 => Color::from_hex(0x74CB95),
            PaletteToken::Green50 => Color::from_hex(0x4DB978),
            PaletteToken::Green60 => Color::from_hex(0x34A463),
            PaletteToken::Green70 => Color::from_hex(0x278C52),
            PaletteToken::Green80 => Color::from_hex(0x1E6E40),
            PaletteToken::Green90 => Color::from_hex(0x144D2D),
            PaletteToken::Orange10 => Color::from_hex(0xFFF4E5),
            PaletteToken::Orange20 => Color::from_hex(0xFFE2BF),
            PaletteToken::Orange30 => Color::from_hex(0xFFCD8F),
            PaletteToken::Orange40 => Color::from_hex(0xFFB75E),
            PaletteToken::Orange50 => Color::from_hex(0xFFA133),
            PaletteToken::Orange60 => Color::from_hex(0xF58B12),
            PaletteToken::Orange70 => Color::from_hex(0xDB7609),
            PaletteToken::Orange80 => Color::from_hex(0xAF5C07),
            PaletteToken::Orange90 => Color::from_hex(0x7F4205),
            PaletteToken::Light10 => Color::from_hex(0xFAFAFB),
            PaletteToken::Light20 => Color::from_hex(0xF4F5F7),
            PaletteToken::Light30 => Color::from_hex(0xEBECF0),
            PaletteToken::Light40 => Color::from_hex(0xDFE1E6),
            PaletteToken::Light50 => Color::from_hex(0xC9CCD4),
            PaletteToken::Light60 => Color::from_hex(0xB3B8C2),
            PaletteToken::Light70 => Color::from_hex(0x9AA0AD),
            PaletteToken::Light80 => Color::from_hex(0x838A99),
            PaletteToken::Light90 => Color::from_hex(0x6B7385),
            PaletteToken::Dark10 => Color::from_hex(0x5A6275),
            PaletteToken::Dark20 => Color::from_hex(0x4B5365),
            PaletteToken::Dark30 => Color::from_hex(0x3E4555),
            PaletteToken::Dark40 => Color::from_hex(0x323847),
            PaletteToken::Dark50 => Color::from_hex(0x272C39),
            PaletteToken::Dark60 => Color::from_hex(0x1E222D),
            PaletteToken::Dark70 => Color::from_hex(0x171A23),
            PaletteToken::Dark80 => Color::from_hex(0x11131A),
            PaletteToken::Dark90 => Color::from_hex(0x0B0C11),
            PaletteToken::White => Color::WHITE,
            PaletteToken::Black => Color::BLACK,
            PaletteToken::Clear => Color::TRANSPARENT,
        }
    }

    /// Lowercase token name, as used in config files
    pub fn name(self) -> &'static str {
        match self {
            PaletteToken::Blue10 => "blue10",
            PaletteToken::Blue20 => "blue20",
            PaletteToken::Blue30 => "blue30",
            PaletteToken::Blue40 => "blue40",
            PaletteToken::Blue50 => "blue50",
            PaletteToken::Blue60 => "blue60",
            PaletteToken::Blue70 => "blue70",
            PaletteToken::Blue80 => "blue80",
            PaletteToken::Blue90 => "blue90",
            PaletteToken::Red10 => "red10",
            PaletteToken::Red20 => "red20",
            PaletteToken::Red30 => "red30",
            PaletteToken::Red40 => "red40",
            PaletteToken::Red50 => "red50",
            PaletteToken::Red60 => "red60",
            PaletteToken::Red70 => "red70",
            PaletteToken::Red80 => "red80",
            PaletteToken::Red90 => "red90",
            PaletteToken::Green10 => "green10",
            PaletteToken::Green20 => "green20",
            PaletteToken::Green30 => "green30",
            PaletteToken::Green40 => "green40",
            PaletteToken::Green50 => "green50",
            PaletteToken::Green60 => "green60",
            PaletteToken::Green70 => "green70",
            PaletteToken::Green80 => "green80",
            PaletteToken::Green90 => "green90",
            PaletteToken::Orange10 => "orange10",
            PaletteToken::Orange20 => "orange20",
            PaletteToken::Orange30 => "orange30",
            PaletteToken::Orange40 => "orange40",
            PaletteToken::Orange50 => "orange50",
            PaletteToken::Orange60 => "orange60",
            PaletteToken::Orange70 => "orange70",
            PaletteToken::Orange80 => "orange80",
            PaletteToken::Orange90 => "orange90",
            PaletteToken::Light10 => "light10",
            PaletteToken::Light20 => "light20",
            PaletteToken::Light30 => "light30",
            PaletteToken::Light40 => "light40",
            PaletteToken::Light50 => "light50",
            PaletteToken::Light60 => "light60",
            PaletteToken::Light70 => "light70",
            PaletteToken::Light80 => "light80",
            PaletteToken::Light90 => "light90",
            PaletteToken::Dark10 => "dark10",
            PaletteToken::Dark20 => "dark20",
            PaletteToken::Dark30 => "dark30",
            PaletteToken::Dark40 => "dark40",
            PaletteToken::Dark50 => "dark50",
            PaletteToken::Dark60 => "dark60",
            PaletteToken::Dark70 => "dark70",
            PaletteToken::Dark80 => "dark80",
            PaletteToken::Dark90 => "dark90",
            PaletteToken::White => "white",
            PaletteToken::Black => "black",
            PaletteToken::Clear => "clear",
        }
    }
}

impl fmt::Display for PaletteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaletteToken::ALL
            .iter()
            .copied()
            .find(|token| token.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownToken(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for token in PaletteToken::ALL {
            assert_eq!(token.name().parse::<PaletteToken>().unwrap(), token);
        }
        assert_eq!("Blue70".parse::<PaletteToken>().unwrap(), PaletteToken::Blue70);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(matches!(
            "purple50".parse::<PaletteToken>(),
            Err(ThemeError::UnknownToken(name)) if name == "purple50"
        ));
    }

    #[test]
    fn test_ramps_darken_towards_90() {
        let luma = |c: Color| 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
        for pair in [
            (PaletteToken::Blue10, PaletteToken::Blue90),
            (PaletteToken::Red10, PaletteToken::Red90),
            (PaletteToken::Green10, PaletteToken::Green90),
            (PaletteToken::Orange10, PaletteToken::Orange90),
            (PaletteToken::Light10, PaletteToken::Light90),
            (PaletteToken::Dark10, PaletteToken::Dark90),
        ] {
            assert!(luma(pair.0.color()) > luma(pair.1.color()), "{:?}", pair);
        }
    }

    #[test]
    fn test_clear_is_transparent() {
        assert_eq!(PaletteToken::Clear.color().a, 0.0);
    }
}
