//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Palette colors and alpha-adjusted color references
//! - Opacity
//! - Border radii
//! - Insets
//! - Font weights

mod color;
mod opacity;
mod palette;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use opacity::*;
pub use palette::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
