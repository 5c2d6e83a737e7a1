//! Insets

use serde::Serialize;

/// Four-sided inset, in points
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::all(0.0);

    /// Same inset on every side
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    /// `vertical` on top and bottom, `horizontal` on leading and trailing
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            leading: horizontal,
            bottom: vertical,
            trailing: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
