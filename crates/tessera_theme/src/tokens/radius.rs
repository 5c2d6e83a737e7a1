//! Corner radius tokens
//!
//! Only the `rounded` radius is a token. `square` is always zero and `pill`
//! is derived from the component height.

/// Radius token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    /// Radius of `rounded` controls and input fields
    Rounded,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub rounded: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Rounded => self.rounded,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self { rounded: 8.0 }
    }
}
