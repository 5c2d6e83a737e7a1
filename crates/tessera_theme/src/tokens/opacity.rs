//! Opacity tokens for theming

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    /// Whole-component opacity of a disabled control
    Disabled,
    /// Alpha of the gray border drawn around disabled controls
    DisabledBorder,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub disabled: f32,
    pub disabled_border: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Disabled => self.disabled,
            OpacityToken::DisabledBorder => self.disabled_border,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled: 0.6,
            disabled_border: 0.3,
        }
    }
}
