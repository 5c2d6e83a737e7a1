//! Tessera Component Kit
//!
//! The logic layer of the Tessera design system: everything a renderer needs
//! to draw the kit's atoms, molecules and organisms, without the drawing.
//!
//! - **Variant resolution**: [`resolve`] maps a [`ComponentConfig`] (button,
//!   input field, badge, circle icon button) to a [`ResolvedStyle`]
//! - **Interactive state**: [`ToggleState`] for eye buttons and checkboxes,
//!   [`TimedFeedback`] for "Copied!" confirmations, [`LoginForm`]
//! - **Formatting and validation**: [`format_count`] for badges,
//!   [`is_valid_email`] for live form validation
//!
//! # Example
//!
//! ```
//! use tessera_kit::prelude::*;
//!
//! let style = resolve(
//!     &ButtonConfig::new("Delete")
//!         .variant(ButtonVariant::Danger)
//!         .round_type(RoundType::Pill)
//!         .into(),
//! );
//! assert_eq!(style.border_width, 1.5);
//! assert_eq!(style.corner_radius, 22.0);
//!
//! assert_eq!(format_count(120), "99+");
//! assert!(is_valid_email("a@b.com"));
//! ```

#[macro_use]
mod macros;

pub mod clipboard;
pub mod components;
pub mod count;
pub mod email;
pub mod error;
pub mod feedback;
pub mod login;
pub mod style;
pub mod toggle;

pub use clipboard::{Clipboard, CopyFeedback, MemoryClipboard};
pub use components::badge::{BadgeConfig, BadgeContent, BadgeVariant};
pub use components::button::{Button, ButtonConfig, ButtonVariant, PressHandler, RoundType};
pub use components::circle_icon_button::{CircleIconButtonConfig, CircleIconVariant};
pub use components::input_field::{InputFieldConfig, InputFieldVariant, InputState};
pub use components::text::{TextRole, TextStyle};
pub use count::{format_count, COUNT_CAP};
pub use email::{email_field_state, is_valid_email};
pub use error::ParseError;
pub use feedback::{FeedbackPhase, TimedFeedback, DEFAULT_FEEDBACK_DURATION};
pub use login::LoginForm;
pub use style::{
    disabled_border, resolve, resolve_with, ComponentConfig, ComponentKind, ComponentSize,
    ResolvedColors, ResolvedStyle, DISABLED_BACKGROUND, DISABLED_FOREGROUND,
    OUTLINE_BORDER_WIDTH,
};
pub use toggle::ToggleState;

/// Convenience imports for hosts rendering the kit
pub mod prelude {
    pub use crate::{
        email_field_state, format_count, is_valid_email, resolve, resolve_with, BadgeConfig,
        BadgeContent, BadgeVariant, Button, ButtonConfig, ButtonVariant, CircleIconButtonConfig,
        CircleIconVariant, Clipboard, ComponentConfig, ComponentKind, ComponentSize,
        CopyFeedback, FeedbackPhase, InputFieldConfig, InputFieldVariant, InputState, LoginForm,
        MemoryClipboard, ResolvedStyle, RoundType, TextRole, TextStyle, TimedFeedback,
        ToggleState,
    };
    pub use tessera_core::{ManualScheduler, Scheduler};
    pub use tessera_theme::{ColorRef, FontWeight, PaletteToken, ThemeState};
}
