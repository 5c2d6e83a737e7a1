//! Login form organism state
//!
//! Holds the text the user typed and derives the visual state of the form
//! from it: the e-mail field's validation state, the password eye toggle and
//! whether the submit button is enabled.

use crate::components::button::ButtonConfig;
use crate::components::input_field::{InputFieldConfig, InputFieldVariant, InputState};
use crate::email::{email_field_state, is_valid_email};
use crate::toggle::ToggleState;

#[derive(Debug, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    password_visibility: ToggleState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Validation state of the e-mail field
    pub fn email_state(&self) -> InputState {
        email_field_state(&self.email)
    }

    /// E-mail field configuration for the renderer
    pub fn email_field(&self) -> InputFieldConfig {
        InputFieldConfig::new()
            .variant(InputFieldVariant::Outline)
            .state(self.email_state())
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visibility.is_visible()
    }

    /// Eye button: show or hide the password
    pub fn toggle_password_visibility(&mut self) {
        self.password_visibility.toggle();
    }

    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.email) && !self.password.is_empty()
    }

    /// Submit button configuration for the renderer
    pub fn submit_button(&self) -> ButtonConfig {
        ButtonConfig::new("Sign In").enabled(self.can_submit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_is_untouched() {
        let form = LoginForm::new();
        assert_eq!(form.email_state(), InputState::Default);
        assert_eq!(form.email_field().message_text(), None);
        assert!(!form.can_submit());
        assert!(!form.submit_button().enabled);
        assert!(!form.is_password_visible());
    }

    #[test]
    fn test_typing_updates_field_state() {
        let mut form = LoginForm::new();

        form.set_email("jane@");
        assert_eq!(form.email_state(), InputState::Error);
        assert_eq!(form.email_field().message_text(), Some("Please check this field"));

        form.set_email("jane@example.com");
        assert_eq!(form.email_state(), InputState::Success);
    }

    #[test]
    fn test_submit_requires_valid_email_and_password() {
        let mut form = LoginForm::new();
        form.set_email("jane@example.com");
        assert!(!form.can_submit());

        form.set_password("hunter2");
        assert!(form.can_submit());
        assert!(form.submit_button().enabled);

        form.set_email("jane");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_eye_toggle() {
        let mut form = LoginForm::new();
        form.toggle_password_visibility();
        assert!(form.is_password_visible());
        form.toggle_password_visibility();
        assert!(!form.is_password_visible());
    }
}
