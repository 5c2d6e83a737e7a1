//! Live e-mail validation

use regex::Regex;
use std::sync::OnceLock;

use crate::components::input_field::InputState;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Whether `text` looks like an e-mail address
///
/// The empty string is simply invalid here; callers that want an untouched
/// state for empty input use [`email_field_state`].
pub fn is_valid_email(text: &str) -> bool {
    email_regex().is_match(text)
}

/// Visual state of an e-mail field as the user types
pub fn email_field_state(text: &str) -> InputState {
    if text.is_empty() {
        InputState::Default
    } else if is_valid_email(text) {
        InputState::Success
    } else {
        InputState::Error
    }
}
