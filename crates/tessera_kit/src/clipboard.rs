//! Copy-to-clipboard with timed confirmation
//!
//! The kit never talks to the OS clipboard itself: hosts inject a
//! [`Clipboard`] implementation and the kit only calls
//! [`Clipboard::set_text`]. Write failures are the host's concern.

use std::sync::{Arc, Mutex};
use tessera_core::Scheduler;

use crate::feedback::TimedFeedback;

/// Host clipboard capability
pub trait Clipboard {
    fn set_text(&self, text: &str);
}

impl<C: Clipboard + ?Sized> Clipboard for Arc<C> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text);
    }
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    fn set_text(&self, text: &str) {
        (**self).set_text(text);
    }
}

/// In-process clipboard, for tests and headless hosts
///
/// Clones share the same contents.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub fn text(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) {
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
    }
}

/// A copy action paired with its "Copied!" confirmation
pub struct CopyFeedback<C: Clipboard, S: Scheduler> {
    clipboard: C,
    feedback: TimedFeedback<S>,
}

impl<C: Clipboard, S: Scheduler> CopyFeedback<C, S> {
    pub fn new(clipboard: C, feedback: TimedFeedback<S>) -> Self {
        Self {
            clipboard,
            feedback,
        }
    }

    /// Write `text` to the clipboard and show the confirmation
    pub fn copy(&mut self, text: &str) {
        tracing::debug!("CopyFeedback: copying {} byte(s)", text.len());
        self.clipboard.set_text(text);
        self.feedback.trigger();
    }

    pub fn is_showing(&self) -> bool {
        self.feedback.is_showing()
    }

    pub fn feedback(&self) -> &TimedFeedback<S> {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut TimedFeedback<S> {
        &mut self.feedback
    }
}
