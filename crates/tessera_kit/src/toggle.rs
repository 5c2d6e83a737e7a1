//! Boolean toggle with a change callback
//!
//! Backs the password eye button and checkboxes. Each atom owns its own
//! `ToggleState`; the only mutation is [`ToggleState::toggle`].

use std::sync::Arc;

/// Callback invoked after every flip
pub type ToggleCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
pub struct ToggleState {
    visible: bool,
    on_toggle: Option<ToggleCallback>,
}

impl ToggleState {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            on_toggle: None,
        }
    }

    /// Set the callback run after each flip
    pub fn on_toggle<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_toggle = Some(Arc::new(callback));
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip the value, then notify the callback
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        tracing::trace!("ToggleState::toggle - visible={}", self.visible);
        if let Some(callback) = &self.on_toggle {
            callback();
        }
    }
}

impl std::fmt::Debug for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleState")
            .field("visible", &self.visible)
            .field("has_callback", &self.on_toggle.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_single_flip_changes_value() {
        for initial in [false, true] {
            let mut state = ToggleState::new(initial);
            state.toggle();
            assert_ne!(state.is_visible(), initial);
        }
    }

    #[test]
    fn test_double_flip_restores_value() {
        for initial in [false, true] {
            let mut state = ToggleState::new(initial);
            state.toggle();
            state.toggle();
            assert_eq!(state.is_visible(), initial);
        }
    }

    #[test]
    fn test_callback_runs_once_per_flip() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let mut state = ToggleState::new(false).on_toggle(move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        state.toggle();
        state.toggle();
        state.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(state.is_visible());
    }

    #[test]
    fn test_toggle_without_callback() {
        let mut state = ToggleState::default();
        state.toggle();
        assert!(state.is_visible());
    }
}
