//! Timed confirmation feedback
//!
//! Shows a confirmation (for example "Copied!") for a fixed duration after a
//! trigger, then hides it automatically.
//!
//! ```text
//!            trigger                 trigger (timer restarts)
//!   Hidden ──────────▶ Showing ◀──────────────┐
//!      ▲                  │ └─────────────────┘
//!      └──────────────────┘
//!        expire / dismiss
//! ```
//!
//! At most one expiration is pending per instance. Re-triggering while
//! showing cancels the pending expiration and schedules a fresh one for the
//! full duration. Dropping the owner cancels whatever is pending.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tessera_core::{Scheduler, TimerHandle};

/// How long the confirmation stays visible by default
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Visibility phase
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPhase {
    #[default]
    Hidden,
    Showing,
}

/// Callback invoked when the confirmation hides on its own
pub type ExpireCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Default)]
struct FeedbackInner {
    phase: FeedbackPhase,
    /// Bumped on every trigger and dismiss; a timer only expires its own generation
    generation: u64,
    expires_at: Option<Duration>,
}

/// Trigger → show → auto-hide state machine
pub struct TimedFeedback<S: Scheduler> {
    inner: Arc<Mutex<FeedbackInner>>,
    scheduler: S,
    duration: Duration,
    pending: Option<TimerHandle>,
    on_expire: Option<ExpireCallback>,
}

impl<S: Scheduler> TimedFeedback<S> {
    /// Create a hidden feedback with the default duration
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FeedbackInner::default())),
            scheduler,
            duration: DEFAULT_FEEDBACK_DURATION,
            pending: None,
            on_expire: None,
        }
    }

    /// Set how long the confirmation stays visible
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the callback run when the confirmation hides on its own
    pub fn on_expire<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_expire = Some(Arc::new(callback));
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn phase(&self) -> FeedbackPhase {
        lock(&self.inner).phase
    }

    pub fn is_showing(&self) -> bool {
        self.phase() == FeedbackPhase::Showing
    }

    /// Scheduler time at which the confirmation will hide, while showing
    pub fn expires_at(&self) -> Option<Duration> {
        lock(&self.inner).expires_at
    }

    /// Show the confirmation and (re)start the hide timer
    pub fn trigger(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        let expires_at = self.scheduler.elapsed().saturating_add(self.duration);
        let generation = {
            let mut inner = lock(&self.inner);
            inner.generation += 1;
            inner.phase = FeedbackPhase::Showing;
            inner.expires_at = Some(expires_at);
            inner.generation
        };
        tracing::debug!("TimedFeedback: showing until {:?}", expires_at);

        let weak = Arc::downgrade(&self.inner);
        let on_expire = self.on_expire.clone();
        let handle = self.scheduler.schedule(
            self.duration,
            Box::new(move || expire(&weak, generation, on_expire)),
        );
        self.pending = Some(handle);
    }

    /// Hide immediately and cancel the pending expiration
    pub fn dismiss(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }

        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.phase = FeedbackPhase::Hidden;
        inner.expires_at = None;
        tracing::debug!("TimedFeedback: dismissed");
    }
}

impl<S: Scheduler> std::fmt::Debug for TimedFeedback<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedFeedback")
            .field("inner", &*lock(&self.inner))
            .field("duration", &self.duration)
            .finish()
    }
}

fn expire(inner: &Weak<Mutex<FeedbackInner>>, generation: u64, on_expire: Option<ExpireCallback>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    {
        let mut state = lock(&inner);
        if state.generation != generation || state.phase != FeedbackPhase::Showing {
            tracing::trace!("TimedFeedback: stale expiration ignored");
            return;
        }
        state.phase = FeedbackPhase::Hidden;
        state.expires_at = None;
    }
    tracing::debug!("TimedFeedback: expired");

    if let Some(callback) = on_expire {
        callback();
    }
}

fn lock(inner: &Mutex<FeedbackInner>) -> MutexGuard<'_, FeedbackInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tessera_core::ManualScheduler;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn counted(scheduler: &ManualScheduler) -> (TimedFeedback<ManualScheduler>, Arc<AtomicUsize>) {
        let expirations = Arc::new(AtomicUsize::new(0));
        let counter = expirations.clone();
        let feedback = TimedFeedback::new(scheduler.clone()).on_expire(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (feedback, expirations)
    }

    #[test]
    fn test_starts_hidden() {
        let feedback = TimedFeedback::new(ManualScheduler::new());
        assert_eq!(feedback.phase(), FeedbackPhase::Hidden);
        assert_eq!(feedback.expires_at(), None);
        assert_eq!(feedback.duration(), ms(2000));
    }

    #[test]
    fn test_hides_after_duration() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);

        feedback.trigger();
        assert!(feedback.is_showing());
        assert_eq!(feedback.expires_at(), Some(ms(2000)));

        scheduler.advance(ms(1999));
        assert!(feedback.is_showing());

        scheduler.advance(ms(1));
        assert!(!feedback.is_showing());
        assert_eq!(feedback.expires_at(), None);
        assert_eq!(expirations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retrigger_resets_timer() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);

        feedback.trigger();
        scheduler.advance(ms(1500));
        feedback.trigger();
        assert_eq!(scheduler.pending(), 1, "only one expiration may be pending");
        assert_eq!(feedback.expires_at(), Some(ms(3500)));

        // The first trigger's deadline passes without hiding
        scheduler.advance(ms(1000));
        assert!(feedback.is_showing());
        assert_eq!(expirations.load(Ordering::SeqCst), 0);

        scheduler.advance(ms(1000));
        assert!(!feedback.is_showing());
        assert_eq!(expirations.load(Ordering::SeqCst), 1);

        scheduler.advance(ms(10_000));
        assert_eq!(expirations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rapid_triggers_expire_once() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);

        feedback.trigger();
        feedback.trigger();
        feedback.trigger();
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(ms(5000)), 1);
        assert_eq!(expirations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dismiss_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);

        feedback.trigger();
        feedback.dismiss();
        assert!(!feedback.is_showing());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(5000));
        assert_eq!(expirations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_while_showing_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);

        feedback.trigger();
        drop(feedback);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(5000));
        assert_eq!(expirations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom_duration() {
        let scheduler = ManualScheduler::new();
        let mut feedback = TimedFeedback::new(scheduler.clone()).with_duration(ms(500));

        feedback.trigger();
        scheduler.advance(ms(500));
        assert_eq!(feedback.phase(), FeedbackPhase::Hidden);
    }

    #[test]
    fn test_unbounded_duration_saturates() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);
        feedback = feedback.with_duration(Duration::MAX);

        feedback.trigger();
        scheduler.advance(ms(1));
        feedback.trigger();
        assert_eq!(feedback.expires_at(), Some(Duration::MAX));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_secs(3600));
        assert!(feedback.is_showing());
        assert_eq!(expirations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_trigger_after_expiry_shows_again() {
        let scheduler = ManualScheduler::new();
        let (mut feedback, expirations) = counted(&scheduler);

        feedback.trigger();
        scheduler.advance(ms(2000));
        feedback.trigger();
        assert!(feedback.is_showing());
        assert_eq!(feedback.expires_at(), Some(ms(4000)));

        scheduler.advance(ms(2000));
        assert_eq!(expirations.load(Ordering::SeqCst), 2);
    }
}
