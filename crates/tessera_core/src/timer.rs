//! Cancellable one-shot timers
//!
//! Interactive atoms never sleep-then-mutate. They ask a [`Scheduler`] for a
//! timer and keep the returned [`TimerHandle`]; dropping or cancelling the
//! handle guarantees the callback will not run afterwards.
//!
//! Two schedulers are provided:
//! - [`ManualScheduler`]: a virtual clock advanced explicitly by the event
//!   loop. Deterministic, used by tests and frame-driven hosts.
//! - [`TokioScheduler`]: spawns a sleeping task on a tokio runtime and aborts
//!   it on cancel.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

new_key_type! {
    /// Identifier of a timer pending in a [`ManualScheduler`]
    pub struct TimerId;
}

/// Work to run once when a timer fires
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// A source of cancellable one-shot timers
pub trait Scheduler {
    /// Run `callback` once, `delay` from now, unless the handle is cancelled first
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;

    /// Time elapsed since this scheduler's epoch
    fn elapsed(&self) -> Duration;
}

/// Ownership of a scheduled timer
///
/// The timer is cancelled when the handle is dropped.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    /// Create a handle that runs `cancel` when the timer is cancelled
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel the timer. A no-op if it already fired.
    pub fn cancel(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

// ========== Manual scheduler ==========

struct PendingTimer {
    deadline: Duration,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
    callback: TimerCallback,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    timers: SlotMap<TimerId, PendingTimer>,
}

/// Deterministic scheduler driven by an explicit virtual clock
///
/// Clones share the same clock and timer queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualClock> {
        lock_clock(&self.clock)
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        self.lock().timers.len()
    }

    /// Move the clock forward by `by`, firing every timer that comes due
    ///
    /// Timers fire in deadline order (ties in scheduling order), with the
    /// clock set to each timer's deadline while its callback runs. Callbacks
    /// run without the clock locked, so they may schedule or cancel timers.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now.saturating_add(by);
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = self.lock();
                let due = clock
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.deadline <= target)
                    .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
                    .map(|(id, _)| id);

                match due.and_then(|id| clock.timers.remove(id)) {
                    Some(timer) => {
                        clock.now = timer.deadline;
                        Some(timer)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };

            match next {
                Some(timer) => {
                    tracing::trace!("ManualScheduler: timer fired at {:?}", timer.deadline);
                    (timer.callback)();
                    fired += 1;
                }
                None => break,
            }
        }

        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let id = {
            let mut clock = self.lock();
            let deadline = clock.now.saturating_add(delay);
            let seq = clock.next_seq;
            clock.next_seq += 1;
            clock.timers.insert(PendingTimer {
                deadline,
                seq,
                callback,
            })
        };

        let weak: Weak<Mutex<ManualClock>> = Arc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = weak.upgrade() {
                lock_clock(&clock).timers.remove(id);
            }
        })
    }

    fn elapsed(&self) -> Duration {
        self.now()
    }
}

fn lock_clock(clock: &Mutex<ManualClock>) -> MutexGuard<'_, ManualClock> {
    // A panicking callback never runs under the lock, so the data stays consistent
    clock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ========== Tokio scheduler ==========

/// Scheduler backed by tokio timers
///
/// Each timer is a spawned task sleeping for the delay; cancelling aborts the
/// task. Use a current-thread runtime to keep callbacks on the UI thread.
#[cfg(feature = "tokio")]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    epoch: tokio::time::Instant,
}

#[cfg(feature = "tokio")]
impl TokioScheduler {
    /// Create a scheduler spawning onto the given runtime
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            epoch: tokio::time::Instant::now(),
        }
    }

    /// Create a scheduler for the runtime of the calling context
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

#[cfg(feature = "tokio")]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        TimerHandle::new(move || task.abort())
    }

    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }
}
