//! Tessera Core Runtime
//!
//! Foundational primitives shared by the Tessera design-system crates:
//!
//! - **Color**: linear RGBA values with hex parsing and interpolation
//! - **Timers**: cancellable one-shot timers behind the [`Scheduler`] trait,
//!   driven either by a deterministic virtual clock ([`ManualScheduler`]) or
//!   by a tokio runtime ([`TokioScheduler`])
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tessera_core::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let handle = scheduler.schedule(Duration::from_millis(500), Box::new(|| {
//!     println!("fired");
//! }));
//!
//! scheduler.advance(Duration::from_millis(499));
//! assert_eq!(scheduler.pending(), 1);
//!
//! // Dropping the handle cancels the timer
//! drop(handle);
//! assert_eq!(scheduler.pending(), 0);
//! ```

pub mod color;
pub mod timer;

pub use color::Color;
pub use timer::{ManualScheduler, Scheduler, TimerCallback, TimerHandle, TimerId};

#[cfg(feature = "tokio")]
pub use timer::TokioScheduler;
