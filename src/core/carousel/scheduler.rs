//! Repeating timers for carousel auto-advance
//!
//! A [`Scheduler`] starts a repeating callback and hands back a [`TimerGuard`].
//! The guard owns the underlying timer: dropping it cancels the timer, so the
//! callback can never outlive whoever holds the guard.

use std::any::Any;
use std::fmt;
use std::time::Duration;

/// Default auto-advance period between slides
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(5_500);

/// Callback invoked on every timer tick
pub type Tick = Box<dyn FnMut()>;

/// Source of repeating timers
pub trait Scheduler {
    /// Invoke `tick` every `period` until the returned guard is dropped
    fn every(&self, period: Duration, tick: Tick) -> TimerGuard;
}

/// Owns a running timer; dropping it cancels the timer
#[must_use = "dropping the guard cancels the timer immediately"]
pub struct TimerGuard {
    _handle: Box<dyn Any>,
}

impl TimerGuard {
    /// Wrap a timer handle whose `Drop` cancels the timer
    pub fn new<H: 'static>(handle: H) -> Self {
        Self {
            _handle: Box::new(handle),
        }
    }
}

impl fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerGuard").finish_non_exhaustive()
    }
}

/// Browser timers backed by `setInterval`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, tick: Tick) -> TimerGuard {
        use gloo_timers::callback::Interval;

        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        // Interval clears itself on drop
        TimerGuard::new(Interval::new(millis, tick))
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;
