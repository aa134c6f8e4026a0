//! Auto-rotating image carousel
//!
//! - [`CarouselState`]: the item list and active index, kept in range at all times
//! - [`CarouselController`]: navigation, listener notifications and auto-advance
//! - [`Scheduler`] / [`TimerGuard`]: repeating timers with cancel-on-drop ownership

mod controller;
mod scheduler;
mod state;

pub use controller::{AdvancePolicy, CarouselController, CarouselOptions, ListenerId};
#[cfg(feature = "hydrate")]
pub use scheduler::BrowserScheduler;
#[cfg(test)]
pub(crate) use scheduler::ManualScheduler;
pub use scheduler::{AUTO_ADVANCE_PERIOD, Scheduler, Tick, TimerGuard};
pub use state::{CarouselError, CarouselState, DisplayItem};
