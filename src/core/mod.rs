//! Core models: the carousel state machine and the static page content

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;

pub use carousel::*;
pub use content::{PageVariant, Section};
