//! SmartAgenda - Landing page
//!
//! Marketing site for the SmartAgenda WhatsApp scheduling assistant,
//! built with Leptos and WebAssembly. The interactive piece is the
//! auto-rotating banner carousel in [`core::carousel`].

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
