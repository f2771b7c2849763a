//! # client
//!
//! Leptos frontend for the routing demo storefront: nested layouts, a
//! dashboard with named slots, dynamic product routes, a catch-all shop route
//! and not-found handling.
//!
//! Built with `ssr` for the Axum host and with `hydrate` for the browser
//! bundle; `hydrate()` is the WASM entry point.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
