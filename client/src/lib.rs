//! # memoir-client
//!
//! Leptos + WASM frontend for the memoir dashboard.
//!
//! This crate holds the client state core (session gating, couple/personal
//! space mode, route guard), the identity backend boundary, and the page
//! shell that composes them. The `hydrate` feature builds the browser
//! bundle; `ssr` is enabled by the host binary for pre-rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
