//! # streetz-admin
//!
//! Leptos + WASM admin dashboard for the Streetz Talk backend.
//!
//! This crate contains pages, components, session state, and the REST
//! client for the remote PocketBase-style API. Browser-only behavior
//! (HTTP, `localStorage`, mounting) is gated behind the `csr` feature so
//! the logic layer builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and console logging, then
/// mount the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
