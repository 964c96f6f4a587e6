//! # client
//!
//! Leptos frontend for the DevStudio site: marketing pages, service catalog,
//! booking flow and the user/admin dashboards.
//!
//! The crate builds twice: with `ssr` for server rendering inside the Axum
//! binary and with `hydrate` for the WASM bundle. Browser-only behavior
//! (URL access, HTTP calls) is gated on `hydrate` so SSR stays deterministic.

pub mod app;
pub mod boundary;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
