//! # client
//!
//! Leptos + WASM frontend for CivicPulse.
//!
//! This crate contains the routed pages, their components, page-local state,
//! and the browser device adapters (camera, geolocation). Domain rules live in
//! the `reports` crate; this crate wires them to signals and the DOM.
//!
//! Built twice: with `ssr` for server rendering inside the `civicpulse`
//! binary, and with `hydrate` as the WASM bundle that takes over in the
//! browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod device;
pub mod pages;
pub mod state;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
