//! # genesis-client
//!
//! Leptos + WASM frontend for the Genesis sign-in flow.
//!
//! This crate contains pages, components, application state, and the
//! identity-provider adapters. The `server` crate renders it with SSR;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
