//! # taskaid-client
//!
//! Leptos + WASM frontend for the TaskAid task manager.
//!
//! This crate contains the pages, components, session state, identity
//! provider adapters, and form validation. The `taskaid` host crate renders
//! it on the server (`ssr`); the browser build (`hydrate`) takes over after
//! the first paint and is the only side that talks to the identity provider.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
