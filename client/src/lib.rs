//! # portfolio-client
//!
//! Leptos + WASM one-page portfolio.
//!
//! This crate contains the page, its section components, the static content
//! records, and the two stateful pieces: the section tracker that drives
//! navigation highlighting and the light/dark preference store.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
