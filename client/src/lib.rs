//! # pawsquare-client
//!
//! Leptos + WASM frontend for the PawSquare neighborhood pet community.
//!
//! This crate contains pages, components, static sample data, application
//! state, and the assistant endpoint client. The root server crate renders
//! it with SSR and the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
