//! # client
//!
//! Leptos + WASM frontend for ShutterSpot, a map of photography locations.
//!
//! This crate contains pages, components, reactive state wrappers around the
//! `spots` domain core, and the Leaflet bridge used to draw the map. It is
//! compiled twice: with `ssr` for server rendering inside the `server` crate,
//! and with `hydrate` to WebAssembly for the browser.

pub mod app;
pub mod components;
pub mod consts;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
    log::info!("hydrating ShutterSpot");
    leptos::mount::hydrate_body(app::App);
}
