//! # admin-client
//!
//! Leptos + WASM admin UI for the photography portfolio. It manages the
//! images of one collection: list, add by URL, remove after confirmation,
//! rendered as a masonry grid.
//!
//! The crate is compiled twice: with `hydrate` for the browser bundle and
//! with `ssr` for the axum host that renders the initial HTML.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
