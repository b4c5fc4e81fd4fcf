//! Web UI for flames-rs
//!
//! A Yew-based page for the FLAMES game: two names in, a flame animation,
//! the relationship out, and the last ten readings kept in browser local
//! storage.

mod app;
mod components;
mod storage;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger setup failed: {e}").into());
    }

    yew::Renderer::<app::App>::new().render();
}
