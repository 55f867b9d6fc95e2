//! # matside-client
//!
//! Leptos frontend for the wrestling coaching app: the XP/level/streak
//! dashboard, the clip upload flow, season stats, and the practice plan.
//! Rendered on the server (`ssr`) and hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
