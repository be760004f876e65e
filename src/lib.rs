mod api;
mod app;
mod components;
mod config;
mod editor;
mod models;
mod pages;
mod state;
mod util;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = EnvConfig::from_window();
    tracing::info!(api_url = %config.api_url, policy = ?config.navigation_policy, "starting notepad");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
