//! Activity Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod flows;
mod models;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_document();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting activity board, api base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
