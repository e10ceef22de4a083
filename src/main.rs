//! Lead Desk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod pages;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = AppConfig::load();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"[Main] Logger was already initialized".into());
    }
    for warning in &warnings {
        log::warn!("[Main] {}", warning);
    }
    log::info!("[Main] Lead Desk starting, API at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
