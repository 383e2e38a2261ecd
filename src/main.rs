//! S-Brain Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod config;
mod context;
mod forms;
mod models;
mod pages;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("[APP] Starting S-Brain against {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
