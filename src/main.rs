//! Stockroom Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod models;
mod notice;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(config::LOG_CAPACITY, config::log_level()) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("Stockroom UI starting");
    mount_to_body(App);
}
