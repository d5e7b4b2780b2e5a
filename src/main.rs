//! Todo PWA Entry Point

mod app;
mod components;
mod context;
mod platform;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use todo_core::{KeyValueStore, TodoConfig};

const APP_NAME: &str = "Todo";

fn main() {
    console_error_panic_hook::set_once();

    let config = TodoConfig::default();
    let level_override = platform::open_storage()
        .get(&config.log_level_key)
        .ok()
        .flatten();
    let level = console_logger::parse_level(level_override.as_deref(), LevelFilter::Info);
    if let Err(e) = console_logger::init_logger(APP_NAME, level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    log::info!("Starting {} (log level {})", APP_NAME, level);

    platform::register_service_worker();
    mount_to_body(App);
}
