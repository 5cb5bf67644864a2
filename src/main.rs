//! Mobile Login Portal Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = browser::load_config();
    if let Err(e) = console_log::init_with_level(config.level()) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Ignoring malformed app-config, using defaults: {}", e);
    }
    log::info!(
        "[APP] Starting (delay={}ms, session key='{}')",
        config.simulated_delay_ms,
        config.session_key
    );

    let services = browser::browser_services(config);
    mount_to_body(move || view! { <App services=services /> });
}
