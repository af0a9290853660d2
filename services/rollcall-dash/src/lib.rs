// services/rollcall-dash/src/lib.rs
//
// Roll Call Dashboard - Library exports
//

pub mod app;
pub mod chartjs;
pub mod components;
pub mod mock;
pub mod state;
pub mod web;

use dashkit::{load_config, DashboardConfig};
use leptos::*;

/// Installs browser logging, reads config overrides from the page and mounts the app.
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = load_config(web::config_overrides().as_deref()).unwrap_or_else(|e| {
        log::error!("Ignoring dashboard config: {}", e);
        DashboardConfig::default()
    });

    log::info!("📋 Roll call dashboard starting...");

    mount_to_body(move || {
        view! { <app::App config=config /> }
    });
}
