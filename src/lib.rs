use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod format_utils;
pub mod global_state;
pub mod infrastructure;
pub mod pages;
pub mod presentation;

/// Install the panic hook, console logger and browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    let logger = match &config {
        Ok(config) => ConsoleLogger::new(config.log_level),
        Err(_) => ConsoleLogger::new_development(),
    };
    init_logger(Box::new(logger));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    match config {
        Ok(config) => {
            crate::log_info!(
                LogComponent::Presentation("Initialize"),
                "🚀 Iron Capital initialized (backend {})",
                config.backend_url
            );
        }
        Err(e) => {
            crate::log_warn!(
                LogComponent::Presentation("Initialize"),
                "🚀 Iron Capital initialized without a backend: {}",
                e
            );
        }
    }
}

/// Mount the Leptos application on `<body>`
#[wasm_bindgen(js_name = runApp)]
pub fn run_app() {
    leptos::mount_to_body(app::App);
}
