use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod presentation;
pub mod format_utils;
pub mod global_state;
pub mod macros;

/// Install panic hook, console logger and browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    });
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    log_info!(LogComponent::Presentation("Initialize"), "KPI dashboard core initialized");
}
