//! EWM Admin Console entry point

mod app;
mod components;
mod context;
mod markdown;
mod state;

use app::App;
use leptos::prelude::*;

const DEFAULT_LOG_LEVEL: &str = "info";

fn main() {
    console_error_panic_hook::set_once();
    let level = option_env!("EWM_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);
    if let Err(e) = console_logger::init_logger(level) {
        leptos::logging::warn!("logger already installed: {e}");
    }
    mount_to_body(App);
}
