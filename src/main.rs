//! LoaTodo Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod markdown;
mod models;
mod reorder;
mod storage;
mod store;
mod todo;

use app::App;
use leptos::prelude::*;

use crate::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    // Already installed only when the module is re-run in the same page
    let _ = rolling_logger::init_logger("LoaTodo", AppConfig::from_env().log_capacity);
    tracing::info!("[APP] starting");
    mount_to_body(App);
}
