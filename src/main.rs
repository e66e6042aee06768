#![allow(warnings)]
//! Shoe Admin Frontend Entry Point

mod api;
mod app;
mod cancel;
mod chart;
mod components;
mod config;
mod context;
mod filters;
mod form;
mod invoice;
mod models;
mod pages;
mod session;
mod store;
mod toast;
mod upload;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
