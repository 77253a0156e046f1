//! Price Form Frontend Entry Point

mod analytics;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod editor;
mod error;
mod locate;
mod models;
mod store;
mod submit;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
