//! siteadmin desktop application
//!
//! Edits the `general` settings group of the site admin backend.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("siteadmin=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting siteadmin...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Site Settings"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
