#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod component;
mod config;
mod constants;
mod error;
mod ui;
mod util;

use tracing::warn;

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let config = config::Config::load().unwrap_or_else(|e| {
        warn!("could not load configuration, falling back to defaults: {e}");
        config::Config::fallback()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_app_id(constants::APP_ID)
        .with_inner_size([config.app.width, config.app.height])
        .with_min_inner_size([720.0, 480.0]);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, config)))),
    )
}
