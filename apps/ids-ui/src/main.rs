#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod run_worker;
mod views;

use app::IdsBenchApp;
use std::path::Path;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // A missing config falls back to defaults; a malformed one is fatal.
    let config = match ids_app::config::load_or_default(Path::new("idsbench.yaml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load workbench config: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("IDS Bench"),
        ..Default::default()
    };

    eframe::run_native(
        "IDS Bench",
        options,
        Box::new(|cc| Ok(Box::new(IdsBenchApp::new(cc, config)))),
    )
}
