use std::path::Path;
use std::process::ExitCode;

use eframe::egui;
use launch_dashboard::app::LaunchDashboardApp;
use launch_dashboard::constants::{DASHBOARD_TITLE, DATA_FILE};
use launch_dashboard::data::loader::load_file;

fn main() -> ExitCode {
    env_logger::init();

    // The table is loaded before the window opens; a bad file never gets a UI.
    let table = match load_file(Path::new(DATA_FILE)) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load launch data: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        DASHBOARD_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashboardApp::new(table)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Dashboard window failed: {e}");
            ExitCode::FAILURE
        }
    }
}
