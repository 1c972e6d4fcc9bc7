use std::path::Path;
use std::process::ExitCode;

use launch_dashboard::constants::{DATA_FILE, SERVER_ADDR};
use launch_dashboard::data::loader::load_file;
use launch_dashboard::web;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let table = match load_file(Path::new(DATA_FILE)) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load launch data: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match web::serve(table, SERVER_ADDR).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
