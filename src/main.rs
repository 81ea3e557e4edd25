#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

mod config;
mod error;
mod icon;
mod launcher;
mod notification;
mod resolver;
mod server;
mod tray;

use error::StartupError;
use log::{error, info};
use resolver::{ExecutablePath, Resolver};
use std::sync::Arc;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Everything that must succeed before the tray comes up. Free of UI.
fn initialize() -> Result<ExecutablePath, StartupError> {
    let executable = Resolver::for_current_platform().resolve()?;
    Ok(executable)
}

fn main() {
    init_logging();

    let executable = match initialize() {
        Ok(executable) => Arc::new(executable),
        Err(e) => {
            error!("{}", e);
            notification::show_error(&e.to_string());
            std::process::exit(1);
        }
    };
    info!("Ente Auth executable: {}", executable);

    if let Err(e) = server::spawn_background(Arc::clone(&executable)) {
        error!("Failed to start popup endpoint: {}", e);
    }

    info!("Starting tray icon...");
    tray::run_tray_application(executable);
}
