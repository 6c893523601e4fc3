// main.rs - Conway sandbox: draw a seed, then play its generations back and forth

use anyhow::{Result, anyhow};
use eframe::egui;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

mod app;
mod colorizer;
mod playback;
mod settings;
mod ui;

use app::SandboxApp;
use settings::Settings;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;
    info!("conway-sandbox {}", env!("CARGO_PKG_VERSION"));

    let path = Settings::config_path();
    let settings = Settings::load_from(&path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway Sandbox",
        options,
        Box::new(move |_cc| Box::new(SandboxApp::new(settings, Some(path)))),
    )
    .map_err(|e| anyhow!("eframe: {}", e))
}
