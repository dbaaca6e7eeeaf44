mod app;
mod axis;
mod color;
mod config;
mod data;
mod error;
mod layout;
mod scale;
mod state;
mod transition;
mod ui;

use std::path::PathBuf;

use app::WeatherScatterApp;
use config::ChartConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let mut config = ChartConfig::from_env().unwrap_or_else(|e| {
        log::error!("Ignoring config: {e:#}");
        ChartConfig::default()
    });
    if let Some(path) = std::env::args_os().nth(1) {
        config.data_path = PathBuf::from(path);
    }

    let mut state = AppState::new(config);
    let data_path = state.config.data_path.clone();
    state.open(&data_path);

    let inner = [state.config.width as f32 + 280.0, state.config.height as f32 + 80.0];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weather Scatter – Daily Temperatures",
        options,
        Box::new(|_cc| Ok(Box::new(WeatherScatterApp::new(state)))),
    )
}
