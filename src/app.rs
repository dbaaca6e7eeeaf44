use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WeatherScatterApp {
    pub state: AppState,
}

impl WeatherScatterApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for WeatherScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summary + legend ----
        egui::SidePanel::left("summary_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::weather_chart(ui, &mut self.state);
        });
    }
}
