use eframe::egui::{self, Color32, RichText, Sense, Ui, Vec2};

use crate::color::legend_stops;
use crate::state::AppState;

const LEGEND_SWATCHES: usize = 24;

// ---------------------------------------------------------------------------
// Left side panel – dataset summary
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Dataset");
    ui.separator();

    let Some(chart) = &state.chart else {
        ui.label("No dataset loaded.");
        return;
    };

    let a = &chart.analysis;
    egui::Grid::new("summary").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.strong("File");
        ui.label(
            chart
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        ui.end_row();

        ui.strong("Readings");
        ui.label(a.dataset.len().to_string());
        ui.end_row();

        ui.strong("From");
        ui.label(a.dates.min.to_string());
        ui.end_row();

        ui.strong("To");
        ui.label(a.dates.max.to_string());
        ui.end_row();

        ui.strong("Coldest");
        ui.label(format!("{:.1}°", a.values.min));
        ui.end_row();

        ui.strong("Warmest");
        ui.label(format!("{:.1}°", a.values.max));
        ui.end_row();

        ui.strong("Time axis");
        ui.label(chart.animator.orientation().to_string());
        ui.end_row();

        ui.strong("Flips");
        ui.label(chart.animator.generation().to_string());
        ui.end_row();
    });

    ui.separator();
    ui.strong("Mean temperature");

    // ---- Colour legend: swatch strip, coldest on the left ----
    let stops = legend_stops(&chart.scales, LEGEND_SWATCHES);
    let width = ui.available_width().min(220.0);
    let swatch = Vec2::new(width / LEGEND_SWATCHES as f32, 14.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, swatch.y), Sense::hover());
    for (i, (_, color)) in stops.iter().enumerate() {
        let min = rect.min + Vec2::new(i as f32 * swatch.x, 0.0);
        ui.painter()
            .rect_filled(egui::Rect::from_min_size(min, swatch), 0.0, *color);
    }
    ui.horizontal(|ui: &mut Ui| {
        ui.small(format!("{:.0}°", a.values.min));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.small(format!("{:.0}°", a.values.max));
        });
    });

    ui.add_space(8.0);
    ui.small("Click the chart to flip the time axis.");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(chart) = &state.chart {
            ui.label(format!("{} readings loaded", chart.analysis.dataset.len()));
            if chart.animator.is_animating() {
                ui.separator();
                ui.spinner();
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open weather data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
