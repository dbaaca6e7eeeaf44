use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::axis::AxisTick;
use crate::color::{css_rgb, temperature_color, to_color32};
use crate::config::SAMPLE_DATA_PATH;
use crate::state::AppState;

/// Gap between the plot area and the month axis.
const X_AXIS_OFFSET: f32 = 20.0;
/// Gap between the plot area and the temperature axis.
const Y_AXIS_OFFSET: f32 = 10.0;
const TICK_LEN: f32 = 6.0;

// ---------------------------------------------------------------------------
// Scatter chart (central panel)
// ---------------------------------------------------------------------------

/// Render the temperature scatter and handle the click toggle.
pub fn weather_chart(ui: &mut Ui, state: &mut AppState) {
    if state.chart.is_none() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Open a file to view readings  (File → Open…)");
            ui.label(format!(
                "or pass a CSV path on the command line, or run generate_sample to create {SAMPLE_DATA_PATH}"
            ));
        });
        return;
    }

    let cfg = state.config.clone();
    let canvas = Vec2::new(cfg.width as f32, cfg.height as f32);
    let (response, painter) = ui.allocate_painter(canvas, Sense::click());

    let now = ui.input(|i| i.time);
    if response.clicked() {
        state.toggle(now);
    }

    let Some(frame) = state.frame(now) else {
        return;
    };
    if frame.animating {
        ui.ctx().request_repaint();
    }

    let Some(chart) = state.chart.as_ref() else {
        return;
    };

    let dims = cfg.dimensions();
    let origin = response.rect.min + Vec2::new(cfg.margin.left as f32, cfg.margin.top as f32);
    let plot_rect = Rect::from_min_size(origin, Vec2::new(dims.width as f32, dims.height as f32));

    painter.rect_filled(response.rect, 0.0, ui.visuals().extreme_bg_color);

    // ---- Points ----
    let marker = Vec2::splat(cfg.marker_size as f32);
    for (&(x, y), point) in frame.positions.iter().zip(&chart.points) {
        let min = origin + Vec2::new(x as f32, y as f32);
        painter.rect_filled(Rect::from_min_size(min, marker), 0.0, to_color32(point.color));
    }

    // ---- Axes ----
    let text_color = ui.visuals().text_color();
    draw_x_axis(&painter, &chart.x_ticks, plot_rect, text_color);
    draw_y_axis(&painter, &chart.y_ticks, plot_rect, text_color);

    // ---- Hover readout ----
    if let Some(pos) = response.hover_pos() {
        if plot_rect.contains(pos) {
            if let Some(t) = state.temperature_at((pos.y - origin.y) as f64) {
                painter.text(
                    pos + Vec2::new(8.0, -8.0),
                    Align2::LEFT_BOTTOM,
                    format!("{t:.1}°  {}", css_rgb(temperature_color(&chart.scales, t))),
                    FontId::proportional(11.0),
                    text_color,
                );
            }
        }
    }
}

fn draw_x_axis(painter: &egui::Painter, ticks: &[AxisTick], plot: Rect, color: Color32) {
    let y = plot.bottom() + X_AXIS_OFFSET;
    let stroke = Stroke::new(1.0, color);
    painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], stroke);

    for tick in ticks {
        let x = plot.left() + tick.position as f32;
        painter.line_segment([Pos2::new(x, y), Pos2::new(x, y + TICK_LEN)], stroke);
        painter.text(
            Pos2::new(x, y + TICK_LEN + 2.0),
            Align2::CENTER_TOP,
            &tick.label,
            FontId::proportional(10.0),
            color,
        );
    }
}

fn draw_y_axis(painter: &egui::Painter, ticks: &[AxisTick], plot: Rect, color: Color32) {
    let x = plot.left() - Y_AXIS_OFFSET;
    let stroke = Stroke::new(1.0, color);
    painter.line_segment([Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())], stroke);

    for tick in ticks {
        let y = plot.top() + tick.position as f32;
        painter.line_segment([Pos2::new(x - TICK_LEN, y), Pos2::new(x, y)], stroke);
        painter.text(
            Pos2::new(x - TICK_LEN - 2.0, y),
            Align2::RIGHT_CENTER,
            &tick.label,
            FontId::proportional(10.0),
            color,
        );
    }
}
