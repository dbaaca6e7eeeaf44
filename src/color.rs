use eframe::egui::Color32;
use palette::Srgb;

use crate::scale::{LinearScale, ScaleSet};

// ---------------------------------------------------------------------------
// Temperature gradient
// ---------------------------------------------------------------------------

/// Per-channel output ranges, coldest → warmest.
pub const RED_RANGE: (f64, f64) = (24.0, 200.0);
pub const GREEN_RANGE: (f64, f64) = (80.0, 200.0);
pub const BLUE_RANGE: (f64, f64) = (200.0, 250.0);

/// An 8-bit sRGB fill colour.
pub type Rgb = Srgb<u8>;

fn channel(scale: &LinearScale, t: f64) -> u8 {
    scale.apply(t).clamp(0.0, 255.0).round() as u8
}

/// Fill colour for a temperature.  Out-of-bound temperatures are clamped
/// per channel to `[0, 255]`.
pub fn temperature_color(scales: &ScaleSet, t: f64) -> Rgb {
    Srgb::new(
        channel(&scales.red, t),
        channel(&scales.green, t),
        channel(&scales.blue, t),
    )
}

/// CSS `rgb(r,g,b)` text for a fill colour.
pub fn css_rgb(c: Rgb) -> String {
    format!("rgb({},{},{})", c.red, c.green, c.blue)
}

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// `n` evenly spaced legend swatches across the temperature domain,
/// as (temperature, colour) pairs from coldest to warmest.
pub fn legend_stops(scales: &ScaleSet, n: usize) -> Vec<(f64, Color32)> {
    let (lo, hi) = scales.red.domain;
    match n {
        0 => Vec::new(),
        1 => vec![(lo, to_color32(temperature_color(scales, lo)))],
        _ => (0..n)
            .map(|i| {
                let t = lo + (hi - lo) * i as f64 / (n - 1) as f64;
                (t, to_color32(temperature_color(scales, t)))
            })
            .collect(),
    }
}
