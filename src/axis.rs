use chrono::{Datelike, Months, NaiveDate};

use crate::scale::{LinearScale, TimeScale};

/// Month strides tried in order until the tick count fits.  Longer spans
/// fall back to whole-year strides.
const MONTH_STEPS: [usize; 4] = [1, 2, 3, 6];
const MAX_MONTH_TICKS: usize = 12;

// ---------------------------------------------------------------------------
// Tick
// ---------------------------------------------------------------------------

/// One labelled tick, already mapped to plot-area coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

// ---------------------------------------------------------------------------
// Time axis: first day of each month
// ---------------------------------------------------------------------------

/// First-of-month dates inside the scale's date bound, labelled with the
/// full month name.  Never more than [`MAX_MONTH_TICKS`]; at yearly strides
/// the label also carries the year.
pub fn month_ticks(scale: &TimeScale) -> Vec<AxisTick> {
    let (lo, hi) = if scale.dates.min <= scale.dates.max {
        (scale.dates.min, scale.dates.max)
    } else {
        (scale.dates.max, scale.dates.min)
    };

    let first = first_month_on_or_after(lo);
    let all: Vec<NaiveDate> = std::iter::successors(first, |d| d.checked_add_months(Months::new(1)))
        .take_while(|d| *d <= hi)
        .collect();

    let step = MONTH_STEPS
        .iter()
        .copied()
        .find(|s| all.len().div_ceil(*s) <= MAX_MONTH_TICKS)
        .unwrap_or_else(|| 12 * all.len().div_ceil(12 * MAX_MONTH_TICKS).max(1));
    let format = if step >= 12 { "%B %Y" } else { "%B" };

    all.into_iter()
        .step_by(step)
        .map(|d| AxisTick {
            position: scale.apply(d),
            label: d.format(format).to_string(),
        })
        .collect()
}

fn first_month_on_or_after(d: NaiveDate) -> Option<NaiveDate> {
    let start = d.with_day(1)?;
    if start == d {
        Some(start)
    } else {
        start.checked_add_months(Months::new(1))
    }
}

// ---------------------------------------------------------------------------
// Value axis: round-number ticks
// ---------------------------------------------------------------------------

/// Roughly `count` ticks at multiples of 1, 2 or 5 × 10^k covering the
/// scale's domain.
pub fn linear_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let (a, b) = scale.domain;
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    if lo == hi || count == 0 {
        return vec![AxisTick {
            position: scale.apply(lo),
            label: format_value(lo, 0),
        }];
    }

    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Negative powers divide by an integer so 0.1 steps stay exact.
    let (values, decimals): (Vec<f64>, usize) = if power >= 0.0 {
        let inc = factor * 10f64.powf(power);
        let (start, stop) = ((lo / inc).ceil() as i64, (hi / inc).floor() as i64);
        ((start..=stop).map(|i| i as f64 * inc).collect(), 0)
    } else {
        let inv = 10f64.powf(-power) / factor;
        let (start, stop) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
        let decimals = inv.log10().ceil().max(0.0) as usize;
        ((start..=stop).map(|i| i as f64 / inv).collect(), decimals)
    };

    values
        .into_iter()
        .map(|v| AxisTick {
            position: scale.apply(v),
            label: format_value(v, decimals),
        })
        .collect()
}

fn format_value(v: f64, decimals: usize) -> String {
    // Avoid "-0".
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.decimals$}")
}
