use chrono::{Datelike, NaiveDate};

use crate::color::{BLUE_RANGE, GREEN_RANGE, RED_RANGE};
use crate::data::model::Bound;
use crate::layout::ChartDimensions;

// ---------------------------------------------------------------------------
// LinearScale – continuous domain → range interpolation
// ---------------------------------------------------------------------------

/// Maps `domain` onto `range` by straight-line interpolation, without
/// clamping.  A collapsed domain maps every input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    /// Inverse of [`apply`](Self::apply); `None` for a collapsed range.
    pub fn invert(&self, px: f64) -> Option<f64> {
        let inverse = LinearScale::new(self.range, self.domain);
        (self.range.0 != self.range.1).then(|| inverse.apply(px))
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }
}

// ---------------------------------------------------------------------------
// TimeScale – calendar dates on a linear scale
// ---------------------------------------------------------------------------

/// A linear scale whose domain is measured in elapsed days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub dates: Bound<NaiveDate>,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(dates: Bound<NaiveDate>, range: (f64, f64)) -> Self {
        let domain = (day_number(dates.min), day_number(dates.max));
        TimeScale {
            dates,
            linear: LinearScale::new(domain, range),
        }
    }

    pub fn apply(&self, date: NaiveDate) -> f64 {
        self.linear.apply(day_number(date))
    }

    pub fn is_degenerate(&self) -> bool {
        self.linear.is_degenerate()
    }
}

#[cfg(test)]
impl TimeScale {
    pub fn range(&self) -> (f64, f64) {
        self.linear.range
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

// ---------------------------------------------------------------------------
// Orientation – the click toggle
// ---------------------------------------------------------------------------

/// Direction of the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Earliest date on the left.
    #[default]
    Normal,
    /// Earliest date on the right.
    Reversed,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Reversed,
            Orientation::Reversed => Orientation::Normal,
        }
    }

    /// Output range of the x scale for a plot area `width` wide.
    pub fn x_range(self, width: f64) -> (f64, f64) {
        match self {
            Orientation::Normal => (0.0, width),
            Orientation::Reversed => (width, 0.0),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Normal => write!(f, "normal"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

// ---------------------------------------------------------------------------
// ScaleSet
// ---------------------------------------------------------------------------

/// The five scales one layout pass needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    pub x: TimeScale,
    pub y: LinearScale,
    pub red: LinearScale,
    pub green: LinearScale,
    pub blue: LinearScale,
    pub orientation: Orientation,
}

/// Build every scale for the given bounds, plot area and orientation.
pub fn build_scales(
    values: Bound<f64>,
    dates: Bound<NaiveDate>,
    dims: ChartDimensions,
    orientation: Orientation,
) -> ScaleSet {
    let domain = (values.min, values.max);
    let x = TimeScale::new(dates, orientation.x_range(dims.width));
    let y = LinearScale::new(domain, (dims.height, 0.0));

    if y.is_degenerate() {
        log::warn!(
            "temperature bound collapsed to {}; y and colour scales fall back to range midpoints",
            values.min
        );
    }
    if x.is_degenerate() {
        log::warn!(
            "date bound collapsed to {}; every point is centred horizontally",
            dates.min
        );
    }

    ScaleSet {
        x,
        y,
        red: LinearScale::new(domain, RED_RANGE),
        green: LinearScale::new(domain, GREEN_RANGE),
        blue: LinearScale::new(domain, BLUE_RANGE),
        orientation,
    }
}

impl ScaleSet {
    /// Same scales with the horizontal output range pointed the other way.
    /// Only `x` changes.
    pub fn with_orientation(&self, orientation: Orientation, width: f64) -> ScaleSet {
        ScaleSet {
            x: TimeScale::new(self.x.dates, orientation.x_range(width)),
            orientation,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_2014() -> Bound<NaiveDate> {
        Bound { min: ymd(2014, 1, 1), max: ymd(2014, 12, 31) }
    }

    fn dims() -> ChartDimensions {
        ChartDimensions { width: 780.0, height: 360.0 }
    }

    #[test]
    fn x_endpoints_follow_orientation() {
        let values = Bound { min: -5.0, max: 30.0 };
        let normal = build_scales(values, year_2014(), dims(), Orientation::Normal);
        assert_eq!(normal.x.apply(ymd(2014, 1, 1)), 0.0);
        assert_eq!(normal.x.apply(ymd(2014, 12, 31)), 780.0);

        let reversed = build_scales(values, year_2014(), dims(), Orientation::Reversed);
        assert_eq!(reversed.x.apply(ymd(2014, 1, 1)), 780.0);
        assert_eq!(reversed.x.apply(ymd(2014, 12, 31)), 0.0);
    }

    #[test]
    fn x_is_linear_in_elapsed_days() {
        let dates = Bound { min: ymd(2014, 1, 1), max: ymd(2014, 1, 11) };
        let s = TimeScale::new(dates, (0.0, 100.0));
        assert!((s.apply(ymd(2014, 1, 6)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn y_is_inverted() {
        let values = Bound { min: -5.0, max: 30.0 };
        let s = build_scales(values, year_2014(), dims(), Orientation::Normal);
        assert_eq!(s.y.apply(-5.0), 360.0);
        assert_eq!(s.y.apply(30.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let values = Bound { min: 12.0, max: 12.0 };
        let s = build_scales(values, year_2014(), dims(), Orientation::Normal);
        for t in [-100.0, 12.0, 55.5] {
            assert_eq!(s.y.apply(t), 180.0);
            assert_eq!(s.red.apply(t), 112.0);
        }

        let one_day = Bound { min: ymd(2014, 5, 5), max: ymd(2014, 5, 5) };
        let s = build_scales(values, one_day, dims(), Orientation::Reversed);
        assert_eq!(s.x.apply(ymd(2014, 5, 5)), 390.0);
        assert!(s.x.is_degenerate());
    }

    #[test]
    fn toggling_twice_restores_range() {
        let values = Bound { min: 0.0, max: 1.0 };
        let s = build_scales(values, year_2014(), dims(), Orientation::Normal);
        let flipped = s.with_orientation(s.orientation.flipped(), 780.0);
        assert_eq!(flipped.x.range(), (780.0, 0.0));
        assert_eq!(flipped.y, s.y);
        let back = flipped.with_orientation(flipped.orientation.flipped(), 780.0);
        assert_eq!(back.x.range(), s.x.range());
        assert_eq!(back, s);
    }

    #[test]
    fn invert_undoes_apply() {
        let s = LinearScale::new((-5.0, 30.0), (360.0, 0.0));
        assert!((s.invert(s.apply(12.5)).unwrap() - 12.5).abs() < 1e-9);
        assert_eq!(LinearScale::new((0.0, 1.0), (4.0, 4.0)).invert(4.0), None);
    }
}
