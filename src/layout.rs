use crate::color::{temperature_color, Rgb};
use crate::config::Margin;
use crate::data::model::Dataset;
use crate::scale::ScaleSet;

// ---------------------------------------------------------------------------
// Plot area
// ---------------------------------------------------------------------------

/// Size of the inner plot area, i.e. the canvas minus its margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
}

impl ChartDimensions {
    pub fn from_canvas(width: f64, height: f64, margin: &Margin) -> Self {
        ChartDimensions {
            width: (width - margin.left - margin.right).max(0.0),
            height: (height - margin.top - margin.bottom).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Point – screen geometry for one record
// ---------------------------------------------------------------------------

/// Position inside the plot area plus fill colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

/// One point per record, in record order.
pub fn layout(dataset: &Dataset, scales: &ScaleSet) -> Vec<Point> {
    dataset
        .records()
        .iter()
        .map(|r| Point {
            x: scales.x.apply(r.date),
            y: scales.y.apply(r.temperature),
            color: temperature_color(scales, r.temperature),
        })
        .collect()
}

/// Horizontal positions only.  A relayout after a toggle keeps y and colour.
pub fn x_positions(dataset: &Dataset, scales: &ScaleSet) -> Vec<f64> {
    dataset
        .records()
        .iter()
        .map(|r| scales.x.apply(r.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Bound, Record};
    use crate::scale::{build_scales, Orientation};
    use chrono::NaiveDate;
    use palette::Srgb;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn example() -> (Dataset, ScaleSet) {
        let dataset = Dataset::new(vec![
            Record { date: ymd(2014, 1, 1), temperature: 10.0 },
            Record { date: ymd(2014, 1, 2), temperature: -5.0 },
            Record { date: ymd(2014, 12, 31), temperature: 30.0 },
        ])
        .unwrap();
        let margin = Margin { top: 20.0, right: 20.0, bottom: 40.0, left: 40.0 };
        let dims = ChartDimensions::from_canvas(840.0, 420.0, &margin);
        let scales = build_scales(
            Bound { min: -5.0, max: 30.0 },
            Bound { min: ymd(2014, 1, 1), max: ymd(2014, 12, 31) },
            dims,
            Orientation::Normal,
        );
        (dataset, scales)
    }

    #[test]
    fn plot_area_excludes_margins() {
        let margin = Margin { top: 20.0, right: 20.0, bottom: 40.0, left: 40.0 };
        let dims = ChartDimensions::from_canvas(840.0, 420.0, &margin);
        assert_eq!(dims, ChartDimensions { width: 780.0, height: 360.0 });
    }

    #[test]
    fn worked_example_layout() {
        let (dataset, scales) = example();
        let points = layout(&dataset, &scales);
        assert_eq!(points.len(), 3);

        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[2].x, 780.0);
        assert_eq!(points[1].y, 360.0);
        assert_eq!(points[2].y, 0.0);

        assert_eq!(points[1].color, Srgb::new(24, 80, 200));
        assert_eq!(points[2].color, Srgb::new(200, 200, 250));
    }

    #[test]
    fn reversed_layout_only_moves_x() {
        let (dataset, scales) = example();
        let before = layout(&dataset, &scales);
        let reversed = scales.with_orientation(Orientation::Reversed, 780.0);
        let after = layout(&dataset, &reversed);
        for (b, a) in before.iter().zip(&after) {
            assert!((a.x - (780.0 - b.x)).abs() < 1e-9);
            assert_eq!(a.y, b.y);
            assert_eq!(a.color, b.color);
        }
        assert_eq!(
            x_positions(&dataset, &reversed),
            after.iter().map(|p| p.x).collect::<Vec<_>>()
        );
    }
}
