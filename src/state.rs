use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::axis::{linear_ticks, month_ticks, AxisTick};
use crate::config::ChartConfig;
use crate::data::bounds::{analyze, Analysis};
use crate::data::loader::load_rows;
use crate::layout::{layout, x_positions, ChartDimensions, Point};
use crate::scale::{build_scales, Orientation, ScaleSet};
use crate::transition::{Animator, Frame};

/// Approximate number of temperature axis ticks.
const Y_TICK_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Loaded chart
// ---------------------------------------------------------------------------

/// Everything derived from one successfully analysed file.
pub struct LoadedChart {
    pub source: PathBuf,
    pub analysis: Analysis,
    /// Scales for the current orientation.
    pub scales: ScaleSet,
    /// Initial layout; y and colour never change afterwards.
    pub points: Vec<Point>,
    pub animator: Animator,
    /// Month labels as currently drawn.  Only replaced on an axis redraw.
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl LoadedChart {
    pub fn new(source: PathBuf, analysis: Analysis, config: &ChartConfig) -> Self {
        let scales = build_scales(
            analysis.values,
            analysis.dates,
            config.dimensions(),
            Orientation::Normal,
        );
        let points = layout(&analysis.dataset, &scales);
        let animator = Animator::new(
            points.iter().map(|p| (p.x, p.y)).collect(),
            config.transition_secs(),
        );
        let x_ticks = month_ticks(&scales.x);
        let y_ticks = linear_ticks(&scales.y, Y_TICK_COUNT);

        LoadedChart {
            source,
            analysis,
            scales,
            points,
            animator,
            x_ticks,
            y_ticks,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ChartConfig,

    /// Loaded chart (None until a file loads successfully).
    pub chart: Option<LoadedChart>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            chart: None,
            status_message: None,
        }
    }

    pub fn dimensions(&self) -> ChartDimensions {
        self.config.dimensions()
    }

    /// Load, analyse and lay out a file.  On failure the current chart is
    /// left untouched.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let rows = load_rows(path)?;
        let analysis = analyze(&rows).with_context(|| format!("analysing {}", path.display()))?;
        log::info!(
            "Loaded {} readings from {}: temperature {}, dates {}",
            analysis.dataset.len(),
            path.display(),
            analysis.values,
            analysis.dates
        );

        self.chart = Some(LoadedChart::new(path.to_path_buf(), analysis, &self.config));
        self.status_message = None;
        Ok(())
    }

    /// [`load_path`](Self::load_path), reporting failure through the status line.
    pub fn open(&mut self, path: &Path) {
        if let Err(e) = self.load_path(path) {
            log::error!("Failed to load file: {e:#}");
            self.status_message = Some(format!("Error: {e:#}"));
        }
    }

    /// Click handler: flip the orientation and retarget every point.
    ///
    /// A transition that already ran out but has not been ticked yet is
    /// completed first, so its axis redraw is not lost to the new one.
    pub fn toggle(&mut self, now: f64) {
        self.frame(now);

        let width = self.dimensions().width;
        let Some(chart) = self.chart.as_mut() else {
            return;
        };

        chart.animator.toggle(now, |orientation| {
            chart.scales = chart.scales.with_orientation(orientation, width);
            x_positions(&chart.analysis.dataset, &chart.scales)
                .into_iter()
                .zip(&chart.points)
                .map(|(x, p)| (x, p.y))
                .collect()
        });
    }

    /// Advance the animation to `now`, redrawing the month labels when the
    /// newest transition reports completion.
    pub fn frame(&mut self, now: f64) -> Option<Frame> {
        let chart = self.chart.as_mut()?;
        let frame = chart.animator.tick(now);
        if let Some(redraw) = frame.axis_redraw {
            if redraw.generation != chart.animator.generation() {
                log::warn!(
                    "dropping axis redraw for transition {}, current is {}",
                    redraw.generation,
                    chart.animator.generation()
                );
                return Some(frame);
            }
            debug_assert_eq!(redraw.orientation, chart.scales.orientation);
            chart.x_ticks = month_ticks(&chart.scales.x);
        }
        Some(frame)
    }

    /// Temperature under a plot-area y coordinate, for the hover readout.
    pub fn temperature_at(&self, y: f64) -> Option<f64> {
        self.chart.as_ref()?.scales.y.invert(y)
    }
}
