use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::ChartDimensions;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "WEATHER_SCATTER_CONFIG";

/// Where `generate_sample` writes its output; opened when nothing else is given.
pub const SAMPLE_DATA_PATH: &str = "sample_weather.csv";

// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

/// Space between the canvas edge and the plot area, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// Everything about the chart that is fixed for one session.
/// Every field may be omitted from the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total canvas width including margins.
    pub width: f64,
    /// Total canvas height including margins.
    pub height: f64,
    pub margin: Margin,
    /// Length of the re-layout animation.
    pub transition_ms: u64,
    /// Edge length of each square point marker.
    pub marker_size: f64,
    /// File opened on startup.
    pub data_path: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 840.0,
            height: 420.0,
            margin: Margin::default(),
            transition_ms: 2000,
            marker_size: 2.0,
            data_path: PathBuf::from(SAMPLE_DATA_PATH),
        }
    }
}

impl ChartConfig {
    /// Read the file named by [`CONFIG_ENV`], or fall back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Size of the plot area inside the margins.
    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_canvas(self.width, self.height, &self.margin)
    }

    pub fn transition_secs(&self) -> f64 {
        self.transition_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_chart() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.dimensions(), ChartDimensions { width: 780.0, height: 360.0 });
        assert_eq!(cfg.transition_secs(), 2.0);
        assert_eq!(cfg.marker_size, 2.0);
        assert_eq!(cfg.data_path, PathBuf::from("sample_weather.csv"));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{ "width": 1000, "transition_ms": 500 }"#).unwrap();
        assert_eq!(cfg.width, 1000.0);
        assert_eq!(cfg.height, 420.0);
        assert_eq!(cfg.transition_ms, 500);
        assert_eq!(cfg.margin, Margin::default());
    }

    #[test]
    fn missing_config_file_has_context() {
        let err = ChartConfig::from_file(Path::new("/no/such/config.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
