use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const SEED: u64 = 42;
const DAYS: usize = 365;

/// Seasonal mean temperature (°F) for a day of the year, warmest mid-July.
fn seasonal_mean(day_of_year: u32) -> f64 {
    let phase = (day_of_year as f64 - 196.0) / 365.25 * 2.0 * std::f64::consts::PI;
    61.0 + 19.0 * phase.cos()
}

/// One day of synthetic readings, whole degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Reading {
    mean: f64,
    min: f64,
    max: f64,
}

/// Daily weather as a seasonal curve plus a persistent anomaly.
struct Weather {
    rng: StdRng,
    anomaly: f64,
    noise: Normal<f64>,
    spread: Normal<f64>,
}

impl Weather {
    fn new(seed: u64) -> Result<Self> {
        Ok(Weather {
            rng: StdRng::seed_from_u64(seed),
            anomaly: 0.0,
            noise: Normal::new(0.0, 4.0).context("anomaly distribution")?,
            spread: Normal::new(10.0, 2.0).context("spread distribution")?,
        })
    }

    /// Today's anomaly drifts from yesterday's.
    fn next(&mut self, date: NaiveDate) -> Reading {
        self.anomaly = 0.7 * self.anomaly + self.noise.sample(&mut self.rng);
        let mean = (seasonal_mean(date.ordinal()) + self.anomaly).round();
        let spread = self.spread.sample(&mut self.rng).abs().round();
        Reading {
            mean,
            min: mean - spread,
            max: mean + spread,
        }
    }
}

fn main() -> Result<()> {
    let mut weather = Weather::new(SEED)?;
    let start = NaiveDate::from_ymd_opt(2014, 7, 1).context("invalid start date")?;

    // Keep in sync with the viewer's default data path.
    let output_path = "sample_weather.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["date", "actual_mean_temp", "actual_min_temp", "actual_max_temp"])?;

    for date in start.iter_days().take(DAYS) {
        let r = weather.next(date);
        // Unpadded month/day, the way the KCLT export writes dates.
        writer.write_record([
            format!("{}-{}-{}", date.year(), date.month(), date.day()),
            format!("{}", r.mean),
            format!("{}", r.min),
            format!("{}", r.max),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {DAYS} daily readings starting {start} to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(seed: u64) -> Vec<Reading> {
        let mut weather = Weather::new(seed).unwrap();
        let start = NaiveDate::from_ymd_opt(2014, 7, 1).unwrap();
        start.iter_days().take(DAYS).map(|d| weather.next(d)).collect()
    }

    #[test]
    fn seasonal_curve_peaks_in_july() {
        let july = seasonal_mean(196);
        let january = seasonal_mean(15);
        assert!((july - 80.0).abs() < 1e-9);
        assert!(january < 45.0);
        assert!((1..=366).all(|d| seasonal_mean(d) <= july));
    }

    #[test]
    fn same_seed_same_year() {
        assert_eq!(year(SEED), year(SEED));
        assert_ne!(year(SEED), year(SEED + 1));
    }

    #[test]
    fn readings_are_ordered_whole_degrees() {
        for r in year(SEED) {
            assert!(r.min <= r.mean && r.mean <= r.max, "{r:?}");
            assert_eq!(r.mean.fract(), 0.0);
            assert_eq!(r.max - r.mean, r.mean - r.min);
        }
    }
}
