use chrono::NaiveDate;

use super::model::{Bound, Dataset, RawRow, Record};
use crate::error::{ChartError, Result};

pub const DATE_COLUMN: &str = "date";
pub const TEMPERATURE_COLUMN: &str = "actual_mean_temp";

/// Accepted date layouts.  `%m`/`%d` also match unpadded fields, which is
/// what the KCLT export uses (`2014-7-1`).
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Typed dataset plus the two domains the scales are built from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dataset: Dataset,
    pub values: Bound<f64>,
    pub dates: Bound<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse raw rows and compute the temperature and date bounds.
///
/// The temperature bound is a single scan seeded from the first record.
/// The date bound is `(first.date, last.date)`: rows are expected to arrive
/// sorted by date and are not re-sorted here.
pub fn analyze(rows: &[RawRow]) -> Result<Analysis> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect::<Result<Vec<_>>>()?;

    let dataset = Dataset::new(records)?;
    let values = value_bound(dataset.records());

    let dates = Bound {
        min: dataset.first().date,
        max: dataset.last().date,
    };
    if dates.max < dates.min {
        log::warn!(
            "rows are not sorted by date ({} comes before {}); x axis will run backwards",
            dates.min,
            dates.max
        );
    }

    Ok(Analysis {
        dataset,
        values,
        dates,
    })
}

fn value_bound(records: &[Record]) -> Bound<f64> {
    let seed = records[0].temperature;
    let mut bound = Bound { min: seed, max: seed };
    for r in &records[1..] {
        if r.temperature < bound.min {
            bound.min = r.temperature;
        }
        if r.temperature > bound.max {
            bound.max = r.temperature;
        }
    }
    bound
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

fn parse_row(i: usize, row: &RawRow) -> Result<Record> {
    let date_text = cell(i, row, DATE_COLUMN)?;
    let date = parse_date(date_text).ok_or_else(|| ChartError::parse(i, DATE_COLUMN, date_text))?;

    let temp_text = cell(i, row, TEMPERATURE_COLUMN)?;
    let temperature = temp_text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| ChartError::parse(i, TEMPERATURE_COLUMN, temp_text))?;

    Ok(Record { date, temperature })
}

fn cell<'a>(i: usize, row: &'a RawRow, column: &str) -> Result<&'a str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| ChartError::parse(i, column, ""))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
