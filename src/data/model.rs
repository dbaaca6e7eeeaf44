use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{ChartError, Result};

// ---------------------------------------------------------------------------
// RawRow – one untyped row as handed over by the loader
// ---------------------------------------------------------------------------

/// Column name → cell text.  Columns the chart does not use are kept here
/// but never looked at past parsing.
pub type RawRow = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Record – one typed daily reading
// ---------------------------------------------------------------------------

/// A single day's mean temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub temperature: f64,
}

// ---------------------------------------------------------------------------
// Bound – closed [min, max] interval
// ---------------------------------------------------------------------------

/// A closed interval over a field's values; `min == max` is the degenerate
/// case.  The temperature bound always has `min <= max`.  The date bound
/// only does when rows arrive sorted by date, since it is taken from the
/// first and last row as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialEq> Bound<T> {
    /// Whether the interval collapsed to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

impl<T: fmt::Display> fmt::Display for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded series
// ---------------------------------------------------------------------------

/// Records in file order.  Never empty.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn first(&self) -> &Record {
        &self.records[0]
    }

    pub fn last(&self) -> &Record {
        &self.records[self.records.len() - 1]
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
