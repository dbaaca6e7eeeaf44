use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Chart errors
// ---------------------------------------------------------------------------

/// Everything that can abort a render attempt.
///
/// All variants are terminal for the current load: the caller keeps whatever
/// chart it was already showing and never sees a partial one.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A row's `date` or `actual_mean_temp` cell is missing or unparseable.
    /// `row` is zero-based and excludes the header line.
    #[error("row {row}: cannot parse column '{column}' from {value:?}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// The source had a header but no data rows.
    #[error("dataset is empty, nothing to chart")]
    EmptyDataset,

    /// The resource could not be read or decoded at all.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ChartError {
    pub fn parse(row: usize, column: &str, value: impl Into<String>) -> Self {
        ChartError::Parse {
            row,
            column: column.to_string(),
            value: value.into(),
        }
    }

    pub fn load(path: impl Into<PathBuf>, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ChartError::Load {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_row_and_column() {
        let err = ChartError::parse(3, "actual_mean_temp", "warm");
        assert_eq!(
            err.to_string(),
            "row 3: cannot parse column 'actual_mean_temp' from \"warm\""
        );
    }

    #[test]
    fn load_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ChartError::load("assets/KCLT.csv", io);
        assert!(err.to_string().starts_with("failed to load assets/KCLT.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
