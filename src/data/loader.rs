use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::RawRow;
use crate::error::{ChartError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read every row of a weather file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one reading per line
/// * `.json` – `[{ "date": "2014-7-1", "actual_mean_temp": 81, ... }, ...]`
///
/// Rows are returned in file order; nothing is typed or validated here.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(ChartError::load(
            path,
            format!("unsupported file extension: .{other}"),
        )),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ChartError::load(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ChartError::load(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ChartError::load(path, e))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    log::debug!("read {} CSV rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the layout `df.to_json(orient='records')` writes.
/// Scalars are stringified so the analyzer sees the same text a CSV would give.
fn load_json(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path).map_err(|e| ChartError::load(path, e))?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|e| ChartError::load(path, e))?;

    let records = root
        .as_array()
        .ok_or_else(|| ChartError::load(path, "expected top-level JSON array"))?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| -> Result<RawRow> {
            let obj = rec
                .as_object()
                .ok_or_else(|| ChartError::load(path, format!("row {i} is not a JSON object")))?;
            Ok(obj
                .iter()
                .filter_map(|(k, v)| json_to_cell(v).map(|s| (k.clone(), s)))
                .collect())
        })
        .collect()
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("weather-scatter-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_rows_keep_file_order_and_all_columns() {
        let path = write_temp(
            "order.csv",
            "date,actual_mean_temp,actual_min_temp\n2014-7-1,81,72\n2014-7-2,85,74\n",
        );
        let rows = load_rows(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "2014-7-1");
        assert_eq!(rows[1]["actual_mean_temp"], "85");
        assert_eq!(rows[1]["actual_min_temp"], "74");
    }

    #[test]
    fn json_numbers_are_stringified() {
        let path = write_temp(
            "rows.json",
            r#"[{"date": "2014-7-1", "actual_mean_temp": -3.5, "note": null}]"#,
        );
        let rows = load_rows(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rows[0]["actual_mean_temp"], "-3.5");
        assert!(!rows[0].contains_key("note"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_rows(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ChartError::Load { .. }));
    }

    #[test]
    fn unknown_extension_is_a_load_error() {
        let err = load_rows(Path::new("weather.xlsx")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }
}
