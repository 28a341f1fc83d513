//! CSV reading operations.

use std::io::Cursor;

use anyhow::{Context, Result, anyhow, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, DataType}};

use crate::metrics::MetricRecord;

/// Columns every metrics table must carry; extra columns are ignored.
pub(crate) const METRIC_COLUMNS: [&str; 5] = ["state", "value", "level1", "level2", "fast"];

/// Reads CSV bytes into a DataFrame with every column kept as text.
pub(crate) fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .context("[io::csv::read] Failed to read CSV from bytes")
}

/// Parse the station table: one record per row, numeric columns cast to f64.
pub(crate) fn read_metric_records(bytes: &[u8]) -> Result<Vec<MetricRecord>> {
    let df = read_csv_bytes(bytes)?;

    let names = df.get_column_names();
    for required in METRIC_COLUMNS {
        ensure!(names.iter().any(|name| name.as_str() == required),
            "[io::csv::read] CSV is missing column {required:?} (found: {})",
            names.iter().map(|name| name.as_str()).collect::<Vec<_>>().join(", "));
    }

    let states = df.column("state")?.str()?
        .into_iter()
        .enumerate()
        .map(|(row, state)| state
            .map(str::to_string)
            .ok_or_else(|| anyhow!("[io::csv::read] row {}: empty state name", row + 1)))
        .collect::<Result<Vec<_>>>()?;

    let value = numeric_column(&df, "value")?;
    let level1 = numeric_column(&df, "level1")?;
    let level2 = numeric_column(&df, "level2")?;
    let fast = numeric_column(&df, "fast")?;

    Ok(states.into_iter().enumerate()
        .map(|(i, state)| MetricRecord::new(state, value[i], level1[i], level2[i], fast[i]))
        .collect())
}

/// Cast a text column to f64, rejecting cells that do not parse.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] missing column {name:?}"))?;
    let raw = column.str()?;
    let cast = column.cast(&DataType::Float64)
        .with_context(|| format!("[io::csv::read] column {name:?} is not numeric"))?;

    raw.into_iter()
        .zip(cast.f64()?.into_iter())
        .enumerate()
        .map(|(row, (text, value))| value.ok_or_else(|| anyhow!(
            "[io::csv::read] row {}: column {name:?} is not a number: {:?}",
            row + 1,
            text.unwrap_or(""),
        )))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_station_table() {
        let csv = b"state,value,level1,level2,fast\n\
            Alabama,383,4,301,78\n\
            Alaska,64,2,47,15\n";
        let records = read_metric_records(csv).unwrap();

        assert_eq!(records, vec![
            MetricRecord::new("Alabama", 383.0, 4.0, 301.0, 78.0),
            MetricRecord::new("Alaska", 64.0, 2.0, 47.0, 15.0),
        ]);
    }

    #[test]
    fn extra_columns_and_order_do_not_matter() {
        let csv = b"fast,level2,level1,value,state,abbr\n\
            5,40,1,46,Vermont,VT\n";
        let records = read_metric_records(csv).unwrap();
        assert_eq!(records, vec![MetricRecord::new("Vermont", 46.0, 1.0, 40.0, 5.0)]);
    }

    #[test]
    fn decimal_values_parse() {
        let csv = b"state,value,level1,level2,fast\nOhio,12.5,0.5,10,2\n";
        let records = read_metric_records(csv).unwrap();
        assert_eq!(records[0].metrics.value, 12.5);
        assert_eq!(records[0].metrics.level1, 0.5);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = b"state,value,level1,level2\nOhio,1,2,3\n";
        let err = read_metric_records(csv).unwrap_err();
        assert!(err.to_string().contains("\"fast\""), "{err}");
    }

    #[test]
    fn non_numeric_cell_names_the_row() {
        let csv = b"state,value,level1,level2,fast\nOhio,1,2,3,4\nIowa,lots,2,3,4\n";
        let err = read_metric_records(csv).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("row 2") && message.contains("lots"), "{message}");
    }

    #[test]
    fn header_only_yields_no_records() {
        let csv = b"state,value,level1,level2,fast\n";
        assert!(read_metric_records(csv).unwrap().is_empty());
    }
}
