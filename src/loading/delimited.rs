//! Delimited-text load strategy.
//!
//! `.csv` files are comma-delimited, `.txt` files are tab-delimited. The first record is the
//! header row; cell values are typed via [`Value::infer`].

use std::path::Path;

use crate::error::ProcessingResult;
use crate::types::{DataSet, Value};

/// Load a delimited-text file into an in-memory [`DataSet`].
///
/// The delimiter is chosen from the extension (`txt` → tab, anything else → comma). A file
/// with no records yields [`DataSet::empty`].
pub fn load_delimited_from_path(
    path: impl AsRef<Path>,
    extension: &str,
) -> ProcessingResult<DataSet> {
    let delimiter = if extension.eq_ignore_ascii_case("txt") {
        b'\t'
    } else {
        b','
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)?;
    load_delimited_from_reader(&mut rdr)
}

/// Load delimited data from an existing CSV reader.
pub fn load_delimited_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ProcessingResult<DataSet> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(DataSet::empty());
    }
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Vec<Value> = (0..columns.len())
            .map(|idx| Value::infer(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(DataSet::new(columns, rows))
}
