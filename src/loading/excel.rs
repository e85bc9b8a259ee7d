//! Excel/workbook load strategy.
//!
//! Behavior:
//! - Sheets whose names start with `"Sheet"` (editor defaults) are ignored.
//! - The first remaining sheet is loaded; if several exist, only the first is used and a
//!   warning is surfaced to the caller.
//! - A workbook with no usable sheets yields [`DataSet::empty`].
//! - The first non-empty row of the sheet is the header row.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::ProcessingResult;
use crate::types::{DataSet, Value};

/// Load an Excel workbook (`.xls`, `.xlsx`) into an in-memory [`DataSet`].
pub fn load_excel_from_path(path: impl AsRef<Path>) -> ProcessingResult<DataSet> {
    load_excel_inner(path).map(|(ds, _)| ds)
}

/// Workbook load returning an optional non-fatal warning alongside the dataset.
pub(crate) fn load_excel_inner(
    path: impl AsRef<Path>,
) -> ProcessingResult<(DataSet, Option<String>)> {
    let mut workbook = open_workbook_auto(path)?;

    let named: Vec<String> = workbook
        .sheet_names()
        .iter()
        .filter(|name| !name.starts_with("Sheet"))
        .cloned()
        .collect();

    let (sheet, warning) = match named.as_slice() {
        [] => return Ok((DataSet::empty(), None)),
        [only] => (only.clone(), None),
        [first, ..] => (
            first.clone(),
            Some(format!(
                "multiple worksheets detected ({}); only '{first}' was loaded",
                named.len()
            )),
        ),
    };

    let range = workbook.worksheet_range(&sheet)?;
    Ok((load_sheet_range(&range), warning))
}

fn load_sheet_range(range: &calamine::Range<Data>) -> DataSet {
    let mut header_row_idx: Option<usize> = None;
    let mut columns: Vec<String> = Vec::new();

    for (idx0, row) in range.rows().enumerate() {
        if row.iter().any(|c| !matches!(c, Data::Empty)) {
            header_row_idx = Some(idx0);
            columns = row.iter().map(cell_to_header_string).collect();
            break;
        }
    }

    let Some(header_row_idx) = header_row_idx else {
        return DataSet::empty();
    };

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (idx0, row) in range.rows().enumerate() {
        if idx0 <= header_row_idx {
            continue;
        }
        let out_row: Vec<Value> = (0..columns.len())
            .map(|col_idx| convert_cell(row.get(col_idx).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out_row);
    }

    DataSet::new(columns, rows)
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}

fn convert_cell(c: &Data) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::String(s) => {
            if s.trim().is_empty() {
                Value::Null
            } else {
                Value::Utf8(s.clone())
            }
        }
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => Value::Float64(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(f) => Value::Utf8(f.to_string()),
        Data::DateTimeIso(s) => Value::Utf8(s.clone()),
        Data::DurationIso(s) => Value::Utf8(s.clone()),
        Data::Error(e) => Value::Utf8(format!("{e:?}")),
    }
}
