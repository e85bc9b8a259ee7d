//! Mail/HTML-export load strategy.
//!
//! Mail exports (`.eml`) and saved HTML reports usually carry the payload as one of several
//! `<table>` elements (navigation chrome, footers, then the actual data). The strategy here
//! matches the usual "read the HTML tables and keep the biggest" convention: pick the table
//! with the largest `rows × cols` area, treat its first row as the header, and type the
//! remaining cells via [`Value::infer`].

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{DataSet, Value};

/// Load a mail/HTML export into a [`DataSet`] by extracting its largest table.
pub fn load_mail_from_path(path: impl AsRef<Path>) -> ProcessingResult<DataSet> {
    let text = fs::read_to_string(path)?;
    load_mail_from_str(&text)
}

/// Load the largest HTML table from an in-memory document into a [`DataSet`].
pub fn load_mail_from_str(input: &str) -> ProcessingResult<DataSet> {
    let document = Html::parse_document(input);
    let table_sel = Selector::parse("table").unwrap();
    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("th, td").unwrap();

    let mut best: Option<(usize, Vec<Vec<String>>)> = None;
    for table in document.select(&table_sel) {
        let grid = table_to_grid(&table, &row_sel, &cell_sel);
        let area = grid.len() * grid.first().map_or(0, Vec::len);
        if best.as_ref().is_none_or(|(best_area, _)| area > *best_area) {
            best = Some((area, grid));
        }
    }

    let Some((_, grid)) = best else {
        return Err(ProcessingError::InvalidInput {
            message: "no tables found in document".to_string(),
        });
    };

    let mut rows_iter = grid.into_iter();
    let Some(header) = rows_iter.next() else {
        return Ok(DataSet::empty());
    };
    let columns: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    let rows: Vec<Vec<Value>> = rows_iter
        .map(|cells| {
            (0..columns.len())
                .map(|idx| Value::infer(cells.get(idx).map_or("", String::as_str)))
                .collect()
        })
        .collect();

    Ok(DataSet::new(columns, rows))
}

fn table_to_grid(table: &ElementRef<'_>, row_sel: &Selector, cell_sel: &Selector) -> Vec<Vec<String>> {
    table
        .select(row_sel)
        .map(|tr| {
            tr.select(cell_sel)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::load_mail_from_str;
    use crate::types::Value;

    #[test]
    fn picks_the_largest_table() {
        let html = r#"
            <html><body>
              <table><tr><td>nav</td></tr></table>
              <table>
                <tr><th>id</th><th>name</th></tr>
                <tr><td>1</td><td>Ada</td></tr>
                <tr><td>2</td><td>Grace</td></tr>
              </table>
            </body></html>
        "#;
        let ds = load_mail_from_str(html).unwrap();
        assert_eq!(ds.columns, vec!["id", "name"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows[1], vec![Value::Int64(2), Value::Utf8("Grace".to_string())]);
    }

    #[test]
    fn errors_when_no_tables_present() {
        let err = load_mail_from_str("<html><body><p>hi</p></body></html>").unwrap_err();
        assert!(err.to_string().contains("no tables found"));
    }
}
