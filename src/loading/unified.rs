//! Unified load entrypoint.
//!
//! Most callers should use [`load_from_path`], which loads a flat file into an in-memory
//! [`crate::types::DataSet`] using the format strategy selected by the file's extension.
//!
//! - The extension must be in the recognized set (see
//!   [`crate::scanner::LOADABLE_EXTENSIONS`]); anything else fails with
//!   [`crate::error::ProcessingError::UnsupportedFormat`].
//! - If an [`super::observability::PipelineObserver`] is provided, success/failure is reported
//!   to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

use super::observability::{LoadContext, LoadStats, PipelineObserver, Severity};
use super::{delimited, excel, mail};

/// Format strategies of the load adapter.
///
/// The mapping from extension to strategy is closed and exhaustive over the recognized set:
/// adding an extension means adding it to [`crate::scanner::LOADABLE_EXTENSIONS`] and routing
/// it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// Spreadsheet/workbook formats (`.xls`, `.xlsx`).
    Excel,
    /// Delimited text (`.csv` comma, `.txt` tab).
    Delimited,
    /// Mail/HTML exports carrying tables (`.eml`, `.html`).
    Mail,
}

impl LoadFormat {
    /// Parse a load format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xls" | "xlsx" => Some(Self::Excel),
            "csv" | "txt" => Some(Self::Delimited),
            "eml" | "html" => Some(Self::Mail),
            _ => None,
        }
    }
}

/// Options controlling unified load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Optional observer for session logging.
    pub observer: Option<Arc<dyn PipelineObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Load a flat file into an in-memory [`DataSet`].
///
/// `extension` selects the format strategy (it is passed explicitly rather than re-derived so
/// callers can feed the scanner's output straight in). The file content is read fully into
/// memory; there is no streaming.
///
/// When an observer is configured, this function reports `on_load_success` with row/column
/// stats, or `on_load_failure` with a computed severity (I/O failures are
/// [`Severity::Critical`], format/parse failures are [`Severity::Error`]).
///
/// # Examples
///
/// ```no_run
/// use fileproc::loading::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), fileproc::ProcessingError> {
/// let ds = load_from_path("reports/MyExcel.xlsx", "xlsx", &LoadOptions::default())?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(
    path: impl AsRef<Path>,
    extension: &str,
    options: &LoadOptions,
) -> ProcessingResult<DataSet> {
    let path = path.as_ref();
    let Some(format) = LoadFormat::from_extension(extension) else {
        return Err(ProcessingError::UnsupportedFormat {
            extension: extension.to_string(),
            path: path.to_path_buf(),
        });
    };

    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        LoadFormat::Excel => excel::load_excel_inner(path).map(|(ds, warning)| {
            if let (Some(obs), Some(message)) = (options.observer.as_ref(), warning) {
                obs.on_warning(&ctx, &message);
            }
            ds
        }),
        LoadFormat::Delimited => delimited::load_delimited_from_path(path, extension),
        LoadFormat::Mail => mail::load_mail_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_load_success(
                &ctx,
                LoadStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => obs.on_load_failure(&ctx, severity_for_error(e), e),
        }
    }

    result
}

fn severity_for_error(e: &ProcessingError) -> Severity {
    match e {
        ProcessingError::Io(_) => Severity::Critical,
        ProcessingError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        ProcessingError::Excel(calamine::Error::Io(_)) => Severity::Critical,
        _ => Severity::Error,
    }
}
