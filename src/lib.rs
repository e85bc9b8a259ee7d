//! `fileproc` is a small library for onboarding file-based data sources: it scans a directory
//! for flat files (spreadsheets, delimited text, mail exports), loads each into an in-memory
//! [`types::DataSet`], and dispatches the dataset to a user-declared processing routine via an
//! externally supplied configuration document.
//!
//! The primary entrypoint is [`FileProcessor`], which ties the three steps together; each step
//! is also available standalone ([`scanner::list_files`], [`loading::load_from_path`],
//! [`dispatch::ProcessorRegistry::process`]).
//!
//! ## What you can load
//!
//! **File formats (selected by extension):**
//!
//! - **Excel workbooks**: `.xls`, `.xlsx`
//! - **Delimited text**: `.csv` (comma), `.txt` (tab)
//! - **Mail/HTML exports**: `.eml`, `.html` (largest `<table>` in the document)
//!
//! Loading is schema-less: the file's header row names the columns and each cell becomes a
//! typed [`types::Value`] (`Int64`, `Float64`, `Bool`, `Utf8`, with empties as `Null`).
//!
//! ## Quick example
//!
//! ```no_run
//! use fileproc::FileProcessor;
//!
//! # fn main() -> Result<(), fileproc::ProcessingError> {
//! let processor = FileProcessor::new("FilesForUpload");
//! let config = "processors/processors.yml";
//!
//! for (file, exts) in processor.files()? {
//!     let df = processor.load(&file, &exts[0])?;
//!     let df = processor.process(&file, df, config)?;
//!     if df.is_empty() {
//!         eprintln!("no processing applied to {}", file.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## The configuration document
//!
//! YAML keyed by logical file name (exact base name including extension), declaring which
//! capability group and routine handles the file:
//!
//! ```yaml
//! "MyExcel.xlsx":
//!   class: "_fundingcorp"
//!   method: "avg_bal_tb"
//! ```
//!
//! A missing entry for a processed file is a configuration error. An entry whose `method`
//! matches no registered routine degrades to the empty-dataset sentinel (zero rows, zero
//! columns) so a batch keeps running; use [`dispatch::config::validate`] to surface such
//! entries as warnings up front.
//!
//! ## Modules
//!
//! - [`scanner`]: directory listing filtered to loadable extensions
//! - [`loading`]: the load adapter over heterogeneous file formats, plus session-log observers
//! - [`dispatch`]: the processor registry, configuration reader and capability groups
//! - [`processor`]: the [`FileProcessor`] facade
//! - [`types`]: in-memory dataset types
//! - [`error`]: the shared error type

pub mod dispatch;
pub mod error;
pub mod loading;
pub mod processor;
pub mod scanner;
pub mod types;

pub use error::{ProcessingError, ProcessingResult};
pub use processor::FileProcessor;
