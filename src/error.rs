use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for scanning, loading and dispatch operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type shared across the scanner, the load adapter and the dispatcher.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan target does not exist or is not a directory.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The file extension is not in the recognized set.
    #[error("'{extension}' is not a loadable format ({})", path.display())]
    UnsupportedFormat { extension: String, path: PathBuf },

    /// Excel/workbook load error.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Delimited-text load error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Processor configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The configuration document has no entry for the file's logical name.
    #[error("no processor entry for '{file}' in {}", config_path.display())]
    ProcessorNotConfigured { file: String, config_path: PathBuf },

    /// The input file is structurally unusable (e.g. a mail export without tables).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}
