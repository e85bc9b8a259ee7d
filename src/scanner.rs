//! Directory scanner.
//!
//! Enumerates regular files directly inside a directory and reports those whose extension is
//! loadable. Unrecognized extensions are silently omitted: this is an inclusion filter for the
//! load adapter, not a validation step.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ProcessingError, ProcessingResult};

/// Extensions the load adapter has a strategy for.
///
/// Adding a new loadable format means adding the extension here *and* a strategy branch in
/// [`crate::loading`].
pub const LOADABLE_EXTENSIONS: &[&str] = &["xls", "xlsx", "csv", "txt", "eml", "html"];

/// True if `ext` (case-insensitive) is a loadable extension.
pub fn is_loadable_extension(ext: &str) -> bool {
    let lower = ext.to_ascii_lowercase();
    LOADABLE_EXTENSIONS.contains(&lower.as_str())
}

/// List loadable files directly inside `dir`.
///
/// Returns one entry per regular file whose extension is in [`LOADABLE_EXTENSIONS`], keyed by
/// full path with the lowercased extension as value (shape: `{path: ["xlsx"]}`). Does not
/// recurse into subdirectories.
///
/// # Errors
///
/// [`ProcessingError::DirectoryNotFound`] if `dir` does not exist or is not a directory;
/// [`ProcessingError::Io`] if the listing itself fails.
pub fn list_files(dir: impl AsRef<Path>) -> ProcessingResult<BTreeMap<PathBuf, Vec<String>>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ProcessingError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => ProcessingError::Io(io),
            None => ProcessingError::DirectoryNotFound {
                path: dir.to_path_buf(),
            },
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let ext = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        if let Some(ext) = ext {
            if LOADABLE_EXTENSIONS.contains(&ext.as_str()) {
                files.insert(entry.path().to_path_buf(), vec![ext]);
            }
        }
    }

    Ok(files)
}
