use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ProcessingError;
use crate::scanner::LOADABLE_EXTENSIONS;

use super::unified::LoadFormat;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path being loaded.
    pub path: PathBuf,
    /// Format strategy used for the load.
    pub format: LoadFormat,
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded rows.
    pub rows: usize,
    /// Number of loaded columns.
    pub columns: usize,
}

/// Observer interface for load and dispatch outcomes.
///
/// Implementors can record session logs, metrics, or surface operator-facing status lines.
pub trait PipelineObserver: Send + Sync {
    /// Called when a file loads successfully.
    fn on_load_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_load_failure(&self, _ctx: &LoadContext, _severity: Severity, _error: &ProcessingError) {}

    /// Called for non-fatal load anomalies (e.g. extra worksheets ignored).
    fn on_warning(&self, _ctx: &LoadContext, _message: &str) {}

    /// Called when a file's routine ran and produced a dataset.
    fn on_process_success(&self, _file: &str) {}

    /// Called when dispatch matched no routine and fell back to the empty-dataset sentinel.
    fn on_process_skipped(&self, _file: &str, _reason: &str) {}

    /// Called when dispatch failed (missing config entry, unreadable config document).
    fn on_process_failure(&self, _file: &str, _error: &ProcessingError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_load_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_load_success(ctx, stats);
        }
    }

    fn on_load_failure(&self, ctx: &LoadContext, severity: Severity, error: &ProcessingError) {
        for o in &self.observers {
            o.on_load_failure(ctx, severity, error);
        }
    }

    fn on_warning(&self, ctx: &LoadContext, message: &str) {
        for o in &self.observers {
            o.on_warning(ctx, message);
        }
    }

    fn on_process_success(&self, file: &str) {
        for o in &self.observers {
            o.on_process_success(file);
        }
    }

    fn on_process_skipped(&self, file: &str, reason: &str) {
        for o in &self.observers {
            o.on_process_skipped(file, reason);
        }
    }

    fn on_process_failure(&self, file: &str, error: &ProcessingError) {
        for o in &self.observers {
            o.on_process_failure(file, error);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_load_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] format={:?} path={} rows={} cols={}",
            ctx.format,
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_load_failure(&self, ctx: &LoadContext, severity: Severity, error: &ProcessingError) {
        eprintln!(
            "[load][{:?}] format={:?} path={} err={}",
            severity,
            ctx.format,
            ctx.path.display(),
            error
        );
    }

    fn on_warning(&self, ctx: &LoadContext, message: &str) {
        eprintln!("[load][Warning] path={} {}", ctx.path.display(), message);
    }

    fn on_process_success(&self, file: &str) {
        eprintln!("[process][ok] file={file}");
    }

    fn on_process_skipped(&self, file: &str, reason: &str) {
        eprintln!("[process][skip] file={file} reason={reason}");
    }

    fn on_process_failure(&self, file: &str, error: &ProcessingError) {
        eprintln!("[process][Error] file={file} err={error}");
    }
}

/// Appends pipeline events to a timestamped session log file.
///
/// Mirrors the operator-facing run log: one file per session under a `logs` directory, opened
/// with a header listing the loadable formats.
#[derive(Debug)]
pub struct SessionLogObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SessionLogObserver {
    /// Create a session log under `log_dir` (created if absent) and write its header.
    pub fn create(log_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let path = log_dir.join(format!("log_{}.txt", unix_ts()));
        let mut f = File::create(&path)?;
        writeln!(f, "-- Session Activity ({}) --", unix_ts())?;
        writeln!(f, "File formats that can be loaded:")?;
        for ext in LOADABLE_EXTENSIONS {
            writeln!(f, "\t- {ext}")?;
        }
        writeln!(f)?;

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Path of the session log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, line: &str) {
        // Writes are best-effort; failures to open/write the log file are ignored.
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for SessionLogObserver {
    fn on_load_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} loaded format={:?} path={} rows={} cols={}",
            unix_ts(),
            ctx.format,
            ctx.path.display(),
            stats.rows,
            stats.columns
        ));
    }

    fn on_load_failure(&self, ctx: &LoadContext, severity: Severity, error: &ProcessingError) {
        self.append_line(&format!(
            "{} load-failed severity={:?} format={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.format,
            ctx.path.display(),
            error
        ));
    }

    fn on_warning(&self, ctx: &LoadContext, message: &str) {
        self.append_line(&format!(
            "{} warning path={} {}",
            unix_ts(),
            ctx.path.display(),
            message
        ));
    }

    fn on_process_success(&self, file: &str) {
        self.append_line(&format!("{} processed file={file}", unix_ts()));
    }

    fn on_process_skipped(&self, file: &str, reason: &str) {
        self.append_line(&format!(
            "{} process-skipped file={file} reason={reason}",
            unix_ts()
        ));
    }

    fn on_process_failure(&self, file: &str, error: &ProcessingError) {
        self.append_line(&format!(
            "{} process-failed file={file} err={error}",
            unix_ts()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
