//! `FileProcessor`: the caller-facing surface tying scanner, load adapter and dispatcher
//! together for one directory of files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dispatch::ProcessorRegistry;
use crate::error::ProcessingResult;
use crate::loading::{load_from_path, LoadOptions, PipelineObserver};
use crate::scanner::{self, LOADABLE_EXTENSIONS};
use crate::types::DataSet;

/// Processes files for upload to a data warehouse.
///
/// Given a directory, lists its loadable files, loads each into a [`DataSet`], and runs the
/// routine the configuration document declares for it. Everything is synchronous and driven by
/// explicit caller action, one file at a time.
///
/// ```no_run
/// use fileproc::FileProcessor;
///
/// # fn main() -> Result<(), fileproc::ProcessingError> {
/// let processor = FileProcessor::new("reports/FilesForUpload");
/// let config = "reports/processors/processors.yml";
///
/// for (file, exts) in processor.files()? {
///     let df = processor.load(&file, &exts[0])?;
///     let df = processor.process(&file, df, config)?;
///     println!("{}: {} rows", file.display(), df.row_count());
/// }
/// # Ok(())
/// # }
/// ```
pub struct FileProcessor {
    dpath: PathBuf,
    registry: ProcessorRegistry,
    observer: Option<Arc<dyn PipelineObserver>>,
}

impl FileProcessor {
    /// Create a processor over `dpath` with the shipped capability groups registered.
    pub fn new(dpath: impl Into<PathBuf>) -> Self {
        Self {
            dpath: dpath.into(),
            registry: ProcessorRegistry::with_builtin_groups(),
            observer: None,
        }
    }

    /// Replace the routine registry (e.g. to add custom capability groups).
    pub fn with_registry(mut self, registry: ProcessorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Attach an observer for session logging.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The routine registry in use.
    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Extensions the load adapter has a strategy for.
    pub fn loadable_formats(&self) -> &'static [&'static str] {
        LOADABLE_EXTENSIONS
    }

    /// List loadable files in the processor's directory, keyed by path with their extension.
    pub fn files(&self) -> ProcessingResult<BTreeMap<PathBuf, Vec<String>>> {
        scanner::list_files(&self.dpath)
    }

    /// Load one file into a [`DataSet`] using the strategy for `extension`.
    pub fn load(&self, path: impl AsRef<Path>, extension: &str) -> ProcessingResult<DataSet> {
        let options = LoadOptions {
            observer: self.observer.clone(),
        };
        load_from_path(path, extension, &options)
    }

    /// Process a loaded [`DataSet`] through the routine configured for the file.
    ///
    /// The logical name used for the configuration lookup is the base file name of `path`
    /// (including extension), matching the document's top-level keys. The document at
    /// `config_path` is re-read on every call.
    pub fn process(
        &self,
        path: impl AsRef<Path>,
        dataset: DataSet,
        config_path: impl AsRef<Path>,
    ) -> ProcessingResult<DataSet> {
        let path = path.as_ref();
        let logical_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        let result = self.registry.process(logical_name, dataset, config_path);

        if let Some(obs) = self.observer.as_ref() {
            match &result {
                Ok(ds) if ds.is_empty() => {
                    obs.on_process_skipped(logical_name, "no routine matched; add it to the data source's capability group");
                }
                Ok(_) => obs.on_process_success(logical_name),
                Err(e) => obs.on_process_failure(logical_name, e),
            }
        }

        result
    }
}
