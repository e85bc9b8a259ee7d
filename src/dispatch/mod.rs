//! Processor dispatch: resolve a file's logical name to a named routine and run it.
//!
//! Capability groups (named bundles of data-source-specific routines) are registered
//! explicitly in a [`ProcessorRegistry`] at startup; dispatch is a single
//! `(group, routine)` lookup driven by the externally supplied configuration document.
//!
//! Extensibility contract: adding a new data source means registering a new group and its
//! routines (see [`ProcessorRegistry::register`]) and adding configuration entries referencing
//! them. The dispatch skeleton itself never changes.
//!
//! ```rust
//! use fileproc::dispatch::ProcessorRegistry;
//! use fileproc::types::DataSet;
//!
//! let mut registry = ProcessorRegistry::with_builtin_groups();
//! registry.register("_acmebank", "daily_positions", |ds: DataSet| {
//!     // source-specific reshaping goes here
//!     ds
//! });
//! assert!(registry.contains("_acmebank", "daily_positions"));
//! ```

pub mod config;
pub mod fundingcorp;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

pub use config::{read_processor_map, validate, ConfigWarning, ProcessorRef};

/// A named transform from [`DataSet`] to [`DataSet`].
pub type Routine = Box<dyn Fn(DataSet) -> DataSet + Send + Sync>;

/// Registry mapping `(group, routine)` identifiers to concrete transforms.
#[derive(Default)]
pub struct ProcessorRegistry {
    routines: BTreeMap<(String, String), Routine>,
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("routines", &self.routines.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ProcessorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the shipped capability groups.
    pub fn with_builtin_groups() -> Self {
        let mut registry = Self::new();
        fundingcorp::register(&mut registry);
        registry
    }

    /// Register a routine under a capability group.
    ///
    /// Re-registering the same `(group, routine)` pair replaces the previous transform.
    pub fn register<F>(&mut self, group: impl Into<String>, routine: impl Into<String>, f: F)
    where
        F: Fn(DataSet) -> DataSet + Send + Sync + 'static,
    {
        self.routines
            .insert((group.into(), routine.into()), Box::new(f));
    }

    /// True if any routine is registered under `group`.
    pub fn contains_group(&self, group: &str) -> bool {
        self.routines.keys().any(|(g, _)| g == group)
    }

    /// True if `(group, routine)` is registered.
    pub fn contains(&self, group: &str, routine: &str) -> bool {
        self.routines
            .contains_key(&(group.to_string(), routine.to_string()))
    }

    /// Registered routine names within `group`, in registration-key order.
    pub fn routine_names(&self, group: &str) -> Vec<&str> {
        self.routines
            .keys()
            .filter(|(g, _)| g == group)
            .map(|(_, r)| r.as_str())
            .collect()
    }

    /// Resolve a file's logical name through the configuration document and run its routine.
    ///
    /// Algorithm:
    ///
    /// 1. Parse the document at `config_path` (read fresh on every call).
    /// 2. Look up the entry keyed exactly by `file_logical_name`; a missing entry is a
    ///    configuration error ([`ProcessingError::ProcessorNotConfigured`]).
    /// 3. Invoke the registered `(class, method)` transform on `dataset`.
    /// 4. If no such transform is registered, return [`DataSet::empty`] instead of failing:
    ///    the empty dataset is the "no processing applied" sentinel, keeping a batch running
    ///    when one file's routine identifier is stale.
    pub fn process(
        &self,
        file_logical_name: &str,
        dataset: DataSet,
        config_path: impl AsRef<Path>,
    ) -> ProcessingResult<DataSet> {
        let config_path = config_path.as_ref();
        let map = config::read_processor_map(config_path)?;

        let entry = map.get(file_logical_name).ok_or_else(|| {
            ProcessingError::ProcessorNotConfigured {
                file: file_logical_name.to_string(),
                config_path: config_path.to_path_buf(),
            }
        })?;

        match self
            .routines
            .get(&(entry.class.clone(), entry.method.clone()))
        {
            Some(routine) => Ok(routine(dataset)),
            None => Ok(DataSet::empty()),
        }
    }
}
