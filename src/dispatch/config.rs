//! Processor configuration document.
//!
//! The document is externally authored YAML mapping a file's logical name (base name including
//! extension) to the capability group and routine that should process it:
//!
//! ```yaml
//! "MyExcel.xlsx":
//!   class: "_fundingcorp"
//!   method: "avg_bal_tb"
//! ```
//!
//! The document is read fresh on every dispatch call, never cached and never mutated.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ProcessingResult;

use super::ProcessorRegistry;

/// A single configuration entry: which routine of which capability group handles a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessorRef {
    /// Capability group identifier.
    pub class: String,
    /// Routine identifier within the group.
    pub method: String,
}

/// Parse the configuration document at `path` into a logical-name → [`ProcessorRef`] map.
///
/// Lookups against this map are exact string matches on the logical file name; no globbing or
/// fuzzy resolution.
pub fn read_processor_map(
    path: impl AsRef<Path>,
) -> ProcessingResult<BTreeMap<String, ProcessorRef>> {
    let text = fs::read_to_string(path)?;
    let map: BTreeMap<String, ProcessorRef> = serde_yaml::from_str(&text)?;
    Ok(map)
}

/// A configuration entry referencing an identifier the registry does not know.
///
/// These are warnings, not errors: dispatch keeps its no-op-on-mismatch default, but surfacing
/// them at configuration-load time lets operators catch typos before a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Logical file name of the offending entry.
    pub file: String,
    /// Human-readable description of the problem.
    pub message: String,
}

/// Validate a configuration map against a registry, reporting unknown identifiers.
pub fn validate(
    map: &BTreeMap<String, ProcessorRef>,
    registry: &ProcessorRegistry,
) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    for (file, entry) in map {
        if !registry.contains_group(&entry.class) {
            warnings.push(ConfigWarning {
                file: file.clone(),
                message: format!("unknown capability group '{}'", entry.class),
            });
        } else if !registry.contains(&entry.class, &entry.method) {
            warnings.push(ConfigWarning {
                file: file.clone(),
                message: format!(
                    "unknown routine '{}' in capability group '{}'",
                    entry.method, entry.class
                ),
            });
        }
    }
    warnings
}
