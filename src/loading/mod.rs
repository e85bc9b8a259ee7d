//! Load adapter: one uniform entrypoint over heterogeneous flat-file formats.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which:
//!
//! - routes the file to the right strategy by extension (Excel / delimited text / mail export)
//! - materializes the content as an in-memory [`crate::types::DataSet`]
//! - optionally reports success/failure to a [`PipelineObserver`]
//!
//! Format-specific functions are also available under:
//! - [`delimited`]
//! - [`excel`]
//! - [`mail`]

pub mod delimited;
pub mod excel;
pub mod mail;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, LoadContext, LoadStats, PipelineObserver, SessionLogObserver, Severity,
    StdErrObserver,
};
pub use unified::{load_from_path, LoadFormat, LoadOptions};
