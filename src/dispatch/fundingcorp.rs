//! Funding Corp capability group.
//!
//! Routines for the flat files Funding Corp sends:
//!
//! 1. `avg_bal_tb` — Average Balances TB workbooks
//! 2. `bal_sheet_tb` — Balance Sheet TB workbooks
//!
//! Both are currently identity transforms: placeholders where source-specific reshaping is
//! added once the warehouse target shape is pinned down. New Funding Corp files get a new
//! routine here plus a configuration entry referencing it.

use crate::dispatch::ProcessorRegistry;
use crate::types::DataSet;

/// Capability group identifier used in configuration documents.
pub const GROUP: &str = "_fundingcorp";

/// Register the Funding Corp routines.
pub fn register(registry: &mut ProcessorRegistry) {
    registry.register(GROUP, "avg_bal_tb", avg_bal_tb);
    registry.register(GROUP, "bal_sheet_tb", bal_sheet_tb);
}

fn avg_bal_tb(df: DataSet) -> DataSet {
    df
}

fn bal_sheet_tb(df: DataSet) -> DataSet {
    df
}
