//! Export module for Spendex
//!
//! CSV export of the stored expenses, readable by the importer.

pub mod csv;

pub use self::csv::{export_expenses_csv, DEFAULT_EXPORT_FILE};
