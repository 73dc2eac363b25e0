//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;
pub mod import;

pub use expense::{
    handle_add_command, handle_chart_command, handle_list_command, handle_stats_command, AddArgs,
    FilterArgs,
};
pub use export::handle_export_command;
pub use history::handle_history_command;
pub use import::handle_import_command;

use chrono::NaiveDate;

use crate::error::{SpendexError, SpendexResult};

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date_arg(s: &str) -> SpendexResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SpendexError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
    })
}
