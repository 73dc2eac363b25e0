//! CSV Export functionality
//!
//! Writes every stored expense as `id,desc,amount,category,date`. The
//! description is wrapped in double quotes; nothing else is escaped, so the
//! output round-trips through the importer only while no field contains a
//! comma or a quote.

use std::io::Write;

use crate::error::{SpendexError, SpendexResult};
use crate::models::Expense;
use crate::services::import::CSV_HEADER;

/// Default file name for exports
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// Export expenses to CSV, in store order
///
/// Refuses to write anything when there are no expenses.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendexResult<()> {
    if expenses.is_empty() {
        return Err(SpendexError::Export("No data to export".into()));
    }

    write!(writer, "{}", CSV_HEADER).map_err(|e| SpendexError::Export(e.to_string()))?;

    for expense in expenses {
        write!(
            writer,
            "\n{},\"{}\",{},{},{}",
            expense.id.as_uuid(),
            expense.description,
            expense.amount,
            expense.category,
            expense.date.format("%Y-%m-%d")
        )
        .map_err(|e| SpendexError::Export(e.to_string()))?;
    }

    writer.flush().map_err(|e| SpendexError::Export(e.to_string()))?;

    Ok(())
}
