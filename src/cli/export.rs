//! CLI command handler for CSV export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{SpendexError, SpendexResult};
use crate::export::export_expenses_csv;
use crate::storage::{BlobStore, Storage};

/// Handle `export`: write every stored expense to `output`
pub fn handle_export_command<B: BlobStore>(storage: &Storage<B>, output: &Path) -> SpendexResult<()> {
    let expenses = storage.expenses.all();
    if expenses.is_empty() {
        return Err(SpendexError::Export("No data to export".into()));
    }

    let file = File::create(output).map_err(|e| {
        SpendexError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_expenses_csv(expenses, &mut writer)?;

    println!("Exported {} expense(s) to {}", expenses.len(), output.display());
    Ok(())
}
