//! CLI command handler for CSV import

use std::path::Path;

use crate::config::settings::Settings;
use crate::display::RenderOptions;
use crate::error::{SpendexError, SpendexResult};
use crate::services::{Clock, ExpenseService, FilterCriteria};
use crate::storage::{BlobStore, Storage};

use super::expense::render;

/// Handle `import`: read the whole file, append every well-formed row,
/// report the skipped ones, then re-render
pub fn handle_import_command<B: BlobStore>(
    storage: &mut Storage<B>,
    settings: &Settings,
    clock: &dyn Clock,
    file: &Path,
) -> SpendexResult<()> {
    if !file.exists() {
        return Err(SpendexError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let content = std::fs::read_to_string(file)
        .map_err(|e| SpendexError::Import(format!("Failed to read file: {}", e)))?;

    let source = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let mut service = ExpenseService::new(storage, settings);
    let report = service.import_csv(&content, &source)?;

    print!("{}", report.format_terminal());
    println!();

    render(&service, settings, clock, &FilterCriteria::new(), RenderOptions::default())
}
