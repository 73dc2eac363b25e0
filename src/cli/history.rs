//! CLI command for viewing the audit log

use crate::error::SpendexResult;
use crate::storage::{BlobStore, Storage};

/// Handle `history`: print the most recent audit entries
pub fn handle_history_command<B: BlobStore>(storage: &Storage<B>, count: usize) -> SpendexResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
