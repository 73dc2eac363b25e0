//! Storage layer for Spendex
//!
//! Provides the expense record store, the blob stores it persists into, and
//! atomic file writes.

pub mod blob;
pub mod expenses;
pub mod file_io;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use expenses::{BatchOutcome, ExpenseStore};
pub use file_io::{read_text_if_exists, write_text_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::SpendexPaths;
use crate::config::settings::Settings;
use crate::error::SpendexError;
use crate::models::Expense;

/// Storage coordinator: the record store plus the audit log that records
/// every mutation made through it
pub struct Storage<B: BlobStore = FileBlobStore> {
    pub expenses: ExpenseStore<B>,
    audit: AuditLogger,
}

impl Storage<FileBlobStore> {
    /// Open file-backed storage under the configured paths
    pub fn open(paths: &SpendexPaths, settings: &Settings) -> Result<Self, SpendexError> {
        paths.ensure_directories()?;

        let blob = FileBlobStore::new(paths.data_dir());
        Ok(Self::with_blob(
            blob,
            &settings.storage_key,
            AuditLogger::new(paths.audit_log()),
        ))
    }
}

impl<B: BlobStore> Storage<B> {
    /// Build storage over any blob store
    pub fn with_blob(blob: B, key: &str, audit: AuditLogger) -> Self {
        Self {
            expenses: ExpenseStore::load(blob, key),
            audit,
        }
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record that an expense was added by hand
    pub fn log_create(&self, expense: &Expense) -> Result<(), SpendexError> {
        self.audit.log(&AuditEntry::create(
            expense.id.to_string(),
            Some(expense.description.clone()),
            expense,
        ))
    }

    /// Record a batch of imported expenses
    pub fn log_import(&self, expenses: &[Expense], source: &str) -> Result<(), SpendexError> {
        let entries: Vec<AuditEntry> = expenses
            .iter()
            .map(|e| AuditEntry::import(e.id.to_string(), Some(e.description.clone()), e, source))
            .collect();
        self.audit.log_batch(&entries)
    }
}
