//! Expense record store
//!
//! Owns the in-memory list of records and is the only way to change it.
//! Records keep insertion order; the whole list is rewritten as a single
//! JSON blob on every `persist`.

use std::collections::HashSet;

use super::blob::BlobStore;
use crate::error::{SpendexError, SpendexResult};
use crate::models::{Expense, ExpenseId};

/// Result of appending a batch of records
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Ids of the records that were appended, in input order
    pub added: Vec<ExpenseId>,
    /// Records that were refused, with their position in the input batch
    pub rejected: Vec<(usize, SpendexError)>,
}

impl BatchOutcome {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// The single source of truth for expense records
pub struct ExpenseStore<B: BlobStore> {
    blob: B,
    key: String,
    records: Vec<Expense>,
    ids: HashSet<ExpenseId>,
    recovered_from: Option<SpendexError>,
}

impl<B: BlobStore> ExpenseStore<B> {
    /// Load the store from `blob` under `key`
    ///
    /// Never fails: a missing blob yields an empty store, and an unreadable
    /// or corrupt one also yields an empty store with the cause kept in
    /// [`ExpenseStore::recovered_from`].
    pub fn load(blob: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let (records, recovered_from) = match blob.read(&key) {
            Ok(None) => (Vec::new(), None),
            Ok(Some(text)) => match decode(&text) {
                Ok(records) => (records, None),
                Err(e) => (Vec::new(), Some(e)),
            },
            Err(e) => (Vec::new(), Some(SpendexError::MalformedPersistedData(e.to_string()))),
        };

        let mut store = Self {
            blob,
            key,
            records: Vec::with_capacity(records.len()),
            ids: HashSet::with_capacity(records.len()),
            recovered_from,
        };
        for record in records {
            // Corrupt blobs with repeated ids keep the first occurrence
            if store.ids.insert(record.id) {
                store.records.push(record);
            }
        }
        store
    }

    /// Why the persisted blob was discarded on load, if it was
    pub fn recovered_from(&self) -> Option<&SpendexError> {
        self.recovered_from.as_ref()
    }

    /// Append a single record
    ///
    /// Fails with `InvalidAmount` for non-positive amounts and `Duplicate`
    /// if the id is already taken. The caller persists.
    pub fn add(&mut self, record: Expense) -> SpendexResult<ExpenseId> {
        record.validate()?;
        if self.contains(record.id) {
            return Err(SpendexError::duplicate_expense(record.id.to_string()));
        }

        let id = record.id;
        self.ids.insert(id);
        self.records.push(record);
        Ok(id)
    }

    /// Append many records in order, skipping the ones `add` refuses
    pub fn add_batch<I>(&mut self, records: I) -> BatchOutcome
    where
        I: IntoIterator<Item = Expense>,
    {
        let mut outcome = BatchOutcome::default();
        for (index, record) in records.into_iter().enumerate() {
            match self.add(record) {
                Ok(id) => outcome.added.push(id),
                Err(e) => outcome.rejected.push((index, e)),
            }
        }
        outcome
    }

    /// Serialize every record and overwrite the stored blob
    pub fn persist(&mut self) -> SpendexResult<()> {
        let text = serde_json::to_string(&self.records)
            .map_err(|e| SpendexError::Storage(format!("Failed to serialize expenses: {}", e)))?;
        self.blob.write(&self.key, &text)
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether a record with this id is stored
    pub fn contains(&self, id: ExpenseId) -> bool {
        self.ids.contains(&id)
    }

    /// Storage key the blob is written under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing blob store
    pub fn blob(&self) -> &B {
        &self.blob
    }
}

fn decode(text: &str) -> SpendexResult<Vec<Expense>> {
    let records: Vec<Expense> = serde_json::from_str(text)
        .map_err(|e| SpendexError::MalformedPersistedData(e.to_string()))?;

    if let Some(bad) = records.iter().find(|r| !r.amount.is_positive()) {
        return Err(SpendexError::MalformedPersistedData(format!(
            "record {} has non-positive amount {}",
            bad.id, bad.amount
        )));
    }

    Ok(records)
}
