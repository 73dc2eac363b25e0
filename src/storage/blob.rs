//! Key-value blob stores
//!
//! The record store persists itself as one text blob under a fixed key. The
//! `BlobStore` trait is the only thing it knows about the backing medium.

use std::collections::HashMap;
use std::path::PathBuf;

use super::file_io::{read_text_if_exists, write_text_atomic};
use crate::error::SpendexResult;

/// A store of whole text blobs addressed by key
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if nothing has been written
    fn read(&self, key: &str) -> SpendexResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn write(&mut self, key: &str, text: &str) -> SpendexResult<()>;
}

/// Blob store backed by one JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> SpendexResult<Option<String>> {
        read_text_if_exists(self.path_for(key))
    }

    fn write(&mut self, key: &str, text: &str) -> SpendexResult<()> {
        write_text_atomic(self.path_for(key), text)
    }
}

/// In-memory blob store
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one blob
    pub fn with_blob(key: impl Into<String>, text: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), text.into());
        Self { blobs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> SpendexResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, text: &str) -> SpendexResult<()> {
        self.blobs.insert(key.to_string(), text.to_string());
        Ok(())
    }
}
