//! Custom error types for Spendex
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Spendex operations
#[derive(Error, Debug)]
pub enum SpendexError {
    /// A submitted amount is missing, zero, negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The persisted record blob could not be decoded
    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(String),

    /// An imported CSV line could not be turned into a record
    #[error("Malformed import row {row}: {reason}")]
    MalformedImportRow { row: usize, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendexError {
    /// Create a "duplicate" error for expense records
    pub fn duplicate_expense(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a malformed import row error
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedImportRow {
            row,
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Spendex operations
pub type SpendexResult<T> = Result<T, SpendexError>;
