//! Audit logging for Spendex
//!
//! Every mutation of the record store is appended to a line-delimited JSON
//! log (`audit.log`): one entry per created or imported expense, each with
//! a UTC timestamp and a snapshot of the record as stored.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
