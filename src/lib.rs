//! Spendex - terminal personal expense tracker
//!
//! Records discrete spending events, filters them by category and date, and
//! derives a small statistics panel: this month's total, the transaction
//! count, a 30-day rolling daily average, per-month totals for charting and
//! a naive next-month forecast. Records import from and export to CSV.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records and value types
//! - `storage`: Record store persisted as a single JSON blob
//! - `services`: Filtering, view building, add/import
//! - `reports`: Aggregated statistics
//! - `export`: CSV export
//! - `display`: Terminal presentation
//! - `audit`: Append-only mutation log
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendex::config::{SpendexPaths, Settings};
//! use spendex::services::{ExpenseService, FilterCriteria, SystemClock};
//! use spendex::storage::Storage;
//!
//! let paths = SpendexPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::open(&paths, &settings)?;
//! let view = ExpenseService::new(&mut storage, &settings)
//!     .view(&FilterCriteria::new(), &SystemClock);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SpendexError;
