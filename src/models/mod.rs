//! Core data models for Spendex
//!
//! Expense records plus the small value types they are built from.

pub mod amount;
pub mod expense;
pub mod ids;
pub mod month;

pub use amount::Amount;
pub use expense::{Expense, ExpenseDefaults, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION};
pub use ids::ExpenseId;
pub use month::MonthKey;
