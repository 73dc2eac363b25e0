//! Service layer for Spendex
//!
//! Business logic on top of the storage layer: filtering, view building,
//! and the add/import mutations.

pub mod clock;
pub mod expense;
pub mod filter;
pub mod import;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use expense::{CreateExpenseInput, ExpenseService};
pub use filter::{FilterCriteria, ALL_CATEGORIES};
pub use import::{parse_expenses_csv, ImportReport, ParsedExpense, CSV_HEADER};
pub use view::{build_view, ViewModel};
