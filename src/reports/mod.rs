//! Reports for Spendex
//!
//! Derived statistics computed from the stored expenses.

pub mod summary;

pub use summary::{
    forecast, month_total, monthly_totals, rolling_average, ExpenseSummary, MonthlyTotals,
    FORECAST_MONTHS, ROLLING_WINDOW_DAYS,
};
