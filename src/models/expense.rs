//! Expense record model
//!
//! One spending event. Records are created once and never edited in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ExpenseId;
use super::month::MonthKey;
use crate::error::SpendexResult;

/// Placeholder description used when none is given
pub const DEFAULT_DESCRIPTION: &str = "Untitled";

/// Catch-all category used when none is given
pub const DEFAULT_CATEGORY: &str = "Other";

/// A single spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free text description
    #[serde(rename = "desc")]
    pub description: String,

    /// Amount spent (always positive once stored)
    pub amount: Amount,

    /// Category label, matched case-sensitively
    pub category: String,

    /// Calendar date of the expense (serialized as `YYYY-MM-DD`)
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// The month this expense is bucketed into
    pub fn month(&self) -> MonthKey {
        MonthKey::of_date(self.date)
    }

    /// Validate the record before it enters the store
    pub fn validate(&self) -> SpendexResult<()> {
        self.amount.ensure_positive()
    }
}

/// Values used to fill in fields the user left blank
#[derive(Debug, Clone)]
pub struct ExpenseDefaults {
    pub description: String,
    pub category: String,
}

impl Default for ExpenseDefaults {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl ExpenseDefaults {
    /// Return the trimmed description, or the placeholder if it is blank
    pub fn description_or_default(&self, description: Option<&str>) -> String {
        non_blank(description).unwrap_or_else(|| self.description.clone())
    }

    /// Return the trimmed category, or the catch-all if it is blank
    pub fn category_or_default(&self, category: Option<&str>) -> String {
        non_blank(category).unwrap_or_else(|| self.category.clone())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let e = Expense::new("Lunch", Amount::new(120), "Food", date(2024, 1, 5));
        assert_eq!(e.description, "Lunch");
        assert_eq!(e.month().to_string(), "2024-01");
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let zero = Expense::new("x", Amount::zero(), "Food", date(2024, 1, 5));
        assert!(zero.validate().unwrap_err().is_invalid_amount());

        let negative = Expense::new("x", Amount::new(-3), "Food", date(2024, 1, 5));
        assert!(negative.validate().unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_serialized_shape() {
        let e = Expense::new("Taxi", Amount::new(200), "Travel", date(2024, 2, 15));
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["desc"], "Taxi");
        assert_eq!(value["amount"], 200);
        assert_eq!(value["category"], "Travel");
        assert_eq!(value["date"], "2024-02-15");
    }

    #[test]
    fn test_defaults() {
        let defaults = ExpenseDefaults::default();
        assert_eq!(defaults.description_or_default(None), "Untitled");
        assert_eq!(defaults.description_or_default(Some("   ")), "Untitled");
        assert_eq!(defaults.description_or_default(Some(" Rent ")), "Rent");
        assert_eq!(defaults.category_or_default(None), "Other");
        assert_eq!(defaults.category_or_default(Some("Food")), "Food");
    }
}
