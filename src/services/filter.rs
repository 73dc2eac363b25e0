//! Expense filtering
//!
//! Narrows the record set for display. Filters never touch the statistics,
//! which are always computed over every stored record.

use chrono::NaiveDate;

use crate::models::Expense;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Criteria for narrowing the displayed expenses
///
/// Every criterion is optional; the ones present are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact, case-sensitive category match (`"all"` matches everything)
    pub category: Option<String>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep expenses on or after `date`
    pub fn on_or_after(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Keep expenses on or before `date`
    pub fn on_or_before(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.on_or_after(from).on_or_before(to)
    }

    /// Whether this filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.active_category().is_none() && self.from.is_none() && self.to.is_none()
    }

    fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Check a single expense against every criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.active_category() {
            if expense.category != category {
                return false;
            }
        }
        if let Some(from) = self.from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if expense.date > to {
                return false;
            }
        }
        true
    }
}

/// Return the expenses matching `criteria`, in their original order
pub fn apply(records: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}

/// Sort newest first; expenses on the same date keep their relative order
pub fn sort_newest_first(records: &mut [Expense]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(desc: &str, amount: i64, day: &str, category: &str) -> Expense {
        Expense::new(desc, Amount::new(amount), category, date(day))
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("groceries", 100, "2024-01-05", "Food"),
            expense("lunch", 50, "2024-02-10", "Food"),
            expense("flight", 200, "2024-02-15", "Travel"),
        ]
    }

    fn descriptions(records: &[Expense]) -> Vec<&str> {
        records.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let records = sample();
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert_eq!(apply(&records, &criteria), records);
    }

    #[test]
    fn test_all_sentinel_is_no_op() {
        let records = sample();
        let criteria = FilterCriteria::new().category("all");
        assert!(criteria.is_empty());
        assert_eq!(apply(&records, &criteria).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let out = apply(&sample(), &FilterCriteria::new().category("Travel"));
        assert_eq!(descriptions(&out), vec!["flight"]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let out = apply(&sample(), &FilterCriteria::new().category("travel"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let criteria = FilterCriteria::new().date_range(date("2024-02-10"), date("2024-02-15"));
        let out = apply(&sample(), &criteria);
        assert_eq!(descriptions(&out), vec!["lunch", "flight"]);
    }

    #[test]
    fn test_open_ended_bounds() {
        let after = apply(&sample(), &FilterCriteria::new().on_or_after(date("2024-02-11")));
        assert_eq!(descriptions(&after), vec!["flight"]);

        let before = apply(&sample(), &FilterCriteria::new().on_or_before(date("2024-02-10")));
        assert_eq!(descriptions(&before), vec!["groceries", "lunch"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let criteria = FilterCriteria::new()
            .category("Food")
            .on_or_after(date("2024-02-01"));
        let out = apply(&sample(), &criteria);
        assert_eq!(descriptions(&out), vec!["lunch"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let criteria = FilterCriteria::new().date_range(date("2024-03-01"), date("2024-01-01"));
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let _ = apply(&records, &FilterCriteria::new().category("Food"));
        assert_eq!(records, before);
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let mut records = vec![
            expense("a", 1, "2024-02-10", "Food"),
            expense("b", 2, "2024-03-01", "Food"),
            expense("c", 3, "2024-02-10", "Food"),
            expense("d", 4, "2024-01-01", "Food"),
        ];
        sort_newest_first(&mut records);
        assert_eq!(descriptions(&records), vec!["b", "a", "c", "d"]);
    }
}
