//! View model builder
//!
//! Composes the filtered, sorted display list with statistics computed over
//! every record, into one structure the presentation layer renders.

use crate::models::{Amount, Expense, MonthKey};
use crate::reports::ExpenseSummary;

use super::clock::Clock;
use super::filter::{apply, sort_newest_first, FilterCriteria};

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Filtered expenses, newest first
    pub display_list: Vec<Expense>,
    /// Statistics over all records, independent of the filter
    pub stats: ExpenseSummary,
    /// Month → total pairs for charting, oldest month first
    pub series: Vec<(MonthKey, Amount)>,
}

/// Build the view for `records` under `criteria`
///
/// The clock is read once; every "now"-relative figure uses that snapshot.
pub fn build_view(records: &[Expense], criteria: &FilterCriteria, clock: &dyn Clock) -> ViewModel {
    let mut display_list = apply(records, criteria);
    sort_newest_first(&mut display_list);

    let stats = ExpenseSummary::generate(records, clock.now());
    let series = stats.series();

    ViewModel {
        display_list,
        stats,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn clock() -> FixedClock {
        FixedClock(NaiveDateTime::parse_from_str("2024-02-20 12:00", "%Y-%m-%d %H:%M").unwrap())
    }

    fn expense(desc: &str, amount: i64, day: &str, category: &str) -> Expense {
        Expense::new(
            desc,
            Amount::new(amount),
            category,
            NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("groceries", 100, "2024-01-05", "Food"),
            expense("lunch", 50, "2024-02-10", "Food"),
            expense("flight", 200, "2024-02-15", "Travel"),
        ]
    }

    #[test]
    fn test_date_range_view_is_sorted_descending() {
        let records = sample();
        let criteria = FilterCriteria::new().date_range(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
        );
        let view = build_view(&records, &criteria, &clock());

        assert_eq!(view.display_list, vec![records[2].clone(), records[1].clone()]);
    }

    #[test]
    fn test_stats_ignore_filter() {
        let records = sample();
        let unfiltered = build_view(&records, &FilterCriteria::new(), &clock());
        let filtered = build_view(&records, &FilterCriteria::new().category("Travel"), &clock());

        assert_eq!(filtered.display_list.len(), 1);
        assert_eq!(filtered.stats, unfiltered.stats);
        assert_eq!(filtered.series, unfiltered.series);
        assert_eq!(filtered.stats.transaction_count, 3);
        assert_eq!(filtered.stats.month_total, Amount::new(250));
    }

    #[test]
    fn test_series_matches_bucket_map() {
        let view = build_view(&sample(), &FilterCriteria::new(), &clock());
        let series: Vec<(String, i64)> = view
            .series
            .iter()
            .map(|(m, a)| (m.to_string(), a.units()))
            .collect();
        assert_eq!(
            series,
            vec![("2024-01".to_string(), 100), ("2024-02".to_string(), 250)]
        );
        assert_eq!(view.stats.forecast, Amount::new(175));
    }

    #[test]
    fn test_empty_store_view() {
        let view = build_view(&[], &FilterCriteria::new(), &clock());
        assert!(view.display_list.is_empty());
        assert!(view.series.is_empty());
        assert_eq!(view.stats.forecast, Amount::zero());
    }
}
