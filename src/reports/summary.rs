//! Expense summary report
//!
//! Aggregates the full, unfiltered record set into the statistics panel:
//! current-month total, transaction count, 30-day rolling average, the
//! month → total bucket map and a next-month forecast.
//!
//! The forecast is a plain moving average of the last three months with
//! spending. It is a placeholder estimate, not a statistical model.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::{Amount, Expense, MonthKey};

/// Length of the rolling-average window, and the fixed divisor applied to it
pub const ROLLING_WINDOW_DAYS: i64 = 30;

/// Number of trailing months averaged by the forecast
pub const FORECAST_MONTHS: usize = 3;

/// Month → summed spending
pub type MonthlyTotals = BTreeMap<MonthKey, Amount>;

/// Aggregated statistics over every stored expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// The "now" snapshot every relative figure was computed against
    pub generated_at: NaiveDateTime,
    /// Month containing `generated_at`
    pub current_month: MonthKey,
    /// Exact sum of spending in `current_month`
    pub month_total: Amount,
    /// Number of stored records
    pub transaction_count: usize,
    /// Spending in the trailing window divided by the window length, rounded
    pub rolling_average: Amount,
    /// Spending per month, for every month that has records
    pub monthly_totals: MonthlyTotals,
    /// Rounded mean of the last `FORECAST_MONTHS` monthly totals
    pub forecast: Amount,
}

impl ExpenseSummary {
    /// Aggregate `records` relative to `now`
    pub fn generate(records: &[Expense], now: NaiveDateTime) -> Self {
        let current_month = MonthKey::of_datetime(now);
        let monthly_totals = monthly_totals(records);
        let forecast = forecast(&monthly_totals);

        Self {
            generated_at: now,
            current_month,
            month_total: month_total(records, current_month),
            transaction_count: records.len(),
            rolling_average: rolling_average(records, now),
            monthly_totals,
            forecast,
        }
    }

    /// Month → total pairs in ascending month order
    pub fn series(&self) -> Vec<(MonthKey, Amount)> {
        self.monthly_totals.iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Format the statistics panel for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary as of {}\n", self.generated_at.format("%Y-%m-%d %H:%M")));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>17}\n",
            format!("This month ({})", self.current_month),
            self.month_total.format_with_symbol(currency_symbol, true)
        ));
        output.push_str(&format!("{:<22} {:>17}\n", "Transactions", self.transaction_count));
        output.push_str(&format!(
            "{:<22} {:>17}\n",
            "Avg / day (30d)",
            self.rolling_average.format_with_symbol(currency_symbol, false)
        ));
        output.push_str(&format!(
            "{:<22} {:>17}\n",
            "Next month forecast",
            self.forecast.format_with_symbol(currency_symbol, true)
        ));

        output
    }
}

/// Sum of spending whose date falls in `month`
pub fn month_total(records: &[Expense], month: MonthKey) -> Amount {
    records
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Average daily spend over the trailing window ending at `now`
///
/// A record counts when its date (taken at midnight) is no earlier than
/// `now - ROLLING_WINDOW_DAYS` days; there is no upper bound. The sum is
/// always divided by `ROLLING_WINDOW_DAYS`, however young the history is.
pub fn rolling_average(records: &[Expense], now: NaiveDateTime) -> Amount {
    let cutoff = now - Duration::days(ROLLING_WINDOW_DAYS);
    let total: Amount = records
        .iter()
        .filter(|e| e.date.and_time(NaiveTime::MIN) >= cutoff)
        .map(|e| e.amount)
        .sum();

    Amount::new(round_div(total.units(), ROLLING_WINDOW_DAYS))
}

/// Bucket every record into its month
pub fn monthly_totals(records: &[Expense]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::new();
    for expense in records {
        *totals.entry(expense.month()).or_default() += expense.amount;
    }
    totals
}

/// Rounded mean of the last `FORECAST_MONTHS` monthly totals (zero if none)
pub fn forecast(totals: &MonthlyTotals) -> Amount {
    let recent: Vec<Amount> = totals.values().rev().take(FORECAST_MONTHS).copied().collect();
    if recent.is_empty() {
        return Amount::zero();
    }

    let sum: Amount = recent.iter().sum();
    Amount::new(round_div(sum.units(), recent.len() as i64))
}

/// Integer division rounding halves away from zero
fn round_div(numerator: i64, denominator: i64) -> i64 {
    let (numerator, denominator) = (i128::from(numerator), i128::from(denominator));
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    // |rounded| <= |numerator| for any denominator >= 1
    rounded as i64
}
