//! Monthly spending chart
//!
//! Renders the month → total series as horizontal bars scaled to the
//! largest month.

use crate::models::{Amount, MonthKey};

/// Width of the longest bar, in characters
pub const BAR_WIDTH: usize = 40;

/// Render the series, oldest month first
pub fn format_monthly_chart(series: &[(MonthKey, Amount)], currency_symbol: &str) -> String {
    if series.is_empty() {
        return "No data yet\n".to_string();
    }

    let max = series
        .iter()
        .map(|(_, total)| total.units())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (month, total) in series {
        let len = bar_length(total.units(), max);
        output.push_str(&format!(
            "{} | {:<width$} {}\n",
            month,
            "█".repeat(len),
            total.format_with_symbol(currency_symbol, true),
            width = BAR_WIDTH
        ));
    }
    output
}

fn bar_length(value: i64, max: i64) -> usize {
    if max <= 0 || value <= 0 {
        return 0;
    }
    let scaled = (value as f64 / max as f64) * BAR_WIDTH as f64;
    (scaled.round() as usize).clamp(1, BAR_WIDTH)
}
