//! Display formatting for terminal output
//!
//! The terminal is the presentation sink: it receives a built
//! [`ViewModel`] and decides how to show it.

pub mod chart;
pub mod expense;

pub use chart::format_monthly_chart;
pub use expense::{format_expense_details, format_expense_register, format_expense_row};

use std::io::Write;

use crate::error::{SpendexError, SpendexResult};
use crate::services::ViewModel;

/// Something that can present a view model
pub trait ViewSink {
    fn render(&mut self, view: &ViewModel) -> SpendexResult<()>;
}

/// What a terminal render includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Show at most this many rows of the display list
    pub limit: Option<usize>,
    /// Append the monthly chart after the stats panel
    pub chart: bool,
}

/// Writes the register, stats panel and optional chart to a writer
pub struct TerminalSink<W: Write> {
    writer: W,
    currency_symbol: String,
    options: RenderOptions,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, currency_symbol: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            writer,
            currency_symbol: currency_symbol.into(),
            options,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ViewSink for TerminalSink<W> {
    fn render(&mut self, view: &ViewModel) -> SpendexResult<()> {
        let shown = match self.options.limit {
            Some(limit) => &view.display_list[..limit.min(view.display_list.len())],
            None => &view.display_list[..],
        };

        let mut output = format_expense_register(shown, &self.currency_symbol);
        if shown.len() < view.display_list.len() {
            output.push_str(&format!(
                "... {} more\n",
                view.display_list.len() - shown.len()
            ));
        }
        output.push('\n');
        output.push_str(&view.stats.format_terminal(&self.currency_symbol));
        if self.options.chart {
            output.push('\n');
            output.push_str(&format_monthly_chart(&view.series, &self.currency_symbol));
        }

        self.writer
            .write_all(output.as_bytes())
            .map_err(|e| SpendexError::Io(format!("Failed to write output: {}", e)))
    }
}
