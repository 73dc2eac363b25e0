//! Expense CLI commands
//!
//! Adding expenses and rendering the list, stats panel and chart.

use std::io;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, RenderOptions, TerminalSink, ViewSink};
use crate::error::SpendexResult;
use crate::models::Amount;
use crate::services::{Clock, CreateExpenseInput, ExpenseService, FilterCriteria};
use crate::storage::{BlobStore, Storage};

use super::parse_date_arg;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (positive whole number)
    pub amount: String,
    /// Description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Filter arguments shared by `list`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only show this category ("all" shows everything)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only show expenses on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Only show expenses on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Convert the raw arguments into filter criteria
    pub fn to_criteria(&self) -> SpendexResult<FilterCriteria> {
        let mut criteria = FilterCriteria::new();
        if let Some(category) = &self.category {
            criteria = criteria.category(category.clone());
        }
        if let Some(from) = &self.from {
            criteria = criteria.on_or_after(parse_date_arg(from)?);
        }
        if let Some(to) = &self.to {
            criteria = criteria.on_or_before(parse_date_arg(to)?);
        }
        Ok(criteria)
    }
}

/// Handle `add`: store the expense, then re-render the full view
pub fn handle_add_command<B: BlobStore>(
    storage: &mut Storage<B>,
    settings: &Settings,
    clock: &dyn Clock,
    args: AddArgs,
) -> SpendexResult<()> {
    let input = CreateExpenseInput {
        description: args.description,
        amount: Some(Amount::parse(&args.amount)?),
        category: args.category,
        date: args.date.as_deref().map(parse_date_arg).transpose()?,
    };

    let mut service = ExpenseService::new(storage, settings);
    let expense = service.add(input, clock)?;

    println!("Added expense:");
    print!("{}", format_expense_details(&expense, &settings.currency_symbol));
    println!();

    render(&service, settings, clock, &FilterCriteria::new(), RenderOptions::default())
}

/// Handle `list`: filtered register plus unfiltered stats
pub fn handle_list_command<B: BlobStore>(
    storage: &mut Storage<B>,
    settings: &Settings,
    clock: &dyn Clock,
    filter: &FilterArgs,
    limit: Option<usize>,
) -> SpendexResult<()> {
    let criteria = filter.to_criteria()?;
    let service = ExpenseService::new(storage, settings);
    let options = RenderOptions {
        limit,
        chart: false,
    };
    render(&service, settings, clock, &criteria, options)
}

/// Handle `stats`: just the statistics panel
pub fn handle_stats_command<B: BlobStore>(
    storage: &mut Storage<B>,
    settings: &Settings,
    clock: &dyn Clock,
) -> SpendexResult<()> {
    let service = ExpenseService::new(storage, settings);
    let view = service.view(&FilterCriteria::new(), clock);
    print!("{}", view.stats.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `chart`: monthly totals as bars
pub fn handle_chart_command<B: BlobStore>(
    storage: &mut Storage<B>,
    settings: &Settings,
    clock: &dyn Clock,
) -> SpendexResult<()> {
    let service = ExpenseService::new(storage, settings);
    let view = service.view(&FilterCriteria::new(), clock);
    print!(
        "{}",
        crate::display::format_monthly_chart(&view.series, &settings.currency_symbol)
    );
    Ok(())
}

/// Build the view and hand it to the terminal sink
pub(crate) fn render<B: BlobStore>(
    service: &ExpenseService<'_, B>,
    settings: &Settings,
    clock: &dyn Clock,
    criteria: &FilterCriteria,
    options: RenderOptions,
) -> SpendexResult<()> {
    let view = service.view(criteria, clock);
    let mut sink = TerminalSink::new(io::stdout().lock(), settings.currency_symbol.clone(), options);
    sink.render(&view)
}
