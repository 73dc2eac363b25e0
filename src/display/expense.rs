//! Expense display formatting
//!
//! Register-style listing of expenses for the terminal.

use crate::models::Expense;

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{} {:<24} {:<14} {:>12}",
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, 24),
        truncate(&expense.category, 14),
        expense.amount.format_with_symbol(currency_symbol, false)
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<24} {:<14} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(63));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format the details of a single expense
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol, true)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
