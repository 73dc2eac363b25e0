//! CSV import
//!
//! Reads the layout written by the exporter: `id,desc,amount,category,date`.
//! The first line is always a header. Lines are split on every comma with no
//! quote handling, so a description containing a comma shifts the columns
//! and the row is rejected. Double quotes are stripped from descriptions.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{SpendexError, SpendexResult};
use crate::models::{Amount, Expense, ExpenseDefaults};

/// Header line written on export and skipped on import
pub const CSV_HEADER: &str = "id,desc,amount,category,date";

const DESCRIPTION_COLUMN: usize = 1;
const AMOUNT_COLUMN: usize = 2;
const CATEGORY_COLUMN: usize = 3;
const DATE_COLUMN: usize = 4;
const COLUMN_COUNT: usize = 5;

/// A CSV row that parsed cleanly, before it becomes a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpense {
    /// Line number in the source file (the header is line 1)
    pub row_number: usize,
    pub description: Option<String>,
    pub amount: Amount,
    pub category: Option<String>,
    pub date: NaiveDate,
}

impl ParsedExpense {
    /// Turn the row into a record with a fresh id, filling blank fields
    pub fn into_expense(self, defaults: &ExpenseDefaults) -> Expense {
        Expense::new(
            defaults.description_or_default(self.description.as_deref()),
            self.amount,
            defaults.category_or_default(self.category.as_deref()),
            self.date,
        )
    }
}

/// Result of an import
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Records appended to the store, in file order
    pub imported: Vec<Expense>,
    /// One `MalformedImportRow` per skipped line
    pub skipped: Vec<SpendexError>,
}

impl ImportReport {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// One-paragraph summary for the terminal
    pub fn format_terminal(&self) -> String {
        let mut output = format!(
            "Imported {} expense(s), skipped {} row(s)\n",
            self.imported_count(),
            self.skipped_count()
        );
        for err in &self.skipped {
            output.push_str(&format!("  {}\n", err));
        }
        output
    }
}

/// Parse the whole CSV text into rows
///
/// Returns one entry per data line: the parsed row, or a
/// `MalformedImportRow` explaining why it cannot be imported. Blank lines
/// are ignored.
pub fn parse_expenses_csv(text: &str) -> Vec<SpendexResult<ParsedExpense>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Fallback when the reader has no position: header + 1-based index
        let fallback_line = idx + 2;
        let row = match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                parse_record(&record, line)
            }
            Err(e) => Err(SpendexError::malformed_row(
                fallback_line,
                format!("unreadable line: {}", e),
            )),
        };
        rows.push(row);
    }
    rows
}

fn parse_record(record: &StringRecord, line: usize) -> SpendexResult<ParsedExpense> {
    if record.len() < COLUMN_COUNT {
        return Err(SpendexError::malformed_row(
            line,
            format!("expected {} columns, found {}", COLUMN_COUNT, record.len()),
        ));
    }

    let field = |col: usize| record.get(col).unwrap_or("").trim();

    let raw_amount = field(AMOUNT_COLUMN);
    let amount = Amount::parse_positive(raw_amount)
        .map_err(|_| SpendexError::malformed_row(line, format!("invalid amount '{}'", raw_amount)))?;

    let raw_date = field(DATE_COLUMN);
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| SpendexError::malformed_row(line, format!("invalid date '{}'", raw_date)))?;

    let description = field(DESCRIPTION_COLUMN).replace('"', "");
    let category = field(CATEGORY_COLUMN);

    Ok(ParsedExpense {
        row_number: line,
        description: Some(description).filter(|d| !d.trim().is_empty()),
        amount,
        category: Some(category.to_string()).filter(|c| !c.is_empty()),
        date,
    })
}
