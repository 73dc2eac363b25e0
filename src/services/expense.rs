//! Expense service
//!
//! Every mutation goes through here: append to the store, persist the whole
//! store, then record the change in the audit log. Rendering is left to the
//! caller via [`ExpenseService::view`].

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{SpendexError, SpendexResult};
use crate::models::{Amount, Expense, ExpenseDefaults};
use crate::storage::{BlobStore, Storage};

use super::clock::Clock;
use super::filter::FilterCriteria;
use super::import::{parse_expenses_csv, ImportReport};
use super::view::{build_view, ViewModel};

/// Input for creating a new expense
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<Amount>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Service for expense management
pub struct ExpenseService<'a, B: BlobStore> {
    storage: &'a mut Storage<B>,
    defaults: ExpenseDefaults,
}

impl<'a, B: BlobStore> ExpenseService<'a, B> {
    pub fn new(storage: &'a mut Storage<B>, settings: &Settings) -> Self {
        Self {
            storage,
            defaults: settings.expense_defaults(),
        }
    }

    /// Add a single expense
    ///
    /// Blank description/category take the configured defaults and a missing
    /// date becomes today. Nothing is stored if the amount is missing or not
    /// positive.
    pub fn add(&mut self, input: CreateExpenseInput, clock: &dyn Clock) -> SpendexResult<Expense> {
        let amount = input
            .amount
            .ok_or_else(|| SpendexError::InvalidAmount("amount is required".into()))?;
        amount.ensure_positive()?;

        let expense = Expense::new(
            self.defaults.description_or_default(input.description.as_deref()),
            amount,
            self.defaults.category_or_default(input.category.as_deref()),
            input.date.unwrap_or_else(|| clock.today()),
        );

        self.storage.expenses.add(expense.clone())?;
        self.storage.expenses.persist()?;
        self.storage.log_create(&expense)?;

        Ok(expense)
    }

    /// Import every well-formed row of a CSV export
    ///
    /// Malformed rows are reported and skipped; the rest are appended in file
    /// order and the store is persisted once.
    pub fn import_csv(&mut self, text: &str, source: &str) -> SpendexResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut candidates = Vec::new();
        let mut rows = Vec::new();

        for row in parse_expenses_csv(text) {
            match row {
                Ok(parsed) => {
                    rows.push(parsed.row_number);
                    candidates.push(parsed.into_expense(&self.defaults));
                }
                Err(e) => report.skipped.push(e),
            }
        }

        let outcome = self.storage.expenses.add_batch(candidates.iter().cloned());
        for (index, err) in outcome.rejected {
            report
                .skipped
                .push(SpendexError::malformed_row(rows[index], err.to_string()));
        }
        report.skipped.sort_by_key(|e| match e {
            SpendexError::MalformedImportRow { row, .. } => *row,
            _ => usize::MAX,
        });

        report.imported = candidates
            .into_iter()
            .filter(|e| outcome.added.contains(&e.id))
            .collect();

        if !report.imported.is_empty() {
            self.storage.expenses.persist()?;
            self.storage.log_import(&report.imported, source)?;
        }

        Ok(report)
    }

    /// Build the render-ready view of the current records
    pub fn view(&self, criteria: &FilterCriteria, clock: &dyn Clock) -> ViewModel {
        build_view(self.storage.expenses.all(), criteria, clock)
    }

    pub fn all(&self) -> &[Expense] {
        self.storage.expenses.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::services::clock::FixedClock;
    use crate::storage::{ExpenseStore, MemoryBlobStore};
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    const KEY: &str = "sx_expenses_v1";

    fn clock() -> FixedClock {
        FixedClock(NaiveDateTime::parse_from_str("2024-02-20 12:00", "%Y-%m-%d %H:%M").unwrap())
    }

    fn storage(temp: &TempDir) -> Storage<MemoryBlobStore> {
        Storage::with_blob(
            MemoryBlobStore::new(),
            KEY,
            AuditLogger::new(temp.path().join("audit.log")),
        )
    }

    fn input(amount: i64) -> CreateExpenseInput {
        CreateExpenseInput {
            amount: Some(Amount::new(amount)),
            ..CreateExpenseInput::default()
        }
    }

    #[test]
    fn test_add_applies_defaults_and_persists() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp);
        let settings = Settings::default();

        let expense = ExpenseService::new(&mut storage, &settings)
            .add(input(120), &clock())
            .unwrap();

        assert_eq!(expense.description, "Untitled");
        assert_eq!(expense.category, "Other");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());

        let reloaded = ExpenseStore::load(storage.expenses.blob().clone(), KEY);
        assert_eq!(reloaded.all(), &[expense]);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
    }

    #[test]
    fn test_add_rejects_missing_or_non_positive_amount() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp);
        let settings = Settings::default();
        let mut service = ExpenseService::new(&mut storage, &settings);

        let missing = service.add(CreateExpenseInput::default(), &clock()).unwrap_err();
        assert!(missing.is_invalid_amount());
        assert!(service.add(input(0), &clock()).unwrap_err().is_invalid_amount());
        assert!(service.add(input(-20), &clock()).unwrap_err().is_invalid_amount());
        assert!(service.all().is_empty());
        assert!(storage.expenses.blob().get(KEY).is_none());
    }

    #[test]
    fn test_import_skips_malformed_rows() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp);
        let settings = Settings::default();
        let text = "id,desc,amount,category,date\n\
                    1,\"Lunch\",120,Food,2024-01-05\n\
                    2,\"Broken\",abc,Food,2024-01-06\n\
                    3,\"Taxi\",300,Travel,2024-01-07\n";

        let report = ExpenseService::new(&mut storage, &settings)
            .import_csv(text, "expenses.csv")
            .unwrap();

        assert_eq!(report.imported_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert!(matches!(
            report.skipped[0],
            SpendexError::MalformedImportRow { row: 3, .. }
        ));

        let descriptions: Vec<&str> = storage
            .expenses
            .all()
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Lunch", "Taxi"]);
        assert!(storage.expenses.blob().get(KEY).is_some());

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.operation == Operation::Import));
        assert_eq!(entries[0].source.as_deref(), Some("expenses.csv"));
    }

    #[test]
    fn test_import_with_no_valid_rows_does_not_persist() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp);
        let settings = Settings::default();

        let report = ExpenseService::new(&mut storage, &settings)
            .import_csv("h\n1,x,nope,Food,2024-01-01\n", "bad.csv")
            .unwrap();

        assert_eq!(report.imported_count(), 0);
        assert!(storage.expenses.blob().get(KEY).is_none());
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_view_reflects_mutations() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp);
        let settings = Settings::default();
        let mut service = ExpenseService::new(&mut storage, &settings);

        service
            .add(
                CreateExpenseInput {
                    description: Some("Flight".into()),
                    amount: Some(Amount::new(200)),
                    category: Some("Travel".into()),
                    date: NaiveDate::from_ymd_opt(2024, 2, 15),
                },
                &clock(),
            )
            .unwrap();
        service.add(input(50), &clock()).unwrap();

        let view = service.view(&FilterCriteria::new().category("Travel"), &clock());
        assert_eq!(view.display_list.len(), 1);
        assert_eq!(view.stats.transaction_count, 2);
        assert_eq!(view.stats.month_total, Amount::new(250));
    }
}
