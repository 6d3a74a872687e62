//! File-backed expense store
//!
//! Layout inside the data directory:
//!
//! - `expenses.json` holds the legacy `[{...},{...}]` record list
//! - `budgets.json` holds the monthly budget table
//! - `expenses_export.csv` receives the CSV export

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::paths::ExpensePaths;
use crate::config::settings::LoadPolicy;
use crate::error::ExpenseResult;
use crate::export::csv::write_expenses_csv;
use crate::models::{BudgetTable, Expense};

use super::codec::{decode, encode_document, split_document};
use super::file_io::{read_json, read_text, write_atomic, write_json_atomic};
use super::ExpenseStore;

/// Serializable budget file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: BudgetTable,
}

/// Store persisting to plain files in the data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: ExpensePaths,
    load_policy: LoadPolicy,
}

impl FileStore {
    pub fn new(paths: ExpensePaths, load_policy: LoadPolicy) -> Self {
        Self { paths, load_policy }
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}

impl ExpenseStore for FileStore {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let path = self.paths.expenses_file();
        let Some(content) = read_text(&path)? else {
            debug!(path = %path.display(), "no expense file yet, starting empty");
            return Ok(Vec::new());
        };

        let expenses = parse_expenses(&content, self.load_policy)?;
        debug!(path = %path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let path = self.paths.expenses_file();
        write_atomic(&path, encode_document(expenses).as_bytes())?;
        debug!(path = %path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }

    fn export(&self, expenses: &[Expense]) -> ExpenseResult<PathBuf> {
        let path = self.paths.export_file();
        let mut buffer = Vec::new();
        write_expenses_csv(expenses, &mut buffer)?;
        write_atomic(&path, &buffer)?;
        debug!(path = %path.display(), count = expenses.len(), "exported expenses");
        Ok(path)
    }

    fn load_budgets(&self) -> ExpenseResult<BudgetTable> {
        let data: BudgetData = read_json(self.paths.budgets_file())?;
        Ok(data.budgets)
    }

    fn save_budgets(&self, budgets: &BudgetTable) -> ExpenseResult<()> {
        let data = BudgetData {
            budgets: budgets.clone(),
        };
        write_json_atomic(self.paths.budgets_file(), &data)
    }
}

/// Parse the contents of the expense file under the given policy
///
/// With [`LoadPolicy::AllOrNothing`] the first malformed block fails the
/// whole parse; with [`LoadPolicy::SkipInvalid`] bad blocks are logged and
/// dropped.
pub fn parse_expenses(content: &str, policy: LoadPolicy) -> ExpenseResult<Vec<Expense>> {
    let mut expenses = Vec::new();

    for block in split_document(content) {
        match decode(&block) {
            Ok(expense) => expenses.push(expense),
            Err(e) => match policy {
                LoadPolicy::AllOrNothing => return Err(e),
                LoadPolicy::SkipInvalid => {
                    warn!(error = %e, "skipping malformed expense record");
                }
            },
        }
    }

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetKey, ExpenseCategory, ExpenseId};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    const FIVE_VALID_ONE_BAD: &str = concat!(
        r#"[{"id":1, "description":"Coffee", "amount":3.5, "date":"01-01-2024", "category":"FOOD"},"#,
        r#"{"id":2, "description":"Bus", "amount":2.0, "date":"02-01-2024", "category":"TRANSPORTATION"},"#,
        r#"{"id":3, "description":"Rent", "amount":900, "date":"03-01-2024", "category":"HOUSING"},"#,
        r#"{"id":4, "description":"Pills", "amount":12.3, "date":"04-01-2024", "category":"HEALTH"},"#,
        r#"{"id":5, "description":"Broken", "amount":oops, "date":"05-01-2024", "category":"OTHER"},"#,
        r#"{"id":6, "description":"Course", "amount":50, "date":"06-01-2024", "category":"EDUCATION"}]"#,
    );

    fn create_test_store(policy: LoadPolicy) -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, FileStore::new(paths, policy))
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(
                ExpenseId::new(1),
                "Coffee",
                dec!(3.5),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                ExpenseCategory::Food,
            ),
            Expense::new(
                ExpenseId::new(2),
                "Bus",
                dec!(2.0),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                ExpenseCategory::Transportation,
            ),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        let expenses = sample_expenses();

        store.save(&expenses).unwrap();
        assert_eq!(store.load().unwrap(), expenses);
    }

    #[test]
    fn test_brackets_in_description_survive_reload() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        let expenses = vec![Expense::new(
            ExpenseId::new(1),
            "Pack [2]",
            dec!(3),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ExpenseCategory::Food,
        )];

        store.save(&expenses).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].description(), "Pack [2]");
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_saved_file_layout() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        store.save(&sample_expenses()).unwrap();

        let content = std::fs::read_to_string(store.paths().expenses_file()).unwrap();
        assert_eq!(
            content,
            concat!(
                r#"[{"id":1, "description":"Coffee", "amount":3.5, "date":"01-01-2024", "category":"FOOD"},"#,
                r#"{"id":2, "description":"Bus", "amount":2, "date":"02-01-2024", "category":"TRANSPORTATION"}]"#
            )
        );
    }

    #[test]
    fn test_save_empty_list() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        store.save(&[]).unwrap();

        let content = std::fs::read_to_string(store.paths().expenses_file()).unwrap();
        assert_eq!(content, "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_one_bad_block_fails_whole_load() {
        let result = parse_expenses(FIVE_VALID_ONE_BAD, LoadPolicy::AllOrNothing);
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_skip_invalid_keeps_good_blocks() {
        let expenses = parse_expenses(FIVE_VALID_ONE_BAD, LoadPolicy::SkipInvalid).unwrap();
        let ids: Vec<u32> = expenses.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_export_writes_csv_file() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        let path = store.export(&sample_expenses()).unwrap();

        assert_eq!(path, store.paths().export_file());
        let csv = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            csv,
            "Description,Amount,Date,Category\nCoffee,3.5,01-01-2024,FOOD\nBus,2,02-01-2024,TRANSPORTATION\n"
        );
    }

    #[test]
    fn test_budgets_round_trip() {
        let (_temp_dir, store) = create_test_store(LoadPolicy::AllOrNothing);
        assert!(store.load_budgets().unwrap().is_empty());

        let mut budgets = BudgetTable::new();
        budgets.insert(BudgetKey::new(2024, 1).unwrap(), dec!(5.0));
        budgets.insert(BudgetKey::new(2024, 2).unwrap(), dec!(250));
        store.save_budgets(&budgets).unwrap();

        assert_eq!(store.load_budgets().unwrap(), budgets);
    }
}
