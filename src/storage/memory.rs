//! In-memory expense store
//!
//! Lets the manager run without touching the filesystem.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::csv::write_expenses_csv;
use crate::models::{BudgetTable, Expense};

use super::ExpenseStore;

/// Store keeping everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: RefCell<Vec<Expense>>,
    budgets: RefCell<BudgetTable>,
    exported: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `expenses`
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        let store = Self::default();
        *store.expenses.borrow_mut() = expenses;
        store
    }

    /// Make every subsequent write fail with an I/O error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// The currently persisted expenses
    pub fn persisted(&self) -> Vec<Expense> {
        self.expenses.borrow().clone()
    }

    /// The currently persisted budgets
    pub fn persisted_budgets(&self) -> BudgetTable {
        self.budgets.borrow().clone()
    }

    /// Text of the last successful export
    pub fn last_export(&self) -> Option<String> {
        self.exported.borrow().clone()
    }

    fn check_writable(&self) -> ExpenseResult<()> {
        if self.fail_writes.get() {
            return Err(ExpenseError::Io("write refused by memory store".into()));
        }
        Ok(())
    }
}

impl ExpenseStore for MemoryStore {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.expenses.borrow().clone())
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        self.check_writable()?;
        *self.expenses.borrow_mut() = expenses.to_vec();
        Ok(())
    }

    fn export(&self, expenses: &[Expense]) -> ExpenseResult<PathBuf> {
        self.check_writable()?;
        let mut buffer = Vec::new();
        write_expenses_csv(expenses, &mut buffer)?;
        let text = String::from_utf8(buffer).map_err(|e| ExpenseError::Export(e.to_string()))?;
        *self.exported.borrow_mut() = Some(text);
        Ok(PathBuf::from("memory://expenses_export.csv"))
    }

    fn load_budgets(&self) -> ExpenseResult<BudgetTable> {
        Ok(self.budgets.borrow().clone())
    }

    fn save_budgets(&self, budgets: &BudgetTable) -> ExpenseResult<()> {
        self.check_writable()?;
        *self.budgets.borrow_mut() = budgets.clone();
        Ok(())
    }
}
