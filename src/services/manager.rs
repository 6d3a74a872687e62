//! Expense manager
//!
//! CRUD, monthly aggregation and budget evaluation over the in-memory
//! collection. Persistence is delegated to the store; failures there are
//! logged and degrade to an empty collection (load) or a no-op (save/export).

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, error, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    BudgetKey, BudgetStatus, BudgetTable, Expense, ExpenseCategory, ExpenseId,
};
use crate::storage::ExpenseStore;

/// Expenses of one month and their total
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub key: BudgetKey,
    pub expenses: Vec<Expense>,
    pub total: Decimal,
}

/// Owner of the expense collection and monthly budgets
pub struct ExpenseManager<S: ExpenseStore> {
    store: S,
    expenses: Vec<Expense>,
    budgets: BudgetTable,
}

impl<S: ExpenseStore> ExpenseManager<S> {
    /// Create an empty manager on top of `store`
    ///
    /// Nothing is read until [`ExpenseManager::load`] is called.
    pub fn new(store: S) -> Self {
        Self {
            store,
            expenses: Vec::new(),
            budgets: BudgetTable::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the in-memory state with what the store holds
    ///
    /// Any failure reading expenses discards the whole collection. A broken
    /// budget table only empties the budgets.
    pub fn load(&mut self) {
        self.expenses = match self.store.load() {
            Ok(expenses) => expenses,
            Err(e) => {
                error!(
                    error = %e,
                    "could not load expenses, discarding the entire collection"
                );
                Vec::new()
            }
        };

        self.budgets = match self.store.load_budgets() {
            Ok(budgets) => budgets,
            Err(e) => {
                error!(error = %e, "could not load budgets, starting without any");
                BudgetTable::new()
            }
        };
    }

    /// Persist the expense collection, returning whether it succeeded
    pub fn save(&self) -> bool {
        match self.store.save(&self.expenses) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to save expenses");
                false
            }
        }
    }

    /// Persist the budget table, returning whether it succeeded
    pub fn save_budgets(&self) -> bool {
        match self.store.save_budgets(&self.budgets) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to save budgets");
                false
            }
        }
    }

    /// Export the collection as CSV, returning the written location
    pub fn export(&self) -> Option<PathBuf> {
        match self.store.export(&self.expenses) {
            Ok(path) => {
                info!(path = %path.display(), count = self.expenses.len(), "exported expenses");
                Some(path)
            }
            Err(e) => {
                error!(error = %e, "failed to export expenses");
                None
            }
        }
    }

    /// Record a new expense with the next free id
    ///
    /// Fails without touching the collection when the largest id in use is
    /// already `u32::MAX`.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> ExpenseResult<&Expense> {
        let last = self
            .expenses
            .iter()
            .map(Expense::id)
            .max()
            .unwrap_or(ExpenseId::new(0));
        let id = last.next().ok_or_else(|| {
            ExpenseError::Storage(format!("No expense ids left after {}", last))
        })?;

        self.expenses
            .push(Expense::new(id, description, amount, date, category));
        debug!(%id, "added expense");

        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Change the description and amount of an expense
    ///
    /// Returns `false` if no expense has this id.
    pub fn update(&mut self, id: ExpenseId, description: impl Into<String>, amount: Decimal) -> bool {
        match self.expenses.iter_mut().find(|e| e.id() == id) {
            Some(expense) => {
                expense.set_description(description);
                expense.set_amount(amount);
                debug!(%id, "updated expense");
                true
            }
            None => false,
        }
    }

    /// Remove every expense with this id, returning whether any was removed
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id() != id);
        let removed = self.expenses.len() != before;
        if removed {
            debug!(%id, "deleted expense");
        }
        removed
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses dated in the given month, with their total
    pub fn summary(&self, month: u32, year: i32) -> ExpenseResult<MonthlySummary> {
        let key = BudgetKey::new(year, month)?;
        let expenses: Vec<Expense> = self.expenses_in(key).cloned().collect();
        let total: Decimal = expenses.iter().map(Expense::amount).sum();

        Ok(MonthlySummary {
            key,
            expenses,
            total,
        })
    }

    /// Set the budget for a month and report where spending stands
    pub fn set_budget(&mut self, amount: Decimal, year: i32, month: u32) -> ExpenseResult<BudgetStatus> {
        let key = BudgetKey::new(year, month)?;
        if let Some(previous) = self.budgets.insert(key, amount) {
            debug!(%key, %previous, %amount, "replaced budget");
        }
        self.check_budget_status(year, month)
    }

    /// Compare a month's spending against its budget
    pub fn check_budget_status(&self, year: i32, month: u32) -> ExpenseResult<BudgetStatus> {
        let key = BudgetKey::new(year, month)?;
        let Some(&budget) = self.budgets.get(&key) else {
            return Ok(BudgetStatus::NoBudget { key });
        };

        let actual: Decimal = self.expenses_in(key).map(Expense::amount).sum();
        Ok(BudgetStatus::evaluate(key, budget, actual))
    }

    /// The monthly budget table
    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    fn expenses_in(&self, key: BudgetKey) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |e| e.is_in_month(key.year, key.month))
    }
}
