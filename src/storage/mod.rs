//! Storage layer for the expense ledger
//!
//! The [`ExpenseStore`] trait is the seam between the manager and the disk:
//! [`FileStore`] persists to the data directory, [`MemoryStore`] keeps
//! everything in memory for tests and embedding.

pub mod codec;
pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_json, read_text, write_atomic, write_json_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::models::{BudgetTable, Expense};

/// Durable home of the expense collection and the budget table
pub trait ExpenseStore {
    /// Read the full expense collection
    ///
    /// A store with nothing persisted yet returns an empty collection.
    fn load(&self) -> ExpenseResult<Vec<Expense>>;

    /// Replace the persisted collection with `expenses`
    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()>;

    /// Write `expenses` as CSV, returning where it went
    fn export(&self, expenses: &[Expense]) -> ExpenseResult<PathBuf>;

    /// Read the monthly budget table
    fn load_budgets(&self) -> ExpenseResult<BudgetTable>;

    /// Replace the persisted budget table
    fn save_budgets(&self, budgets: &BudgetTable) -> ExpenseResult<()>;
}
