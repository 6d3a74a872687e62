//! Core data models for the expense ledger
//!
//! Expenses, their categories and identifiers, and monthly budgets.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;

pub use budget::{BudgetKey, BudgetStatus, BudgetTable};
pub use category::ExpenseCategory;
pub use expense::{Expense, DATE_FORMAT};
pub use ids::ExpenseId;
