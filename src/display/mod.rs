//! Display formatting for terminal output
//!
//! Turns expenses, monthly summaries and budget statuses into text for the
//! CLI. Nothing here touches stdout directly.

pub mod expense;
pub mod report;

pub use expense::{format_expense_table, format_money};
pub use report::{format_budget_status, format_summary};
