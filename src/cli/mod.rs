//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense manager.

pub mod budget;
pub mod expense;
pub mod export;

use chrono::NaiveDate;
use clap::Subcommand;
use rust_decimal::Decimal;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::DATE_FORMAT;
use crate::services::ExpenseManager;
use crate::storage::codec::{is_encodable, RESERVED_CHARS};
use crate::storage::ExpenseStore;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new expense dated today (or --date)
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g. "3.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (see `categories`)
        category: String,
        /// Expense date (DD-MM-YYYY); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Update an expense's description and amount
    Update {
        /// Expense ID
        id: u32,
        /// New description
        description: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: u32,
    },

    /// List all expenses
    List,

    /// Show the expenses and total of one month
    Summary {
        /// Month (1-12)
        month: u32,
        /// Year (e.g. 2024)
        year: i32,
    },

    /// Set a monthly budget and check it
    Budget {
        /// Budget amount
        amount: String,
        /// Year (e.g. 2024)
        year: i32,
        /// Month (1-12)
        month: u32,
    },

    /// Check spending against a month's budget
    Status {
        /// Year (e.g. 2024)
        year: i32,
        /// Month (1-12)
        month: u32,
    },

    /// Export all expenses to CSV
    Export,

    /// List the available categories
    Categories,
}

/// Handle a ledger command against a loaded manager
pub fn handle_command<S: ExpenseStore>(
    manager: &mut ExpenseManager<S>,
    settings: &Settings,
    cmd: Commands,
) -> ExpenseResult<()> {
    match cmd {
        Commands::Add {
            description,
            amount,
            category,
            date,
        } => expense::handle_add(manager, &description, &amount, &category, date.as_deref()),
        Commands::Update {
            id,
            description,
            amount,
        } => expense::handle_update(manager, id, &description, &amount),
        Commands::Delete { id } => expense::handle_delete(manager, id),
        Commands::List => expense::handle_list(manager),
        Commands::Summary { month, year } => expense::handle_summary(manager, settings, month, year),
        Commands::Budget {
            amount,
            year,
            month,
        } => budget::handle_set_budget(manager, settings, &amount, year, month),
        Commands::Status { year, month } => budget::handle_status(manager, settings, year, month),
        Commands::Export => export::handle_export(manager),
        Commands::Categories => expense::handle_categories(),
    }
}

/// Parse a decimal amount such as "3.50" or "-2"
pub fn parse_amount(s: &str) -> ExpenseResult<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| ExpenseError::Validation(format!("Invalid amount: {}", s)))
}

/// Trim a description and reject it if the expense file can't store it
///
/// Stored values are trimmed on load, so surrounding whitespace is dropped
/// up front.
pub fn clean_description(description: &str) -> ExpenseResult<&str> {
    let description = description.trim();
    if is_encodable(description) {
        return Ok(description);
    }
    let reserved: String = RESERVED_CHARS.iter().collect();
    Err(ExpenseError::Validation(format!(
        "Description may not contain any of {}: {}",
        reserved, description
    )))
}

/// Parse a date in `DD-MM-YYYY` (or ISO `YYYY-MM-DD`) form
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| ExpenseError::Validation(format!("Invalid date (expected DD-MM-YYYY): {}", s)))
}
