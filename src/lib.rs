//! expense-ledger - a personal expense ledger for the command line
//!
//! Records individual expenses, keeps them in a flat file between runs,
//! answers monthly totals and budget checks, and exports to CSV.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, categories, budget keys
//! - `storage`: Persisted file format and the [`storage::ExpenseStore`] seam
//! - `export`: CSV export
//! - `services`: The [`services::ExpenseManager`]
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{ExpensePaths, Settings};
//! use expense_ledger::services::ExpenseManager;
//! use expense_ledger::storage::FileStore;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let mut manager = ExpenseManager::new(FileStore::new(paths, settings.load_policy));
//! manager.load();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
