//! Service layer for the expense ledger
//!
//! The manager owns the in-memory collection and budget table, and sits on
//! top of an injected [`crate::storage::ExpenseStore`].

pub mod manager;

pub use manager::{ExpenseManager, MonthlySummary};
