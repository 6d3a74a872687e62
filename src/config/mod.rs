//! Configuration module for the expense ledger
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::{LoadPolicy, Settings};
