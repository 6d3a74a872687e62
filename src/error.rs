//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A persisted record block could not be parsed
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A category label outside the closed set
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Month outside 1-12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Invalid user input (amounts, dates, ids)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a malformed record error that quotes the offending block
    pub fn malformed(block: &str, reason: impl std::fmt::Display) -> Self {
        Self::MalformedRecord(format!("{} in `{}`", reason, block.trim()))
    }

    /// Check if this is a malformed record error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid month error
    pub fn is_invalid_month(&self) -> bool {
        matches!(self, Self::InvalidMonth(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
