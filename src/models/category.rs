//! Expense categories
//!
//! The set of categories is closed: every expense belongs to exactly one of
//! the labels below, and any other label is rejected at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Category of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Health,
    Education,
    Entertainment,
    Groceries,
    Other,
}

impl ExpenseCategory {
    /// Get all categories in declaration order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Housing,
            Self::Health,
            Self::Education,
            Self::Entertainment,
            Self::Groceries,
            Self::Other,
        ]
    }

    /// The persisted label (e.g. `FOOD`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transportation => "TRANSPORTATION",
            Self::Housing => "HOUSING",
            Self::Health => "HEALTH",
            Self::Education => "EDUCATION",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Groceries => "GROCERIES",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable name (e.g. `Food`)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Groceries => "Groceries",
            Self::Other => "Other",
        }
    }

    /// Parse a category label
    ///
    /// Matching is case-insensitive and treats spaces as underscores, so
    /// `food`, `Food` and `FOOD` all resolve to [`ExpenseCategory::Food`].
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let normalized = s.trim().to_uppercase().replace(' ', "_");
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label() == normalized)
            .ok_or_else(|| ExpenseError::InvalidCategory(s.trim().to_string()))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
