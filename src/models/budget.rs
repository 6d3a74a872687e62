//! Monthly budget model
//!
//! A budget is a single spending threshold for one calendar month, keyed by
//! `(year, month)`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Key of a monthly budget, rendered as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetKey {
    pub year: i32,
    pub month: u32,
}

impl BudgetKey {
    /// Create a key, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, ExpenseError> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BudgetKey {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| ExpenseError::Storage(format!("Invalid budget key: {}", s)))?;
        let year: i32 = year
            .parse()
            .map_err(|_| ExpenseError::Storage(format!("Invalid budget year: {}", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ExpenseError::Storage(format!("Invalid budget month: {}", s)))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for BudgetKey {
    type Error = ExpenseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BudgetKey> for String {
    fn from(key: BudgetKey) -> Self {
        key.to_string()
    }
}

/// Monthly budgets, one threshold per key
pub type BudgetTable = BTreeMap<BudgetKey, Decimal>;

/// Result of comparing a month's spending against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No budget has been set for the month
    NoBudget { key: BudgetKey },
    /// Spending is at or below the budget
    OnTrack {
        key: BudgetKey,
        budget: Decimal,
        actual: Decimal,
    },
    /// Spending is strictly above the budget
    Exceeded {
        key: BudgetKey,
        budget: Decimal,
        actual: Decimal,
    },
}

impl BudgetStatus {
    /// Compare actual spending against a budget
    pub fn evaluate(key: BudgetKey, budget: Decimal, actual: Decimal) -> Self {
        if actual > budget {
            Self::Exceeded {
                key,
                budget,
                actual,
            }
        } else {
            Self::OnTrack {
                key,
                budget,
                actual,
            }
        }
    }

    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}
