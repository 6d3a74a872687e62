//! Expense model
//!
//! One spending event. The id, date and category are fixed once the expense
//! exists; only the description and amount can be edited.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;

/// Date format used by the persisted file and the CSV export (`DD-MM-YYYY`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Decimal,
    date: NaiveDate,
    category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            category,
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    /// Check whether the expense falls in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Date rendered as `DD-MM-YYYY`
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Expense: {} | Description: {} | Amount: {} | Date: {} | Category: {}]",
            self.id,
            self.description,
            self.amount.normalize(),
            self.formatted_date(),
            self.category
        )
    }
}
