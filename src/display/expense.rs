//! Expense list formatting

use rust_decimal::Decimal;
use tabled::{settings::Style, Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id().value(),
            date: expense.formatted_date(),
            description: expense.description().to_string(),
            category: expense.category().name(),
            amount: format!("{:.2}", expense.amount()),
        }
    }
}

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Decimal, currency_symbol: &str) -> String {
    format!("{} {:.2}", currency_symbol, amount)
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
