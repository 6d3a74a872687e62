//! Expense CLI commands

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::models::{ExpenseCategory, ExpenseId};
use crate::services::ExpenseManager;
use crate::storage::ExpenseStore;

use super::{clean_description, parse_amount, parse_date};

pub fn handle_add<S: ExpenseStore>(
    manager: &mut ExpenseManager<S>,
    description: &str,
    amount: &str,
    category: &str,
    date: Option<&str>,
) -> ExpenseResult<()> {
    let description = clean_description(description)?;
    let amount = parse_amount(amount)?;
    let category = ExpenseCategory::parse(category)?;
    let date = match date {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };

    let expense = manager.add(description, amount, date, category)?.clone();
    if manager.save() {
        println!("Expense added successfully: {}", expense);
    } else {
        println!("Expense {} added but could not be saved", expense.id());
    }
    Ok(())
}

pub fn handle_update<S: ExpenseStore>(
    manager: &mut ExpenseManager<S>,
    id: u32,
    description: &str,
    amount: &str,
) -> ExpenseResult<()> {
    let description = clean_description(description)?;
    let amount = parse_amount(amount)?;
    let id = ExpenseId::new(id);

    if !manager.update(id, description, amount) {
        println!("Expense not found: {}", id);
        return Ok(());
    }

    if manager.save() {
        println!("Expense updated successfully: {}", id);
    } else {
        println!("Expense {} updated but could not be saved", id);
    }
    Ok(())
}

pub fn handle_delete<S: ExpenseStore>(manager: &mut ExpenseManager<S>, id: u32) -> ExpenseResult<()> {
    let id = ExpenseId::new(id);

    if !manager.delete(id) {
        println!("Expense not found: {}", id);
        return Ok(());
    }

    if manager.save() {
        println!("Expense deleted successfully: {}", id);
    } else {
        println!("Expense {} deleted but could not be saved", id);
    }
    Ok(())
}

pub fn handle_list<S: ExpenseStore>(manager: &ExpenseManager<S>) -> ExpenseResult<()> {
    print!("{}", format_expense_table(manager.list_all()));
    Ok(())
}

pub fn handle_summary<S: ExpenseStore>(
    manager: &ExpenseManager<S>,
    settings: &Settings,
    month: u32,
    year: i32,
) -> ExpenseResult<()> {
    let summary = manager.summary(month, year)?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

pub fn handle_categories() -> ExpenseResult<()> {
    println!("Categories:");
    for category in ExpenseCategory::all() {
        println!("  {:15} {}", category.label(), category.name());
    }
    Ok(())
}
