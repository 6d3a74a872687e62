//! Budget CLI commands

use crate::config::settings::Settings;
use crate::display::format_budget_status;
use crate::error::ExpenseResult;
use crate::services::ExpenseManager;
use crate::storage::ExpenseStore;

use super::parse_amount;

pub fn handle_set_budget<S: ExpenseStore>(
    manager: &mut ExpenseManager<S>,
    settings: &Settings,
    amount: &str,
    year: i32,
    month: u32,
) -> ExpenseResult<()> {
    let amount = parse_amount(amount)?;
    let status = manager.set_budget(amount, year, month)?;
    if !manager.save_budgets() {
        println!("Budget set for this run only; it could not be saved");
    }
    println!("{}", format_budget_status(&status, &settings.currency_symbol));
    Ok(())
}

pub fn handle_status<S: ExpenseStore>(
    manager: &ExpenseManager<S>,
    settings: &Settings,
    year: i32,
    month: u32,
) -> ExpenseResult<()> {
    let status = manager.check_budget_status(year, month)?;
    println!("{}", format_budget_status(&status, &settings.currency_symbol));
    Ok(())
}
