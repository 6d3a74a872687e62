//! Monthly summary and budget report formatting

use crate::models::BudgetStatus;
use crate::services::MonthlySummary;

use super::expense::{format_expense_table, format_money};

/// Format a month's expenses followed by the total
pub fn format_summary(summary: &MonthlySummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_expense_table(&summary.expenses));
    output.push_str(&format!(
        "Total spent in {}/{}: {}\n",
        summary.key.month,
        summary.key.year,
        format_money(summary.total, currency_symbol)
    ));
    output
}

/// Format the result of a budget check
pub fn format_budget_status(status: &BudgetStatus, currency_symbol: &str) -> String {
    match status {
        BudgetStatus::NoBudget { key } => format!("No budget set for {}", key),
        BudgetStatus::OnTrack {
            key,
            budget,
            actual,
        } => format!(
            "You're on track for {}! Budget of {} not exceeded. Actual: {}",
            key,
            format_money(*budget, currency_symbol),
            format_money(*actual, currency_symbol)
        ),
        BudgetStatus::Exceeded {
            key,
            budget,
            actual,
        } => format!(
            "Budget of {} for {} exceeded! Actual: {}",
            format_money(*budget, currency_symbol),
            key,
            format_money(*actual, currency_symbol)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetKey;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_budget_messages() {
        let key = BudgetKey::new(2024, 1).unwrap();

        assert_eq!(
            format_budget_status(&BudgetStatus::NoBudget { key }, "R$"),
            "No budget set for 2024-01"
        );
        assert_eq!(
            format_budget_status(&BudgetStatus::evaluate(key, dec!(5), dec!(5.5)), "R$"),
            "Budget of R$ 5.00 for 2024-01 exceeded! Actual: R$ 5.50"
        );
        assert!(format_budget_status(&BudgetStatus::evaluate(key, dec!(10), dec!(5.5)), "R$")
            .starts_with("You're on track for 2024-01!"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = MonthlySummary {
            key: BudgetKey::new(2024, 2).unwrap(),
            expenses: Vec::new(),
            total: Decimal::ZERO,
        };
        let text = format_summary(&summary, "$");
        assert!(text.contains("No expenses recorded."));
        assert!(text.ends_with("Total spent in 2/2024: $ 0.00\n"));
    }
}
