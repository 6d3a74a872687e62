//! CSV Export functionality
//!
//! Writes the expense list as `Description,Amount,Date,Category` rows.
//! Fields containing a comma, a double quote or a newline are quoted with
//! inner quotes doubled.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the export
pub const CSV_HEADER: [&str; 4] = ["Description", "Amount", "Date", "Category"];

/// Export expenses to CSV
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let amount = expense.amount().normalize().to_string();
        let date = expense.formatted_date();
        csv_writer
            .write_record([
                expense.description(),
                amount.as_str(),
                date.as_str(),
                expense.category().label(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
