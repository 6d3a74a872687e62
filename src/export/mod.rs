//! Export functionality for the expense ledger
//!
//! Only CSV is supported. The file store writes the result to the fixed
//! export path.

pub mod csv;

pub use self::csv::{write_expenses_csv, CSV_HEADER};
