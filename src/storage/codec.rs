//! Text codec for the persisted expense file
//!
//! Each expense is stored as a JSON-looking block:
//!
//! ```text
//! {"id":1, "description":"Coffee", "amount":3.5, "date":"01-01-2024", "category":"FOOD"}
//! ```
//!
//! This is not real JSON. There is no string escaping and the parser depends
//! on the fixed field order, so a description containing `,` `:` `{` `}` or
//! `"` will not survive a round trip. The document is a `[...]` list of
//! blocks joined by `,`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, DATE_FORMAT};

/// Number of `key:value` segments in one block
const FIELD_COUNT: usize = 5;

/// Characters a description can't contain and still round-trip
pub const RESERVED_CHARS: [char; 5] = [',', ':', '{', '}', '"'];

/// Check whether a description survives [`encode`] then [`decode`]
pub fn is_encodable(description: &str) -> bool {
    !description.contains(RESERVED_CHARS)
}

/// Encode one expense as a text block
pub fn encode(expense: &Expense) -> String {
    format!(
        "{{\"id\":{}, \"description\":\"{}\", \"amount\":{}, \"date\":\"{}\", \"category\":\"{}\"}}",
        expense.id(),
        expense.description(),
        expense.amount().normalize(),
        expense.formatted_date(),
        expense.category().label()
    )
}

/// Decode one text block produced by [`encode`] (or written by hand in the
/// same shape)
pub fn decode(block: &str) -> ExpenseResult<Expense> {
    let stripped: String = block
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '"'))
        .collect();
    let segments: Vec<&str> = stripped.split(',').collect();

    if segments.len() != FIELD_COUNT {
        return Err(ExpenseError::malformed(
            block,
            format!("expected {} fields, found {}", FIELD_COUNT, segments.len()),
        ));
    }

    let values = segments
        .iter()
        .map(|segment| {
            segment
                .split_once(':')
                .map(|(_, value)| value.trim())
                .ok_or_else(|| ExpenseError::malformed(block, "field without `:`"))
        })
        .collect::<ExpenseResult<Vec<&str>>>()?;

    let id = values[0]
        .parse::<ExpenseId>()
        .ok()
        .filter(|id| id.value() > 0)
        .ok_or_else(|| ExpenseError::malformed(block, format!("invalid id `{}`", values[0])))?;
    let description = values[1];
    let amount: Decimal = values[2]
        .parse()
        .map_err(|_| ExpenseError::malformed(block, format!("invalid amount `{}`", values[2])))?;
    let date = NaiveDate::parse_from_str(values[3], DATE_FORMAT)
        .map_err(|_| ExpenseError::malformed(block, format!("invalid date `{}`", values[3])))?;
    let category = ExpenseCategory::parse(values[4])
        .map_err(|e| ExpenseError::malformed(block, e))?;

    Ok(Expense::new(id, description, amount, date, category))
}

/// Encode a whole collection as a `[...]` document
pub fn encode_document(expenses: &[Expense]) -> String {
    let body: Vec<String> = expenses.iter().map(encode).collect();
    format!("[{}]", body.join(","))
}

/// Split a `[...]` document into its record blocks
///
/// Only the outer list brackets are removed, so brackets inside a
/// description survive. Blocks are separated by `},`; the separator's brace
/// is put back on every block that lost it. An empty list yields no blocks.
pub fn split_document(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    let body = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let body = body.strip_suffix(']').unwrap_or(body);
    if body.trim().is_empty() {
        return Vec::new();
    }

    body.split("},")
        .map(|block| {
            let block = block.trim();
            if block.ends_with('}') {
                block.to_string()
            } else {
                format!("{}}}", block)
            }
        })
        .collect()
}
