//! Ready-made cell formatters for common numeric columns.
//!
//! Each `*_cell` function matches the [`FormatterFn`](crate::FormatterFn)
//! signature, so it can be passed straight to [`Field::formatter`](crate::Field::formatter):
//!
//! ```rust,ignore
//! Field::new("balance").label("Balance").formatter(formatters::money_cell)
//! ```

use serde_json::Value;

use crate::item::{display_value, Item};

/// Formats a number with a thousands separator (space) and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    let digits = integer_part.strip_prefix('-').unwrap_or(integer_part);
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    if digits.len() < integer_part.len() {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    match decimal_part {
        Some(decimal) => format!("{grouped}.{decimal}"),
        None => grouped,
    }
}

/// Formats a money value: two decimals, thousands-separated.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Formats an integer value with a thousands separator.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Money cells: two decimals, thousands-separated. Non-numeric values keep
/// their default text.
pub fn money_cell(value: &Value, _key: &str, _item: &Item) -> String {
    match value.as_f64() {
        Some(number) => format_money(number),
        None => display_value(value),
    }
}

/// Integer cells: thousands-separated, no decimals. Non-numeric values keep
/// their default text.
pub fn integer_cell(value: &Value, _key: &str, _item: &Item) -> String {
    match value.as_f64() {
        Some(number) => format_number_int(number),
        None => display_value(value),
    }
}
