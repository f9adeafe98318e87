//! Money conversion helpers.
//!
//! Amounts travel through the seed data as integer minor units (cents);
//! conversion to display strings and major units happens at the edge,
//! with exact arithmetic only.

use rust_decimal::Decimal;

/// Formats an amount in minor units as a US-locale dollar string with
/// thousands grouping, e.g. `123456` -> `"$1,234.56"`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// Converts minor units to an exact major-unit decimal (cents / 100).
pub fn to_major_units(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

fn group_thousands(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
