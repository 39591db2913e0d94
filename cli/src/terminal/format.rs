//! Value formatting for the report: currency with thousands grouping,
//! percentages, and sign-aware coloring.

use crate::terminal::colors;
use colored::*;

pub const CURRENCY: &str = "₹";

/// `1234567.891` → `"₹1,234,567.89"`; the sign sits outside the symbol.
pub fn money(value: f64, decimals: usize) -> String {
    let unsigned = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned.as_str(), None),
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let grouped = group_thousands(int_part);

    match frac_part {
        Some(frac) => format!("{sign}{CURRENCY}{grouped}.{frac}"),
        None => format!("{sign}{CURRENCY}{grouped}"),
    }
}

/// Currency colored by sign: red when the figure drains money.
pub fn money_detail(value: f64, decimals: usize) -> ColoredString {
    let text = money(value, decimals);
    if value < 0.0 {
        text.color(colors::NEGATIVE)
    } else {
        text.color(colors::POSITIVE)
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
