use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::currencies;

/// Format an amount with its currency, e.g. `"₹1,23,456.50"` or `"-$12.00"`.
///
/// Indian Rupee amounts use lakh/crore grouping (3, then 2s); every other
/// currency groups by thousands. Unknown codes render as `"XYZ 1,234.50"`.
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let (prefix, minor_units) = match currencies::lookup(code) {
        Some(c) => (c.symbol.to_string(), c.minor_units),
        None => (format!("{code} "), 2),
    };

    let rounded = amount.round_dp_with_strategy(minor_units, RoundingStrategy::MidpointAwayFromZero);
    let mut magnitude = rounded.abs();
    magnitude.rescale(minor_units);
    let digits = magnitude.to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };
    let grouped = if code == "INR" {
        group_indian(int_part)
    } else {
        group_thousands(int_part)
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{prefix}{grouped}.{frac}"),
        None => format!("{sign}{prefix}{grouped}"),
    }
}

/// Percentage label without trailing zeros, e.g. `"18%"`, `"12.5%"`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let len = head.len();
    let mut out = String::with_capacity(digits.len() + len / 2 + 1);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (len - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}
