use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

pub const RUPEE: &str = "₹";

const LAKH: Decimal = dec!(100000);
const CRORE: Decimal = dec!(10000000);

fn to_decimal(amount: f64) -> Option<Decimal> {
    if amount.is_finite() { Decimal::from_f64(amount) } else { None }
}

/// Rounds an amount to whole rupees, halves away from zero.
pub fn round_rupees(amount: f64) -> Option<Decimal> {
    to_decimal(amount).map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Inserts Indian digit separators: the last three digits, then pairs
/// (`1234567` becomes `12,34,567`).
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats an amount as whole rupees with Indian grouping, e.g. `₹11,61,695`.
///
/// Non-finite amounts render as `₹—`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{RUPEE}—");
    }
    let (negative, digits) = match round_rupees(amount) {
        Some(rounded) => (
            rounded.is_sign_negative() && !rounded.is_zero(),
            rounded.abs().to_string(),
        ),
        // Beyond the decimal range; f64 formatting is still exact enough here.
        None => (amount < 0.0, format!("{:.0}", amount.abs())),
    };
    let sign = if negative { "-" } else { "" };
    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

/// Short form for large amounts: `₹11.62 L` (lakh), `₹2.50 Cr` (crore).
/// Amounts below one lakh use `format_inr`.
pub fn abbreviate_inr(amount: f64) -> String {
    let Some(value) = to_decimal(amount) else {
        return format_inr(amount);
    };
    let magnitude = value.abs();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    let (scaled, unit) = if magnitude >= CRORE {
        (magnitude / CRORE, "Cr")
    } else if magnitude >= LAKH {
        (magnitude / LAKH, "L")
    } else {
        return format_inr(amount);
    };
    let scaled = scaled.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{sign}{RUPEE}{scaled:.2} {unit}")
}
