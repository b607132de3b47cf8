//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end. Raw input (form fields,
//! persisted JSON) is coerced leniently: the leading numeric prefix is read,
//! and anything unparsable or negative becomes zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Number of decimal places used for display and persistence.
pub const MONEY_DP: u32 = 2;

/// Largest amount a single field can hold: 1,000,000,000,000,000.
///
/// Sums of any realistic record count stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Coerces raw text into a non-negative amount.
///
/// Reads the leading numeric prefix (`"12.5abc"` reads as `12.5`).
/// Empty, non-numeric, or negative input yields `0`. Values above
/// [`MAX_AMOUNT`] read as [`MAX_AMOUNT`].
#[must_use]
pub fn coerce_money(raw: &str) -> Decimal {
    parse_decimal_prefix(raw).map_or(Decimal::ZERO, clamp_money)
}

/// Clamps an amount into `0..=MAX_AMOUNT`.
#[must_use]
pub fn clamp_money(amount: Decimal) -> Decimal {
    amount.clamp(Decimal::ZERO, MAX_AMOUNT)
}

/// Coerces a JSON value (number or string) into a non-negative amount.
///
/// Any other JSON type yields `0`.
#[must_use]
pub fn coerce_money_value(raw: &Value) -> Decimal {
    match raw {
        Value::String(s) => coerce_money(s),
        Value::Number(n) => coerce_money(&n.to_string()),
        _ => Decimal::ZERO,
    }
}

/// Rounds an amount to two decimal places (midpoint away from zero).
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount as a two-decimal string, e.g. `"150.00"`.
#[must_use]
pub fn to_money_string(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(MONEY_DP);
    rounded.to_string()
}

/// Renders an amount with a currency prefix, e.g. `"$150.00"`.
#[must_use]
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{}", to_money_string(amount))
}

/// Parses the leading numeric prefix of `raw`.
///
/// Accepts optional leading whitespace, an optional sign, digits with an
/// optional fraction, and an optional exponent. Returns `None` when no
/// digits are found. Magnitudes too large for a `Decimal` saturate to
/// `Decimal::MAX` or `Decimal::MIN`; exponents too small read as zero.
#[must_use]
pub fn parse_decimal_prefix(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            frac_digits = &s[frac_start..frac_end];
            pos = frac_end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_end = pos + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            exponent = &s[pos + 1..exp_end];
        }
    }

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 2);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac_digits);
    }

    let saturated = if negative { Decimal::MIN } else { Decimal::MAX };
    if exponent.is_empty() {
        return Some(Decimal::from_str(&mantissa).unwrap_or(saturated));
    }
    match Decimal::from_scientific(&format!("{mantissa}e{exponent}")) {
        Ok(value) => Some(value),
        Err(_) if exponent.starts_with('-') => Some(Decimal::ZERO),
        Err(_) => Some(saturated),
    }
}

/// Serde adapter: writes an amount as a two-decimal string and reads any
/// JSON value leniently via [`coerce_money_value`].
///
/// Pair with `#[serde(default)]` so a missing field reads as zero.
pub mod two_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use super::{coerce_money_value, to_money_string};

    /// Serializes as `"0.00"`-style text.
    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_money_string(*amount))
    }

    /// Deserializes from a number, a string, or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().map_or(Decimal::ZERO, coerce_money_value))
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
