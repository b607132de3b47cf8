//! Employee-count setting.
//!
//! The count divides the employee pool, so zero must never reach a
//! calculation. Every constructor from raw input clamps to one.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Number of employees sharing the pool. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeCount(NonZeroU32);

impl EmployeeCount {
    /// A single employee, the default.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a count, returning `None` for zero.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        match NonZeroU32::new(count) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Creates a count from any integer, clamping values below one to one.
    #[must_use]
    pub fn clamped(count: i64) -> Self {
        u32::try_from(count)
            .ok()
            .and_then(Self::new)
            .unwrap_or(Self::ONE)
    }

    /// Parses the leading integer of `raw` (`"3 workers"` reads as 3).
    ///
    /// Missing, non-numeric, or non-positive input yields one.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse_clamped(raw).unwrap_or(Self::ONE)
    }

    /// Like [`Self::parse_lenient`], but `None` when `raw` has no leading
    /// integer. A non-positive integer still clamps to one.
    #[must_use]
    pub fn parse_clamped(raw: &str) -> Option<Self> {
        parse_int_prefix(raw).map(Self::clamped)
    }

    /// Parses the leading integer of `raw`, returning `None` when it is
    /// missing, not positive, or beyond `u32`.
    #[must_use]
    pub fn parse_positive(raw: &str) -> Option<Self> {
        parse_int_prefix(raw)
            .and_then(|n| u32::try_from(n).ok())
            .and_then(Self::new)
    }

    /// Reads a JSON number or string leniently; other JSON types yield one.
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        match raw {
            Value::String(s) => Self::parse_lenient(s),
            Value::Number(n) => Self::parse_lenient(&n.to_string()),
            _ => Self::ONE,
        }
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the count as a decimal divisor.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0.get())
    }
}

impl Default for EmployeeCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for EmployeeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EmployeeCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.get())
    }
}

impl<'de> Deserialize<'de> for EmployeeCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().map_or(Self::ONE, Self::from_value))
    }
}

/// Parses an optional sign followed by digits, ignoring anything after them.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long digit runs; they clamp or exceed u32 either way.
    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
