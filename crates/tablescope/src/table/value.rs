//! Scalar value kinds and hashable cell keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of the values held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Every non-missing value is a number.
    Numeric,
    /// At least one non-missing value is not a number.
    Text,
    /// The column has rows, and every one of them is missing.
    Missing,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Numeric => write!(f, "numeric"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Missing => write!(f, "missing"),
        }
    }
}

/// A hashable view of one cell, used for distinct counting and row comparison.
///
/// Numbers are keyed by their bit pattern with `-0.0` folded into `0.0`, so
/// two cells compare equal exactly when their values do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKey<'a> {
    Number(u64),
    Text(&'a str),
    Missing,
}

impl CellKey<'_> {
    /// Key for a numeric value.
    pub fn number(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        CellKey::Number(value.to_bits())
    }
}

/// Render a number for display as a category label.
///
/// Integral values print without a fractional part (`3` rather than `3.0`).
pub fn format_number(value: f64) -> String {
    // -0.0 shares a key with 0.0, so it shares a label too
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_fold_negative_zero() {
        assert_eq!(CellKey::number(0.0), CellKey::number(-0.0));
        assert_ne!(CellKey::number(1.0), CellKey::number(1.5));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Text.to_string(), "text");
        assert_eq!(ValueKind::Missing.to_string(), "missing");
    }
}
