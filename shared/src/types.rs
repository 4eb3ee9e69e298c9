//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A display label paired with its stable code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelValue {
    pub label: String,
    pub value: String,
}

impl LabelValue {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Unit assigned to a freshly created line item
pub const DEFAULT_UNIT: &str = "sq.ft";

/// Fallback unit when neither the item nor a selected material carries one
pub const FALLBACK_UNIT: &str = "unit";

/// Unit vocabulary offered by the line-item editor
pub const UNIT_OPTIONS: &[&str] = &[
    "sq.ft", "sq.m", "unit", "lot", "set", "m", "cm", "kg", "ton", "hours",
    "days", "box", "roll", "sheet", "pack", "bundle", "pallet", "piece",
    "bag", "liter",
];

/// Check whether a unit code belongs to the vocabulary
pub fn is_known_unit(unit: &str) -> bool {
    UNIT_OPTIONS.contains(&unit)
}

/// Currency code used on exported documents
pub const CURRENCY_CODE: &str = "MYR";

/// Format a currency amount for display (RM 1,234.50)
///
/// Presentation only; the calculation contract covers the numeric value.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let unsigned = rounded.abs().to_string();
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (unsigned, "00".to_string()),
    };

    let mut grouped = String::new();
    for (pos, ch) in int_part.chars().rev().enumerate() {
        if pos > 0 && pos % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-RM {}.{}", grouped, frac_part)
    } else {
        format!("RM {}.{}", grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn formats_grouped_currency() {
        let amount = Decimal::from_str("1234567.5").unwrap();
        assert_eq!(format_currency(amount), "RM 1,234,567.50");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "RM 0.00");
    }

    #[test]
    fn formats_negative() {
        let amount = Decimal::from_str("-42.1").unwrap();
        assert_eq!(format_currency(amount), "-RM 42.10");
    }

    #[test]
    fn unit_vocabulary_contains_defaults() {
        assert!(is_known_unit(DEFAULT_UNIT));
        assert!(is_known_unit(FALLBACK_UNIT));
        assert!(!is_known_unit("furlong"));
    }
}
