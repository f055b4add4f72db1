// ============================================================================
// Atomic Units
// Integer representation of a decimal amount scaled by a power of ten
// ============================================================================

use crate::numeric::{require_amount, require_scale, DecimalInput};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decimal amount stored as an integer string scaled by `10^precision`.
///
/// When `is_valid` is true, `value / 10^precision` equals `original_value`
/// exactly; [`atomic_unit_to_decimal`] re-checks that instead of trusting
/// the record. Transforms never mutate a unit, they build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtomicUnit {
    /// Scaled integer value, sign included
    pub value: String,
    /// Power-of-ten scale applied to `value`
    pub precision: u32,
    /// Canonical string form of the source amount
    pub original_value: String,
    /// False when the source amount failed validation
    pub is_valid: bool,
}

impl AtomicUnit {
    /// The fallback unit produced for invalid input.
    pub fn invalid() -> Self {
        AtomicUnit {
            value: "0".to_string(),
            precision: 0,
            original_value: "0".to_string(),
            is_valid: false,
        }
    }
}

/// Convert an amount to its atomic-unit representation.
///
/// The precision is the fractional digit count of the canonical form, so the
/// stored value is always an exact integer.
///
/// `number_to_atomic_unit("1234.567")` is
/// `{ value: "1234567", precision: 3, original_value: "1234.567", is_valid: true }`.
pub fn number_to_atomic_unit<T: DecimalInput>(number: T) -> AtomicUnit {
    let Some(amount) = require_amount(&number, "number_to_atomic_unit") else {
        return AtomicUnit::invalid();
    };

    let canonical = amount.normalize();

    AtomicUnit {
        value: canonical.mantissa().to_string(),
        precision: canonical.scale(),
        original_value: canonical.to_string(),
        is_valid: true,
    }
}

/// Convert an atomic-unit record back to a decimal.
///
/// Fails to zero (with a diagnostic) when the record is flagged invalid, its
/// value does not parse, its precision is out of range, or (with
/// `verify_original`) when `value / 10^precision` does not reproduce
/// `original_value`. The verification protects against caller-constructed
/// inconsistent records.
pub fn atomic_unit_to_decimal(unit: &AtomicUnit, verify_original: bool) -> Decimal {
    let function = "atomic_unit_to_decimal";

    if !unit.is_valid {
        tracing::error!("{function}: atomic unit is flagged invalid");
        return Decimal::ZERO;
    }

    let Some(precision) = require_scale(unit.precision, function) else {
        return Decimal::ZERO;
    };

    let Some(value) = require_amount(&unit.value, function) else {
        return Decimal::ZERO;
    };

    let divisor = Decimal::from_i128_with_scale(10i128.pow(precision), 0);
    let Some(result) = value.checked_div(divisor) else {
        tracing::error!("{function}: value {} is out of range at precision {precision}", unit.value);
        return Decimal::ZERO;
    };

    if verify_original {
        let Ok(original) = unit.original_value.to_checked_decimal() else {
            tracing::error!("{function}: missing or non-numeric original value");
            return Decimal::ZERO;
        };

        if result != original {
            tracing::error!(
                "{function}: original value {} is not equal to value {result}",
                unit.original_value
            );
            return Decimal::ZERO;
        }
    }

    result
}
