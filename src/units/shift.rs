// ============================================================================
// Unit Shifting
// Power-of-ten conversion between smallest-denomination and display units
// ============================================================================

use crate::numeric::{require_amount, require_shift_factor, DecimalInput};
use rust_decimal::Decimal;

/// Shift factor for the common satoshi/bitcoin style split.
pub const DEFAULT_SHIFT_FACTOR: u32 = 8;

/// Convert a smallest-unit amount to display units by moving the decimal
/// point `shift_factor` places to the left.
///
/// The amount is truncated to an integer first: fractional smallest units do
/// not exist. `shift_down(100_000_000, 8)` is `1` (satoshis to bitcoin).
pub fn shift_down<T: DecimalInput>(amount: T, shift_factor: u32) -> Decimal {
    let function = "shift_down";

    let Some(amount) = require_amount(&amount, function) else {
        return Decimal::ZERO;
    };
    let Some(factor) = require_shift_factor(shift_factor, function) else {
        return Decimal::ZERO;
    };

    let mut integral = amount.trunc();
    integral.rescale(0);

    match Decimal::try_from_i128_with_scale(integral.mantissa(), factor) {
        Ok(shifted) => shifted.normalize(),
        Err(_) => {
            tracing::error!("{function}: amount {amount} is out of range at factor {factor}");
            Decimal::ZERO
        },
    }
}

/// Convert a display-unit amount to smallest units by moving the decimal
/// point `shift_factor` places to the right, truncating any remainder.
///
/// Inverse of [`shift_down`] only while the display amount carries at most
/// `shift_factor` fractional digits; beyond that the truncation is lossy by
/// design. `shift_up(1, 8)` is `100_000_000`.
pub fn shift_up<T: DecimalInput>(amount: T, shift_factor: u32) -> Decimal {
    let function = "shift_up";

    let Some(amount) = require_amount(&amount, function) else {
        return Decimal::ZERO;
    };
    let Some(factor) = require_shift_factor(shift_factor, function) else {
        return Decimal::ZERO;
    };

    let multiplier = Decimal::from_i128_with_scale(10i128.pow(factor), 0);
    let Some(shifted) = amount.checked_mul(multiplier) else {
        tracing::error!("{function}: amount {amount} is out of range at factor {factor}");
        return Decimal::ZERO;
    };

    shifted.trunc().normalize()
}
