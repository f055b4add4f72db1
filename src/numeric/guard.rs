// ============================================================================
// Amount Guard
// Shared input validation for all public amount functions
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::text::replace_last_comma_by_dot;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Highest fractional-digit count `Decimal` can represent.
pub const MAX_SCALE: u32 = 28;

/// An amount argument: a decimal, a primitive number, or a string
/// representation of a number.
///
/// `Option<T>` is also accepted so callers can forward possibly-missing
/// values; `None` fails the guard with `InvalidInput` like any other
/// malformed amount.
///
/// String inputs are normalized before parsing: surrounding whitespace and
/// `_` digit separators are stripped, and a decimal comma is converted to a
/// dot (last comma wins, any other comma is dropped).
pub trait DecimalInput {
    /// Parse the input into a finite decimal.
    fn to_checked_decimal(&self) -> NumericResult<Decimal>;

    /// Text used when a formatting function falls back to echoing its input.
    fn fallback_text(&self) -> String;
}

impl DecimalInput for Decimal {
    fn to_checked_decimal(&self) -> NumericResult<Decimal> {
        Ok(*self)
    }

    fn fallback_text(&self) -> String {
        self.to_string()
    }
}

impl DecimalInput for str {
    fn to_checked_decimal(&self) -> NumericResult<Decimal> {
        parse_decimal_str(self)
    }

    fn fallback_text(&self) -> String {
        self.to_string()
    }
}

impl DecimalInput for String {
    fn to_checked_decimal(&self) -> NumericResult<Decimal> {
        parse_decimal_str(self)
    }

    fn fallback_text(&self) -> String {
        self.clone()
    }
}

impl DecimalInput for f64 {
    fn to_checked_decimal(&self) -> NumericResult<Decimal> {
        // from_f64 rejects NaN and the infinities
        Decimal::from_f64(*self).ok_or(NumericError::InvalidInput)
    }

    fn fallback_text(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_decimal_input_for_int {
    ($($ty:ty),*) => {
        $(
            impl DecimalInput for $ty {
                fn to_checked_decimal(&self) -> NumericResult<Decimal> {
                    Ok(Decimal::from(*self))
                }

                fn fallback_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_decimal_input_for_int!(i32, u32, i64, u64);

impl<T: DecimalInput> DecimalInput for Option<T> {
    fn to_checked_decimal(&self) -> NumericResult<Decimal> {
        match self {
            Some(value) => value.to_checked_decimal(),
            None => Err(NumericError::InvalidInput),
        }
    }

    fn fallback_text(&self) -> String {
        match self {
            Some(value) => value.fallback_text(),
            None => "None".to_string(),
        }
    }
}

impl<T: DecimalInput + ?Sized> DecimalInput for &T {
    fn to_checked_decimal(&self) -> NumericResult<Decimal> {
        (**self).to_checked_decimal()
    }

    fn fallback_text(&self) -> String {
        (**self).fallback_text()
    }
}

fn parse_decimal_str(input: &str) -> NumericResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    let without_separators: String = trimmed.chars().filter(|c| *c != '_').collect();
    let normalized = replace_last_comma_by_dot(&without_separators, true);

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| NumericError::InvalidInput)
}

/// Parse an amount argument, logging a function-qualified diagnostic when it
/// is missing, blank or non-numeric.
pub(crate) fn require_amount<T>(value: &T, function: &str) -> Option<Decimal>
where
    T: DecimalInput + ?Sized,
{
    match value.to_checked_decimal() {
        Ok(amount) => Some(amount),
        Err(error) => {
            tracing::error!("{function}: invalid amount parameter ({error})");
            None
        },
    }
}

/// Validate a decimal-place count.
pub(crate) fn require_scale(decimals: u32, function: &str) -> Option<u32> {
    if decimals > MAX_SCALE {
        tracing::error!(
            "{function}: invalid decimal parameter {decimals}, must be at most {MAX_SCALE}"
        );
        return None;
    }

    Some(decimals)
}

/// Validate a power-of-ten shift factor. Zero is rejected: a shift by
/// nothing is always a caller bug.
pub(crate) fn require_shift_factor(factor: u32, function: &str) -> Option<u32> {
    if factor == 0 || factor > MAX_SCALE {
        tracing::error!(
            "{function}: invalid shift factor {factor}, must be between 1 and {MAX_SCALE}"
        );
        return None;
    }

    Some(factor)
}

/// Validate a max/min fraction-digit pair.
///
/// An inverted pair is repaired rather than rejected: the minimum is lowered
/// to the maximum and a warning is logged.
pub(crate) fn repair_decimal_bounds(
    max_decimals: u32,
    min_decimals: u32,
    function: &str,
) -> Option<(u32, u32)> {
    require_scale(max_decimals, function)?;
    require_scale(min_decimals, function)?;

    if max_decimals < min_decimals {
        tracing::warn!(
            "{function}: maximum decimal {max_decimals} below minimum {min_decimals}, \
             lowering the minimum"
        );
        return Some((max_decimals, max_decimals));
    }

    Some((max_decimals, min_decimals))
}
