// ============================================================================
// Rounding
// Truncation and the three rounding rules over arbitrary-precision decimals
// ============================================================================

use super::guard::{require_amount, require_scale, DecimalInput};
use rust_decimal::{Decimal, RoundingStrategy};

/// Returns true when the input parses as a finite decimal.
///
/// Unlike the other helpers this emits no diagnostic: probing is the whole
/// point of the function.
pub fn is_number<T: DecimalInput>(value: T) -> bool {
    value.to_checked_decimal().is_ok()
}

/// Parse an amount into a decimal, falling back to zero on invalid input.
pub fn parse_amount<T: DecimalInput>(value: T) -> Decimal {
    match require_amount(&value, "parse_amount") {
        Some(amount) => amount,
        None => Decimal::ZERO,
    }
}

/// Absolute value of an amount, falling back to zero on invalid input.
pub fn absolute<T: DecimalInput>(number: T) -> Decimal {
    match require_amount(&number, "absolute") {
        Some(amount) => amount.abs(),
        None => Decimal::ZERO,
    }
}

fn round_with_strategy<T: DecimalInput>(
    number: T,
    decimals: u32,
    strategy: RoundingStrategy,
    function: &str,
) -> Decimal {
    let Some(amount) = require_amount(&number, function) else {
        return Decimal::ZERO;
    };
    let Some(decimals) = require_scale(decimals, function) else {
        return Decimal::ZERO;
    };

    amount.round_dp_with_strategy(decimals, strategy)
}

/// Truncate to `decimals` fractional digits, always discarding the rest.
///
/// `truncate("123.45689", 2)` is `123.45`.
pub fn truncate<T: DecimalInput>(number: T, decimals: u32) -> Decimal {
    round_with_strategy(number, decimals, RoundingStrategy::ToZero, "truncate")
}

/// Round to `decimals` fractional digits using only the next digit: below 5
/// rounds toward zero, 5 or above rounds away from zero.
///
/// `round_half_up(123.45599, 2)` is `123.46`; `round_half_up(-123.45499, 2)`
/// is `-123.45`.
pub fn round_half_up<T: DecimalInput>(number: T, decimals: u32) -> Decimal {
    round_with_strategy(
        number,
        decimals,
        RoundingStrategy::MidpointAwayFromZero,
        "round_half_up",
    )
}

/// Round away from zero whenever any digit past `decimals` is non-zero.
///
/// Positive amounts behave like a ceiling, negative amounts grow more
/// negative: `round_up(-123.45499, 2)` is `-123.46`.
pub fn round_up<T: DecimalInput>(number: T, decimals: u32) -> Decimal {
    round_with_strategy(number, decimals, RoundingStrategy::AwayFromZero, "round_up")
}

/// Round toward zero, discarding every digit past `decimals`.
///
/// Numerically this matches [`truncate`], but it is the sign-symmetric
/// counterpart of [`round_up`] and is kept as its own rule:
/// `round_down(-123.45499, 2)` is `-123.45`.
pub fn round_down<T: DecimalInput>(number: T, decimals: u32) -> Decimal {
    round_with_strategy(number, decimals, RoundingStrategy::ToZero, "round_down")
}

/// Count the fractional digits of an amount in its canonical form.
///
/// Trailing zeros do not count: `count_decimal_places("1.500")` is 1.
/// Invalid input counts as 0 (with a diagnostic).
pub fn count_decimal_places<T: DecimalInput>(number: T) -> u32 {
    match require_amount(&number, "count_decimal_places") {
        Some(amount) => amount.normalize().scale(),
        None => 0,
    }
}
