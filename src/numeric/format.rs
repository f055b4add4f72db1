// ============================================================================
// Number Formatting
// Thousands-separated rendering and magnitude labeling
// ============================================================================

use super::guard::{repair_decimal_bounds, require_amount, DecimalInput};
use super::rounding::{round_half_up, truncate};
use crate::locale::{magnitude_labels, Lang};
use rust_decimal::Decimal;

/// Thousands separator used in every rendered amount.
pub const THOUSANDS_SEPARATOR: char = '\u{202f}'; // narrow no-break space

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

/// Render a pre-rounded amount with grouped thousands, a dot decimal
/// separator and at least `min_decimals` fraction digits.
pub(crate) fn render_plain(amount: Decimal, min_decimals: u32) -> String {
    // negative zero renders as plain zero
    let amount = if amount.is_zero() {
        Decimal::ZERO
    } else {
        amount.normalize()
    };

    let text = amount.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut fraction = frac_part.to_string();
    while (fraction.len() as u32) < min_decimals {
        fraction.push('0');
    }

    let mut rendered = String::new();
    rendered.push_str(sign);
    rendered.push_str(&group_thousands(int_part));
    if !fraction.is_empty() {
        rendered.push('.');
        rendered.push_str(&fraction);
    }

    rendered
}

/// Format an amount with a narrow no-break space as thousands separator and
/// a dot as decimal separator.
///
/// `rounded` selects half-up rounding instead of truncation;
/// `max_decimals`/`min_decimals` bound the fraction digits, and an inverted
/// pair is repaired by lowering the minimum. Invalid input echoes the input
/// back (with a diagnostic) so the result is always printable.
///
/// `format_number(1234.56789, false, 2, 2)` is `"1\u{202f}234.56"`.
pub fn format_number<T: DecimalInput>(
    number: T,
    rounded: bool,
    max_decimals: u32,
    min_decimals: u32,
) -> String {
    let function = "format_number";

    let Some(amount) = require_amount(&number, function) else {
        return number.fallback_text();
    };
    let Some((max_decimals, min_decimals)) =
        repair_decimal_bounds(max_decimals, min_decimals, function)
    else {
        return number.fallback_text();
    };

    let value = if rounded {
        round_half_up(amount, max_decimals)
    } else {
        truncate(amount, max_decimals)
    };

    render_plain(value, min_decimals)
}

/// Divide an amount by the million/billion/trillion threshold it meets and
/// append the localized label; below one million the amount is formatted
/// plainly.
///
/// Thresholds are inclusive, so exactly `1_000_000` labels as
/// `"1.00 Million"`. Long French labels take a plural `s` once the divided
/// value reaches 2.
pub fn label_number<T: DecimalInput>(
    number: T,
    lang: Lang,
    short_label: bool,
    rounded: bool,
    max_decimals: u32,
    min_decimals: u32,
) -> String {
    let function = "label_number";

    let Some(amount) = require_amount(&number, function) else {
        return number.fallback_text();
    };
    let Some((max_decimals, min_decimals)) =
        repair_decimal_bounds(max_decimals, min_decimals, function)
    else {
        return number.fallback_text();
    };

    match labeled_magnitude(amount, lang, short_label, rounded, max_decimals, min_decimals) {
        Some(labeled) => labeled,
        None => format_number(amount, rounded, max_decimals, min_decimals),
    }
}

/// Shared magnitude step: `Some` with the labeled string when the amount
/// meets a threshold, `None` below one million. Inputs are pre-validated.
pub(crate) fn labeled_magnitude(
    amount: Decimal,
    lang: Lang,
    short_label: bool,
    rounded: bool,
    max_decimals: u32,
    min_decimals: u32,
) -> Option<String> {
    let labels = magnitude_labels(lang, short_label);
    let thresholds = [
        (Decimal::from(1_000_000_000_000u64), labels.trillion),
        (Decimal::from(1_000_000_000u64), labels.billion),
        (Decimal::from(1_000_000u64), labels.million),
    ];

    let absolute = amount.abs();

    for (threshold, label) in thresholds {
        if absolute >= threshold {
            let value = amount / threshold;
            let plural = if !short_label && lang == Lang::Fr && value >= Decimal::TWO {
                "s"
            } else {
                ""
            };

            return Some(format!(
                "{} {label}{plural}",
                format_number(value, rounded, max_decimals, min_decimals)
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1234567.89f64, false, 2, 2), "1\u{202f}234\u{202f}567.89");
        assert_eq!(format_number(1234.56789f64, false, 2, 2), "1\u{202f}234.56");
        assert_eq!(format_number(999f64, false, 2, 2), "999.00");
    }

    #[test]
    fn test_format_number_rounding() {
        // default is truncation, not rounding
        assert_eq!(format_number(1234.56789f64, false, 2, 2), "1\u{202f}234.56");
        assert_eq!(format_number(1234567.89f64, true, 1, 1), "1\u{202f}234\u{202f}567.9");
    }

    #[test]
    fn test_format_number_decimal_bounds() {
        assert_eq!(format_number(1234.5123f64, false, 3, 1), "1\u{202f}234.512");
        assert_eq!(format_number(1234.5f64, false, 3, 1), "1\u{202f}234.5");
        assert_eq!(format_number(1234f64, false, 2, 0), "1\u{202f}234");
        // inverted bounds are repaired
        assert_eq!(format_number(1234.56f64, false, 2, 4), "1\u{202f}234.56");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number("-0.004", false, 2, 2), "0.00");
        assert_eq!(format_number("-0", false, 2, 2), "0.00");
    }

    #[test]
    fn test_format_number_invalid_input() {
        assert_eq!(format_number("abc", false, 2, 2), "abc");
        assert_eq!(format_number(None::<f64>, false, 2, 2), "None");
        assert_eq!(format_number(1.0f64, false, 29, 2), "1");
    }

    #[test]
    fn test_label_number_english() {
        assert_eq!(label_number(1_000_000i64, Lang::En, false, false, 2, 2), "1.00 Million");
        assert_eq!(label_number(1_000_000_000i64, Lang::En, false, false, 2, 2), "1.00 Billion");
        assert_eq!(
            label_number(1_000_000_000_000i64, Lang::En, false, false, 2, 2),
            "1.00 Trillion"
        );
    }

    #[test]
    fn test_label_number_french() {
        assert_eq!(label_number(1_000_000i64, Lang::Fr, false, false, 2, 2), "1.00 Million");
        assert_eq!(
            label_number(1_000_000_000i64, Lang::Fr, false, false, 2, 2),
            "1.00 Milliard"
        );
        assert_eq!(
            label_number(3_000_000_000i64, Lang::Fr, false, false, 2, 2),
            "3.00 Milliards"
        );
    }

    #[test]
    fn test_label_number_short() {
        assert_eq!(label_number(1_000_000i64, Lang::En, true, false, 2, 2), "1.00 M");
        assert_eq!(label_number(1_000_000_000i64, Lang::En, true, false, 2, 2), "1.00 B");
        assert_eq!(label_number(1_000_000_000i64, Lang::Fr, true, false, 2, 2), "1.00 G");
        assert_eq!(
            label_number(1_000_000_000_000i64, Lang::Fr, true, true, 1, 1),
            "1.0 T"
        );
    }

    #[test]
    fn test_label_number_threshold_is_inclusive() {
        assert_eq!(label_number(999_999i64, Lang::En, false, false, 2, 2), "999\u{202f}999.00");
        assert_eq!(label_number(1_000_000i64, Lang::En, false, false, 2, 2), "1.00 Million");
    }

    #[test]
    fn test_label_number_negative() {
        assert_eq!(label_number(-1_000_000i64, Lang::En, false, false, 2, 2), "-1.00 Million");
        assert_eq!(
            label_number(-1_000_000_000_000i64, Lang::En, false, false, 2, 2),
            "-1.00 Trillion"
        );
    }

    #[test]
    fn test_label_number_rounding() {
        assert_eq!(label_number(1_234_567i64, Lang::En, false, true, 1, 1), "1.2 Million");
        assert_eq!(label_number(1_234_567i64, Lang::En, false, false, 2, 2), "1.23 Million");
    }

    #[test]
    fn test_label_number_invalid_input() {
        assert_eq!(label_number("abc", Lang::En, false, false, 2, 2), "abc");
    }
}
