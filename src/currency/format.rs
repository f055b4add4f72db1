// ============================================================================
// Currency Formatting
// Symbol/name resolution and amount rendering with a currency marker
// ============================================================================

use super::tables;
use crate::locale::{self, symbol_position, Lang, SymbolPosition};
use crate::numeric::{
    format_number, labeled_magnitude, render_plain, repair_decimal_bounds, require_amount,
    round_up, truncate, DecimalInput,
};
use crate::text::capitalize_first_letter_only;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a formatted amount carries its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayMode {
    /// The ISO-style code, e.g. `USD 1 234.56`
    #[default]
    Code,
    /// The symbol without country disambiguation, e.g. `$1 234.56`
    NarrowSymbol,
    /// The locale symbol, e.g. `$US` for USD in French
    Symbol,
    /// The full currency name, e.g. `1 234.56 US Dollars`
    Name,
    /// No currency marker at all
    None,
}

/// Full display name of a currency.
///
/// Three-tier lookup: the fixed override table (crypto, testnet crypto,
/// precious metals and a few fiat codes) wins over the locale backend, and
/// an unrecognized code comes back unchanged. Backend names are
/// first-letter capitalized without touching the rest.
///
/// `currency_full_name("BTC", Lang::En, true)` is `"Bitcoins"`.
pub fn currency_full_name(code: &str, lang: Lang, plural: bool) -> String {
    let normalized = code.trim().to_uppercase();

    if let Some(name) = tables::fixed_currency_name(&normalized, lang, plural) {
        return name;
    }

    let backend = locale::currency_display_name(&normalized, lang, plural);
    if backend == normalized {
        // backend echoed the code, so it does not know this currency
        return normalized;
    }

    capitalize_first_letter_only(&backend, false)
}

/// Symbol of a currency, falling back to the code itself.
///
/// Crypto and testnet codes resolve from the fixed symbol table; fiat codes
/// go through the locale backend. Codes without a dedicated symbol (RUB,
/// CHF, ...) come back unchanged.
pub fn currency_symbol(code: &str, narrow: bool, locale_tag: &str) -> String {
    let normalized = code.trim().to_uppercase();

    if let Some(symbol) = tables::crypto_symbol(&normalized) {
        return symbol.to_string();
    }

    match locale::currency_symbol(&normalized, narrow, Lang::parse(locale_tag)) {
        Some(symbol) => symbol.to_string(),
        None => normalized,
    }
}

// ISO 4217 codes are three letters; longer internal codes keep their last
// three characters for backend lookups.
fn iso_shorten(code: &str) -> &str {
    let count = code.chars().count();
    if count <= 3 {
        return code;
    }

    let (cut, _) = code
        .char_indices()
        .nth(count - 3)
        .unwrap_or((0, '\0'));
    &code[cut..]
}

// Move the minus sign so it sits immediately before the first digit.
fn minus_before_first_digit(unsigned: &str) -> String {
    match unsigned.char_indices().find(|(_, c)| c.is_ascii_digit()) {
        Some((index, _)) => format!("{}-{}", &unsigned[..index], &unsigned[index..]),
        None => format!("-{unsigned}"),
    }
}

/// Format an amount together with its currency marker.
///
/// The amount is rounded away from zero (or truncated) to `max_decimals`,
/// rendered in the normalized space/dot form, and decorated per `mode`:
/// symbol modes substitute the crypto symbol table before asking the locale
/// backend, Code mode keeps the full code even when it is longer than the
/// three ISO characters used for lookups. The locale tag only drives marker
/// placement (`en-*` prefix, `fr-*` suffix) and symbol choice.
///
/// With `minus_in_front` a negative amount carries its sign immediately
/// before the first digit instead of before the whole string. Invalid input
/// echoes the input back.
#[allow(clippy::too_many_arguments)]
pub fn format_with_symbol<T: DecimalInput>(
    amount: T,
    code: &str,
    rounded: bool,
    max_decimals: u32,
    min_decimals: u32,
    mode: DisplayMode,
    minus_in_front: bool,
    locale_tag: &str,
) -> String {
    let function = "format_with_symbol";

    let Some(value) = require_amount(&amount, function) else {
        return amount.fallback_text();
    };
    let Some((max_decimals, min_decimals)) =
        repair_decimal_bounds(max_decimals, min_decimals, function)
    else {
        return amount.fallback_text();
    };

    let value = if rounded {
        round_up(value, max_decimals)
    } else {
        truncate(value, max_decimals)
    };
    // negative zero renders as plain zero
    let value = if value.is_zero() { Decimal::ZERO } else { value };

    let normalized = code.trim().to_uppercase();
    let number = render_plain(value.abs(), min_decimals);
    let lang = Lang::parse(locale_tag);

    let (marker, code_fallback) = match mode {
        DisplayMode::Code => (normalized.clone(), false),
        DisplayMode::NarrowSymbol | DisplayMode::Symbol => {
            match tables::crypto_symbol(&normalized) {
                Some(symbol) => (symbol.to_string(), false),
                None => {
                    let narrow = mode == DisplayMode::NarrowSymbol;
                    match locale::currency_symbol(iso_shorten(&normalized), narrow, lang) {
                        Some(symbol) => (symbol.to_string(), false),
                        // no symbol anywhere, swap the full code back in
                        None => (normalized.clone(), true),
                    }
                },
            }
        },
        DisplayMode::Name => {
            (currency_full_name(&normalized, lang, value.abs() > Decimal::ONE), false)
        },
        DisplayMode::None => (String::new(), false),
    };

    let unsigned = match (mode, symbol_position(locale_tag)) {
        (DisplayMode::None, _) => number,
        // full names read as a suffix in every locale
        (DisplayMode::Name, _) => format!("{number} {marker}"),
        (_, SymbolPosition::Suffix) => format!("{number} {marker}"),
        (DisplayMode::Code, SymbolPosition::Prefix) => format!("{marker} {number}"),
        // a code standing in for a missing symbol keeps the code spacing
        (_, SymbolPosition::Prefix) if code_fallback => format!("{marker} {number}"),
        (_, SymbolPosition::Prefix) => format!("{marker}{number}"),
    };

    if !value.is_sign_negative() || value.is_zero() {
        return unsigned;
    }

    if minus_in_front {
        minus_before_first_digit(&unsigned)
    } else {
        format!("-{unsigned}")
    }
}

/// Label an amount by magnitude and append its currency text.
///
/// Above one million the number goes through the magnitude labeling of
/// [`label_number`](crate::numeric::label_number); below it the plainly
/// formatted number is used. Either way the currency text sits at the end:
/// code, symbol, full name (with the French partitive `d'`/`de `), or
/// nothing. The name pluralizes once the amount exceeds one.
#[allow(clippy::too_many_arguments)]
pub fn label_currency<T: DecimalInput>(
    amount: T,
    lang: Lang,
    code: &str,
    mode: DisplayMode,
    short_label: bool,
    rounded: bool,
    max_decimals: u32,
    min_decimals: u32,
) -> String {
    let function = "label_currency";

    let Some(value) = require_amount(&amount, function) else {
        return amount.fallback_text();
    };
    let Some((max_decimals, min_decimals)) =
        repair_decimal_bounds(max_decimals, min_decimals, function)
    else {
        return amount.fallback_text();
    };

    let normalized = code.trim().to_uppercase();
    let locale_tag = match lang {
        Lang::En => "en-US",
        Lang::Fr => "fr-FR",
    };

    let currency_text = match mode {
        DisplayMode::Code => format!(" {normalized}"),
        DisplayMode::NarrowSymbol => {
            format!(" {}", currency_symbol(&normalized, true, locale_tag))
        },
        DisplayMode::Symbol => {
            format!(" {}", currency_symbol(&normalized, false, locale_tag))
        },
        DisplayMode::Name => {
            let name = currency_full_name(&normalized, lang, value > Decimal::ONE);
            // elision applies to EUR only, not to every vowel-initial name
            let partitive = if lang == Lang::Fr {
                if normalized == "EUR" {
                    "d'"
                } else {
                    "de "
                }
            } else {
                ""
            };
            format!(" {partitive}{name}")
        },
        DisplayMode::None => String::new(),
    };

    let labeled = labeled_magnitude(value, lang, short_label, rounded, max_decimals, min_decimals)
        .unwrap_or_else(|| format_number(value, rounded, max_decimals, min_decimals));

    format!("{labeled}{currency_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_full_name_three_tiers() {
        // fixed table
        assert_eq!(currency_full_name("BTC", Lang::En, false), "Bitcoin");
        assert_eq!(currency_full_name("usd", Lang::Fr, true), "Dollars des États-Unis");
        // locale backend, capitalized
        assert_eq!(currency_full_name("JPY", Lang::En, false), "Japanese Yen");
        assert_eq!(currency_full_name("sek", Lang::Fr, false), "Couronne suédoise");
        // unknown code passes through
        assert_eq!(currency_full_name("XYZ", Lang::En, false), "XYZ");
    }

    #[test]
    fn test_currency_symbol_three_tiers() {
        assert_eq!(currency_symbol("BTC", false, "en-US"), "₿");
        assert_eq!(currency_symbol("TBTC", false, "en-US"), "t₿");
        assert_eq!(currency_symbol("USD", false, "en-US"), "$");
        assert_eq!(currency_symbol("USD", false, "fr-FR"), "$US");
        assert_eq!(currency_symbol("USD", true, "fr-FR"), "$");
        // no dedicated symbol, code as fallback
        assert_eq!(currency_symbol("RUB", false, "en-US"), "RUB");
    }

    #[test]
    fn test_format_with_symbol_code_mode() {
        assert_eq!(
            format_with_symbol(1234.56, "USD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "USD 1\u{202f}234.56"
        );
        assert_eq!(
            format_with_symbol(1234.56, "USD", false, 2, 2, DisplayMode::Code, true, "fr-FR"),
            "1\u{202f}234.56 USD"
        );
    }

    #[test]
    fn test_format_with_symbol_symbol_modes() {
        assert_eq!(
            format_with_symbol(1234.56, "USD", false, 2, 2, DisplayMode::Symbol, true, "en-US"),
            "$1\u{202f}234.56"
        );
        assert_eq!(
            format_with_symbol(1234.56, "USD", false, 2, 2, DisplayMode::Symbol, true, "fr-FR"),
            "1\u{202f}234.56 $US"
        );
        assert_eq!(
            format_with_symbol(0.5, "BTC", false, 8, 2, DisplayMode::Symbol, true, "en-US"),
            "₿0.50"
        );
    }

    #[test]
    fn test_format_with_symbol_code_fallback_is_spaced() {
        // no symbol available: the full code comes back, spaced like code mode
        assert_eq!(
            format_with_symbol(10, "RUB", false, 2, 2, DisplayMode::Symbol, true, "en-US"),
            "RUB 10.00"
        );
        assert_eq!(
            format_with_symbol(-10, "RUB", false, 2, 2, DisplayMode::Symbol, true, "en-US"),
            "RUB -10.00"
        );
        assert_eq!(
            format_with_symbol(10, "CHF", false, 2, 2, DisplayMode::NarrowSymbol, true, "fr-FR"),
            "10.00 CHF"
        );
    }

    #[test]
    fn test_format_with_symbol_minus_in_front() {
        // minus immediately before the first digit, not before the marker
        assert_eq!(
            format_with_symbol(-1234.56, "USD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "USD -1\u{202f}234.56"
        );
        assert_eq!(
            format_with_symbol(-1234.56, "USD", false, 2, 2, DisplayMode::Symbol, true, "en-US"),
            "$-1\u{202f}234.56"
        );
        assert_eq!(
            format_with_symbol(-1234.56, "USD", false, 2, 2, DisplayMode::Code, false, "en-US"),
            "-USD 1\u{202f}234.56"
        );
        // suffix locales already lead with the digits
        assert_eq!(
            format_with_symbol(-1234.56, "USD", false, 2, 2, DisplayMode::Code, true, "fr-FR"),
            "-1\u{202f}234.56 USD"
        );
    }

    #[test]
    fn test_format_with_symbol_rounds_away_from_zero() {
        assert_eq!(
            format_with_symbol(1.2341, "USD", true, 2, 2, DisplayMode::None, true, "en-US"),
            "1.24"
        );
        assert_eq!(
            format_with_symbol(-1.2341, "USD", true, 2, 2, DisplayMode::None, true, "en-US"),
            "-1.24"
        );
        assert_eq!(
            format_with_symbol(1.2399, "USD", false, 2, 2, DisplayMode::None, true, "en-US"),
            "1.23"
        );
    }

    #[test]
    fn test_format_with_symbol_negative_zero() {
        assert_eq!(
            format_with_symbol("-0.001", "USD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "USD 0.00"
        );
    }

    #[test]
    fn test_format_with_symbol_long_code() {
        // internal codes longer than three characters shorten for lookup
        // but display in full in code mode
        assert_eq!(
            format_with_symbol(1, "XXUSD", false, 2, 2, DisplayMode::Symbol, true, "en-US"),
            "$1.00"
        );
        assert_eq!(
            format_with_symbol(1, "XXUSD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "XXUSD 1.00"
        );
    }

    #[test]
    fn test_format_with_symbol_name_mode() {
        assert_eq!(
            format_with_symbol(2, "BTC", false, 2, 2, DisplayMode::Name, true, "en-US"),
            "2.00 Bitcoins"
        );
        assert_eq!(
            format_with_symbol(1, "BTC", false, 2, 2, DisplayMode::Name, true, "en-US"),
            "1.00 Bitcoin"
        );
    }

    #[test]
    fn test_format_with_symbol_invalid_input() {
        assert_eq!(
            format_with_symbol("abc", "USD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "abc"
        );
        assert_eq!(
            format_with_symbol(None::<f64>, "USD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "None"
        );
    }

    #[test]
    fn test_label_currency_code() {
        assert_eq!(
            label_currency(1_000_000, Lang::En, "USD", DisplayMode::Code, false, false, 2, 2),
            "1.00 Million USD"
        );
        assert_eq!(
            label_currency(1_234_567, Lang::En, "USD", DisplayMode::Code, false, true, 4, 4),
            "1.2346 Million USD"
        );
    }

    #[test]
    fn test_label_currency_below_threshold() {
        assert_eq!(
            label_currency(999_999, Lang::En, "USD", DisplayMode::Code, false, false, 2, 2),
            "999\u{202f}999.00 USD"
        );
        assert_eq!(
            label_currency(1234.5, Lang::En, "EUR", DisplayMode::Symbol, false, false, 2, 2),
            "1\u{202f}234.50 €"
        );
    }

    #[test]
    fn test_label_currency_name_french_partitive() {
        assert_eq!(
            label_currency(2_000_000, Lang::Fr, "EUR", DisplayMode::Name, false, false, 2, 2),
            "2.00 Millions d'Euros"
        );
        assert_eq!(
            label_currency(2_000_000, Lang::Fr, "USD", DisplayMode::Name, false, false, 2, 2),
            "2.00 Millions de Dollars des États-Unis"
        );
        assert_eq!(
            label_currency(2_000_000, Lang::En, "USD", DisplayMode::Name, false, false, 2, 2),
            "2.00 Million US Dollars"
        );
    }

    #[test]
    fn test_label_currency_partitive_is_eur_only() {
        // vowel-initial names other than the euro still take "de "
        assert_eq!(
            label_currency(2_000_000, Lang::Fr, "XAU", DisplayMode::Name, false, false, 2, 2),
            "2.00 Millions de Onces troy d'or"
        );
        assert_eq!(
            label_currency(2_000_000, Lang::Fr, "ETH", DisplayMode::Name, false, false, 2, 2),
            "2.00 Millions de Ethereum"
        );
        assert_eq!(
            label_currency(2_000_000, Lang::Fr, "EUR", DisplayMode::Name, false, false, 2, 2),
            "2.00 Millions d'Euros"
        );
    }

    #[test]
    fn test_label_currency_symbol_and_none() {
        assert_eq!(
            label_currency(1_000_000_000, Lang::En, "BTC", DisplayMode::Symbol, true, false, 2, 2),
            "1.00 B ₿"
        );
        assert_eq!(
            label_currency(1_000_000, Lang::En, "USD", DisplayMode::None, false, false, 2, 2),
            "1.00 Million"
        );
    }

    #[test]
    fn test_label_currency_invalid_input() {
        assert_eq!(
            label_currency("abc", Lang::En, "USD", DisplayMode::Code, false, false, 2, 2),
            "abc"
        );
    }
}
