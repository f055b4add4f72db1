// ============================================================================
// Locale Backend
// Static locale data used as the rendering backend for labels and currency
// display names. Read-only process-wide tables, no dynamic registration.
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Language used for magnitude labels, pluralization and display names.
///
/// Only English and French carry dedicated data; anything else falls back to
/// English, mirroring the upstream label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    /// Parse a language tag case-insensitively. Unknown tags become English.
    pub fn parse(tag: &str) -> Self {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();

        if primary.eq_ignore_ascii_case("fr") {
            Lang::Fr
        } else {
            Lang::En
        }
    }
}

/// Where a locale places the currency marker relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Marker placement for a BCP 47-style locale tag. Unknown tags behave like
/// `en-US`.
pub fn symbol_position(locale_tag: &str) -> SymbolPosition {
    match Lang::parse(locale_tag) {
        Lang::Fr => SymbolPosition::Suffix,
        Lang::En => SymbolPosition::Prefix,
    }
}

/// Words appended after dividing an amount by the matching power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeLabels {
    pub million: &'static str,
    pub billion: &'static str,
    pub trillion: &'static str,
}

/// Magnitude label words for a language, long or abbreviated.
///
/// French abbreviates billion as `G` (milliard) rather than `B`.
pub fn magnitude_labels(lang: Lang, short: bool) -> MagnitudeLabels {
    match (lang, short) {
        (Lang::En, false) => MagnitudeLabels {
            million: "Million",
            billion: "Billion",
            trillion: "Trillion",
        },
        (Lang::Fr, false) => MagnitudeLabels {
            million: "Million",
            billion: "Milliard",
            trillion: "Trillion",
        },
        (Lang::En, true) => MagnitudeLabels {
            million: "M",
            billion: "B",
            trillion: "T",
        },
        (Lang::Fr, true) => MagnitudeLabels {
            million: "M",
            billion: "G",
            trillion: "T",
        },
    }
}

/// Display name of a fiat currency in CLDR casing.
///
/// Returns the code itself when the currency is not in the table, so callers
/// can detect an unknown code by comparing the result with the input.
pub fn currency_display_name(code: &str, lang: Lang, plural: bool) -> String {
    let normalized = code.trim().to_uppercase();

    let name = match (normalized.as_str(), lang, plural) {
        ("USD", Lang::En, false) => "US Dollar",
        ("USD", Lang::En, true) => "US dollars",
        ("USD", Lang::Fr, false) => "dollar des États-Unis",
        ("USD", Lang::Fr, true) => "dollars des États-Unis",
        ("EUR", _, false) => "euro",
        ("EUR", _, true) => "euros",
        ("GBP", Lang::En, false) => "British Pound",
        ("GBP", Lang::En, true) => "British pounds",
        ("GBP", Lang::Fr, false) => "livre sterling",
        ("GBP", Lang::Fr, true) => "livres sterling",
        ("CAD", Lang::En, false) => "Canadian Dollar",
        ("CAD", Lang::En, true) => "Canadian dollars",
        ("CAD", Lang::Fr, false) => "dollar canadien",
        ("CAD", Lang::Fr, true) => "dollars canadiens",
        ("JPY", Lang::En, false) => "Japanese Yen",
        ("JPY", Lang::En, true) => "Japanese yen",
        ("JPY", Lang::Fr, false) => "yen japonais",
        ("JPY", Lang::Fr, true) => "yens japonais",
        ("CHF", Lang::En, false) => "Swiss Franc",
        ("CHF", Lang::En, true) => "Swiss francs",
        ("CHF", Lang::Fr, false) => "franc suisse",
        ("CHF", Lang::Fr, true) => "francs suisses",
        ("AUD", Lang::En, false) => "Australian Dollar",
        ("AUD", Lang::En, true) => "Australian dollars",
        ("AUD", Lang::Fr, false) => "dollar australien",
        ("AUD", Lang::Fr, true) => "dollars australiens",
        ("CNY", Lang::En, false) => "Chinese Yuan",
        ("CNY", Lang::En, true) => "Chinese yuan",
        ("CNY", Lang::Fr, false) => "yuan chinois",
        ("CNY", Lang::Fr, true) => "yuans chinois",
        ("RUB", Lang::En, false) => "Russian Ruble",
        ("RUB", Lang::En, true) => "Russian rubles",
        ("RUB", Lang::Fr, false) => "rouble russe",
        ("RUB", Lang::Fr, true) => "roubles russes",
        ("SEK", Lang::En, false) => "Swedish Krona",
        ("SEK", Lang::En, true) => "Swedish kronor",
        ("SEK", Lang::Fr, false) => "couronne suédoise",
        ("SEK", Lang::Fr, true) => "couronnes suédoises",
        ("INR", Lang::En, false) => "Indian Rupee",
        ("INR", Lang::En, true) => "Indian rupees",
        ("INR", Lang::Fr, false) => "roupie indienne",
        ("INR", Lang::Fr, true) => "roupies indiennes",
        ("MXN", Lang::En, false) => "Mexican Peso",
        ("MXN", Lang::En, true) => "Mexican pesos",
        ("MXN", Lang::Fr, false) => "peso mexicain",
        ("MXN", Lang::Fr, true) => "pesos mexicains",
        ("BRL", Lang::En, false) => "Brazilian Real",
        ("BRL", Lang::En, true) => "Brazilian reals",
        ("BRL", Lang::Fr, false) => "réal brésilien",
        ("BRL", Lang::Fr, true) => "réals brésiliens",
        _ => return normalized,
    };

    name.to_string()
}

/// Fiat currency symbol for a locale, or `None` when the locale renders the
/// code instead (RUB, CHF, SEK, ...).
pub fn currency_symbol(code: &str, narrow: bool, lang: Lang) -> Option<&'static str> {
    let normalized = code.trim().to_uppercase();

    let symbol = match (normalized.as_str(), lang, narrow) {
        ("USD", Lang::En, false) => "$",
        ("USD", Lang::Fr, false) => "$US",
        ("USD", _, true) => "$",
        ("EUR", _, _) => "€",
        ("GBP", Lang::En, false) => "£",
        ("GBP", Lang::Fr, false) => "£GB",
        ("GBP", _, true) => "£",
        ("JPY", Lang::En, _) => "¥",
        ("CAD", Lang::En, false) => "CA$",
        ("CAD", Lang::Fr, false) => "$CA",
        ("CAD", _, true) => "$",
        ("AUD", Lang::En, false) => "A$",
        ("AUD", Lang::Fr, false) => "$AU",
        ("AUD", _, true) => "$",
        ("CNY", Lang::En, false) => "CN¥",
        ("CNY", Lang::En, true) => "¥",
        ("INR", _, _) => "₹",
        ("BRL", _, _) => "R$",
        ("MXN", Lang::En, false) => "MX$",
        ("MXN", _, true) => "$",
        _ => return None,
    };

    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_parse() {
        assert_eq!(Lang::parse("en"), Lang::En);
        assert_eq!(Lang::parse("fr"), Lang::Fr);
        assert_eq!(Lang::parse("FR"), Lang::Fr);
        assert_eq!(Lang::parse("fr-CA"), Lang::Fr);
        assert_eq!(Lang::parse("de"), Lang::En);
        assert_eq!(Lang::parse(""), Lang::En);
    }

    #[test]
    fn test_symbol_position() {
        assert_eq!(symbol_position("en-US"), SymbolPosition::Prefix);
        assert_eq!(symbol_position("fr-FR"), SymbolPosition::Suffix);
        assert_eq!(symbol_position("xx"), SymbolPosition::Prefix);
    }

    #[test]
    fn test_magnitude_labels() {
        assert_eq!(magnitude_labels(Lang::En, false).billion, "Billion");
        assert_eq!(magnitude_labels(Lang::Fr, false).billion, "Milliard");
        assert_eq!(magnitude_labels(Lang::Fr, true).billion, "G");
        assert_eq!(magnitude_labels(Lang::En, true).trillion, "T");
    }

    #[test]
    fn test_currency_display_name() {
        assert_eq!(currency_display_name("USD", Lang::En, false), "US Dollar");
        assert_eq!(currency_display_name("usd", Lang::En, true), "US dollars");
        assert_eq!(
            currency_display_name("USD", Lang::Fr, true),
            "dollars des États-Unis"
        );
        assert_eq!(
            currency_display_name("GBP", Lang::Fr, false),
            "livre sterling"
        );
        // unknown code comes back unchanged (uppercased)
        assert_eq!(currency_display_name("xyz", Lang::En, false), "XYZ");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(currency_symbol("USD", false, Lang::En), Some("$"));
        assert_eq!(currency_symbol("USD", false, Lang::Fr), Some("$US"));
        assert_eq!(currency_symbol("USD", true, Lang::Fr), Some("$"));
        assert_eq!(currency_symbol("GBP", false, Lang::Fr), Some("£GB"));
        assert_eq!(currency_symbol("EUR", false, Lang::En), Some("€"));
        // no dedicated symbol
        assert_eq!(currency_symbol("RUB", false, Lang::En), None);
        assert_eq!(currency_symbol("CHF", false, Lang::En), None);
    }
}
