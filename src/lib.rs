// ============================================================================
// Moneykit Library
// Precise decimal arithmetic and formatting for monetary amounts
// ============================================================================

//! # Moneykit
//!
//! Stateless utilities for handling monetary amounts without floating-point
//! precision loss.
//!
//! ## Features
//!
//! - **Atomic units**: lossless integer representation of decimal amounts
//! - **Unit shifting**: power-of-ten conversion (satoshi ↔ bitcoin style)
//! - **Four rounding rules**: truncate, half-up, away-from-zero, toward-zero
//! - **Normalized formatting**: narrow no-break space thousands grouping,
//!   magnitude labels (Million/Billion/Trillion) in English and French
//! - **Currency rendering**: symbol/name tables for fiat, crypto and
//!   testnet currencies with locale-aware marker placement
//!
//! Every public function is total: malformed input produces a logged
//! diagnostic and a documented fallback, never a panic.
//!
//! ## Example
//!
//! ```rust
//! use moneykit::prelude::*;
//!
//! // lossless atomic-unit round trip
//! let unit = number_to_atomic_unit("1234.567");
//! assert_eq!(unit.value, "1234567");
//! assert_eq!(unit.precision, 3);
//!
//! // satoshis to bitcoin
//! assert_eq!(shift_down(150_000_000i64, DEFAULT_SHIFT_FACTOR).to_string(), "1.5");
//!
//! // normalized formatting, truncation by default
//! assert_eq!(format_number(1234.56789, false, 2, 2), "1\u{202f}234.56");
//!
//! // currency symbols with crypto overrides
//! assert_eq!(currency_symbol("BTC", false, "en-US"), "₿");
//! assert_eq!(currency_symbol("RUB", false, "en-US"), "RUB");
//! ```

pub mod currency;
pub mod id;
pub mod locale;
pub mod numeric;
pub mod text;
pub mod time;
pub mod units;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        currency_full_name, currency_symbol, format_with_symbol, label_currency, DisplayMode,
    };
    pub use crate::id::{new_uuid, new_uuid_string};
    pub use crate::locale::{Lang, SymbolPosition};
    pub use crate::numeric::{
        absolute, count_decimal_places, format_number, is_number, label_number, parse_amount,
        round_down, round_half_up, round_up, truncate, DecimalInput, NumericError, NumericResult,
        MAX_SCALE, THOUSANDS_SEPARATOR,
    };
    pub use crate::time::Granularity;
    pub use crate::units::{
        atomic_unit_to_decimal, number_to_atomic_unit, shift_down, shift_up, AtomicUnit,
        DEFAULT_SHIFT_FACTOR,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_atomic_unit_pipeline() {
        // parse a decimal-comma user input, store it atomically, restore it
        let amount = parse_amount("1234,567");
        let unit = number_to_atomic_unit(amount);

        assert!(unit.is_valid);
        assert_eq!(unit.value, "1234567");
        assert_eq!(atomic_unit_to_decimal(&unit, true), Decimal::from_str("1234.567").unwrap());
    }

    #[test]
    fn test_smallest_unit_to_display_string() {
        // satoshis from a backend, rendered for an English user
        let bitcoin = shift_down(123_456_789i64, DEFAULT_SHIFT_FACTOR);
        assert_eq!(bitcoin, Decimal::from_str("1.23456789").unwrap());

        let rendered =
            format_with_symbol(bitcoin, "BTC", false, 8, 2, DisplayMode::Symbol, true, "en-US");
        assert_eq!(rendered, "₿1.23456789");
    }

    #[test]
    fn test_magnitude_labels_both_languages() {
        let treasury = shift_down(250_000_000_000_000_000i64, DEFAULT_SHIFT_FACTOR);
        assert_eq!(
            label_currency(treasury, Lang::En, "BTC", DisplayMode::Name, false, false, 2, 2),
            "2.50 Billion Bitcoins"
        );
        assert_eq!(
            label_currency(treasury, Lang::Fr, "BTC", DisplayMode::Name, false, false, 2, 2),
            "2.50 Milliards de Bitcoins"
        );
    }

    #[test]
    fn test_invalid_input_is_echoed_everywhere() {
        assert_eq!(format_number("garbage", false, 2, 2), "garbage");
        assert_eq!(
            format_with_symbol("garbage", "USD", false, 2, 2, DisplayMode::Code, true, "en-US"),
            "garbage"
        );
        assert_eq!(shift_up("garbage", 8), Decimal::ZERO);
        assert!(!number_to_atomic_unit("garbage").is_valid);
    }
}
