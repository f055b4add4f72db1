// ============================================================================
// Currency Module
// Currency name/symbol resolution and amount formatting
// ============================================================================
//
// Lookups follow a three-tier strategy: fixed override tables (crypto,
// testnet crypto, precious metals, a few fiat codes) win over the locale
// backend, and an unknown code always falls back to itself.

mod format;
mod tables;

pub use format::{
    currency_full_name, currency_symbol, format_with_symbol, label_currency, DisplayMode,
};
