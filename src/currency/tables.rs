// ============================================================================
// Currency Tables
// Fixed symbol and name overrides for crypto, testnet and special currencies
// ============================================================================
//
// These entries win over the locale backend: generic locale data is
// frequently wrong or missing for crypto and a handful of fiat codes.
// Symbol reference: https://www.xe.com/symbols.php

use crate::locale::Lang;

/// Dedicated symbol for a cryptocurrency or its testnet variant.
///
/// Testnet codes carry a `t` prefix on the mainnet symbol.
pub(crate) fn crypto_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "BTC" => "₿",    // Bitcoin
        "SAT" => "丰",   // Satoshi
        "ADA" => "₳",    // Cardano
        "DOGE" => "Ð",   // Dogecoin
        "ETH" => "Ξ",    // Ethereum
        "LTC" => "Ł",    // Litecoin
        "XTZ" => "ꜩ",    // Tezos
        "USDT" => "₮",   // Tether
        "TBTC" => "t₿",  // Testnet Bitcoin
        "TSAT" => "t丰", // Testnet Satoshi
        "TADA" => "t₳",  // Testnet Cardano
        "TDOGE" => "tÐ", // Testnet Dogecoin
        "TETH" => "tΞ",  // Testnet Ethereum
        "TLTC" => "tŁ",  // Testnet Litecoin
        "TXTZ" => "tꜩ",  // Testnet Tezos
        "TUSDT" => "t₮", // Testnet Tether
        _ => return None,
    };

    Some(symbol)
}

/// Name of a cryptocurrency, language-independent. Only the codes that
/// denote countable coins pluralize.
fn crypto_name(code: &str, plural: bool) -> Option<String> {
    let suffix = if plural { "s" } else { "" };

    let name = match code {
        "BTC" => return Some(format!("Bitcoin{suffix}")),
        "SAT" => return Some(format!("Satoshi{suffix}")),
        "BNB" => return Some(format!("Binance Coin{suffix}")),
        "DOGE" => return Some(format!("Dogecoin{suffix}")),
        "LTC" => return Some(format!("Litecoin{suffix}")),
        "USDC" => return Some(format!("USD Coin{suffix}")),
        "USDT" => return Some(format!("Tether{suffix}")),
        "ADA" => "Cardano",
        "ALGO" => "Algorand",
        "ARB" => "Arbitrum",
        "ATOM" => "Cosmos",
        "AVAX" => "Avalanche",
        "DOT" => "Polkadot",
        "ETH" => "Ethereum",
        "FTM" => "Fantom",
        "MATIC" => "Polygon",
        "NEAR" => "Near",
        "OP" => "Optimism",
        "SOL" => "Solana",
        "TRX" => "Tron",
        "VET" => "VeChain",
        "XLM" => "Stellar",
        "XRP" => "Ripple",
        "XTZ" => "Tezos",
        _ => return None,
    };

    Some(name.to_string())
}

/// Fixed full-name override: crypto, testnet crypto, precious metals and the
/// hard-coded fiat set. `None` sends the caller to the locale backend.
pub(crate) fn fixed_currency_name(code: &str, lang: Lang, plural: bool) -> Option<String> {
    let suffix = if plural { "s" } else { "" };

    match (code, lang) {
        ("XAU", Lang::Fr) => return Some(format!("Once{suffix} troy d'or")),
        ("XAU", Lang::En) => return Some(format!("Gold Troy Ounce{suffix}")),
        ("XAG", Lang::Fr) => return Some(format!("Once{suffix} troy d'argent")),
        ("XAG", Lang::En) => return Some(format!("Silver Troy Ounce{suffix}")),
        ("EUR", _) => return Some(format!("Euro{suffix}")),
        ("USD", Lang::En) => return Some(format!("US Dollar{suffix}")),
        ("USD", Lang::Fr) => return Some(format!("Dollar{suffix} des États-Unis")),
        ("GBP", Lang::En) => return Some(format!("British Pound{suffix}")),
        ("GBP", Lang::Fr) => return Some(format!("Livre{suffix} sterling")),
        ("CAD", Lang::En) => return Some(format!("Canadian Dollar{suffix}")),
        ("CAD", Lang::Fr) => return Some(format!("Dollar{suffix} canadien{suffix}")),
        _ => {},
    }

    if let Some(name) = crypto_name(code, plural) {
        return Some(name);
    }

    // TRX and friends matched above, so a leading T here means testnet
    if let Some(mainnet) = code.strip_prefix('T') {
        if let Some(name) = crypto_name(mainnet, plural) {
            return Some(format!("Testnet {name}"));
        }
    }

    None
}
