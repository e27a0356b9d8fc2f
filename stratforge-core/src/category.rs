//! Instrument classifier — free-form symbol string to coarse category.
//!
//! Classification walks a fixed, ordered table of substring patterns and
//! returns the first category that matches. Table order is load-bearing:
//! the precious-metals row precedes forex-majors so "XAUUSD" classifies as
//! a metal rather than matching "USD", while an unrelated ticker containing
//! "USD" still lands in forex-majors. Reordering the table changes observable
//! behavior and breaks the resolver's alias rule.

use serde::{Deserialize, Serialize};

/// Coarse instrument grouping used to select default tuning ranges when no
/// instrument-specific defaults exist. Derived from the symbol, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PreciousMetals,
    ForexMajors,
    ForexExotics,
    CryptoMajors,
    CryptoAlts,
    FuturesIndices,
    FuturesCommodities,
}

impl Category {
    /// All categories in classification order.
    pub fn all() -> &'static [Category] {
        &[
            Self::PreciousMetals,
            Self::ForexMajors,
            Self::ForexExotics,
            Self::CryptoMajors,
            Self::CryptoAlts,
            Self::FuturesIndices,
            Self::FuturesCommodities,
        ]
    }

    /// Stable snake_case tag, matching the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PreciousMetals => "precious_metals",
            Self::ForexMajors => "forex_majors",
            Self::ForexExotics => "forex_exotics",
            Self::CryptoMajors => "crypto_majors",
            Self::CryptoAlts => "crypto_alts",
            Self::FuturesIndices => "futures_indices",
            Self::FuturesCommodities => "futures_commodities",
        }
    }
}

/// Ordered pattern table. First matching row wins.
const PATTERN_TABLE: &[(Category, &[&str])] = &[
    (
        Category::PreciousMetals,
        &["XAU", "XAG", "XPT", "XPD", "GOLD", "SILVER"],
    ),
    (
        Category::ForexMajors,
        &["EUR", "GBP", "USD", "JPY", "CHF", "AUD", "CAD", "NZD"],
    ),
    (
        Category::ForexExotics,
        &["ZAR", "TRY", "BRL", "MXN", "PLN", "CZK", "HUF"],
    ),
    (
        Category::CryptoMajors,
        &["BTC", "ETH", "BNB", "XRP", "ADA", "SOL", "DOT"],
    ),
    (Category::CryptoAlts, &["DOGE", "SHIB"]),
    (
        Category::FuturesIndices,
        &["ES", "NQ", "YM", "RTY", "DAX", "FTSE", "NIKKEI"],
    ),
    (
        Category::FuturesCommodities,
        &["CL", "GC", "SI", "NG", "ZW", "ZC", "ZS", "KC", "SB"],
    ),
];

/// Classify a symbol into zero-or-one category.
///
/// Matching is case-insensitive and substring-based (not token-based), so
/// unrelated tickers containing a pattern will classify. Returns `None`
/// (not an error) when nothing matches.
pub fn classify(symbol: &str) -> Option<Category> {
    let up = symbol.to_uppercase();
    for (category, patterns) in PATTERN_TABLE {
        if patterns.iter().any(|p| up.contains(p)) {
            return Some(*category);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Known symbols ───────────────────────────────────────────

    #[test]
    fn xauusd_is_precious_metals() {
        // "XAU" fires before the forex-majors row sees "USD".
        assert_eq!(classify("XAUUSD"), Some(Category::PreciousMetals));
    }

    #[test]
    fn xauusdt_matches_by_substring() {
        // Substring, not token: the crypto-quoted ticker still hits "XAU".
        assert_eq!(classify("XAUUSDT"), Some(Category::PreciousMetals));
    }

    #[test]
    fn eurusd_is_forex_majors() {
        assert_eq!(classify("EURUSD"), Some(Category::ForexMajors));
    }

    #[test]
    fn usdzar_is_forex_majors_not_exotics() {
        // "USD" (forex-majors row) wins over "ZAR"; table order is the tie-break.
        assert_eq!(classify("USDZAR"), Some(Category::ForexMajors));
    }

    #[test]
    fn bare_metal_symbols_are_precious_metals() {
        assert_eq!(classify("XAG"), Some(Category::PreciousMetals));
        assert_eq!(classify("GOLD"), Some(Category::PreciousMetals));
        assert_eq!(classify("SILVER"), Some(Category::PreciousMetals));
    }

    #[test]
    fn crypto_majors_and_alts() {
        assert_eq!(classify("BTC"), Some(Category::CryptoMajors));
        assert_eq!(classify("ETHBTC"), Some(Category::CryptoMajors));
        assert_eq!(classify("DOGE"), Some(Category::CryptoAlts));
        assert_eq!(classify("SHIB"), Some(Category::CryptoAlts));
    }

    #[test]
    fn futures() {
        assert_eq!(classify("NQ"), Some(Category::FuturesIndices));
        assert_eq!(classify("ZW"), Some(Category::FuturesCommodities));
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert_eq!(classify("ZZZZZZ"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn lowercase_matches() {
        assert_eq!(classify("eurusd"), Some(Category::ForexMajors));
        assert_eq!(classify("xauusd"), Some(Category::PreciousMetals));
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn classify_is_deterministic(s in "[A-Za-z0-9]{0,12}") {
            prop_assert_eq!(classify(&s), classify(&s));
        }

        #[test]
        fn classify_is_case_insensitive(s in "[A-Za-z]{0,12}") {
            prop_assert_eq!(classify(&s), classify(&s.to_lowercase()));
            prop_assert_eq!(classify(&s), classify(&s.to_uppercase()));
        }

        #[test]
        fn first_matching_row_wins(s in "[A-Z]{0,12}") {
            let up = s.to_uppercase();
            let expected = PATTERN_TABLE
                .iter()
                .find(|(_, pats)| pats.iter().any(|p| up.contains(p)))
                .map(|(c, _)| *c);
            prop_assert_eq!(classify(&s), expected);
        }
    }

    // ── Serde tags ──────────────────────────────────────────────

    #[test]
    fn tag_matches_serde_representation() {
        for cat in Category::all() {
            let json = serde_json::to_string(cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.tag()));
        }
    }
}
