//! Symbol normalization and pair lookup helpers.
//!
//! Canonical pair (used internally): "BASE/QUOTE", uppercase, e.g. "BTC/USDT".
//!
//! Exchange mappings:
//! - Binance, Bitget: "BTCUSDT"
//! - OKX: "BTC-USDT"

pub mod registry;
pub mod resolver;
pub mod splitter;

#[cfg(test)]
mod symbols_tests;

use crate::constants::symbols::{INPUT_SEPARATORS, PAIR_SEPARATOR, QUOTE_PRIORITY};

/// Uppercases, drops spaces and maps `_`/`-` onto the canonical `/`.
pub fn clean_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if INPUT_SEPARATORS.contains(&c) {
                PAIR_SEPARATOR
            } else {
                c
            }
        })
        .collect::<String>()
        .to_uppercase()
}

/// Uppercase form with every separator and space removed.
pub fn strip_separators(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| !c.is_whitespace() && *c != PAIR_SEPARATOR && !INPUT_SEPARATORS.contains(c))
        .collect::<String>()
        .to_uppercase()
}

/// Splits a canonical pair into `(base, quote)`.
pub fn pair_parts(pair: &str) -> Option<(&str, &str)> {
    pair.split_once(PAIR_SEPARATOR)
}

/// Finds the pair matching `query` while ignoring case, spaces and separators.
pub fn search_symbol<'a, I>(query: &str, pairs: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let wanted = strip_separators(query);
    pairs
        .into_iter()
        .find(|pair| strip_separators(pair) == wanted)
        .cloned()
}

/// Best pair quoted against `base_coin`.
///
/// USDT first, then BTC, then ETH, then whichever pair with that base comes
/// first in iteration order.
pub fn find_pair_with_base_coin(base_coin: &str, pairs: &[String]) -> Option<String> {
    for quote in QUOTE_PRIORITY {
        let query = format!("{}{}{}", base_coin, PAIR_SEPARATOR, quote);
        if let Some(found) = search_symbol(&query, pairs) {
            return Some(found);
        }
    }

    pairs
        .iter()
        .find(|pair| pair_parts(pair).is_some_and(|(base, _)| base == base_coin))
        .cloned()
}
