//! Recovers base and quote assets from an exchange-native symbol.
//!
//! OKX symbols carry a `-` delimiter. Binance and Bitget symbols are plain
//! concatenations, so the split is inferred from cached pairs by an ordered
//! strategy list, ending in a halve-the-string fallback that is only an
//! approximation.

use crate::exchange::types::Exchange;

use super::{pair_parts, strip_separators};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Separator-insensitive match against a cached pair.
    ExactPair,
    /// Longest cached quote asset that is a strict suffix.
    QuoteSuffix,
    /// Longest cached base asset that is a strict prefix.
    BasePrefix,
    /// First half is the base, remainder the quote.
    Halve,
}

pub const SPLIT_PIPELINE: [SplitStrategy; 4] = [
    SplitStrategy::ExactPair,
    SplitStrategy::QuoteSuffix,
    SplitStrategy::BasePrefix,
    SplitStrategy::Halve,
];

impl SplitStrategy {
    pub fn split(&self, symbol: &str, pairs: &[String]) -> Option<(String, String)> {
        match self {
            SplitStrategy::ExactPair => {
                let wanted = strip_separators(symbol);
                pairs
                    .iter()
                    .filter_map(|pair| pair_parts(pair))
                    .find(|(base, quote)| format!("{}{}", base, quote) == wanted)
                    .map(|(base, quote)| (base.to_string(), quote.to_string()))
            }
            SplitStrategy::QuoteSuffix => pairs
                .iter()
                .filter_map(|pair| pair_parts(pair))
                .map(|(_, quote)| quote)
                .filter(|quote| !quote.is_empty() && symbol.len() > quote.len())
                .filter(|quote| symbol.ends_with(quote))
                .max_by_key(|quote| quote.len())
                .map(|quote| (symbol[..symbol.len() - quote.len()].to_string(), quote.to_string())),
            SplitStrategy::BasePrefix => pairs
                .iter()
                .filter_map(|pair| pair_parts(pair))
                .map(|(base, _)| base)
                .filter(|base| !base.is_empty() && symbol.len() > base.len())
                .filter(|base| symbol.starts_with(base))
                .max_by_key(|base| base.len())
                .map(|base| (base.to_string(), symbol[base.len()..].to_string())),
            SplitStrategy::Halve => {
                let chars: Vec<char> = symbol.chars().collect();
                let mid = chars.len() / 2;
                Some((chars[..mid].iter().collect(), chars[mid..].iter().collect()))
            }
        }
    }
}

/// Splits `symbol` into `(base, quote)` for `exchange`.
pub fn split(symbol: &str, exchange: Exchange, pairs: &[String]) -> (String, String) {
    if exchange.has_native_separator() {
        if let Some((base, quote)) = symbol.split_once('-') {
            let quote = quote.split('-').next().unwrap_or(quote);
            return (base.to_string(), quote.to_string());
        }
    }

    let symbol = strip_separators(symbol);
    SPLIT_PIPELINE
        .iter()
        .find_map(|strategy| strategy.split(&symbol, pairs))
        .unwrap_or_default()
}
