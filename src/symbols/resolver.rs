//! Turns a user-supplied symbol into ticker candidates for one exchange.
//!
//! Resolution runs an ordered list of strategies against the exchange's
//! cached coins and pairs; every hit becomes a candidate. When none hit
//! (empty or stale registry, unknown symbol) two speculative candidates are
//! returned and the live ticker call decides.

use crate::constants::symbols::{FALLBACK_QUOTE, PAIR_SEPARATOR};

use super::{clean_symbol, find_pair_with_base_coin, search_symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateStrategy {
    /// A bare coin (`BTC`) maps to its preferred pair.
    BaseCoinPair,
    /// `BTC/USDT`, `BTCUSDT`, `btc-usdt` match a cached pair ignoring separators.
    SeparatorInsensitivePair,
}

/// Strategies in priority order.
pub const CANDIDATE_PIPELINE: [CandidateStrategy; 2] = [
    CandidateStrategy::BaseCoinPair,
    CandidateStrategy::SeparatorInsensitivePair,
];

impl CandidateStrategy {
    /// `symbol` must already be normalized by [`clean_symbol`].
    pub fn candidate(&self, symbol: &str, coins: &[String], pairs: &[String]) -> Option<String> {
        match self {
            CandidateStrategy::BaseCoinPair => {
                if symbol.contains(PAIR_SEPARATOR) || !coins.iter().any(|c| c == symbol) {
                    return None;
                }
                find_pair_with_base_coin(symbol, pairs)
            }
            CandidateStrategy::SeparatorInsensitivePair => search_symbol(symbol, pairs),
        }
    }
}

/// Ordered, de-duplicated candidates for `symbol`.
pub fn resolve_candidates(symbol: &str, coins: &[String], pairs: &[String]) -> Vec<String> {
    let symbol = clean_symbol(symbol);
    let mut candidates: Vec<String> = Vec::with_capacity(2);

    for strategy in CANDIDATE_PIPELINE {
        if let Some(found) = strategy.candidate(&symbol, coins, pairs) {
            if !candidates.contains(&found) {
                candidates.push(found);
            }
        }
    }

    if candidates.is_empty() {
        candidates.push(symbol.clone());
        candidates.push(format!("{}{}{}", symbol, PAIR_SEPARATOR, FALLBACK_QUOTE));
    }

    candidates
}
