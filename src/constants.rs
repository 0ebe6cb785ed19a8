//! Application-wide constants
//!
//! Endpoint defaults and the fixed orderings used by symbol resolution
//! live here so they can be inspected and tested in one place.

use crate::exchange::types::Exchange;

/// Default REST hosts and request settings
pub mod endpoints {
    pub const BINANCE_BASE_URL: &str = "https://api.binance.com";
    pub const BITGET_BASE_URL: &str = "https://api.bitget.com";
    pub const OKX_BASE_URL: &str = "https://www.okx.com";

    /// Seconds before an HTTP request is abandoned
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Symbol resolution constants
pub mod symbols {
    /// Quote assets tried, in order, when the user names only a coin
    pub const QUOTE_PRIORITY: [&str; 3] = ["USDT", "BTC", "ETH"];

    /// Quote appended to speculative candidates when the registry has no match
    pub const FALLBACK_QUOTE: &str = "USDT";

    /// Canonical base/quote delimiter
    pub const PAIR_SEPARATOR: char = '/';

    /// Characters treated as equivalent to the canonical delimiter
    pub const INPUT_SEPARATORS: [char; 2] = ['_', '-'];
}

/// Order in which exchanges are tried when the caller does not pick one
pub const EXCHANGE_PRIORITY: [Exchange; 3] = [Exchange::Binance, Exchange::Bitget, Exchange::Okx];

/// Logging event names for structured logging
pub mod events {
    pub const REGISTRY_REFRESHED: &str = "registry_refreshed";
    pub const REGISTRY_STALE: &str = "registry_stale";
    pub const CANDIDATE_MISS: &str = "candidate_miss";
    pub const PRICE_FETCHED: &str = "price_fetched";
}
