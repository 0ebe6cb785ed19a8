//! SpotQuote - spot ticker lookup across Binance, Bitget and OKX
//!
//! Resolves loosely written symbols (`BTC`, `btc-usdt`, `BTCUSDT`) against
//! each exchange's published instrument list and returns one normalized
//! price record.

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod error;
pub mod exchange;
pub mod price;
pub mod symbols;

// Re-export commonly used types
pub use aggregator::PriceAggregator;
pub use config::AppConfig;
pub use error::{PriceError, PriceResult};
pub use exchange::types::Exchange;
pub use price::PriceRecord;
pub use symbols::registry::{RefreshOutcome, SymbolRegistry};

#[cfg(test)]
mod config_tests;
