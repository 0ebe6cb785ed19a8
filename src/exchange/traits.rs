use serde_json::Value;

use crate::error::PriceResult;

use super::types::{Exchange, Instrument, TickerSnapshot};

/// Per-exchange endpoints and response mapping.
///
/// Implementations are pure: they build URLs and decode bodies, while the
/// registry and fetcher own the network calls.
pub trait PriceSource: Send + Sync {
    fn exchange(&self) -> Exchange;

    fn instruments_url(&self) -> String;

    /// Ticker URL for one candidate in canonical `BASE/QUOTE` (or raw) form.
    fn ticker_url(&self, candidate: &str) -> String;

    fn parse_instruments(&self, body: Value) -> PriceResult<Vec<Instrument>>;

    /// `Ok(None)` means the exchange answered but had no ticker for the symbol.
    fn parse_ticker(&self, body: Value) -> PriceResult<Option<TickerSnapshot>>;
}
