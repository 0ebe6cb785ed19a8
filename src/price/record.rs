use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::exchange::types::{Exchange, TickerSnapshot};
use crate::symbols::splitter::split;

use super::format::{format_amount, format_price};

/// Normalized 24h ticker snapshot from one exchange.
///
/// Built once per fetch and never mutated. `change` is a percentage on the
/// 0-100 scale whatever the exchange's own convention.
#[derive(Clone, Debug, Serialize)]
pub struct PriceRecord {
    /// Exchange-native symbol, uppercased (`BTCUSDT`, `BTC-USDT`).
    pub symbol: String,
    /// Separator-free form for display (`BTCUSDT`, swaps as `BTCUSDT-P`).
    pub display_symbol: String,
    pub current_price: f64,
    pub volume: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub change: f64,
    pub api_url: String,
    pub exchange: Exchange,
    pub base_asset: String,
    pub quote_asset: String,

    pub str_current_price: String,
    pub str_volume: String,
    pub str_high_price: String,
    pub str_low_price: String,
    pub str_change: String,

    pub fetched_at: DateTime<Utc>,
}

impl PriceRecord {
    /// `pairs` are the exchange's cached pairs, used to split the symbol.
    pub fn new(ticker: TickerSnapshot, api_url: &str, exchange: Exchange, pairs: &[String]) -> Self {
        let symbol = ticker.symbol.to_uppercase();
        let (base_asset, quote_asset) = split(&symbol, exchange, pairs);

        Self {
            display_symbol: display_symbol(&ticker.symbol),
            str_current_price: format_price(ticker.last_price),
            str_volume: format_amount(ticker.volume),
            str_high_price: format_price(ticker.high_price),
            str_low_price: format_price(ticker.low_price),
            str_change: format_amount(ticker.change),
            current_price: ticker.last_price,
            volume: ticker.volume,
            high_price: ticker.high_price,
            low_price: ticker.low_price,
            change: ticker.change,
            api_url: api_url.to_string(),
            exchange,
            base_asset,
            quote_asset,
            symbol,
            fetched_at: Utc::now(),
        }
    }

    /// Ordered `(key, display value)` view of the record.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", self.symbol.clone()),
            ("current_price", self.str_current_price.clone()),
            ("volume", self.str_volume.clone()),
            ("high_price", self.str_high_price.clone()),
            ("low_price", self.str_low_price.clone()),
            ("change", self.str_change.clone()),
            ("api_url", self.api_url.clone()),
            ("exchange", self.exchange.display_name().to_string()),
        ]
    }
}

pub fn display_symbol(symbol: &str) -> String {
    symbol.replace('-', "").replace("SWAP", "-P").replace('/', "")
}

impl fmt::Display for PriceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol: {}", self.symbol)?;
        writeln!(f, "Current Price: {}", self.str_current_price)?;
        writeln!(f, "Volume: {}", self.str_volume)?;
        writeln!(f, "High Price: {}", self.str_high_price)?;
        writeln!(f, "Low Price: {}", self.str_low_price)?;
        writeln!(f, "Change: {}", self.str_change)?;
        writeln!(f, "API URL: {}", self.api_url)?;
        write!(f, "Exchange: {}", self.exchange)
    }
}
