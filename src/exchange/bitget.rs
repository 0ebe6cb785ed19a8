//! Bitget Spot (API v2) public market data.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{
    traits::PriceSource,
    types::{parse_decimal, Exchange, Instrument, TickerSnapshot},
    urls::{bitget_info_url, bitget_ticker_url},
};

use crate::config::EndpointConfig;
use crate::error::PriceResult;

/// Bitget wraps every payload in `{ "code", "msg", "data" }`.
#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolInfo {
    base_coin: String,
    quote_coin: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker {
    symbol: String,
    last_pr: String,
    base_volume: String,
    high24h: String,
    low24h: String,
    change24h: String,
}

#[derive(Clone)]
pub struct BitgetSource {
    base_url: String,
}

impl BitgetSource {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }
}

/// Bitget reports 24h change as a fraction (0.0523 == 5.23%).
pub fn fraction_to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

impl PriceSource for BitgetSource {
    fn exchange(&self) -> Exchange {
        Exchange::Bitget
    }

    fn instruments_url(&self) -> String {
        bitget_info_url(&self.base_url)
    }

    fn ticker_url(&self, candidate: &str) -> String {
        bitget_ticker_url(&self.base_url, candidate)
    }

    fn parse_instruments(&self, body: Value) -> PriceResult<Vec<Instrument>> {
        let envelope: Envelope<SymbolInfo> = serde_json::from_value(body)?;
        Ok(envelope
            .data
            .iter()
            .map(|s| Instrument::new(&s.base_coin, &s.quote_coin))
            .collect())
    }

    fn parse_ticker(&self, body: Value) -> PriceResult<Option<TickerSnapshot>> {
        let envelope: Envelope<Ticker> = serde_json::from_value(body)?;
        let Some(ticker) = envelope.data.into_iter().next() else {
            warn!("[BITGET] ticker response carried no data");
            return Ok(None);
        };

        let change = fraction_to_percent(parse_decimal("change24h", &ticker.change24h)?);

        Ok(Some(TickerSnapshot {
            symbol: ticker.symbol,
            last_price: parse_decimal("lastPr", &ticker.last_pr)?,
            volume: parse_decimal("baseVolume", &ticker.base_volume)?,
            high_price: parse_decimal("high24h", &ticker.high24h)?,
            low_price: parse_decimal("low24h", &ticker.low24h)?,
            change,
        }))
    }
}
