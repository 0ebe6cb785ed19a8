//! Binance Spot public market data.

use serde::Deserialize;
use serde_json::Value;

use super::{
    traits::PriceSource,
    types::{parse_decimal, Exchange, Instrument, TickerSnapshot},
    urls::{binance_info_url, binance_ticker_url},
};

use crate::config::EndpointConfig;
use crate::error::PriceResult;

#[derive(Deserialize)]
struct ExchangeInfo {
    symbols: Vec<SymbolInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolInfo {
    base_asset: String,
    quote_asset: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker24h {
    symbol: String,
    last_price: String,
    volume: String,
    high_price: String,
    low_price: String,
    price_change_percent: String,
}

#[derive(Clone)]
pub struct BinanceSource {
    base_url: String,
}

impl BinanceSource {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }
}

impl PriceSource for BinanceSource {
    fn exchange(&self) -> Exchange {
        Exchange::Binance
    }

    fn instruments_url(&self) -> String {
        binance_info_url(&self.base_url)
    }

    fn ticker_url(&self, candidate: &str) -> String {
        binance_ticker_url(&self.base_url, candidate)
    }

    fn parse_instruments(&self, body: Value) -> PriceResult<Vec<Instrument>> {
        let info: ExchangeInfo = serde_json::from_value(body)?;
        Ok(info
            .symbols
            .iter()
            .map(|s| Instrument::new(&s.base_asset, &s.quote_asset))
            .collect())
    }

    fn parse_ticker(&self, body: Value) -> PriceResult<Option<TickerSnapshot>> {
        let ticker: Ticker24h = serde_json::from_value(body)?;

        // priceChangePercent is already a percentage
        Ok(Some(TickerSnapshot {
            symbol: ticker.symbol,
            last_price: parse_decimal("lastPrice", &ticker.last_price)?,
            volume: parse_decimal("volume", &ticker.volume)?,
            high_price: parse_decimal("highPrice", &ticker.high_price)?,
            low_price: parse_decimal("lowPrice", &ticker.low_price)?,
            change: parse_decimal("priceChangePercent", &ticker.price_change_percent)?,
        }))
    }
}
