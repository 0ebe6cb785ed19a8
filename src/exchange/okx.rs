//! OKX (API v5) public market data.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{
    traits::PriceSource,
    types::{parse_decimal, Exchange, Instrument, TickerSnapshot},
    urls::{okx_info_url, okx_ticker_url},
};

use crate::config::EndpointConfig;
use crate::error::PriceResult;

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstrumentInfo {
    base_ccy: String,
    quote_ccy: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker {
    inst_id: String,
    last: String,
    vol24h: String,
    high24h: String,
    low24h: String,
    sod_utc0: String,
}

#[derive(Clone)]
pub struct OkxSource {
    base_url: String,
}

impl OkxSource {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }
}

/// Percent change of `last` against the start-of-day (UTC) open.
///
/// OKX publishes no change field. A zero reference price yields 0.0.
pub fn change_since_open(last: f64, sod_utc0: f64) -> f64 {
    if sod_utc0 == 0.0 {
        return 0.0;
    }
    (last / sod_utc0) * 100.0 - 100.0
}

impl PriceSource for OkxSource {
    fn exchange(&self) -> Exchange {
        Exchange::Okx
    }

    fn instruments_url(&self) -> String {
        okx_info_url(&self.base_url)
    }

    fn ticker_url(&self, candidate: &str) -> String {
        okx_ticker_url(&self.base_url, candidate)
    }

    fn parse_instruments(&self, body: Value) -> PriceResult<Vec<Instrument>> {
        let envelope: Envelope<InstrumentInfo> = serde_json::from_value(body)?;
        Ok(envelope
            .data
            .iter()
            .map(|i| Instrument::new(&i.base_ccy, &i.quote_ccy))
            .collect())
    }

    fn parse_ticker(&self, body: Value) -> PriceResult<Option<TickerSnapshot>> {
        // Unknown instIds come back as 200 with an error code and empty data
        let envelope: Envelope<Ticker> = serde_json::from_value(body)?;
        let Some(ticker) = envelope.data.into_iter().next() else {
            warn!("[OKX] ticker response carried no data");
            return Ok(None);
        };

        let last_price = parse_decimal("last", &ticker.last)?;
        let sod_utc0 = parse_decimal("sodUtc0", &ticker.sod_utc0)?;

        Ok(Some(TickerSnapshot {
            symbol: ticker.inst_id,
            last_price,
            volume: parse_decimal("vol24h", &ticker.vol24h)?,
            high_price: parse_decimal("high24h", &ticker.high24h)?,
            low_price: parse_decimal("low24h", &ticker.low24h)?,
            change: change_since_open(last_price, sod_utc0),
        }))
    }
}
