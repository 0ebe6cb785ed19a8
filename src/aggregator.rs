//! Exchange-agnostic price lookup.
//!
//! `PriceAggregator` owns the symbol registry, the HTTP transport and one
//! `PriceSource` per exchange. Without an explicit exchange, lookups try
//! Binance, then Bitget, then OKX and return the first hit.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::constants::EXCHANGE_PRIORITY;
use crate::error::{PriceError, PriceResult};
use crate::exchange::{
    binance::BinanceSource,
    bitget::BitgetSource,
    fetcher::fetch_price,
    http::{HttpTransport, ReqwestTransport},
    okx::OkxSource,
    traits::PriceSource,
    types::Exchange,
};
use crate::price::PriceRecord;
use crate::symbols::registry::{RefreshOutcome, SymbolRegistry};

pub struct PriceAggregator {
    http: Arc<dyn HttpTransport>,
    registry: SymbolRegistry,
    binance: BinanceSource,
    bitget: BitgetSource,
    okx: OkxSource,
}

impl PriceAggregator {
    /// Builds an aggregator with an empty registry. No request is made.
    pub fn new(config: &AppConfig, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            http,
            registry: SymbolRegistry::new(),
            binance: BinanceSource::new(&config.binance),
            bitget: BitgetSource::new(&config.bitget),
            okx: OkxSource::new(&config.okx),
        }
    }

    /// reqwest-backed aggregator, see [`PriceAggregator::connect_with`].
    pub async fn connect(config: &AppConfig) -> PriceResult<Self> {
        let http = ReqwestTransport::new(config.request_timeout())?;
        Self::connect_with(config, Arc::new(http)).await
    }

    /// Loads every instrument list first when `refresh_on_start` is set.
    pub async fn connect_with(config: &AppConfig, http: Arc<dyn HttpTransport>) -> PriceResult<Self> {
        config.validate()?;
        let aggregator = Self::new(config, http);

        if config.refresh_on_start {
            let stale = aggregator
                .refresh_symbols()
                .await
                .iter()
                .filter(|o| o.is_stale())
                .count();
            info!(
                "Symbol registry initialized ({} of {} exchanges stale)",
                stale,
                Exchange::ALL.len()
            );
        }

        Ok(aggregator)
    }

    pub fn source(&self, exchange: Exchange) -> &dyn PriceSource {
        match exchange {
            Exchange::Binance => &self.binance,
            Exchange::Bitget => &self.bitget,
            Exchange::Okx => &self.okx,
        }
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Reloads all three instrument lists and the union sets.
    pub async fn refresh_symbols(&self) -> Vec<RefreshOutcome> {
        let sources: Vec<&dyn PriceSource> = Exchange::ALL.iter().map(|ex| self.source(*ex)).collect();
        self.registry.refresh_all(&sources, self.http.as_ref()).await
    }

    pub async fn refresh_exchange(&self, exchange: Exchange) -> RefreshOutcome {
        self.registry
            .refresh(self.source(exchange), self.http.as_ref())
            .await
    }

    pub async fn fetch_exchange_price(&self, exchange: Exchange, symbol: &str) -> PriceResult<PriceRecord> {
        fetch_price(self.source(exchange), &self.registry, self.http.as_ref(), symbol).await
    }

    pub async fn fetch_binance_price_data(&self, symbol: &str) -> PriceResult<PriceRecord> {
        self.fetch_exchange_price(Exchange::Binance, symbol).await
    }

    pub async fn fetch_bitget_price_data(&self, symbol: &str) -> PriceResult<PriceRecord> {
        self.fetch_exchange_price(Exchange::Bitget, symbol).await
    }

    pub async fn fetch_okx_price_data(&self, symbol: &str) -> PriceResult<PriceRecord> {
        self.fetch_exchange_price(Exchange::Okx, symbol).await
    }

    /// Looks `symbol` up on `exchange`, or on every exchange in priority order.
    ///
    /// With an explicit exchange its `SymbolNotFound` is returned unchanged.
    /// Otherwise only a miss on all three yields `SymbolNotFound` naming the
    /// input; transport and server errors stop the search immediately.
    pub async fn fetch_price_data(&self, symbol: &str, exchange: Option<Exchange>) -> PriceResult<PriceRecord> {
        if let Some(exchange) = exchange {
            return self.fetch_exchange_price(exchange, symbol).await;
        }

        for exchange in EXCHANGE_PRIORITY {
            match self.fetch_exchange_price(exchange, symbol).await {
                Ok(record) => return Ok(record),
                Err(e) if e.is_not_found() => {
                    debug!("{}", e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(PriceError::not_found(symbol, None))
    }

    pub fn coins(&self, exchange: Exchange) -> Vec<String> {
        self.registry.coins(exchange)
    }

    pub fn pairs(&self, exchange: Exchange) -> Vec<String> {
        self.registry.pairs(exchange)
    }

    pub fn all_coins(&self) -> Vec<String> {
        self.registry.all_coins()
    }

    pub fn all_pairs(&self) -> Vec<String> {
        self.registry.all_pairs()
    }
}
