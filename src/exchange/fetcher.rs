//! Candidate loop shared by every exchange.

use tracing::{debug, info};

use crate::constants::events;
use crate::error::{PriceError, PriceResult};
use crate::price::PriceRecord;
use crate::symbols::{clean_symbol, registry::SymbolRegistry, resolver::resolve_candidates};

use super::{http::fetch_api_data, http::HttpTransport, traits::PriceSource};

/// Fetches a price record for `symbol` from `source`'s exchange.
///
/// Candidates are tried in order and the first ticker wins. A 4xx reply or an
/// empty payload moves on to the next candidate; any other failure aborts.
pub async fn fetch_price(
    source: &dyn PriceSource,
    registry: &SymbolRegistry,
    http: &dyn HttpTransport,
    symbol: &str,
) -> PriceResult<PriceRecord> {
    let exchange = source.exchange();
    let symbol = clean_symbol(symbol);

    let snapshot = registry.snapshot(exchange);
    let coins: Vec<String> = snapshot.coins.iter().cloned().collect();
    let pairs: Vec<String> = snapshot.pairs.iter().cloned().collect();

    for candidate in resolve_candidates(&symbol, &coins, &pairs) {
        let api_url = source.ticker_url(&candidate);
        debug!("[{}] trying {} via {}", exchange, candidate, api_url);

        let Some(body) = fetch_api_data(http, &api_url).await? else {
            debug!(event = events::CANDIDATE_MISS, "[{}] {} not listed", exchange, candidate);
            continue;
        };

        let Some(ticker) = source.parse_ticker(body)? else {
            debug!(event = events::CANDIDATE_MISS, "[{}] {} returned no ticker", exchange, candidate);
            continue;
        };

        let record = PriceRecord::new(ticker, &api_url, exchange, &pairs);
        info!(
            event = events::PRICE_FETCHED,
            "[{}] {} = {}", exchange, record.symbol, record.str_current_price
        );
        return Ok(record);
    }

    Err(PriceError::not_found(symbol, Some(exchange)))
}
