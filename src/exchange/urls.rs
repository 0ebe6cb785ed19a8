//! Request URL builders for instrument-list and ticker endpoints.
//!
//! Every builder takes the exchange host so tests and alternative
//! deployments can point at another base URL.

use url::form_urlencoded;

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Appends `?key=value` with `value` form-encoded.
fn with_query(base_url: &str, path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{}?{}", join(base_url, path), query)
}

// Binance

pub fn binance_info_url(base_url: &str) -> String {
    join(base_url, "/api/v3/exchangeInfo?permissions=SPOT")
}

pub fn binance_ticker_url(base_url: &str, symbol: &str) -> String {
    let symbol = symbol.replace('/', "").to_uppercase();
    with_query(base_url, "/api/v3/ticker/24hr", "symbol", &symbol)
}

// Bitget

pub fn bitget_info_url(base_url: &str) -> String {
    join(base_url, "/api/v2/spot/public/symbols")
}

pub fn bitget_ticker_url(base_url: &str, symbol: &str) -> String {
    let symbol = symbol.replace('/', "").to_uppercase();
    with_query(base_url, "/api/v2/spot/market/tickers", "symbol", &symbol)
}

// OKX

pub fn okx_info_url(base_url: &str) -> String {
    join(base_url, "/api/v5/public/instruments?instType=SPOT")
}

pub fn okx_ticker_url(base_url: &str, symbol: &str) -> String {
    let symbol = symbol.replace('/', "-").to_uppercase();
    with_query(base_url, "/api/v5/market/ticker", "instId", &symbol)
}
