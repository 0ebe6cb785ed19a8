//! Custom error types for price lookups
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

use crate::exchange::types::Exchange;

/// Top-level lookup errors
#[derive(Error, Debug)]
pub enum PriceError {
    /// No candidate resolved to a live ticker. `exchange` is `None` when every
    /// exchange was tried.
    #[error("Symbol {symbol} not found in {}", not_found_scope(.exchange))]
    SymbolNotFound {
        symbol: String,
        exchange: Option<Exchange>,
    },

    #[error("HTTP {status} from {url}: {body}")]
    Http { status: u16, url: String, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest `HttpTransport`.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PriceError {
    pub fn not_found(symbol: impl Into<String>, exchange: Option<Exchange>) -> Self {
        PriceError::SymbolNotFound {
            symbol: symbol.into(),
            exchange,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PriceError::SymbolNotFound { .. })
    }
}

fn not_found_scope(exchange: &Option<Exchange>) -> String {
    match exchange {
        Some(ex) => format!("{} exchange", ex),
        None => "any exchange".to_string(),
    }
}

pub type PriceResult<T> = Result<T, PriceError>;
