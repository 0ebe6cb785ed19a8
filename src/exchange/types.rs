use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PriceError;

/// Supported spot exchanges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    Binance,
    Bitget,
    Okx,
}

impl Exchange {
    pub const ALL: [Exchange; 3] = [Exchange::Binance, Exchange::Bitget, Exchange::Okx];

    /// Human-facing name used in messages and rendered records.
    pub fn display_name(&self) -> &'static str {
        match self {
            Exchange::Binance => "Binance",
            Exchange::Bitget => "Bitget",
            Exchange::Okx => "OKX",
        }
    }

    /// Whether exchange-native symbols carry an explicit base/quote delimiter.
    pub fn has_native_separator(&self) -> bool {
        matches!(self, Exchange::Okx)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Exchange {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "binance" => Ok(Exchange::Binance),
            "bitget" => Ok(Exchange::Bitget),
            "okx" => Ok(Exchange::Okx),
            other => Err(PriceError::UnknownExchange(other.to_string())),
        }
    }
}

/// One tradable market as published by an instrument-list endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instrument {
    pub base: String,
    pub quote: String,
}

impl Instrument {
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_uppercase(),
            quote: quote.to_uppercase(),
        }
    }

    /// Canonical `BASE/QUOTE` form.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

/// Ticker fields after exchange-specific mapping, before display formatting.
///
/// `change` is always a percentage on the 0-100 scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TickerSnapshot {
    pub symbol: String,
    pub last_price: f64,
    pub volume: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub change: f64,
}

/// Parses an exchange numeric field. Exchanges send decimals as JSON strings.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, PriceError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PriceError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
