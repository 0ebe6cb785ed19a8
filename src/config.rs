use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::constants::endpoints;
use crate::error::{PriceError, PriceResult};
use crate::exchange::types::Exchange;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "SPOTQUOTE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EndpointConfig {
    pub base_url: String,
}

impl EndpointConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

fn default_binance() -> EndpointConfig {
    EndpointConfig::new(endpoints::BINANCE_BASE_URL)
}

fn default_bitget() -> EndpointConfig {
    EndpointConfig::new(endpoints::BITGET_BASE_URL)
}

fn default_okx() -> EndpointConfig {
    EndpointConfig::new(endpoints::OKX_BASE_URL)
}

fn default_request_timeout_secs() -> u64 {
    endpoints::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Load every exchange's instrument list when the aggregator connects.
    #[serde(default = "default_true")]
    pub refresh_on_start: bool,

    #[serde(default = "default_binance")]
    pub binance: EndpointConfig,
    #[serde(default = "default_bitget")]
    pub bitget: EndpointConfig,
    #[serde(default = "default_okx")]
    pub okx: EndpointConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            refresh_on_start: true,
            binance: default_binance(),
            bitget: default_bitget(),
            okx: default_okx(),
        }
    }
}

impl AppConfig {
    /// Loads `$SPOTQUOTE_CONFIG` or `config.yaml`.
    pub fn load() -> PriceResult<Self> {
        Self::load_path(env::var(CONFIG_PATH_ENV).ok().as_deref())
    }

    /// A missing `config.yaml` means defaults; a missing explicit path is an error.
    pub fn load_path(explicit: Option<&str>) -> PriceResult<Self> {
        match explicit {
            Some(path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(PriceError::Config(format!(
                        "{} points to missing file {}",
                        CONFIG_PATH_ENV,
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(path)
            }
        }
    }

    pub fn load_from(path: &Path) -> PriceResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PriceError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> PriceResult<Self> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let config: AppConfig = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| PriceError::Config(format!("Failed to parse config: {}", e)))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PriceResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(PriceError::Config("request_timeout_secs must be positive".to_string()));
        }
        for exchange in Exchange::ALL {
            let base_url = &self.endpoint(exchange).base_url;
            Url::parse(base_url).map_err(|e| {
                PriceError::Config(format!("Invalid {} base_url {:?}: {}", exchange, base_url, e))
            })?;
        }
        Ok(())
    }

    pub fn endpoint(&self, exchange: Exchange) -> &EndpointConfig {
        match exchange {
            Exchange::Binance => &self.binance,
            Exchange::Bitget => &self.bitget,
            Exchange::Okx => &self.okx,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
