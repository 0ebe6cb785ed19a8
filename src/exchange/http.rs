//! HTTP collaborator used by the registry and the price fetchers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{PriceError, PriceResult};

/// Raw reply from a GET request: status code and body text.
#[derive(Clone, Debug)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET. Transport failures are errors; any HTTP status is a reply.
    async fn get(&self, url: &str) -> PriceResult<HttpReply>;
}

/// reqwest-backed transport with a per-request timeout.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> PriceResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> PriceResult<HttpReply> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        debug!("GET {} -> {}", url, status);
        Ok(HttpReply { status, body })
    }
}

/// Fetches a ticker payload. A 4xx reply means "not found for this candidate"
/// and yields `None`; any other failure is an error.
pub async fn fetch_api_data(http: &dyn HttpTransport, url: &str) -> PriceResult<Option<Value>> {
    let reply = http.get(url).await?;

    if reply.is_client_error() {
        return Ok(None);
    }
    if !reply.is_success() {
        return Err(PriceError::Http {
            status: reply.status,
            url: url.to_string(),
            body: reply.body,
        });
    }

    Ok(Some(serde_json::from_str(&reply.body)?))
}

/// Fetches a payload where every non-success status is an error.
pub async fn fetch_required(http: &dyn HttpTransport, url: &str) -> PriceResult<Value> {
    let reply = http.get(url).await?;

    if !reply.is_success() {
        return Err(PriceError::Http {
            status: reply.status,
            url: url.to_string(),
            body: reply.body,
        });
    }

    Ok(serde_json::from_str(&reply.body)?)
}
