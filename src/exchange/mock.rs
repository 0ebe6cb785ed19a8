//! In-memory `HttpTransport` for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{PriceError, PriceResult};

use super::http::{HttpReply, HttpTransport};

enum Route {
    Reply(HttpReply),
    Fail(String),
}

/// Unrouted URLs answer 404, like an exchange that does not list the symbol.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, url: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Reply(HttpReply::new(status, body)));
    }

    pub fn ok(&self, url: &str, body: serde_json::Value) {
        self.reply(url, 200, &body.to_string());
    }

    pub fn fail(&self, url: &str, reason: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Fail(reason.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> PriceResult<HttpReply> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.routes.lock().unwrap().get(url) {
            Some(Route::Reply(reply)) => Ok(reply.clone()),
            Some(Route::Fail(reason)) => Err(PriceError::Transport(reason.clone())),
            None => Ok(HttpReply::new(404, "{\"code\":-1121,\"msg\":\"Invalid symbol.\"}")),
        }
    }
}
