//! Shared helpers for unit tests: canned fetchers and local HTTP stubs.

use crate::error::FetchError;
use crate::openf1::{Endpoint, Fetcher, Query};
use async_trait::async_trait;
use axum::Router;
use parking_lot::Mutex;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;

/// Canned outcome for one endpoint.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Timeout,
}

/// [`Fetcher`] answering from a per-endpoint table and recording every query.
///
/// Endpoints without a reply behave like an upstream 404.
#[derive(Default)]
pub struct StubFetcher {
    replies: HashMap<Endpoint, Reply>,
    calls: Mutex<Vec<Query>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, endpoint: Endpoint, reply: Reply) -> Self {
        self.replies.insert(endpoint, reply);
        self
    }

    /// Every query received so far, in order.
    pub fn calls(&self) -> Vec<Query> {
        self.calls.lock().clone()
    }

    pub fn called(&self, endpoint: Endpoint) -> bool {
        self.calls.lock().iter().any(|q| q.endpoint() == endpoint)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, query: &Query) -> Result<Value, FetchError> {
        self.calls.lock().push(query.clone());
        match self.replies.get(&query.endpoint()) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(code)) => Err(FetchError::Status(
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            )),
            Some(Reply::Timeout) => Err(FetchError::Timeout),
            None => Err(FetchError::Status(StatusCode::NOT_FOUND)),
        }
    }
}

/// Serve `app` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}
