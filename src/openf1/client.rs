//! HTTP client for the OpenF1 API.

use super::query::Query;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Compiled-in API base URL.
pub const OPENF1_API: &str = "https://api.openf1.org/v1";

/// Timeout for one upstream request, body included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of raw upstream JSON.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform one GET and return the parsed body.
    ///
    /// Implementations never panic on upstream trouble; every failure is an
    /// `Err` the caller turns into a fallback or a user-facing message.
    async fn fetch(&self, query: &Query) -> Result<Value, FetchError>;
}

/// Production [`Fetcher`] backed by a pooled `reqwest::Client`.
///
/// Created once at startup and shared by every command invocation.
pub struct OpenF1Client {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OpenF1Client {
    /// Client for the public API.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(OPENF1_API, FETCH_TIMEOUT)
    }

    /// Client for another base URL (used to point at local stubs).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("f1bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn url(&self, query: &Query) -> String {
        format!("{}/{}", self.base_url, query.endpoint().path())
    }

    async fn request(&self, query: &Query) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(self.url(query))
            .query(query.params())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Fetcher for OpenF1Client {
    async fn fetch(&self, query: &Query) -> Result<Value, FetchError> {
        let endpoint = query.endpoint();
        crate::metrics::record_upstream_request(endpoint.path());

        let result = match tokio::time::timeout(self.timeout, self.request(query)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        };

        match &result {
            Ok(_) => debug!(endpoint = %endpoint, params = ?query.params(), "OpenF1 request ok"),
            Err(e) => {
                match e {
                    FetchError::Status(status) => {
                        warn!(endpoint = %endpoint, status = status.as_u16(), "OpenF1 API returned non-success status")
                    }
                    _ => warn!(endpoint = %endpoint, error = %e, "OpenF1 API request failed"),
                }
                crate::metrics::record_upstream_error(endpoint.path(), e.error_code());
            }
        }

        result
    }
}
