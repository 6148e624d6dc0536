//! Typed requests on top of [`Fetcher`].

use super::client::Fetcher;
use super::query::{Endpoint, Query};
use super::types::{DriverEntry, PositionRecord, Session};
use crate::error::FetchError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// `GET /sessions?year=…[&session_name=…]`
pub async fn sessions(
    fetcher: &dyn Fetcher,
    year: i32,
    session_name: Option<&str>,
) -> Result<Vec<Session>, FetchError> {
    let mut query = Query::new(Endpoint::Sessions).param("year", year);
    if let Some(name) = session_name {
        query = query.param("session_name", name);
    }
    fetch_records(fetcher, &query).await
}

/// `GET /drivers?session_key=…`
pub async fn drivers(fetcher: &dyn Fetcher, session_key: i64) -> Result<Vec<DriverEntry>, FetchError> {
    let query = Query::new(Endpoint::Drivers).param("session_key", session_key);
    fetch_records(fetcher, &query).await
}

/// `GET /position?session_key=…`
pub async fn positions(
    fetcher: &dyn Fetcher,
    session_key: i64,
) -> Result<Vec<PositionRecord>, FetchError> {
    let query = Query::new(Endpoint::Position).param("session_key", session_key);
    fetch_records(fetcher, &query).await
}

/// Decode a JSON array record by record.
///
/// A body that is not an array is an error. Elements that do not match `T`
/// are skipped so one odd record does not discard the rest.
async fn fetch_records<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    query: &Query,
) -> Result<Vec<T>, FetchError> {
    let endpoint = query.endpoint().path();
    let body = fetcher.fetch(query).await?;
    let items: Vec<Value> = serde_json::from_value(body).map_err(|e| {
        warn!(endpoint, error = %e, "OpenF1 response is not an array");
        crate::metrics::record_upstream_error(endpoint, "decode");
        FetchError::Decode(e)
    })?;

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    let skipped = total - records.len();
    if skipped > 0 {
        warn!(endpoint, skipped, total, "Skipped malformed OpenF1 records");
        crate::metrics::record_upstream_error(endpoint, "malformed_record");
    }
    Ok(records)
}
