//! OpenF1 REST API access.
//!
//! One GET per [`Query`], bounded by a fixed timeout, never retried.
//! [`Fetcher`] is the seam handlers depend on; [`OpenF1Client`] is the
//! production implementation sharing one pooled HTTP client.

pub mod api;
mod client;
mod query;
mod types;

pub use client::{Fetcher, OpenF1Client};
pub use query::Query;
#[cfg(test)]
pub use query::Endpoint;
pub use types::{PositionRecord, Session};
