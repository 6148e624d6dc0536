//! Per-invocation handler context and reply.

use crate::embed::Embed;
use crate::openf1::Fetcher;
use chrono::NaiveDateTime;

/// What a handler may use. Built fresh for each invocation.
pub struct Context<'a> {
    /// Upstream data source shared by all invocations.
    pub fetcher: &'a dyn Fetcher,
    /// Local wall-clock time at dispatch.
    pub now: NaiveDateTime,
}

/// Handler output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub embed: Embed,
    /// Metric label when the answer is degraded (fallback data or an error
    /// shown to the user).
    pub degraded: Option<&'static str>,
}

impl Reply {
    pub fn ok(embed: Embed) -> Self {
        Self {
            embed,
            degraded: None,
        }
    }

    pub fn degraded(embed: Embed, kind: &'static str) -> Self {
        Self {
            embed,
            degraded: Some(kind),
        }
    }
}
