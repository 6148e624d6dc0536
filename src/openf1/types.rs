//! Records returned by the OpenF1 API.
//!
//! Every field is optional: the upstream schema is not enforced beyond the
//! keys read here, and absent or `null` keys decode to `None`.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A session (practice, qualifying, race) from `/sessions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub session_key: Option<i64>,
    pub session_name: Option<String>,
    pub date_start: Option<String>,
    pub meeting_name: Option<String>,
    pub circuit_short_name: Option<String>,
}

impl Session {
    /// Parsed `date_start`, when present and RFC 3339.
    pub fn started_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date_start.as_deref()?).ok()
    }
}

/// A driver entry from `/drivers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DriverEntry {
    pub driver_number: Option<u32>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
}

/// A position sample from `/position`. Several samples per driver are normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PositionRecord {
    pub driver_number: Option<u32>,
    pub position: Option<u32>,
}
