//! Derivation of display-ready data from static tables and upstream records.
//!
//! Static derivations ([`calendar`], [`teams`]) are pure functions of their
//! input and the current time. Remote derivations ([`standings`], [`results`])
//! issue at most two sequential requests and always end in a value: either
//! live data, the static fallback, or a user-facing [`ResultsError`].
//!
//! [`ResultsError`]: crate::error::ResultsError

pub mod calendar;
pub mod results;
mod sessions;
pub mod standings;
pub mod teams;

pub use calendar::{CalendarEntry, NextRace, RaceStatus, calendar_overview, next_race};
pub use results::{LastResults, Medal, last_results};
use sessions::latest_session;
pub use standings::{DriverStandings, StandingsSource, driver_standings};
pub use teams::group_by_team;

/// Placeholder for fields upstream did not provide.
pub const NOT_AVAILABLE: &str = "N/A";
