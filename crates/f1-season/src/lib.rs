//! # f1-season
//!
//! Static reference data for one Formula 1 season: the race calendar and
//! the driver roster. Everything here is `'static` and immutable for the
//! lifetime of the process.
//!
//! ```rust
//! use f1_season::{CALENDAR, ROSTER, SEASON};
//!
//! assert_eq!(SEASON, 2025);
//! assert_eq!(CALENDAR[0].round, 1);
//! assert!(ROSTER.iter().any(|d| d.number == "1"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod calendar;
pub mod roster;

pub use calendar::{Race, CALENDAR};
pub use roster::{find_driver, Driver, ROSTER};

/// The season the bundled tables describe.
pub const SEASON: i32 = 2025;
