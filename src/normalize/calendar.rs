//! Calendar status and next-race derivation.
//!
//! Both derivations depend on "now" and are recomputed on every call.

use chrono::{NaiveDateTime, NaiveTime};
use f1_season::Race;

/// Where a race stands relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceStatus {
    Completed,
    InProgress,
    Upcoming,
}

/// Classify a race by comparing race-day midnight with `now`.
///
/// A race is completed as soon as its day has started; `InProgress` only
/// holds at exactly midnight of race day.
pub fn race_status(race: &Race, now: NaiveDateTime) -> RaceStatus {
    let start = race_start(race);
    if start < now {
        RaceStatus::Completed
    } else if start.date() == now.date() {
        RaceStatus::InProgress
    } else {
        RaceStatus::Upcoming
    }
}

fn race_start(race: &Race) -> NaiveDateTime {
    race.date.and_time(NaiveTime::MIN)
}

/// A race paired with its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry<'a> {
    pub race: &'a Race,
    pub status: RaceStatus,
}

/// Every race of `calendar`, in round order, with its status at `now`.
pub fn calendar_overview(calendar: &[Race], now: NaiveDateTime) -> Vec<CalendarEntry<'_>> {
    calendar
        .iter()
        .map(|race| CalendarEntry {
            race,
            status: race_status(race, now),
        })
        .collect()
}

/// Outcome of the next-race lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRace<'a> {
    Upcoming {
        race: &'a Race,
        /// Whole days from `now` to race-day midnight, truncated toward zero.
        days_until: i64,
    },
    SeasonOver,
}

/// First race, in round order, whose race-day midnight is not before `now`.
pub fn next_race(calendar: &[Race], now: NaiveDateTime) -> NextRace<'_> {
    calendar
        .iter()
        .map(|race| (race, race_start(race)))
        .find(|(_, start)| *start >= now)
        .map_or(NextRace::SeasonOver, |(race, start)| NextRace::Upcoming {
            race,
            days_until: (start - now).num_days(),
        })
}
