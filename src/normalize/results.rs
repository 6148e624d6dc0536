//! Last race classification from upstream position samples.

use super::{NOT_AVAILABLE, latest_session};
use crate::error::ResultsError;
use crate::openf1::{Fetcher, PositionRecord, api};
use f1_season::{SEASON, find_driver};
use indexmap::IndexMap;

/// Number of classified drivers shown.
pub const RESULTS_LIMIT: usize = 10;

/// Podium medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 0-based index in the sorted classification.
    pub fn for_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Self::Gold),
            1 => Some(Self::Silver),
            2 => Some(Self::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub driver_number: u32,
    pub position: u32,
    pub name: String,
    pub team: String,
    pub medal: Option<Medal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastResults {
    pub meeting_name: String,
    /// `YYYY-MM-DD` part of the session start.
    pub date: String,
    pub circuit: String,
    pub entries: Vec<ResultEntry>,
}

/// Reduce position samples to one final position per driver, sorted by
/// position.
///
/// Samples are applied in the order received and the last one per driver
/// wins. Samples missing either field, or carrying a zero, are skipped.
/// Drivers sharing a position stay in first-seen order.
pub fn final_positions(records: &[PositionRecord]) -> Vec<(u32, u32)> {
    let mut finals: IndexMap<u32, u32> = IndexMap::new();
    for record in records {
        match (record.driver_number, record.position) {
            (Some(driver), Some(position)) if driver != 0 && position != 0 => {
                finals.insert(driver, position);
            }
            _ => {}
        }
    }

    let mut ordered: Vec<(u32, u32)> = finals.into_iter().collect();
    ordered.sort_by_key(|&(_, position)| position);
    ordered
}

/// Top of the classification with roster names and medals.
pub fn classify(records: &[PositionRecord]) -> Vec<ResultEntry> {
    final_positions(records)
        .into_iter()
        .take(RESULTS_LIMIT)
        .enumerate()
        .map(|(idx, (driver_number, position))| {
            let driver = find_driver(&driver_number.to_string());
            ResultEntry {
                driver_number,
                position,
                name: driver.map_or_else(|| format!("Driver #{driver_number}"), |d| d.name.to_string()),
                team: driver.map_or(NOT_AVAILABLE, |d| d.team).to_string(),
                medal: Medal::for_index(idx),
            }
        })
        .collect()
}

/// Classification of the latest race of the season.
pub async fn last_results(fetcher: &dyn Fetcher) -> Result<LastResults, ResultsError> {
    let races = api::sessions(fetcher, SEASON, Some("Race"))
        .await
        .unwrap_or_default();
    let race = latest_session(&races).ok_or(ResultsError::NoRaces)?;
    let session_key = race.session_key.ok_or(ResultsError::NoPositions)?;

    let records = api::positions(fetcher, session_key)
        .await
        .unwrap_or_default();
    if records.is_empty() {
        return Err(ResultsError::NoPositions);
    }

    Ok(LastResults {
        meeting_name: race
            .meeting_name
            .clone()
            .unwrap_or_else(|| "Dernière Course".to_string()),
        date: race
            .date_start
            .as_deref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.chars().take(10).collect()),
        circuit: race
            .circuit_short_name
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        entries: classify(&records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openf1::Endpoint;
    use crate::test_support::{Reply, StubFetcher};
    use serde_json::json;

    fn rec(driver: u32, position: u32) -> PositionRecord {
        PositionRecord {
            driver_number: Some(driver),
            position: Some(position),
        }
    }

    #[test]
    fn last_sample_per_driver_wins() {
        let records = [rec(5, 3), rec(5, 1), rec(7, 2)];
        assert_eq!(final_positions(&records), vec![(5, 1), (7, 2)]);

        let entries = classify(&records);
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].driver_number, entries[0].position), (5, 1));
        assert_eq!(entries[0].medal, Some(Medal::Gold));
        assert_eq!((entries[1].driver_number, entries[1].position), (7, 2));
        assert_eq!(entries[1].medal, Some(Medal::Silver));
    }

    #[test]
    fn incomplete_samples_are_skipped() {
        let records = [
            rec(1, 2),
            PositionRecord {
                driver_number: Some(1),
                position: None,
            },
            PositionRecord {
                driver_number: None,
                position: Some(1),
            },
        ];
        assert_eq!(final_positions(&records), vec![(1, 2)]);
    }

    #[test]
    fn zero_driver_or_position_is_skipped() {
        let records = [rec(44, 2), rec(44, 0), rec(0, 1), rec(16, 1)];
        assert_eq!(final_positions(&records), vec![(16, 1), (44, 2)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = [rec(44, 3), rec(16, 3), rec(44, 3)];
        assert_eq!(final_positions(&records), vec![(44, 3), (16, 3)]);
    }

    #[test]
    fn classification_is_capped_with_three_medals() {
        let records: Vec<_> = (1..=20).rev().map(|p| rec(100 + p, p)).collect();
        let entries = classify(&records);
        assert_eq!(entries.len(), RESULTS_LIMIT);
        assert_eq!(
            entries.iter().map(|e| e.position).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );
        let medals: Vec<_> = entries.iter().map(|e| e.medal).collect();
        assert_eq!(&medals[..3], &[Some(Medal::Gold), Some(Medal::Silver), Some(Medal::Bronze)]);
        assert!(medals[3..].iter().all(Option::is_none));
    }

    #[test]
    fn roster_lookup_and_unknown_drivers() {
        let entries = classify(&[rec(81, 1), rec(99, 2)]);
        assert_eq!(entries[0].name, "Oscar Piastri");
        assert_eq!(entries[0].team, "McLaren");
        assert_eq!(entries[1].name, "Driver #99");
        assert_eq!(entries[1].team, "N/A");
    }

    #[tokio::test]
    async fn full_derivation_uses_latest_race() {
        let stub = StubFetcher::new()
            .reply(
                Endpoint::Sessions,
                Reply::Json(json!([
                    {"session_key": 1, "meeting_name": "Old", "date_start": "2025-03-16T04:00:00+00:00"},
                    {"session_key": 2, "meeting_name": "Mexico City Grand Prix",
                     "date_start": "2025-10-26T20:00:00+00:00", "circuit_short_name": "Mexico City"}
                ])),
            )
            .reply(
                Endpoint::Position,
                Reply::Json(json!([
                    {"driver_number": 4, "position": 2},
                    {"driver_number": 16, "position": 1},
                    {"driver_number": 4, "position": 1},
                    {"driver_number": 16, "position": 2}
                ])),
            );

        let results = last_results(&stub).await.unwrap();
        assert_eq!(results.meeting_name, "Mexico City Grand Prix");
        assert_eq!(results.date, "2025-10-26");
        assert_eq!(results.circuit, "Mexico City");
        assert_eq!(results.entries[0].name, "Lando Norris");
        assert_eq!(results.entries[1].name, "Charles Leclerc");

        let calls = stub.calls();
        assert_eq!(calls[0].get("session_name"), Some("Race"));
        assert_eq!(calls[0].get("year"), Some("2025"));
        assert_eq!(calls[1].get("session_key"), Some("2"));
    }

    #[tokio::test]
    async fn missing_header_fields_use_defaults() {
        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_key": 5}])))
            .reply(Endpoint::Position, Reply::Json(json!([{"driver_number": 1, "position": 1}])));

        let results = last_results(&stub).await.unwrap();
        assert_eq!(results.meeting_name, "Dernière Course");
        assert_eq!(results.date, "N/A");
        assert_eq!(results.circuit, "N/A");
    }

    #[tokio::test]
    async fn odd_position_records_do_not_hide_valid_ones() {
        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_key": 5}])))
            .reply(
                Endpoint::Position,
                Reply::Json(json!([
                    {"driver_number": 1, "position": 1},
                    {"driver_number": 4, "position": 2},
                    {"driver_number": "16", "position": 3}
                ])),
            );
        let results = last_results(&stub).await.unwrap();
        let order: Vec<_> = results.entries.iter().map(|e| e.driver_number).collect();
        assert_eq!(order, [1, 4]);

        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_key": 5}])))
            .reply(
                Endpoint::Position,
                Reply::Json(json!([{"driver_number": 1, "position": 1}, {"driver_number": 4, "position": -1}])),
            );
        assert_eq!(last_results(&stub).await.unwrap().entries.len(), 1);
    }

    #[tokio::test]
    async fn no_races_is_user_error() {
        let empty = StubFetcher::new().reply(Endpoint::Sessions, Reply::Json(json!([])));
        assert_eq!(last_results(&empty).await, Err(ResultsError::NoRaces));

        let failing = StubFetcher::new().reply(Endpoint::Sessions, Reply::Status(500));
        assert_eq!(last_results(&failing).await, Err(ResultsError::NoRaces));
        assert!(!failing.called(Endpoint::Position));
    }

    #[tokio::test]
    async fn no_positions_is_user_error() {
        let sessions = Reply::Json(json!([{"session_key": 5}]));
        for positions in [Reply::Json(json!([])), Reply::Timeout, Reply::Status(500)] {
            let stub = StubFetcher::new()
                .reply(Endpoint::Sessions, sessions.clone())
                .reply(Endpoint::Position, positions);
            assert_eq!(last_results(&stub).await, Err(ResultsError::NoPositions));
        }

        let keyless = StubFetcher::new().reply(Endpoint::Sessions, Reply::Json(json!([{}])));
        assert_eq!(last_results(&keyless).await, Err(ResultsError::NoPositions));
    }
}
