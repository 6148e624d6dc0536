//! Driver standings: live session drivers with a static roster fallback.

use super::{NOT_AVAILABLE, latest_session};
use crate::openf1::{Fetcher, api};
use f1_season::{Driver, ROSTER, SEASON};
use tracing::debug;

/// Maximum number of ranked entries.
pub const STANDINGS_LIMIT: usize = 20;

/// Where the standings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsSource {
    /// Drivers of the latest upstream session, in API order.
    Live { session_name: String },
    /// Static roster in declaration order.
    Roster,
}

/// One ranked line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    /// 1-based rank.
    pub rank: usize,
    pub number: String,
    pub name: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverStandings {
    pub source: StandingsSource,
    pub entries: Vec<StandingEntry>,
}

impl DriverStandings {
    pub fn is_live(&self) -> bool {
        matches!(self.source, StandingsSource::Live { .. })
    }
}

/// Standings for the season.
///
/// Uses the drivers of the latest session when upstream has any; an empty
/// session list, a failed request, a session without key or an empty driver
/// list all yield [`roster_standings`]. The drivers request is only issued
/// once a session has been found.
pub async fn driver_standings(fetcher: &dyn Fetcher) -> DriverStandings {
    match live_standings(fetcher).await {
        Some(standings) => standings,
        None => {
            debug!("Live standings unavailable, using static roster");
            roster_standings()
        }
    }
}

async fn live_standings(fetcher: &dyn Fetcher) -> Option<DriverStandings> {
    let sessions = api::sessions(fetcher, SEASON, None).await.ok()?;
    let latest = latest_session(&sessions)?;
    let session_key = latest.session_key?;

    let drivers = api::drivers(fetcher, session_key).await.ok()?;
    if drivers.is_empty() {
        return None;
    }

    let entries = drivers
        .iter()
        .take(STANDINGS_LIMIT)
        .enumerate()
        .map(|(idx, driver)| StandingEntry {
            rank: idx + 1,
            number: driver
                .driver_number
                .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
            name: or_na(driver.full_name.as_deref()),
            team: or_na(driver.team_name.as_deref()),
        })
        .collect();

    Some(DriverStandings {
        source: StandingsSource::Live {
            session_name: or_na(latest.session_name.as_deref()),
        },
        entries,
    })
}

/// The static roster ranked in declaration order.
pub fn roster_standings() -> DriverStandings {
    DriverStandings {
        source: StandingsSource::Roster,
        entries: ROSTER
            .iter()
            .take(STANDINGS_LIMIT)
            .enumerate()
            .map(|(idx, driver)| roster_entry(idx + 1, driver))
            .collect(),
    }
}

fn roster_entry(rank: usize, driver: &Driver) -> StandingEntry {
    StandingEntry {
        rank,
        number: driver.number.to_string(),
        name: driver.name.to_string(),
        team: driver.team.to_string(),
    }
}

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openf1::Endpoint;
    use crate::test_support::{Reply, StubFetcher};
    use serde_json::json;

    #[tokio::test]
    async fn empty_sessions_fall_back_without_drivers_call() {
        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([])))
            .reply(Endpoint::Drivers, Reply::Json(json!([{"driver_number": 1}])));

        let standings = driver_standings(&stub).await;
        assert_eq!(standings, roster_standings());
        assert!(!stub.called(Endpoint::Drivers));
    }

    #[test]
    fn roster_fallback_keeps_declaration_order() {
        let standings = roster_standings();
        assert_eq!(standings.source, StandingsSource::Roster);
        assert_eq!(standings.entries.len(), ROSTER.len());
        for (entry, driver) in standings.entries.iter().zip(ROSTER) {
            assert_eq!(entry.number, driver.number);
            assert_eq!(entry.name, driver.name);
        }
        assert_eq!(standings.entries[0].rank, 1);
        assert_eq!(standings.entries[19].rank, 20);
    }

    #[tokio::test]
    async fn live_drivers_keep_api_order_and_are_capped() {
        let drivers: Vec<_> = (1..=22)
            .map(|n| json!({"driver_number": n, "full_name": format!("Driver {n}"), "team_name": "Team"}))
            .collect();
        let stub = StubFetcher::new()
            .reply(
                Endpoint::Sessions,
                Reply::Json(json!([
                    {"session_key": 10, "session_name": "Practice 1"},
                    {"session_key": 11, "session_name": "Qualifying"}
                ])),
            )
            .reply(Endpoint::Drivers, Reply::Json(json!(drivers)));

        let standings = driver_standings(&stub).await;
        assert_eq!(
            standings.source,
            StandingsSource::Live {
                session_name: "Qualifying".into()
            }
        );
        assert_eq!(standings.entries.len(), STANDINGS_LIMIT);
        assert_eq!(standings.entries[0].name, "Driver 1");
        assert_eq!(standings.entries[19].number, "20");

        let drivers_call = stub
            .calls()
            .into_iter()
            .find(|q| q.endpoint() == Endpoint::Drivers)
            .unwrap();
        assert_eq!(drivers_call.get("session_key"), Some("11"));
    }

    #[tokio::test]
    async fn missing_driver_fields_read_na() {
        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_key": 3}])))
            .reply(Endpoint::Drivers, Reply::Json(json!([{}])));

        let standings = driver_standings(&stub).await;
        assert_eq!(
            standings.entries,
            vec![StandingEntry {
                rank: 1,
                number: "N/A".into(),
                name: "N/A".into(),
                team: "N/A".into(),
            }]
        );
        assert_eq!(
            standings.source,
            StandingsSource::Live {
                session_name: "N/A".into()
            }
        );
    }

    #[tokio::test]
    async fn upstream_failures_fall_back() {
        for reply in [Reply::Status(500), Reply::Timeout] {
            let stub = StubFetcher::new().reply(Endpoint::Sessions, reply);
            assert!(!driver_standings(&stub).await.is_live());
        }

        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_key": 3}])))
            .reply(Endpoint::Drivers, Reply::Status(503));
        assert_eq!(driver_standings(&stub).await, roster_standings());

        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_key": 3}])))
            .reply(Endpoint::Drivers, Reply::Json(json!([])));
        assert_eq!(driver_standings(&stub).await, roster_standings());
    }

    #[tokio::test]
    async fn session_without_key_falls_back() {
        let stub = StubFetcher::new()
            .reply(Endpoint::Sessions, Reply::Json(json!([{"session_name": "Race"}])));
        assert_eq!(driver_standings(&stub).await, roster_standings());
        assert!(!stub.called(Endpoint::Drivers));
    }
}
