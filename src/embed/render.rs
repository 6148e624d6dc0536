//! One render function per command.
//!
//! Renderers never sort, filter or truncate: field counts are bounded by the
//! normalizer (20 standings, 10 results, one field per race or team).

use super::{Embed, colors};
use crate::normalize::{
    CalendarEntry, DriverStandings, LastResults, Medal, NextRace, RaceStatus, StandingsSource,
};
use f1_season::{Driver, SEASON};
use indexmap::IndexMap;

fn season_footer() -> String {
    format!("Saison {SEASON}")
}

/// The generic error embed.
pub fn error_embed(message: impl Into<String>) -> Embed {
    Embed::new("❌ Erreur", colors::ERROR).description(message)
}

/// Roster grouped by team.
pub fn render_drivers(teams: &IndexMap<&str, Vec<&Driver>>, total: usize) -> Embed {
    let embed = Embed::new(format!("🏎️ PILOTES F1 {SEASON}"), colors::DRIVERS)
        .description(format!("Total: {total} pilotes"));

    teams
        .iter()
        .fold(embed, |embed, (team, drivers)| {
            let lines = drivers
                .iter()
                .map(|d| format!("#{} {} 🌍 {}", d.number, d.name, d.nationality))
                .collect::<Vec<_>>()
                .join("\n");
            embed.field(format!("🏎️ {team}"), lines, true)
        })
        .footer(season_footer())
}

fn status_label(status: RaceStatus) -> &'static str {
    match status {
        RaceStatus::Completed => "✅ Terminé",
        RaceStatus::InProgress => "🔴 EN COURS",
        RaceStatus::Upcoming => "⏳ À venir",
    }
}

/// Full calendar with a status per race.
pub fn render_calendar(entries: &[CalendarEntry<'_>]) -> Embed {
    let embed = Embed::new(format!("📅 CALENDRIER F1 {SEASON}"), colors::CALENDAR)
        .description(format!("Total: {} courses", entries.len()));

    entries
        .iter()
        .fold(embed, |embed, entry| {
            let race = entry.race;
            embed.field(
                format!("#{} - {}", race.round, race.name),
                format!(
                    "📍 {}, {}\n🏁 {}\n📅 {}\n{}",
                    race.city,
                    race.country,
                    race.circuit,
                    race.date_label(),
                    status_label(entry.status)
                ),
                true,
            )
        })
        .footer(season_footer())
}

/// Driver standings, live or from the roster.
pub fn render_standings(standings: &DriverStandings) -> Embed {
    let (description, footer) = match &standings.source {
        StandingsSource::Live { session_name } => (
            format!("Dernière session: {session_name}"),
            format!("Données OpenF1 API - Saison {SEASON}"),
        ),
        StandingsSource::Roster => (
            "Liste des pilotes (classement en direct disponible pendant la saison)".to_string(),
            season_footer(),
        ),
    };

    let embed = Embed::new(format!("🏆 PILOTES F1 {SEASON}"), colors::STANDINGS).description(description);
    standings
        .entries
        .iter()
        .fold(embed, |embed, entry| {
            embed.field(
                format!("{}. #{} {}", entry.rank, entry.number, entry.name),
                entry.team.clone(),
                true,
            )
        })
        .footer(footer)
}

/// Constructors and their drivers.
pub fn render_teams(teams: &IndexMap<&str, Vec<&Driver>>) -> Embed {
    let embed = Embed::new(format!("🏭 ÉQUIPES F1 {SEASON}"), colors::TEAMS)
        .description(format!("Total: {} équipes", teams.len()));

    teams
        .iter()
        .enumerate()
        .fold(embed, |embed, (idx, (team, drivers))| {
            let names = drivers.iter().map(|d| d.name).collect::<Vec<_>>().join("\n");
            embed.field(format!("{}. {team}", idx + 1), format!("👥 {names}"), true)
        })
        .footer(season_footer())
}

/// Next race card, or the end-of-season notice.
pub fn render_next_race(next: &NextRace<'_>) -> Embed {
    match next {
        NextRace::SeasonOver => Embed::new("🏁 SAISON TERMINÉE", colors::STANDINGS)
            .description("Toutes les courses de la saison sont terminées !"),
        NextRace::Upcoming { race, days_until } => {
            Embed::new("⏭️ PROCHAINE COURSE", colors::NEXT_RACE)
                .description(format!("**{}**", race.name))
                .field("🏁 Circuit", race.circuit, false)
                .field("📍 Lieu", format!("{}, {}", race.city, race.country), true)
                .field("📅 Date", race.date_label(), true)
                .field("🔢 Round", race.round.to_string(), true)
                .field("⏳ Dans", format!("{days_until} jour(s)"), true)
                .footer(season_footer())
        }
    }
}

fn medal_emoji(medal: Medal) -> &'static str {
    match medal {
        Medal::Gold => "🥇",
        Medal::Silver => "🥈",
        Medal::Bronze => "🥉",
    }
}

/// Top of the last race classification.
pub fn render_results(results: &LastResults) -> Embed {
    let embed = Embed::new(format!("🏁 {}", results.meeting_name), colors::RESULTS)
        .description(format!("📅 {}", results.date));

    results
        .entries
        .iter()
        .fold(embed, |embed, entry| {
            let name = match entry.medal {
                Some(medal) => format!("{} {}. {}", medal_emoji(medal), entry.position, entry.name),
                None => format!("{}. {}", entry.position, entry.name),
            };
            embed.field(name, entry.team.clone(), true)
        })
        .footer(format!("Circuit: {}", results.circuit))
}

/// Command overview. `commands` is `(label, description)` in menu order.
pub fn render_help(commands: &[(&str, &str)]) -> Embed {
    let embed = Embed::new(format!("🏎️ BOT F1 {SEASON} - AIDE"), colors::HELP)
        .description("Bot F1 avec données en temps réel via OpenF1 API");

    commands
        .iter()
        .fold(embed, |embed, (label, description)| embed.field(*label, *description, false))
        .field("📡 Source", "Données via [OpenF1 API](https://openf1.org)", false)
        .footer(format!("Saison {SEASON} | Données en temps réel"))
}
