use f1_season::Driver;
use indexmap::IndexMap;

/// Group drivers by team.
///
/// Teams appear in first-seen order and drivers keep their declaration order
/// within a team. Shared by the roster and constructor views.
pub fn group_by_team<'a>(drivers: &'a [Driver]) -> IndexMap<&'a str, Vec<&'a Driver>> {
    let mut teams: IndexMap<&'a str, Vec<&'a Driver>> = IndexMap::new();
    for driver in drivers {
        teams.entry(driver.team).or_default().push(driver);
    }
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use f1_season::ROSTER;
    use std::collections::HashSet;

    #[test]
    fn one_group_per_distinct_team() {
        let teams = group_by_team(ROSTER);
        let distinct: HashSet<_> = ROSTER.iter().map(|d| d.team).collect();
        assert_eq!(teams.len(), distinct.len());
    }

    #[test]
    fn every_driver_lands_in_exactly_its_team() {
        let teams = group_by_team(ROSTER);
        for driver in ROSTER {
            let holding: Vec<_> = teams
                .iter()
                .filter(|(_, members)| members.iter().any(|d| d.number == driver.number))
                .map(|(team, _)| *team)
                .collect();
            assert_eq!(holding, vec![driver.team], "{}", driver.name);
        }
        let total: usize = teams.values().map(Vec::len).sum();
        assert_eq!(total, ROSTER.len());
    }

    #[test]
    fn first_seen_order_is_kept() {
        let teams = group_by_team(ROSTER);
        let order: Vec<_> = teams.keys().copied().collect();
        assert_eq!(&order[..3], &["Red Bull Racing", "Ferrari", "McLaren"]);
        // Haas first appears with Ocon, before Sauber, and gets Magnussen later.
        let haas = &teams["Haas"];
        assert_eq!(
            haas.iter().map(|d| d.name).collect::<Vec<_>>(),
            ["Esteban Ocon", "Kevin Magnussen"]
        );
        let alpine = teams.get_index_of("Alpine").unwrap();
        let haas_idx = teams.get_index_of("Haas").unwrap();
        assert!(alpine < haas_idx);
    }

    #[test]
    fn empty_roster_has_no_groups() {
        assert!(group_by_team(&[]).is_empty());
    }
}
