use f1_season::{find_driver, CALENDAR, ROSTER, SEASON};
use std::collections::HashSet;

#[test]
fn test_rounds_are_contiguous_from_one() {
    assert!(!CALENDAR.is_empty());
    for (idx, race) in CALENDAR.iter().enumerate() {
        assert_eq!(race.round as usize, idx + 1, "gap or reorder at {}", race.name);
    }
}

#[test]
fn test_race_dates_follow_round_order() {
    for pair in CALENDAR.windows(2) {
        assert!(
            pair[0].date <= pair[1].date,
            "{} is dated after {}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn test_races_belong_to_season() {
    use chrono::Datelike;
    assert!(CALENDAR.iter().all(|r| r.date.year() == SEASON));
}

#[test]
fn test_driver_numbers_are_unique() {
    let mut seen = HashSet::new();
    for driver in ROSTER {
        assert!(seen.insert(driver.number), "duplicate number {}", driver.number);
    }
    assert_eq!(seen.len(), ROSTER.len());
}

#[test]
fn test_every_driver_is_findable() {
    for driver in ROSTER {
        assert_eq!(find_driver(driver.number), Some(driver));
    }
}

#[test]
fn test_roster_fields_are_filled() {
    for driver in ROSTER {
        assert!(!driver.name.is_empty());
        assert!(!driver.team.is_empty());
        assert!(!driver.nationality.is_empty());
        assert!(driver.number.chars().all(|c| c.is_ascii_digit()));
    }
}

mod proptest_lookup {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unknown_numbers_never_resolve(n in 100u32..10_000) {
            prop_assert!(find_driver(&n.to_string()).is_none());
        }
    }
}
