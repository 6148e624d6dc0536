//! Race calendar.

use chrono::NaiveDate;

/// One race weekend of the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    /// Position of the race within the season, starting at 1.
    pub round: u32,
    /// Official event name (e.g. "Monaco Grand Prix").
    pub name: &'static str,
    /// Circuit name.
    pub circuit: &'static str,
    /// Host country.
    pub country: &'static str,
    /// Host city.
    pub city: &'static str,
    /// Race day.
    pub date: NaiveDate,
}

impl Race {
    /// Race day rendered as `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

const fn race(
    round: u32,
    name: &'static str,
    circuit: &'static str,
    country: &'static str,
    city: &'static str,
    date: NaiveDate,
) -> Race {
    Race {
        round,
        name,
        circuit,
        country,
        city,
        date,
    }
}

/// The season calendar, ordered by round.
pub static CALENDAR: &[Race] = &[
    race(1, "Australian Grand Prix", "Albert Park", "Australia", "Melbourne", ymd(2025, 3, 16)),
    race(2, "Chinese Grand Prix", "Shanghai International Circuit", "China", "Shanghai", ymd(2025, 3, 23)),
    race(3, "Japanese Grand Prix", "Suzuka Circuit", "Japan", "Suzuka", ymd(2025, 4, 6)),
    race(4, "Bahrain Grand Prix", "Bahrain International Circuit", "Bahrain", "Sakhir", ymd(2025, 4, 13)),
    race(5, "Saudi Arabian Grand Prix", "Jeddah Corniche Circuit", "Saudi Arabia", "Jeddah", ymd(2025, 4, 20)),
    race(6, "Miami Grand Prix", "Miami International Autodrome", "USA", "Miami", ymd(2025, 5, 4)),
    race(7, "Emilia Romagna Grand Prix", "Autodromo Enzo e Dino Ferrari", "Italy", "Imola", ymd(2025, 5, 18)),
    race(8, "Monaco Grand Prix", "Circuit de Monaco", "Monaco", "Monte Carlo", ymd(2025, 5, 25)),
    race(9, "Spanish Grand Prix", "Circuit de Barcelona-Catalunya", "Spain", "Barcelona", ymd(2025, 6, 1)),
    race(10, "Canadian Grand Prix", "Circuit Gilles Villeneuve", "Canada", "Montreal", ymd(2025, 6, 15)),
    race(11, "Austrian Grand Prix", "Red Bull Ring", "Austria", "Spielberg", ymd(2025, 6, 29)),
    race(12, "British Grand Prix", "Silverstone Circuit", "Great Britain", "Silverstone", ymd(2025, 7, 6)),
    race(13, "Belgian Grand Prix", "Circuit de Spa-Francorchamps", "Belgium", "Spa", ymd(2025, 7, 27)),
    race(14, "Hungarian Grand Prix", "Hungaroring", "Hungary", "Budapest", ymd(2025, 8, 3)),
    race(15, "Dutch Grand Prix", "Circuit Zandvoort", "Netherlands", "Zandvoort", ymd(2025, 8, 31)),
    race(16, "Italian Grand Prix", "Autodromo Nazionale di Monza", "Italy", "Monza", ymd(2025, 9, 7)),
    race(17, "Azerbaijan Grand Prix", "Baku City Circuit", "Azerbaijan", "Baku", ymd(2025, 9, 21)),
    race(18, "Singapore Grand Prix", "Marina Bay Street Circuit", "Singapore", "Singapore", ymd(2025, 10, 5)),
    race(19, "United States Grand Prix", "Circuit of the Americas", "USA", "Austin", ymd(2025, 10, 19)),
    race(20, "Mexico City Grand Prix", "Autódromo Hermanos Rodríguez", "Mexico", "Mexico City", ymd(2025, 10, 26)),
    race(21, "São Paulo Grand Prix", "Autódromo José Carlos Pace", "Brazil", "São Paulo", ymd(2025, 11, 9)),
    race(22, "Las Vegas Grand Prix", "Las Vegas Street Circuit", "USA", "Las Vegas", ymd(2025, 11, 22)),
    race(23, "Qatar Grand Prix", "Losail International Circuit", "Qatar", "Lusail", ymd(2025, 11, 30)),
    race(24, "Abu Dhabi Grand Prix", "Yas Marina Circuit", "UAE", "Abu Dhabi", ymd(2025, 12, 7)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        assert_eq!(CALENDAR[0].date_label(), "2025-03-16");
        assert_eq!(CALENDAR[23].date_label(), "2025-12-07");
    }
}
