//! Driver roster.

/// A race driver and the team they drive for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    /// Car number. Upstream numbers are matched against its string form.
    pub number: &'static str,
    /// Full name.
    pub name: &'static str,
    /// Team name.
    pub team: &'static str,
    /// Nationality as displayed.
    pub nationality: &'static str,
}

const fn driver(
    number: &'static str,
    name: &'static str,
    team: &'static str,
    nationality: &'static str,
) -> Driver {
    Driver {
        number,
        name,
        team,
        nationality,
    }
}

/// Active roster in declaration order.
pub static ROSTER: &[Driver] = &[
    driver("1", "Max Verstappen", "Red Bull Racing", "Dutch"),
    driver("11", "Sergio Pérez", "Red Bull Racing", "Mexican"),
    driver("44", "Lewis Hamilton", "Ferrari", "British"),
    driver("16", "Charles Leclerc", "Ferrari", "Monégasque"),
    driver("4", "Lando Norris", "McLaren", "British"),
    driver("81", "Oscar Piastri", "McLaren", "Australian"),
    driver("63", "George Russell", "Mercedes", "British"),
    driver("17", "Andrea Kimi Antonelli", "Mercedes", "Italian"),
    driver("14", "Fernando Alonso", "Aston Martin", "Spanish"),
    driver("18", "Lance Stroll", "Aston Martin", "Canadian"),
    driver("10", "Pierre Gasly", "Alpine", "French"),
    driver("31", "Esteban Ocon", "Haas", "French"),
    driver("27", "Nico Hülkenberg", "Sauber", "German"),
    driver("77", "Valtteri Bottas", "Sauber", "Finnish"),
    driver("22", "Yuki Tsunoda", "RB", "Japanese"),
    driver("21", "Isack Hadjar", "RB", "French"),
    driver("23", "Alex Albon", "Williams", "Thai"),
    driver("55", "Carlos Sainz", "Williams", "Spanish"),
    driver("20", "Kevin Magnussen", "Haas", "Danish"),
    driver("87", "Jack Doohan", "Alpine", "Australian"),
];

/// Look a driver up by car number.
///
/// The comparison is on the string form, so `"01"` does not match `"1"`.
pub fn find_driver(number: &str) -> Option<&'static Driver> {
    ROSTER.iter().find(|d| d.number == number)
}
