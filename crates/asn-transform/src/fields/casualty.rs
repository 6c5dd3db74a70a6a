//! Casualty ("Occupants / Fatalities") parsing.

/// Counts for one casualty group (Crew, Passengers or Total).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CasualtyCount {
    pub occupants: Option<u32>,
    pub fatalities: Option<u32>,
}

impl CasualtyCount {
    /// A fatality implies at least that many occupants: when fatalities are
    /// known and occupants are not, occupants are inferred equal.
    pub fn with_inferred_occupants(mut self) -> Self {
        if self.occupants.is_none() && self.fatalities.is_some() {
            self.occupants = self.fatalities;
        }
        self
    }
}

/// Parse one group value such as "Occupants: 4 / Fatalities: 2".
///
/// Clauses are separated by `/` and identified by which of "Occupants" /
/// "Fatalities" they mention, in either order. The first integer token in a
/// clause is its count. A clause mentioning neither word contributes
/// nothing; if no clause is recognized, both counts come back missing.
pub fn parse_casualties(text: &str) -> CasualtyCount {
    let mut count = CasualtyCount::default();
    for clause in text.split('/') {
        if clause.contains("Occupants") {
            count.occupants = first_integer(clause);
        } else if clause.contains("Fatalities") {
            count.fatalities = first_integer(clause);
        }
    }
    count
}

/// First run of ASCII digits in `text`, as an integer.
fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupants_then_fatalities() {
        let count = parse_casualties("Occupants: 4 / Fatalities: 4");
        assert_eq!(count.occupants, Some(4));
        assert_eq!(count.fatalities, Some(4));
    }

    #[test]
    fn fatalities_then_occupants() {
        let count = parse_casualties("Fatalities: 2 / Occupants: 2");
        assert_eq!(count.occupants, Some(2));
        assert_eq!(count.fatalities, Some(2));
    }

    #[test]
    fn lone_fatalities_clause_still_parses() {
        let count = parse_casualties("Fatalities: 3").with_inferred_occupants();
        assert_eq!(count.fatalities, Some(3));
        assert_eq!(count.occupants, Some(3));
    }

    #[test]
    fn unrecognized_clauses_yield_nothing() {
        assert_eq!(parse_casualties("4 / 2"), CasualtyCount::default());
        assert_eq!(parse_casualties(""), CasualtyCount::default());
    }

    #[test]
    fn clause_without_a_number_stays_missing() {
        let count = parse_casualties("Occupants: / Fatalities: 1");
        assert_eq!(count.occupants, None);
        assert_eq!(count.fatalities, Some(1));
    }

    #[test]
    fn inference_does_not_override_known_zero() {
        let count = CasualtyCount {
            occupants: Some(0),
            fatalities: Some(0),
        }
        .with_inferred_occupants();
        assert_eq!(count.occupants, Some(0));
    }

    #[test]
    fn first_integer_per_clause_wins() {
        let count = parse_casualties("Occupants: 12 (2 crew) / Fatalities: 0");
        assert_eq!(count.occupants, Some(12));
        assert_eq!(count.fatalities, Some(0));
    }
}
