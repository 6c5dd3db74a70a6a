//! Free-text incident date parsing.
//!
//! Source pages spell dates as either "Friday 2 January 2015" (weekday, day,
//! month, year) or "January 2015" / "ca January 2015" (month and year, with
//! an optional circa marker in front). Anything else parses to nothing.

/// Parsed parts of an incident date. Every part is optional at this level;
/// the incident normalizer decides that a missing year rejects the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub weekday: Option<String>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Month table: 3-letter abbreviation and full name, matched case-sensitively.
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// Name of month `number` (1-based), for rebuilding a date string.
pub fn month_name(number: u32) -> Option<&'static str> {
    MONTHS.get(number.checked_sub(1)? as usize).map(|m| m.1)
}

/// Resolve a month token.
///
/// `Ok(None)` — the token is a masked month ("xx", "Jxxne"): the month is
/// unknown but the rest of the date still stands.
/// `Err(())` — the token is not a month at all; the whole date is discarded.
fn parse_month(token: &str) -> Result<Option<u32>, ()> {
    if token.to_ascii_lowercase().contains("xx") {
        return Ok(None);
    }
    for (index, (abbreviation, full)) in MONTHS.iter().enumerate() {
        if token == *abbreviation || token == *full {
            return Ok(Some(index as u32 + 1));
        }
    }
    Err(())
}

/// Parse a free-text date split on whitespace.
///
/// Failure is atomic: if any token of a candidate form fails its cast, all
/// four parts come back missing rather than a partially parsed date.
pub fn parse_date(text: &str) -> DateParts {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        // Month and year; the leading token may be a circa marker.
        [_, month, year] => match (parse_month(month), year.parse::<i32>()) {
            (Ok(month), Ok(year)) => DateParts {
                weekday: None,
                day: None,
                month,
                year: Some(year),
            },
            _ => DateParts::default(),
        },
        [month, year] => match (parse_month(month), year.parse::<i32>()) {
            (Ok(month), Ok(year)) => DateParts {
                weekday: None,
                day: None,
                month,
                year: Some(year),
            },
            _ => DateParts::default(),
        },
        [weekday, day, month, year] => {
            match (day.parse::<u32>(), parse_month(month), year.parse::<i32>()) {
                (Ok(day), Ok(month), Ok(year)) if (1..=31).contains(&day) => DateParts {
                    weekday: Some((*weekday).to_string()),
                    day: Some(day),
                    month,
                    year: Some(year),
                },
                _ => DateParts::default(),
            }
        }
        _ => DateParts::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_date_parses() {
        assert_eq!(parse_date("Friday 2 January 2015"), DateParts {
            weekday: Some("Friday".to_string()),
            day: Some(2),
            month: Some(1),
            year: Some(2015),
        });
    }

    #[test]
    fn month_year_parses_without_weekday() {
        assert_eq!(parse_date("January 2015"), DateParts {
            weekday: None,
            day: None,
            month: Some(1),
            year: Some(2015),
        });
    }

    #[test]
    fn circa_prefix_is_absorbed() {
        assert_eq!(parse_date("ca January 2015").year, Some(2015));
        assert_eq!(parse_date("circa Mar 1967"), DateParts {
            weekday: None,
            day: None,
            month: Some(3),
            year: Some(1967),
        });
    }

    #[test]
    fn masked_month_keeps_the_year() {
        let parts = parse_date("Friday 2 Jxxne 2015");
        assert_eq!(parts.month, None);
        assert_eq!(parts.year, Some(2015));
        assert_eq!(parts.day, Some(2));
        assert_eq!(parts.weekday.as_deref(), Some("Friday"));
    }

    #[test]
    fn abbreviated_month_parses() {
        assert_eq!(parse_date("Sunday 14 Sep 2008").month, Some(9));
    }

    #[test]
    fn month_match_is_case_sensitive() {
        assert_eq!(parse_date("friday 2 january 2015"), DateParts::default());
        assert_eq!(parse_date("JAN 2015"), DateParts::default());
    }

    #[test]
    fn cast_failure_discards_the_whole_date() {
        assert_eq!(parse_date("Friday two January 2015"), DateParts::default());
        assert_eq!(parse_date("Friday 2 January 20x5"), DateParts::default());
        assert_eq!(parse_date("Friday 42 January 2015"), DateParts::default());
    }

    #[test]
    fn wrong_token_count_yields_nothing() {
        assert_eq!(parse_date(""), DateParts::default());
        assert_eq!(parse_date("2015"), DateParts::default());
        assert_eq!(
            parse_date("Friday 2 January 2015 extra"),
            DateParts::default()
        );
    }

    #[test]
    fn month_names_round_trip() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
