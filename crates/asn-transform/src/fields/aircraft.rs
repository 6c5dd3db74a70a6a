//! Parsers for aircraft specs-page fields.

use asn_model::{ProductionFigure, SERIES_SEPARATOR};

/// First-flight year: the first four characters of the trimmed text, as an
/// integer. The source writes "2009" or "2009-01-15"; anything that does not
/// start with a number is missing.
pub fn parse_first_flight(text: &str) -> Option<i32> {
    text.trim().get(..4)?.parse().ok()
}

/// "Production ended" value: a year, a word such as "current", or the
/// `UNKNOWN` sentinel when the text is neither.
pub fn parse_production_ended(text: &str) -> ProductionFigure {
    match classify_production(text) {
        Some(figure) => figure,
        None => ProductionFigure::unknown(),
    }
}

/// "Production total" value: a count when numeric, otherwise the text kept
/// as-is (circa marker stripped).
pub fn parse_production_total(text: &str) -> ProductionFigure {
    let stripped = strip_circa(text);
    match classify_production(text) {
        Some(figure) => figure,
        None => ProductionFigure::Text(stripped.to_string()),
    }
}

/// Shared production-text classification: leading "ca " is stripped, an
/// all-digit string is a number, an all-alphabetic string is kept as text.
fn classify_production(text: &str) -> Option<ProductionFigure> {
    let stripped = strip_circa(text);
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        stripped.parse().ok().map(ProductionFigure::Number)
    } else if !stripped.is_empty() && stripped.chars().all(char::is_alphabetic) {
        Some(ProductionFigure::Text(stripped.to_string()))
    } else {
        None
    }
}

fn strip_circa(text: &str) -> &str {
    text.strip_prefix("ca ").unwrap_or(text).trim()
}

/// Build the joined series list for an aircraft type.
///
/// One-line input is a comma-delimited list of variants. Multi-line input is
/// one variant per line in "variant: description" form; lines without a
/// colon are noise and dropped. Every variant is prefixed with the
/// manufacturer name and the entries are joined with `$$`.
pub fn parse_series(manufacturer: Option<&str>, text: &str) -> Option<String> {
    let prefix = manufacturer
        .map(|m| format!("{m} "))
        .unwrap_or_default();

    let lines: Vec<&str> = text.lines().collect();
    let entries: Vec<String> = if lines.len() <= 1 {
        text.split(',')
            .map(str::trim)
            .filter(|variant| !variant.is_empty())
            .map(|variant| format!("{prefix}{variant}"))
            .collect()
    } else {
        lines
            .iter()
            .filter(|line| line.contains(':'))
            .filter_map(|line| line.split(':').next())
            .map(str::trim)
            .filter(|variant| !variant.is_empty())
            .map(|variant| format!("{prefix}{variant}"))
            .collect()
    };

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(SERIES_SEPARATOR))
    }
}

/// "Maximum take-off mass" in "<value> <unit>" form. The value must be all
/// digits; anything else drops both value and unit.
pub fn parse_mass(text: &str) -> (Option<u32>, Option<String>) {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(value), Some(unit), None) if value.chars().all(|c| c.is_ascii_digit()) => {
            match value.parse() {
                Ok(mass) => (Some(mass), Some(unit.to_string())),
                Err(_) => (None, None),
            }
        }
        _ => (None, None),
    }
}

/// ICAO mass group: a small integer, or missing.
pub fn parse_mass_group(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Maximum passenger count: an integer, or missing.
pub fn parse_passenger_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}
