//! "Location (Country)" parsing.

use asn_model::UNKNOWN;

/// Country and location split out of one "Location (Country)" value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    pub country: String,
    pub location: String,
}

/// Split "Stornoway (United Kingdom)" into location and country.
///
/// A trailing `*` (the source's "approximate position" mark) is stripped.
/// The country is the text between the last `(` and the closing `)`; the
/// location is whatever precedes it. An absent or empty country, or the
/// literal "Unknown country", becomes the `Unknown` sentinel; so does an
/// empty location.
pub fn parse_location(text: &str) -> LocationParts {
    let trimmed = text.trim_end_matches('*').trim();
    let (location, country) = match trimmed.rfind('(') {
        Some(open) => {
            let inner = trimmed[open + 1..].trim_end_matches(')').trim();
            (trimmed[..open].trim(), inner)
        }
        None => (trimmed, ""),
    };

    let country = if country.is_empty() || country == "Unknown country" {
        UNKNOWN.to_string()
    } else {
        country.to_string()
    };
    let location = if location.is_empty() {
        UNKNOWN.to_string()
    } else {
        location.to_string()
    };

    LocationParts { country, location }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_location_and_country() {
        let parts = parse_location("Stornoway (United Kingdom)");
        assert_eq!(parts.country, "United Kingdom");
        assert_eq!(parts.location, "Stornoway");
    }

    #[test]
    fn strips_trailing_star() {
        let parts = parse_location("near Palana (Russia)*");
        assert_eq!(parts.country, "Russia");
        assert_eq!(parts.location, "near Palana");
    }

    #[test]
    fn unknown_country_normalizes() {
        let parts = parse_location("Somewhere (Unknown country)");
        assert_eq!(parts.country, "Unknown");
        assert_eq!(parts.location, "Somewhere");
    }

    #[test]
    fn empty_pieces_become_sentinels() {
        let parts = parse_location("(United Kingdom)");
        assert_eq!(parts.country, "United Kingdom");
        assert_eq!(parts.location, "Unknown");

        let parts = parse_location("Somewhere ()");
        assert_eq!(parts.country, "Unknown");
        assert_eq!(parts.location, "Somewhere");
    }

    #[test]
    fn no_parenthesis_means_unknown_country() {
        let parts = parse_location("Atlantic Ocean");
        assert_eq!(parts.country, "Unknown");
        assert_eq!(parts.location, "Atlantic Ocean");
    }

    #[test]
    fn nested_parentheses_take_the_last_open() {
        let parts = parse_location("Halim (Jakarta) Airport (Indonesia)");
        assert_eq!(parts.country, "Indonesia");
        assert_eq!(parts.location, "Halim (Jakarta) Airport");
    }
}
