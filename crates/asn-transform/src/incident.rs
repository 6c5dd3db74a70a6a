//! Incident record normalizer.

use asn_model::{IncidentRecord, RawRecord, RejectReason, UNKNOWN};
use tracing::warn;

use crate::fields::{
    CasualtyCount, parse_casualties, parse_date, parse_first_flight, parse_location, parse_time,
};

// Label vocabulary of the incident detail pages.
const DATE: &str = "Date";
const STATUS: &str = "Status";
const TIME: &str = "Time";
const TYPE: &str = "Type";
const OPERATOR: &str = "Operator";
const OPERATING_FOR: &str = "Operating for";
const LOCATION: &str = "Location";
const PHASE: &str = "Phase";
const NATURE: &str = "Nature";
const AIRCRAFT_DAMAGE: &str = "Aircraft damage";
const NARRATIVE: &str = "Narrative";
const PROBABLE_CAUSE: &str = "ProbableCause";
const DEPARTURE_AIRPORT: &str = "Departure airport";
const DESTINATION_AIRPORT: &str = "Destination airport";
const FIRST_FLIGHT: &str = "First flight";
const ENGINES: &str = "Engines";
const TOTAL_AIRFRAME_HRS: &str = "Total airframe hrs";

/// Normalize one raw incident mapping into a typed record.
///
/// `source` identifies the page (its URL) and only appears in rejection
/// warnings. Rejection happens in exactly two cases: the `Date` label is
/// absent, or the date text yields no year (the schema requires one).
/// Everything else degrades to `None` or the `Unknown` sentinel.
pub fn normalize_incident(
    raw: &RawRecord,
    source: &str,
) -> Result<IncidentRecord, RejectReason> {
    let Some(date_text) = raw.get(DATE) else {
        warn!(source, "rejecting record: no date field");
        return Err(RejectReason::MissingDate);
    };

    let date = parse_date(date_text);
    let Some(year) = date.year else {
        warn!(source, date = date_text, "rejecting record: no usable year");
        return Err(RejectReason::YearUnobtainable(date_text.to_string()));
    };

    let location = raw.value(LOCATION).map(parse_location);
    let (country, location) = match location {
        Some(parts) => (parts.country, parts.location),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    let crew = parse_group(raw, "Crew");
    let passengers = parse_group(raw, "Passengers");
    let total = parse_group(raw, "Total");

    Ok(IncidentRecord {
        status: raw.value(STATUS).map(str::to_string),
        time: raw.value(TIME).and_then(parse_time),
        weekday: date.weekday,
        day: date.day,
        month: date.month,
        year,
        aircraft_type: raw
            .value(TYPE)
            .map_or_else(|| UNKNOWN.to_string(), str::to_string),
        operator: parse_operator(raw),
        country,
        location,
        phase: parse_phase(raw.value(PHASE)),
        nature: parse_nature(raw.value(NATURE)),
        aircraft_damage: raw
            .value(AIRCRAFT_DAMAGE)
            .map_or_else(|| UNKNOWN.to_string(), str::to_string),
        narrative: raw.value(NARRATIVE).map(str::to_string),
        probable_cause: raw.value(PROBABLE_CAUSE).map(str::to_string),
        departure_airport: parse_airport(raw.value(DEPARTURE_AIRPORT)),
        destination_airport: parse_airport(raw.value(DESTINATION_AIRPORT)),
        first_flight: raw.value(FIRST_FLIGHT).and_then(parse_first_flight),
        engines: raw.value(ENGINES).map(str::to_string),
        total_airframe_hrs: raw.value(TOTAL_AIRFRAME_HRS).map(str::to_string),
        crew_occupants: crew.occupants,
        crew_fatalities: crew.fatalities,
        passengers_occupants: passengers.occupants,
        passengers_fatalities: passengers.fatalities,
        total_occupants: total.occupants,
        total_fatalities: total.fatalities,
    })
}

fn parse_group(raw: &RawRecord, group: &str) -> CasualtyCount {
    raw.value(group)
        .map(parse_casualties)
        .unwrap_or_default()
        .with_inferred_occupants()
}

/// Operator name, falling back to the "Operating for" label. The cleaning
/// contract has already ASCII-folded the value.
fn parse_operator(raw: &RawRecord) -> String {
    raw.value(OPERATOR)
        .or_else(|| raw.value(OPERATING_FOR))
        .unwrap_or_default()
        .to_string()
}

/// Flight phase, with the source's empty-bracket spellings mapped to the
/// sentinel.
fn parse_phase(value: Option<&str>) -> String {
    match value {
        None | Some("()" | "(CMB)" | "Unknown (UNK)") => UNKNOWN.to_string(),
        Some(phase) => phase.to_string(),
    }
}

fn parse_nature(value: Option<&str>) -> String {
    match value {
        None | Some("-") => UNKNOWN.to_string(),
        Some(nature) => nature.to_string(),
    }
}

fn parse_airport(value: Option<&str>) -> String {
    match value {
        None | Some("?" | "-") => UNKNOWN.to_string(),
        Some(airport) => airport.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn missing_date_rejects() {
        let record = raw(&[("Type", "Boeing 737-800")]);
        assert_eq!(
            normalize_incident(&record, "page-1"),
            Err(RejectReason::MissingDate)
        );
    }

    #[test]
    fn unparseable_year_rejects() {
        let record = raw(&[("Date", "sometime in spring")]);
        assert_eq!(
            normalize_incident(&record, "page-1"),
            Err(RejectReason::YearUnobtainable("sometime in spring".to_string()))
        );
    }

    #[test]
    fn minimal_record_fills_sentinels() {
        let record = raw(&[("Date", "Friday 2 January 2015")]);
        let incident = normalize_incident(&record, "page-1").expect("accepted");
        assert_eq!(incident.year, 2015);
        assert_eq!(incident.weekday.as_deref(), Some("Friday"));
        assert_eq!(incident.aircraft_type, "Unknown");
        assert_eq!(incident.country, "Unknown");
        assert_eq!(incident.location, "Unknown");
        assert_eq!(incident.phase, "Unknown");
        assert_eq!(incident.nature, "Unknown");
        assert_eq!(incident.departure_airport, "Unknown");
        assert_eq!(incident.operator, "");
        assert_eq!(incident.crew_occupants, None);
    }

    #[test]
    fn phase_and_nature_spellings_normalize() {
        let record = raw(&[
            ("Date", "January 2015"),
            ("Phase", "(CMB)"),
            ("Nature", "-"),
            ("Departure airport", "?"),
            ("Destination airport", "-"),
        ]);
        let incident = normalize_incident(&record, "page-1").expect("accepted");
        assert_eq!(incident.phase, "Unknown");
        assert_eq!(incident.nature, "Unknown");
        assert_eq!(incident.departure_airport, "Unknown");
        assert_eq!(incident.destination_airport, "Unknown");
    }

    #[test]
    fn operator_falls_back_to_operating_for() {
        let record = raw(&[
            ("Date", "January 2015"),
            ("Operating for", "Example Cargo"),
        ]);
        let incident = normalize_incident(&record, "page-1").expect("accepted");
        assert_eq!(incident.operator, "Example Cargo");
    }

    #[test]
    fn casualty_groups_parse_and_infer() {
        let record = raw(&[
            ("Date", "January 2015"),
            ("Crew", "Occupants: 4 / Fatalities: 4"),
            ("Passengers", "Fatalities: 2 / Occupants: 2"),
            ("Total", "Fatalities: 3"),
        ]);
        let incident = normalize_incident(&record, "page-1").expect("accepted");
        assert_eq!(incident.crew_occupants, Some(4));
        assert_eq!(incident.crew_fatalities, Some(4));
        assert_eq!(incident.passengers_occupants, Some(2));
        assert_eq!(incident.passengers_fatalities, Some(2));
        // occupants inferred from fatalities
        assert_eq!(incident.total_occupants, Some(3));
        assert_eq!(incident.total_fatalities, Some(3));
    }
}
