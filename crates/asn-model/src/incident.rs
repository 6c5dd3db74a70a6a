//! Normalized incident record.

use serde::{Deserialize, Serialize};

/// Sentinel for "field exists in the schema but its value could not be
/// determined". Distinct from `None`, which means the source never carried
/// the field at all.
pub const UNKNOWN: &str = "Unknown";

/// One normalized aviation incident, built from a single scraped page.
///
/// Immutable once constructed: the normalizer validates everything up front
/// and hands the record to the persistence sink as-is. `year` is the only
/// mandatory parsed field; a page whose year cannot be determined is
/// rejected rather than emitted with a hole in it.
///
/// Casualty counts are kept flat (one column pair per group) to match the
/// downstream tabular schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub status: Option<String>,
    /// Canonical `HH:MM:SS`, 24-hour.
    pub time: Option<String>,
    pub weekday: Option<String>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: i32,
    pub aircraft_type: String,
    /// ASCII-folded operator name; empty when the page names none.
    pub operator: String,
    pub country: String,
    pub location: String,
    pub phase: String,
    pub nature: String,
    pub aircraft_damage: String,
    pub narrative: Option<String>,
    pub probable_cause: Option<String>,
    pub departure_airport: String,
    pub destination_airport: String,
    /// Four-digit year of the airframe's first flight.
    pub first_flight: Option<i32>,
    pub engines: Option<String>,
    pub total_airframe_hrs: Option<String>,
    pub crew_occupants: Option<u32>,
    pub crew_fatalities: Option<u32>,
    pub passengers_occupants: Option<u32>,
    pub passengers_fatalities: Option<u32>,
    pub total_occupants: Option<u32>,
    pub total_fatalities: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_round_trip() {
        let record = IncidentRecord {
            status: Some("Final".to_string()),
            time: Some("14:05:00".to_string()),
            weekday: Some("Friday".to_string()),
            day: Some(2),
            month: Some(1),
            year: 2015,
            aircraft_type: "Boeing 737-800".to_string(),
            operator: "Example Air".to_string(),
            country: "United Kingdom".to_string(),
            location: "Stornoway".to_string(),
            phase: "Landing (LDG)".to_string(),
            nature: "Passenger - Scheduled".to_string(),
            aircraft_damage: "Substantial".to_string(),
            narrative: None,
            probable_cause: None,
            departure_airport: UNKNOWN.to_string(),
            destination_airport: "Stornoway Airport (SYY)".to_string(),
            first_flight: Some(2009),
            engines: Some("2 CFMI CFM56-7B26".to_string()),
            total_airframe_hrs: Some("18211".to_string()),
            crew_occupants: Some(6),
            crew_fatalities: Some(0),
            passengers_occupants: Some(118),
            passengers_fatalities: Some(0),
            total_occupants: Some(124),
            total_fatalities: Some(0),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: IncidentRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
