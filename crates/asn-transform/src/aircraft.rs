//! Aircraft-type record normalizer.

use asn_model::{AircraftRecord, RawRecord, RejectReason};
use tracing::warn;

use crate::fields::{
    parse_first_flight, parse_mass, parse_mass_group, parse_passenger_count,
    parse_production_ended, parse_production_total, parse_series,
};

// Label vocabulary of the aircraft specs pages.
const MAIN_MODEL: &str = "Aircraft main model";
const MANUFACTURER: &str = "Manufacturer";
const COUNTRY: &str = "Country";
const ICAO_TYPE_DESIGNATOR: &str = "ICAO Type designator";
const SERIES: &str = "Series";
const FIRST_FLIGHT: &str = "First flight";
const PRODUCTION_ENDED: &str = "Production ended";
const PRODUCTION_TOTAL: &str = "Production total";
const PROPULSION: &str = "Propulsion";
const MAX_PASSENGERS: &str = "Maximum number of passengers";
const MAX_TAKE_OFF_MASS: &str = "Maximum take-off mass";
const ICAO_MASS_GROUP: &str = "ICAO mass group";

/// Normalize one raw specs mapping into a typed aircraft record.
///
/// The main model is the record's primary key; a page without it cannot be
/// stored and is rejected. Every other field degrades to missing.
pub fn normalize_aircraft(
    raw: &RawRecord,
    source: &str,
) -> Result<AircraftRecord, RejectReason> {
    let Some(main_model) = raw.value(MAIN_MODEL) else {
        warn!(source, "rejecting aircraft record: no main model");
        return Err(RejectReason::MissingMainModel);
    };

    let manufacturer = raw.value(MANUFACTURER);
    let (mass, mass_unit) = raw
        .value(MAX_TAKE_OFF_MASS)
        .map(parse_mass)
        .unwrap_or((None, None));

    Ok(AircraftRecord {
        main_model: main_model.to_string(),
        manufacturer: manufacturer.map(str::to_string),
        country: raw.value(COUNTRY).map(str::to_string),
        icao_type_designator: raw.value(ICAO_TYPE_DESIGNATOR).map(str::to_string),
        series: raw
            .value(SERIES)
            .and_then(|text| parse_series(manufacturer, text)),
        first_flight: raw.value(FIRST_FLIGHT).and_then(parse_first_flight),
        production_ended: raw.value(PRODUCTION_ENDED).map(parse_production_ended),
        production_total: raw.value(PRODUCTION_TOTAL).map(parse_production_total),
        propulsion: raw.value(PROPULSION).map(str::to_string),
        maximum_number_of_passengers: raw.value(MAX_PASSENGERS).and_then(parse_passenger_count),
        maximum_take_off_mass: mass,
        mass_unit,
        icao_mass_group: raw.value(ICAO_MASS_GROUP).and_then(parse_mass_group),
    })
}
