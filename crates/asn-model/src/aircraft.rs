//! Normalized aircraft-type record.

use serde::{Deserialize, Serialize};

/// Sentinel text for a production figure that is present in the source but
/// neither a number nor a recognizable word.
pub const UNKNOWN_PRODUCTION: &str = "UNKNOWN";

/// Separator joining the entries of the `series` field.
pub const SERIES_SEPARATOR: &str = "$$";

/// A production figure from a specs page: either a number ("1990", "856")
/// or free text ("current"). Serializes untagged, so JSON/CSV output carries
/// the plain value just as the source table did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductionFigure {
    Number(i64),
    Text(String),
}

impl ProductionFigure {
    pub fn unknown() -> Self {
        ProductionFigure::Text(UNKNOWN_PRODUCTION.to_string())
    }
}

/// One normalized aircraft type, keyed by its main model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftRecord {
    /// Primary key; pages without it are rejected.
    pub main_model: String,
    pub manufacturer: Option<String>,
    pub country: Option<String>,
    pub icao_type_designator: Option<String>,
    /// "manufacturer + variant" entries joined with [`SERIES_SEPARATOR`].
    pub series: Option<String>,
    pub first_flight: Option<i32>,
    pub production_ended: Option<ProductionFigure>,
    pub production_total: Option<ProductionFigure>,
    pub propulsion: Option<String>,
    pub maximum_number_of_passengers: Option<u32>,
    pub maximum_take_off_mass: Option<u32>,
    pub mass_unit: Option<String>,
    pub icao_mass_group: Option<u32>,
}
