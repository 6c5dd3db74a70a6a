//! Stateless field parsers.
//!
//! Every parser is a pure function from input text to an output value:
//! - **date**: free-text incident dates
//! - **time**: 24-hour time-of-day with circa markers
//! - **location**: "Location (Country)" splitting
//! - **casualty**: "Occupants / Fatalities" group counts
//! - **aircraft**: specs-page fields (first flight, production, series, mass)
//!
//! Malformed input degrades to missing values; no parser returns an error.

pub mod aircraft;
pub mod casualty;
pub mod date;
pub mod location;
pub mod time;

pub use aircraft::{
    parse_first_flight, parse_mass, parse_mass_group, parse_passenger_count,
    parse_production_ended, parse_production_total, parse_series,
};
pub use casualty::{CasualtyCount, parse_casualties};
pub use date::{DateParts, month_name, parse_date};
pub use location::{LocationParts, parse_location};
pub use time::parse_time;
