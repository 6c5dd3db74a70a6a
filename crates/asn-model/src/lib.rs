//! Data model for the ASN extraction pipeline.
//!
//! Typed, validated record schemas for the two page families (incidents and
//! aircraft types), the raw label/text mapping they are built from, and the
//! error taxonomy shared by the normalizers and the CLI.

pub mod aircraft;
pub mod error;
pub mod incident;
pub mod raw;

pub use aircraft::{AircraftRecord, ProductionFigure, SERIES_SEPARATOR, UNKNOWN_PRODUCTION};
pub use error::{AsnError, RejectReason, Result};
pub use incident::{IncidentRecord, UNKNOWN};
pub use raw::RawRecord;
