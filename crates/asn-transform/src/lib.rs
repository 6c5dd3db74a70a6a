//! Record extraction and normalization engine.
//!
//! Composes the stateless field parsers in [`fields`] into the two record
//! normalizers: [`incident::normalize_incident`] for incident detail pages
//! and [`aircraft::normalize_aircraft`] for aircraft specs pages.
//!
//! Failure policy: parsers never error. Malformed field text degrades to
//! `None` or a sentinel; the only record-level failures are the
//! [`asn_model::RejectReason`] cases, surfaced as a drop signal rather than
//! an error the batch has to handle. Every function here is pure, so batches
//! can be normalized in parallel without coordination.

pub mod aircraft;
pub mod fields;
pub mod incident;

pub use aircraft::normalize_aircraft;
pub use incident::normalize_incident;
