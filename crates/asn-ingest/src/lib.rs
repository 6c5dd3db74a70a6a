//! Input boundary for the ASN extraction pipeline.
//!
//! Turns what the external HTML-traversal collaborator produces — ordered
//! (label, raw text) pairs per page — into cleaned [`asn_model::RawRecord`]
//! mappings ready for normalization.

pub mod extractor;
pub mod pages;
pub mod text;

pub use extractor::extract_fields;
pub use pages::{PageBatch, ScrapedPage, read_pages};
pub use text::clean_text;
