//! Field extractor: ordered (label, raw text) pairs -> [`RawRecord`].

use asn_model::RawRecord;
use tracing::trace;

use crate::text::clean_text;

/// Build a [`RawRecord`] from the ordered pairs of one logical record.
///
/// Every value goes through [`clean_text`]. Labels are kept verbatim (they
/// are the source's own vocabulary). A repeated label overwrites the earlier
/// occurrence; the source repeats table rows and the last one wins.
pub fn extract_fields<I, L, V>(pairs: I) -> RawRecord
where
    I: IntoIterator<Item = (L, V)>,
    L: AsRef<str>,
    V: AsRef<str>,
{
    let mut record = RawRecord::new();
    for (label, value) in pairs {
        let label = label.as_ref();
        let cleaned = clean_text(value.as_ref());
        if record.insert(label, cleaned).is_some() {
            trace!(label, "duplicate label overwritten");
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_every_value() {
        let record = extract_fields([
            ("Date", "  Friday 2   January 2015 "),
            ("Location", "Zürich   (Switzerland)"),
        ]);
        assert_eq!(record.get("Date"), Some("Friday 2 January 2015"));
        assert_eq!(record.get("Location"), Some("Zrich (Switzerland)"));
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let record = extract_fields([("Total", "Fatalities: 0 / Occupants: 4"), (
            "Total",
            "Fatalities: 1 / Occupants: 4",
        )]);
        assert_eq!(record.get("Total"), Some("Fatalities: 1 / Occupants: 4"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn empty_values_are_kept_but_empty() {
        let record = extract_fields([("Engines", "   ")]);
        assert_eq!(record.get("Engines"), Some(""));
        assert_eq!(record.value("Engines"), None);
    }
}
