//! Raw label/text mapping extracted from one scraped detail page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label -> cleaned text mapping for a single logical record.
///
/// Labels are the source page's own vocabulary ("Date", "Location", "Crew",
/// ...). Keys are not guaranteed present. Inserting a duplicate label
/// silently overwrites the earlier value: source pages repeat rows and the
/// last occurrence wins. That policy is deliberate and tested, not an
/// accident of the map type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cleaned value under a label. Returns the displaced value
    /// when the label was already present (last-write-wins).
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(label.into(), value.into())
    }

    /// Raw lookup. Present-but-empty values are returned as `Some("")`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    /// Lookup that treats empty text as absent.
    ///
    /// Normalizers use this: a label whose cleaned text collapsed to nothing
    /// carries no information and degrades the same way a missing label does.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.get(label).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (label, value) in iter {
            record.insert(label, value);
        }
        record
    }
}
