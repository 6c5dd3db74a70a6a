//! Reader for scraped pages handed over by the HTML-traversal collaborator.
//!
//! The collaborator emits one JSON object per line: the page's source URL
//! and the ordered label/text pairs it pulled out of the page. A malformed
//! line is logged and skipped; it never aborts the batch.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::warn;

use asn_model::RawRecord;

use crate::extractor::extract_fields;

/// One scraped detail page: its identifying source and the ordered
/// label/text pairs extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedPage {
    /// Identifying context for audit logs (typically the page URL).
    pub source: String,
    /// Ordered (label, raw text) pairs, row by row.
    pub fields: Vec<(String, String)>,
}

impl ScrapedPage {
    /// Run the field extractor over this page's pairs.
    pub fn to_raw_record(&self) -> RawRecord {
        extract_fields(self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str())))
    }
}

/// Pages decoded from one input stream, plus the count of lines skipped.
#[derive(Debug, Default)]
pub struct PageBatch {
    pub pages: Vec<ScrapedPage>,
    pub skipped: usize,
}

/// Read newline-delimited JSON pages from `reader`.
///
/// IO errors propagate; decode errors degrade to a warning and a skip count.
pub fn read_pages<R: BufRead>(reader: R) -> asn_model::Result<PageBatch> {
    let mut batch = PageBatch::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ScrapedPage>(&line) {
            Ok(page) => batch.pages.push(page),
            Err(error) => {
                warn!(line = index + 1, %error, "skipping undecodable page");
                batch.skipped += 1;
            }
        }
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pages_and_skips_bad_lines() {
        let input = concat!(
            r#"{"source":"https://example.net/db/1","fields":[["Date","2 Jan 2015"]]}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"source":"https://example.net/db/2","fields":[["Date","3 Jan 2015"]]}"#,
            "\n",
        );
        let batch = read_pages(input.as_bytes()).expect("read pages");
        assert_eq!(batch.pages.len(), 2);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.pages[0].source, "https://example.net/db/1");
    }

    #[test]
    fn page_converts_to_raw_record() {
        let page = ScrapedPage {
            source: "https://example.net/db/1".to_string(),
            fields: vec![
                ("Date".to_string(), " Friday  2 January 2015".to_string()),
                ("Date".to_string(), "Saturday 3 January 2015".to_string()),
            ],
        };
        let record = page.to_raw_record();
        assert_eq!(record.get("Date"), Some("Saturday 3 January 2015"));
    }
}
