use std::collections::BTreeMap;
use std::path::PathBuf;

/// Which record family a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Incidents,
    Aircraft,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Incidents => "incidents",
            RecordKind::Aircraft => "aircraft",
        }
    }
}

/// Counts for one extraction run.
#[derive(Debug)]
pub struct ExtractOutcome {
    pub kind: RecordKind,
    /// Pages decoded from the input stream.
    pub pages: usize,
    /// Input lines that were not decodable pages.
    pub skipped_lines: usize,
    /// Records emitted to the output.
    pub emitted: usize,
    /// Rejection counts keyed by reason text.
    pub rejected: BTreeMap<String, usize>,
    /// Where the records went (None = stdout).
    pub output: Option<PathBuf>,
}

impl ExtractOutcome {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}
