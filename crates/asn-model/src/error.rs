use thiserror::Error;

/// Reason a scraped page was dropped instead of yielding a record.
///
/// Rejection is the only record-level failure: every field-level problem
/// (absent label, unparseable value) degrades to `None` or a sentinel and
/// never crosses a normalizer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("mandatory date field is absent")]
    MissingDate,
    #[error("no year could be parsed from date text {0:?}")]
    YearUnobtainable(String),
    #[error("aircraft page carries no main model")]
    MissingMainModel,
}

#[derive(Debug, Error)]
pub enum AsnError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record rejected: {0}")]
    Rejected(#[from] RejectReason),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AsnError>;
