//! Fuzzy string matching for reconciling scraped text against reference
//! vocabularies (operator names, country names, aircraft types).
//!
//! Scoring is a normalized Levenshtein ratio: both sides are lightly
//! normalized, then `1 - distance / max_len`. The matcher holds no state;
//! the candidate vocabulary is read-only and may be shared across threads.

use rapidfuzz::distance::levenshtein;

/// Best candidate for a query, with its similarity ratio.
///
/// An empty candidate set produces an empty candidate with ratio 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    pub candidate: String,
    pub ratio: f64,
}

/// Normalize for comparison: drop periods, collapse whitespace.
fn normalize(s: &str) -> String {
    s.replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity of two strings in `[0.0, 1.0]`.
///
/// `1.0` means the normalized strings are identical; `0.0` means either
/// side normalizes to empty, or nothing matches at all. The distance is
/// classic Levenshtein (unit-cost insert/delete/substitute) over characters.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let distance = levenshtein::distance(a.chars(), b.chars());
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - distance as f64 / max_len as f64
}

/// Pick the candidate most similar to `value`.
///
/// Candidates are scored in input order and ties resolve to the **last**
/// candidate reaching the maximum ratio. That tie-break reproduces the
/// behavior of the system this replaces; callers who want a different
/// policy should order their vocabulary accordingly.
pub fn best_match<'a, I>(value: &str, candidates: I) -> Match
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best = Match::default();
    for candidate in candidates {
        let ratio = similarity(value, candidate);
        if ratio >= best.ratio {
            best = Match {
                candidate: candidate.to_string(),
                ratio,
            };
        }
    }
    best
}
