//! Cleaning contract applied to every scraped text value.

/// Clean one raw text value.
///
/// - ASCII-fold: non-ASCII characters are dropped outright (the source mixes
///   encodings and the downstream schema is ASCII).
/// - Runs of whitespace collapse to a single space; leading/trailing
///   whitespace is trimmed.
/// - Line breaks survive: cleaning is applied per line and blank lines are
///   dropped. The aircraft `Series` field is line-structured and its parser
///   must still see the line boundaries.
///
/// Idempotent: cleaning already-clean text changes nothing.
pub fn clean_text(raw: &str) -> String {
    let folded: String = raw.chars().filter(char::is_ascii).collect();
    let lines: Vec<String> = folded
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_ascii() {
        assert_eq!(clean_text("Zürich"), "Zrich");
        assert_eq!(clean_text("café — bar"), "caf bar");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(clean_text("  Boeing   737\t800  "), "Boeing 737 800");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \t "), "");
    }

    #[test]
    fn preserves_line_structure() {
        assert_eq!(
            clean_text("100: first series\n\n  200:   second  \n"),
            "100: first series\n200: second"
        );
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = clean_text("  Stornoway   (United  Kingdom) ");
        assert_eq!(clean_text(&once), once);
    }
}
