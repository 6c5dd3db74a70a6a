//! Time-of-day parsing.

use chrono::NaiveTime;

/// Parse a 24-hour time, tolerating circa markers ("ca", "c.") and stray
/// spaces. Returns the canonical `HH:MM:SS` form, or `None` when the text
/// is not a valid `HH:MM` or `HH:MM:SS` time.
pub fn parse_time(text: &str) -> Option<String> {
    let stripped = text.replace("ca", "").replace("c.", "").replace(' ', "");
    let time = NaiveTime::parse_from_str(&stripped, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&stripped, "%H:%M:%S"))
        .ok()?;
    Some(time.format("%H:%M:%S").to_string())
}
