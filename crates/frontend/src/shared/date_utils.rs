/// Utilities for date and time formatting
///
/// Server timestamps arrive as ISO 8601 strings, with or without an offset.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
///
/// The wall-clock time is kept as sent; unparseable input is returned as-is.
pub fn format_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    datetime_str.to_string()
}
