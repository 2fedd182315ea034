//! Utilities for date and time formatting
//!
//! The backend serialises timestamps either as RFC 2822 (`jsonify` of a
//! datetime), RFC 3339, or a bare `YYYY-MM-DD HH:MM:SS` from SQLite.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a backend timestamp as `YYYY-MM-DD HH:MM`
/// Example: "2025-01-14T10:05:26.123Z" -> "2025-01-14 10:05"
pub fn format_created_at(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    raw.to_string()
}
