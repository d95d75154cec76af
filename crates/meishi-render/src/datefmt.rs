//! Viewer-facing date formatting.
//!
//! Block payloads carry dates as strings in whatever shape the authoring
//! surface produced: plain dates, datetime-local values, or full RFC 3339
//! timestamps. Viewers get a "Mar 5, 2026" rendering; raw ISO text never
//! reaches a fragment. Unparseable input passes through verbatim — it isn't
//! ISO either, and hiding it would silently drop user data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a stored date string for display.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Parse the date component out of the accepted payload shapes.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(format_date("2026-03-05"), "Mar 5, 2026");
    }

    #[test]
    fn test_no_zero_padding_on_day() {
        assert_eq!(format_date("2026-11-09"), "Nov 9, 2026");
        assert_eq!(format_date("2026-11-19"), "Nov 19, 2026");
    }

    #[test]
    fn test_datetime_local() {
        assert_eq!(format_date("2026-03-05T18:30"), "Mar 5, 2026");
        assert_eq!(format_date("2026-03-05T18:30:15"), "Mar 5, 2026");
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(format_date("2026-03-05T18:30:00Z"), "Mar 5, 2026");
        assert_eq!(format_date("2026-03-05T18:30:00+02:00"), "Mar 5, 2026");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_date("next Tuesday"), "next Tuesday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(format_date("  2026-01-02  "), "Jan 2, 2026");
    }
}
