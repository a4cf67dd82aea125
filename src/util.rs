//! Timestamp Helpers
//!
//! The backend emits timestamps in a couple of formats (RFC 3339 from
//! newer endpoints, RFC 2822 from older Flask-serialized dates), so
//! parsing tries both.

use chrono::{DateTime, Utc};

/// Parse a backend timestamp, tolerating both wire formats.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// "14:05"-style clock time for chat bubbles.
pub fn format_clock(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Compact "2h ago" relative time for the notification bell.
pub fn time_ago(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return "just now".to_string();
    };
    let secs = (now - then).num_seconds().max(1);

    const UNITS: [(&str, i64); 6] = [
        ("y", 31_536_000),
        ("mo", 2_592_000),
        ("d", 86_400),
        ("h", 3_600),
        ("m", 60),
        ("s", 1),
    ];
    for (unit, size) in UNITS {
        let value = secs / size;
        if value >= 1 {
            return format!("{}{} ago", value, unit);
        }
    }
    "just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_and_rfc2822() {
        assert!(parse_timestamp("2026-08-30T09:30:00Z").is_some());
        assert!(parse_timestamp("Sun, 30 Aug 2026 09:30:00 GMT").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn time_ago_picks_largest_fitting_unit() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        assert_eq!(time_ago("2026-08-30T11:59:30Z", now), "30s ago");
        assert_eq!(time_ago("2026-08-30T10:00:00Z", now), "2h ago");
        assert_eq!(time_ago("2026-08-27T12:00:00Z", now), "3d ago");
        assert_eq!(time_ago("2025-08-30T12:00:00Z", now), "1y ago");
    }

    #[test]
    fn unparseable_timestamps_read_as_just_now() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        assert_eq!(time_ago("???", now), "just now");
        assert_eq!(format_clock("???"), "");
    }
}
