//! Display formatting for date and duration columns.
//!
//! Formatting an absent or unparseable value always yields an empty string.

use chrono::{Local, TimeZone};

use super::derive::parse_timestamp;

/// Fixed-width `yy-MM-dd HH:mm:ss` layout.
pub const DATE_FORMAT: &str = "%y-%m-%d %H:%M:%S";

/// Format a timestamp in the server's local timezone.
pub fn format_date(value: Option<&str>) -> String {
    format_date_in(value, &Local)
}

/// Format a timestamp in the given timezone.
pub fn format_date_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    value
        .and_then(parse_timestamp)
        .map(|dt| dt.with_timezone(tz).format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format a count of seconds as e.g. `1h 2m 3s`.
///
/// Zero components are omitted; zero itself is `0s`.
pub fn format_duration(secs: Option<i64>) -> String {
    let Some(secs) = secs else {
        return String::new();
    };

    let sign = if secs < 0 { "-" } else { "" };
    let total = secs.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }

    format!("{sign}{}", parts.join(" "))
}
