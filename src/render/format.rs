//! Value formatting helpers for the result view.

use chrono::{DateTime, FixedOffset, Local};

/// Display format for timestamps, in the viewer's local timezone.
const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Formats a `lastModified` value in the viewer's local time.
///
/// Accepts HTTP dates (RFC 2822 style, as in the `Last-Modified` header) and
/// RFC 3339 timestamps. Anything else is returned unchanged.
pub fn format_last_modified(raw: &str) -> String {
    match parse_timestamp(raw.trim()) {
        Some(ts) => ts
            .with_timezone(&Local)
            .format(LOCAL_TIMESTAMP_FORMAT)
            .to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
}

pub(crate) fn format_load_time(ms: f64) -> String {
    format!("{ms:.0} ms")
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    format!("{bytes} bytes")
}
