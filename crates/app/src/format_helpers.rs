//! Date formatting for result metadata.
//!
//! Inputs are ISO-8601 timestamps as returned by the search API
//! (e.g. "2026-01-20T21:35:00.000Z").

use chrono::{DateTime, Utc};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Falls back to the input unchanged if it isn't shaped like a date.
pub fn format_date_human(date_str: &str) -> String {
    let (Some(date), Some(year), Some(month), Some(day)) = (
        date_str.get(..10),
        date_str.get(..4),
        date_str.get(5..7),
        date_str.get(8..10),
    ) else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date.to_string(),
    }
}

/// Relative age such as "3 hours ago", measured against `now`.
///
/// Older than a month (or unparseable) falls back to [`format_date_human`].
pub fn format_age(date_str: &str, now: DateTime<Utc>) -> String {
    let Ok(created) = DateTime::parse_from_rfc3339(date_str) else {
        return format_date_human(date_str);
    };
    let secs = (now - created.with_timezone(&Utc)).num_seconds();

    let (amount, unit) = match secs {
        s if s < 60 => return "just now".to_string(),
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 30 * 86_400 => (s / 86_400, "day"),
        _ => return format_date_human(date_str),
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}
