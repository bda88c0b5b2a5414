//! ISO-8601 parsing and formatting for conference dates.
//!
//! Dates are stored as `TIMESTAMP` (no time zone, microsecond precision).
//! Formatting drops the fractional part when it is zero, so a value parsed
//! from `2025-12-25T10:00:00` is emitted as exactly that string again.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serializer;

use crate::types::LocalTimestamp;

/// Naive layouts tried in order. `%.f` accepts an optional fraction.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Four-digit years only. chrono's `%Y` also takes signed and extended years.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parse an ISO-8601 date or date-time.
///
/// Accepted forms:
/// - `YYYY-MM-DDTHH:MM[:SS[.fraction]]` (or with a space separator)
/// - `YYYY-MM-DD`, read as midnight
/// - any RFC 3339 timestamp with `Z` or `+HH:MM`, normalised to UTC
///
/// Precision beyond microseconds is truncated. Years outside `0001..=9999`
/// are rejected, including when an offset pushes the UTC value out of range.
pub fn parse_iso_datetime(input: &str) -> Option<LocalTimestamp> {
    let parsed = DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    if !YEAR_RANGE.contains(&parsed.year()) {
        return None;
    }
    truncate_to_micros(parsed)
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS`, appending `.ffffff` only when
/// the sub-second part is non-zero.
pub fn format_iso_datetime(value: &LocalTimestamp) -> String {
    if value.nanosecond() == 0 {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Serde adapter for `Option<LocalTimestamp>` fields: `Some` becomes an
/// ISO-8601 string, `None` becomes an explicit `null`.
pub fn serialize_optional<S>(
    value: &Option<LocalTimestamp>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_str(&format_iso_datetime(ts)),
        None => serializer.serialize_none(),
    }
}

fn truncate_to_micros(value: LocalTimestamp) -> Option<LocalTimestamp> {
    let nanos = value.nanosecond();
    value.with_nanosecond(nanos - nanos % 1_000)
}
