//! Time-Range Normalization
//!
//! User-supplied start/end timestamps arrive as ISO-8601 text and the info
//! API expects integer epoch milliseconds. Ordering of start vs. end is not
//! checked here; the API decides what to do with an inverted range.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{InfoError, Result};

/// Parse an ISO-8601 timestamp to epoch milliseconds.
///
/// Accepts an explicit offset (`2025-01-01T00:00:00Z`,
/// `2025-01-01T09:30:00+09:00`), a naive timestamp, which is taken as UTC,
/// or a bare date, which is taken as midnight UTC.
pub fn parse_iso8601_millis(value: &str) -> Result<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp_millis());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().timestamp_millis());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
    }

    Err(InfoError::InvalidTimestamp(value.to_string()))
}

/// Parse a (start, end) pair. Fails on the first malformed value.
pub fn parse_time_range(start: &str, end: &str) -> Result<(i64, i64)> {
    Ok((parse_iso8601_millis(start)?, parse_iso8601_millis(end)?))
}
