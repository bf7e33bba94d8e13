//! Production date handling.
//!
//! Every year derived from a timestamp is taken in UTC.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::error::{Result, ShipError};

/// Calendar year of `date` in UTC.
pub fn year_of(date: &DateTime<Utc>) -> i32 {
    date.year()
}

/// Convert epoch milliseconds to a UTC instant.
pub fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ShipError::invalid(format!("timestamp {} is out of range", millis)))
}

/// Parse a production date given on the command line.
///
/// Accepted forms:
/// - epoch milliseconds (`32503680000000`, may be negative)
/// - RFC 3339 (`3000-01-01T00:00:00Z`)
/// - a bare date (`3000-01-01`), taken as midnight UTC
pub fn parse_prod_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(millis) = input.parse::<i64>() {
        return from_millis(millis);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(ShipError::invalid(format!(
        "malformed date '{}' (expected epoch millis, RFC 3339 or YYYY-MM-DD)",
        input
    )))
}
