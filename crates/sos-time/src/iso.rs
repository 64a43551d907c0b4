//! Conversion between ISO-8601 strings and instants.
//!
//! SOS endpoints report times as `2012-01-01T01:00:00.000Z`, sometimes
//! without the fractional part, sometimes as a bare date. Every form is read
//! as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Error returned when a string is not one of the accepted ISO-8601 forms.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid ISO-8601 date/time: {text:?}")]
pub struct ParseIsoError {
    pub text: String,
}

/// Parses `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS[.fff][Z]` as a UTC instant.
///
/// # Examples
///
/// ```
/// use sos_time::iso::{format_iso, parse_iso};
///
/// let t = parse_iso("2012-01-01T01:00:00.250Z").unwrap();
/// assert_eq!(format_iso(t), "2012-01-01T01:00:00.250Z");
///
/// let d = parse_iso("2012-01-01").unwrap();
/// assert_eq!(format_iso(d), "2012-01-01T00:00:00.000Z");
/// ```
pub fn parse_iso(text: &str) -> Result<DateTime<Utc>, ParseIsoError> {
    let trimmed = text.trim();
    let err = || ParseIsoError {
        text: text.to_owned(),
    };

    if !trimmed.contains('T') {
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| err())?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(err)?;
        return Ok(midnight.and_utc());
    }

    let local = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|t| t.and_utc())
        .map_err(|_| err())
}

/// Parses an ISO-8601 string into milliseconds since the Unix epoch.
pub fn iso_to_timestamp_millis(text: &str) -> Result<i64, ParseIsoError> {
    parse_iso(text).map(|t| t.timestamp_millis())
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn format_iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats milliseconds since the Unix epoch as ISO-8601.
///
/// Returns `None` when the timestamp is out of range.
#[must_use]
pub fn timestamp_millis_to_iso(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(format_iso)
}
