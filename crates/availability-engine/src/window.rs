//! The requested time window and the parsing of its endpoints.
//!
//! Validation happens here, before any store query is issued: a window either
//! exists with `start < end` or the request fails.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{AvailabilityError, Result};

/// A half-open interval `[start, end)` of UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window from two instants.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidTimeRange` unless `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(AvailabilityError::InvalidTimeRange(format!(
                "start {} is not before end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a window from raw, possibly absent, request parameters.
    ///
    /// Absence is checked before parsing, so a request missing `end` and
    /// carrying a garbage `start` reports `MissingParameter`. An empty string
    /// counts as absent; a blank one is present and fails to parse.
    ///
    /// # Errors
    /// - `AvailabilityError::MissingParameter` if either endpoint is absent
    /// - `AvailabilityError::InvalidTimeRange` if either endpoint does not parse
    ///   or `start >= end`
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let (Some(start), Some(end)) = (non_empty(start), non_empty(end)) else {
            return Err(AvailabilityError::MissingParameter);
        };
        let start = parse_instant(start)?;
        let end = parse_instant(end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Parse a single instant.
///
/// Accepted forms, tried in order:
/// - RFC 3339 with offset (`2026-03-16T10:00:00Z`, `2026-03-16T12:00:00+02:00`)
/// - naive date-time, read as UTC (`2026-03-16T10:00:00`, `2026-03-16 10:00`)
/// - bare date, read as UTC midnight (`2026-03-16`)
///
/// # Errors
/// Returns `AvailabilityError::InvalidTimeRange` naming the rejected input.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(AvailabilityError::InvalidTimeRange(format!(
        "'{raw}' is not a valid instant"
    )))
}
