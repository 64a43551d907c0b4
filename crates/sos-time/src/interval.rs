use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::iso::{self, ParseIsoError};

/// A closed time window `[start, end]` between two UTC instants.
///
/// Serialises with RFC 3339 strings for both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Interval covering two ISO-8601 instants.
    ///
    /// ```
    /// # use sos_time::interval::TimeInterval;
    /// let t = TimeInterval::from_iso("2012-01-01", "2012-01-02T12:00:00Z").unwrap();
    /// assert_eq!(t.duration().num_hours(), 36);
    /// ```
    pub fn from_iso(start: &str, end: &str) -> Result<Self, ParseIsoError> {
        Ok(Self::new(iso::parse_iso(start)?, iso::parse_iso(end)?))
    }

    /// Shifts the start and the end independently.
    ///
    /// Bounds that would leave the representable range stop at
    /// `DateTime::<Utc>::MIN_UTC` or `DateTime::<Utc>::MAX_UTC`.
    #[must_use]
    pub fn adjust(self, start_offset: TimeDelta, end_offset: TimeDelta) -> Self {
        Self {
            start: shift(self.start, start_offset),
            end: shift(self.end, end_offset),
        }
    }

    /// Time from `start` to `end`; negative if the bounds are swapped.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns `true` if `start <= end`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns `true` if `instant` lies within the window, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Both bounds in `YYYY-MM-DDTHH:MM:SS.mmmZ` form.
    #[must_use]
    pub fn to_iso(&self) -> (String, String) {
        (iso::format_iso(self.start), iso::format_iso(self.end))
    }
}

fn shift(t: DateTime<Utc>, offset: TimeDelta) -> DateTime<Utc> {
    t.checked_add_signed(offset).unwrap_or(if offset < TimeDelta::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval() -> TimeInterval {
        TimeInterval::from_iso("2024-03-15T00:00:00Z", "2024-03-15T23:59:59.999Z").unwrap()
    }

    #[test]
    fn test_adjust_moves_bounds_independently() {
        let t = interval().adjust(TimeDelta::hours(-1), TimeDelta::milliseconds(1));
        assert_eq!(
            t.to_iso(),
            (
                "2024-03-14T23:00:00.000Z".to_owned(),
                "2024-03-16T00:00:00.000Z".to_owned()
            )
        );
    }

    #[test]
    fn test_adjust_saturates_at_range_ends() {
        let late = TimeInterval::new(DateTime::<Utc>::MAX_UTC, DateTime::<Utc>::MAX_UTC)
            .adjust(TimeDelta::days(-1), TimeDelta::days(1));
        assert_eq!(late.start, DateTime::<Utc>::MAX_UTC - TimeDelta::days(1));
        assert_eq!(late.end, DateTime::<Utc>::MAX_UTC);

        let early = TimeInterval::new(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MIN_UTC)
            .adjust(TimeDelta::days(-1), TimeDelta::days(1));
        assert_eq!(early.start, DateTime::<Utc>::MIN_UTC);
        assert_eq!(early.end, DateTime::<Utc>::MIN_UTC + TimeDelta::days(1));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let t = interval();
        assert!(t.contains(t.start));
        assert!(t.contains(t.end));
        assert!(!t.contains(t.end + TimeDelta::milliseconds(1)));
    }

    #[test]
    fn test_swapped_bounds_are_not_ordered() {
        let t = interval();
        let swapped = TimeInterval::new(t.end, t.start);
        assert!(!swapped.is_ordered());
        assert!(swapped.duration() < TimeDelta::zero());
    }

    #[test]
    fn test_from_iso_reports_bad_bound() {
        let err = TimeInterval::from_iso("2024-03-15", "later").unwrap_err();
        assert_eq!(err.text, "later");
    }

    #[test]
    fn test_serializes_as_rfc3339() {
        let json = serde_json::to_value(interval()).unwrap();
        assert_eq!(json["start"], "2024-03-15T00:00:00Z");
        assert_eq!(json["end"], "2024-03-15T23:59:59.999Z");
    }
}
