//! Relative time windows such as `today`, `lastweek` or `rollingday`.
//!
//! A token names an anchor and a period. The anchor decides where the window
//! sits relative to now:
//!
//! - `this` (also `current`, `to`): the period containing now,
//! - `last` (also `previous`, `yester`): the period before that,
//! - `rolling`: the period ending just before now.
//!
//! Periods have fixed lengths: an hour, a day, seven days, 31 days and
//! 366 days. Month and year windows therefore do not follow the calendar; a
//! `lastmonth` resolved in March starts on the 30th of January. Period starts
//! are aligned on UTC calendar fields (Sunday for weeks, the 1st for months,
//! January 1st for years).
//!
//! Windows are closed and end one millisecond before the next one starts.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use sos_time::relative::parse_relative_time;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
//! let t = parse_relative_time("yesterday", now);
//! assert_eq!(t.start, Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap());
//! assert_eq!(t.duration().num_milliseconds(), 24 * 60 * 60 * 1000 - 1);
//! ```

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Where a relative window sits with respect to now.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The period containing now.
    #[default]
    This,
    /// The full period before the current one.
    Last,
    /// The period ending one millisecond before now.
    Rolling,
}

/// Length of a relative window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Fixed length of the period.
    #[must_use]
    pub fn unit(self) -> TimeDelta {
        TimeDelta::milliseconds(self.unit_millis())
    }

    fn unit_millis(self) -> i64 {
        match self {
            Self::Hour => HOUR_MS,
            Self::Day => DAY_MS,
            Self::Week => 7 * DAY_MS,
            Self::Month => 31 * DAY_MS,
            Self::Year => 366 * DAY_MS,
        }
    }

    /// Time elapsed between the start of the period containing `now` and `now`.
    #[must_use]
    pub fn elapsed(self, now: DateTime<Utc>) -> TimeDelta {
        let t = now.timestamp_millis();
        let into_day = t.rem_euclid(DAY_MS);
        let millis = match self {
            Self::Hour | Self::Day => t.rem_euclid(self.unit_millis()),
            Self::Week => i64::from(now.weekday().num_days_from_sunday()) * DAY_MS + into_day,
            Self::Month => i64::from(now.day0()) * DAY_MS + into_day,
            Self::Year => i64::from(now.ordinal0()) * DAY_MS + into_day,
        };
        TimeDelta::milliseconds(millis)
    }
}

/// A parsed relative time token.
///
/// The default is `today`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeTime {
    pub anchor: Anchor,
    pub period: Period,
}

/// Error returned for a token outside the relative time vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown relative time {token:?}")]
pub struct UnknownRelativeTimeError {
    pub token: String,
}

impl RelativeTime {
    #[must_use]
    pub const fn new(anchor: Anchor, period: Period) -> Self {
        Self { anchor, period }
    }

    /// Resolves the window against the instant `now`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use sos_time::relative::RelativeTime;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    /// let t = "rollingday".parse::<RelativeTime>().unwrap().resolve(now);
    /// assert_eq!(t.to_iso().0, "2024-03-14T14:30:00.000Z");
    /// assert_eq!(t.to_iso().1, "2024-03-15T14:29:59.999Z");
    /// ```
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>) -> TimeInterval {
        let unit = self.period.unit();
        let elapsed = self.period.elapsed(now);
        let ms = TimeDelta::milliseconds(1);
        let at_now = TimeInterval::new(now, now);
        match self.anchor {
            Anchor::This => at_now.adjust(-elapsed, -elapsed + unit - ms),
            Anchor::Last => at_now.adjust(-elapsed - unit, -elapsed - ms),
            Anchor::Rolling => at_now.adjust(-unit, -ms),
        }
    }

    /// Resolves the window against the current time.
    #[must_use]
    pub fn resolve_now(self) -> TimeInterval {
        self.resolve(Utc::now())
    }
}

impl FromStr for RelativeTime {
    type Err = UnknownRelativeTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ANCHORS: [(&str, Anchor); 7] = [
            ("this", Anchor::This),
            ("current", Anchor::This),
            ("to", Anchor::This),
            ("last", Anchor::Last),
            ("previous", Anchor::Last),
            ("yester", Anchor::Last),
            ("rolling", Anchor::Rolling),
        ];
        const PERIODS: [(&str, Period); 5] = [
            ("hour", Period::Hour),
            ("day", Period::Day),
            ("week", Period::Week),
            ("month", Period::Month),
            ("year", Period::Year),
        ];

        let token = s.trim().to_ascii_lowercase();
        ANCHORS
            .iter()
            .find_map(|(prefix, anchor)| {
                let rest = token.strip_prefix(*prefix)?;
                PERIODS
                    .iter()
                    .find(|(name, _)| *name == rest)
                    .map(|(_, period)| Self::new(*anchor, *period))
            })
            .ok_or_else(|| UnknownRelativeTimeError {
                token: s.to_owned(),
            })
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anchor = match self.anchor {
            Anchor::This => "this",
            Anchor::Last => "last",
            Anchor::Rolling => "rolling",
        };
        let period = match self.period {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        };
        write!(f, "{anchor}{period}")
    }
}

impl Serialize for RelativeTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RelativeTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolves `token` against `now`, falling back to `today` for unknown tokens.
#[must_use]
pub fn parse_relative_time(token: &str, now: DateTime<Utc>) -> TimeInterval {
    let relative = token.parse::<RelativeTime>().unwrap_or_else(|err| {
        tracing::debug!(%err, "falling back to today");
        RelativeTime::default()
    });
    relative.resolve(now)
}

/// Resolves `token` against the current time, falling back to `today`.
#[must_use]
pub fn parse_relative_time_now(token: &str) -> TimeInterval {
    parse_relative_time(token, Utc::now())
}
