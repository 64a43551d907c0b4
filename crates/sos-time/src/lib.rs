//! Time handling for SOS observation requests.
//!
//! - [`relative`]: resolves tokens such as `today`, `lastweek` and
//!   `rollingmonth` into absolute windows
//! - [`interval`]: the closed [`TimeInterval`](interval::TimeInterval) window
//! - [`iso`]: ISO-8601 parsing and formatting
//!
//! Every calendar computation is done in UTC. Nothing here reads the clock
//! except the `*_now` convenience functions.

pub mod interval;
pub mod iso;
pub mod relative;

pub use self::{
    interval::TimeInterval,
    relative::{RelativeTime, parse_relative_time, parse_relative_time_now},
};
