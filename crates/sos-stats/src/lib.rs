//! Summary statistics for SOS observation series.
//!
//! This crate computes what the observation plots and tables display for a
//! user's selected range of values:
//!
//! - **Descriptive statistics**: count, sum, extremes, mean, median, quartiles,
//!   sample variance and standard deviation
//! - **Quartile rules**: the conventional definition and the legacy one of the
//!   SOS web client plots
//! - **Histograms**: fixed ten-way binning with a power-of-ten bin width
//! - **Interval summaries**: statistics plus histogram of a selection
//! - **Sample helpers**: coercion of textual values, column extraction
//!
//! No function mutates its input; every sort happens on a private copy.
//!
//! # Modules
//!
//! - [`descriptive`]: [`StatsSummary`](descriptive::StatsSummary)
//! - [`quartiles`]: median and quartile location rules
//! - [`histogram`]: [`Histogram`](histogram::Histogram) construction
//! - [`summary`]: statistics and histogram of a selection
//! - [`sample`]: turning observation values into samples
//!
//! # Examples
//!
//! ## Computing summary statistics
//!
//! ```
//! use sos_stats::descriptive::StatsSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = StatsSummary::new(&values);
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use sos_stats::histogram::Histogram;
//!
//! let values = [0.4, 1.2, 1.7, 2.9, 3.1];
//! let histogram = Histogram::new(&values);
//! assert_eq!(histogram.lower_bound, 0.0);
//! assert_eq!(histogram.upper_bound, 4.0);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod quartiles;
pub mod sample;
pub mod summary;
