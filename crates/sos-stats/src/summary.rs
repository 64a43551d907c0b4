use serde::{Deserialize, Serialize};

use crate::{descriptive::StatsSummary, histogram::Histogram, quartiles::QuartileRule, sample};

/// Statistics and histogram of one selected interval of a series.
///
/// This is what a plot shows when the user picks two points of a series: the
/// values between them (inclusive) are summarised and binned.
///
/// # Examples
///
/// ```
/// use sos_stats::{quartiles::QuartileRule, summary::IntervalSummary};
///
/// // (timestamp, value) rows
/// let rows = [[0.0, 4.0], [1.0, 8.0], [2.0, 6.0], [3.0, 2.0]];
/// let summary = IntervalSummary::from_selection(&rows, 2, 0, 1, QuartileRule::Tukey);
/// assert_eq!(summary.stats.count, 3);
/// assert_eq!(summary.stats.mean, 6.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSummary {
    /// Summary statistics of the selected values.
    pub stats: StatsSummary,
    /// Distribution of the selected values.
    pub histogram: Histogram,
}

impl IntervalSummary {
    /// Summarises a whole sample.
    #[must_use]
    pub fn new(values: &[f64], rule: QuartileRule) -> Self {
        Self {
            stats: StatsSummary::with_rule(values, rule),
            histogram: Histogram::new(values),
        }
    }

    /// Summarises `column` of the rows between the selection points `a` and `b`.
    ///
    /// The points may be given in either order and both are included. Points
    /// past the end of `rows` are clamped to the last row.
    #[must_use]
    pub fn from_selection<R>(rows: &[R], a: usize, b: usize, column: usize, rule: QuartileRule) -> Self
    where
        R: AsRef<[f64]>,
    {
        let Some(last) = rows.len().checked_sub(1) else {
            return Self::default();
        };
        let start = a.min(b).min(last);
        let end = a.max(b).min(last);
        let values = sample::extract_column(&rows[start..=end], column);
        Self::new(&values, rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<Vec<f64>> {
        (0..10u32)
            .map(|i| vec![f64::from(i) * 60_000.0, f64::from(i + 1)])
            .collect()
    }

    #[test]
    fn test_selection_order_does_not_matter() {
        let rows = series();
        let forward = IntervalSummary::from_selection(&rows, 2, 6, 1, QuartileRule::Tukey);
        let backward = IntervalSummary::from_selection(&rows, 6, 2, 1, QuartileRule::Tukey);
        assert_eq!(forward, backward);
        assert_eq!(forward.stats.count, 5);
        assert!((forward.stats.min - 3.0).abs() < f64::EPSILON);
        assert!((forward.stats.max - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_is_clamped() {
        let rows = series();
        let summary = IntervalSummary::from_selection(&rows, 8, 100, 1, QuartileRule::Tukey);
        assert_eq!(summary.stats.count, 2);
    }

    #[test]
    fn test_single_point_selection_is_degenerate() {
        let rows = series();
        let summary = IntervalSummary::from_selection(&rows, 4, 4, 1, QuartileRule::Tukey);
        assert!(summary.stats.is_degenerate());
        assert!(summary.histogram.bins.is_empty());
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<Vec<f64>> = vec![];
        let summary = IntervalSummary::from_selection(&rows, 0, 3, 1, QuartileRule::Legacy);
        assert_eq!(summary, IntervalSummary::default());
    }

    #[test]
    fn test_whole_series_histogram() {
        let rows = series();
        let summary = IntervalSummary::from_selection(&rows, 0, 9, 1, QuartileRule::Tukey);
        assert_eq!(summary.histogram.bins.len(), 9);
        assert_eq!(summary.histogram.total_count(), 9);
    }
}
