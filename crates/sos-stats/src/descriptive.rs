use serde::{Deserialize, Serialize};

use crate::{
    quartiles::{QuartileRule, Quartiles},
    sample,
};

/// Summary statistics of a selected range of observation values.
///
/// A sample with fewer than two values is degenerate and summarises to
/// all-zero fields, which is what [`StatsSummary::default`] returns.
///
/// Values are not validated: a `NaN` in the sample propagates into `sum`,
/// `mean`, `min`, `max`, `variance` and `sd`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of values in the sample.
    pub count: usize,
    /// Arithmetic sum of the values.
    pub sum: f64,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median, located by the [`QuartileRule`] in use.
    pub median: f64,
    /// The first quartile.
    pub q1: f64,
    /// The third quartile.
    pub q3: f64,
    /// The sample (Bessel-corrected, `n - 1`) variance.
    pub variance: f64,
    /// The sample standard deviation.
    pub sd: f64,
}

impl StatsSummary {
    /// Summarises `values` using the default [`QuartileRule`].
    ///
    /// `values` is only read; sorting happens on a private copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sos_stats::descriptive::StatsSummary;
    /// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    /// let stats = StatsSummary::new(&values);
    /// assert_eq!(stats.count, 8);
    /// assert_eq!(stats.mean, 5.0);
    /// assert!((stats.variance - 32.0 / 7.0).abs() < 1e-12);
    /// assert!((stats.sd - 2.138_089_935).abs() < 1e-9);
    ///
    /// assert_eq!(StatsSummary::new(&[42.0]), StatsSummary::default());
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        Self::with_rule(values, QuartileRule::default())
    }

    /// Summarises `values`, locating the median and quartiles with `rule`.
    ///
    /// ```
    /// # use sos_stats::{descriptive::StatsSummary, quartiles::QuartileRule};
    /// let values = [9.0, 2.0, 5.0, 4.0, 7.0, 4.0, 5.0, 4.0];
    /// let stats = StatsSummary::with_rule(&values, QuartileRule::Legacy);
    /// assert_eq!((stats.q1, stats.median, stats.q3), (4.0, 5.0, 8.0));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn with_rule(values: &[f64], rule: QuartileRule) -> Self {
        if values.len() <= 1 {
            return Self::default();
        }

        let count = values.len();
        let n = count as f64;
        let sum = sample::sum(values);
        let mean = sum / n;
        let min = sample::min(values);
        let max = sample::max(values);

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let Quartiles { q1, median, q3 } = Quartiles::from_sorted(&sorted, rule);

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let sd = variance.sqrt();

        Self {
            count,
            sum,
            min,
            max,
            mean,
            median,
            q1,
            q3,
            variance,
            sd,
        }
    }

    /// Returns `true` if this summary came from fewer than two values.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.count <= 1
    }
}
