use serde::{Deserialize, Serialize};

use crate::sample;

/// Nominal number of bins of every histogram.
pub const BIN_COUNT: usize = 10;

/// A histogram of a selected range of observation values.
///
/// The bounds are the sample's extremes rounded outwards to integers. The bin
/// width is the bound span rounded to the nearest power of ten, divided by
/// [`BIN_COUNT`], so the actual number of bins is between one and a few dozen
/// depending on how the span rounds.
///
/// Values at or beyond the upper edge of the last bin are not counted by any
/// bin; for integral data this means the maximum value itself is dropped.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The minimum value of the sample.
    pub min: f64,
    /// The maximum value of the sample.
    pub max: f64,
    /// `floor(min)`; the start of the first bin.
    pub lower_bound: f64,
    /// `ceil(max)`; no bin starts at or after this value.
    pub upper_bound: f64,
    /// Nominal number of bins used to derive the width.
    pub bin_count: usize,
    /// Width of every bin.
    pub bin_width: f64,
    /// The bins in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single histogram bin covering `start..start + width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive start of the bin.
    pub start: f64,
    /// Number of values that fell into this bin.
    pub count: u64,
}

impl HistogramBin {
    /// Exclusive end of the bin for the given bin width.
    #[must_use]
    pub fn end(&self, bin_width: f64) -> f64 {
        self.start + bin_width
    }
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// `values` is only read; sorting happens on a private copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sos_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    /// let histogram = Histogram::new(&values);
    /// assert_eq!(histogram.lower_bound, 1.0);
    /// assert_eq!(histogram.upper_bound, 10.0);
    /// assert_eq!(histogram.bin_width, 1.0);
    /// assert_eq!(histogram.bins.len(), 9);
    /// // 10.0 lies on the upper edge of the last bin and is not counted.
    /// assert_eq!(histogram.total_count(), 9);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// Returns an empty histogram when there are fewer than two values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        if sorted_values.len() <= 1 {
            return Self::default();
        }

        let min = sample::min(sorted_values);
        let max = sample::max(sorted_values);
        let lower_bound = min.floor();
        let upper_bound = max.ceil();
        let mut histogram = Self {
            min,
            max,
            lower_bound,
            upper_bound,
            bin_count: BIN_COUNT,
            bin_width: 0.0,
            bins: vec![],
        };

        let span = upper_bound - lower_bound;
        if span.is_nan() || span <= 0.0 {
            tracing::debug!(lower_bound, upper_bound, "histogram span is empty, no bins");
            return histogram;
        }

        let bin_width = 10f64.powf(span.log10().round()) / BIN_COUNT as f64;
        histogram.bin_width = bin_width;

        // One cursor walks the sorted values across all bins; it is never reset.
        let mut cursor = 0;
        let mut start = lower_bound;
        while start < upper_bound {
            let end = start + bin_width;
            let mut count = 0;
            while cursor < sorted_values.len() && sorted_values[cursor] < end {
                count += 1;
                cursor += 1;
            }
            histogram.bins.push(HistogramBin { start, count });
            if end <= start {
                // The width is below the resolution of `start`.
                break;
            }
            start = end;
        }

        histogram
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}
