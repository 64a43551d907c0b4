use serde::{Deserialize, Serialize};

/// How the median and quartiles of a sorted sample are located.
///
/// Two definitions are supported:
///
/// - [`QuartileRule::Tukey`] is the conventional one. The median is the
///   middle value (or the mean of the two middle values), and `q1`/`q3` are
///   the medians of the lower and upper halves, leaving the median element
///   out of both halves when the sample length is odd.
/// - [`QuartileRule::Legacy`] reproduces the numbers shown by the SOS browser
///   plots. With `n` values, `h = n / 2` and `q = n / 4` (integer division),
///   the positions `h`, `q` and `3q` are evaluated as follows:
///   - `n` even: the mean of the values at `p` and `p + 1`, where a missing
///     `p + 1` contributes zero;
///   - `n` odd: the value at `p + 1`.
///
///   Parity is always taken from `n`, never from the quarter position.
///   These positions sit one to the right of the textbook ones, so the legacy
///   quartiles do not always satisfy `q1 <= median <= q3`.
///
/// # Examples
///
/// ```
/// use sos_stats::quartiles::{QuartileRule, Quartiles};
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let tukey = Quartiles::from_sorted(&sorted, QuartileRule::Tukey);
/// assert_eq!((tukey.q1, tukey.median, tukey.q3), (1.5, 3.0, 4.5));
///
/// let legacy = Quartiles::from_sorted(&sorted, QuartileRule::Legacy);
/// assert_eq!((legacy.q1, legacy.median, legacy.q3), (3.0, 4.0, 5.0));
/// ```
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum QuartileRule {
    #[default]
    Tukey,
    Legacy,
}

/// Median and quartiles of a sample.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// First quartile.
    pub q1: f64,
    /// Second quartile.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
}

impl Quartiles {
    /// Locates the quartiles of an ascending sample.
    ///
    /// Returns all zeros for an empty sample.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], rule: QuartileRule) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() {
            return Self::default();
        }

        match rule {
            QuartileRule::Tukey => {
                let n = sorted_values.len();
                let lower = &sorted_values[..n / 2];
                let upper = &sorted_values[n.div_ceil(2)..];
                let median = median_of(sorted_values);
                // A single value has empty halves.
                Self {
                    q1: if lower.is_empty() { median } else { median_of(lower) },
                    median,
                    q3: if upper.is_empty() { median } else { median_of(upper) },
                }
            }
            QuartileRule::Legacy => {
                let n = sorted_values.len();
                let even = n % 2 == 0;
                let quarter = n / 4;
                Self {
                    q1: legacy_at(sorted_values, quarter, even),
                    median: legacy_at(sorted_values, n / 2, even),
                    q3: legacy_at(sorted_values, 3 * quarter, even),
                }
            }
        }
    }
}

/// Median of a non-empty ascending slice.
fn median_of(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    if n % 2 == 0 {
        f64::midpoint(sorted_values[n / 2 - 1], sorted_values[n / 2])
    } else {
        sorted_values[n / 2]
    }
}

fn legacy_at(sorted_values: &[f64], pos: usize, even: bool) -> f64 {
    if even {
        let pair = sorted_values.iter().skip(pos).take(2).sum::<f64>();
        pair / 2.0
    } else {
        sorted_values.get(pos + 1).copied().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quartiles(values: &[f64], rule: QuartileRule) -> (f64, f64, f64) {
        let q = Quartiles::from_sorted(values, rule);
        (q.q1, q.median, q.q3)
    }

    #[test]
    fn test_tukey_even_length() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(quartiles(&values, QuartileRule::Tukey), (4.0, 4.5, 6.0));
    }

    #[test]
    fn test_tukey_two_values() {
        assert_eq!(quartiles(&[1.0, 3.0], QuartileRule::Tukey), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_tukey_single_value() {
        assert_eq!(quartiles(&[7.0], QuartileRule::Tukey), (7.0, 7.0, 7.0));
    }

    #[test]
    fn test_legacy_even_length() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(quartiles(&values, QuartileRule::Legacy), (4.0, 5.0, 8.0));
    }

    #[test]
    fn test_legacy_two_values_drops_missing_neighbour() {
        // The median pair runs off the end, so only the last value is halved.
        assert_eq!(quartiles(&[1.0, 3.0], QuartileRule::Legacy), (2.0, 1.5, 2.0));
    }

    #[test]
    fn test_legacy_odd_length_reads_one_past_middle() {
        assert_eq!(
            quartiles(&[1.0, 2.0, 3.0], QuartileRule::Legacy),
            (2.0, 3.0, 2.0)
        );
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(quartiles(&[], QuartileRule::Legacy), (0.0, 0.0, 0.0));
        assert_eq!(quartiles(&[], QuartileRule::Tukey), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rule_from_str() {
        assert_eq!("tukey".parse::<QuartileRule>().unwrap(), QuartileRule::Tukey);
        assert_eq!("Legacy".parse::<QuartileRule>().unwrap(), QuartileRule::Legacy);
        assert!("median".parse::<QuartileRule>().is_err());
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_unsorted_input_panics() {
        let _ = Quartiles::from_sorted(&[3.0, 1.0], QuartileRule::Tukey);
    }
}
