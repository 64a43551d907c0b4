//! Helpers for turning observation values into numeric samples.
//!
//! Observation results arrive as text, so the statistics functions are fed
//! through one of two doors:
//!
//! - [`coerce_sample`] is permissive: anything that does not parse becomes
//!   `NaN` and flows through the arithmetic untouched.
//! - [`parse_sample`] is strict: the first entry that does not parse is
//!   reported as an error.
//!
//! # Examples
//!
//! ```
//! use sos_stats::sample::{coerce_sample, parse_sample};
//!
//! let values = coerce_sample(["1.5", " 2 ", "n/a"]);
//! assert_eq!(&values[..2], &[1.5, 2.0]);
//! assert!(values[2].is_nan());
//!
//! let err = parse_sample(["1.5", "n/a"]).unwrap_err();
//! assert_eq!(err.index, 1);
//! ```

/// Error returned by [`parse_sample`] for an entry that is not a number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("sample entry {index} is not a number: {text:?}")]
pub struct ParseSampleError {
    /// Position of the offending entry in the input.
    pub index: usize,
    /// The entry as it was given.
    pub text: String,
}

/// Converts a single textual value to `f64`, yielding `NaN` when it does not parse.
#[must_use]
pub fn coerce_value(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Converts every entry with [`coerce_value`], preserving order.
pub fn coerce_sample<I, S>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| coerce_value(v.as_ref()))
        .collect()
}

/// Converts every entry to `f64`, failing on the first one that does not parse.
pub fn parse_sample<I, S>(values: I) -> Result<Vec<f64>, ParseSampleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, v)| {
            let text = v.as_ref().trim();
            text.parse().map_err(|_| ParseSampleError {
                index,
                text: text.to_owned(),
            })
        })
        .collect()
}

/// Returns `true` if `text` parses to a finite number.
///
/// ```
/// # use sos_stats::sample::is_number;
/// assert!(is_number("-3.25"));
/// assert!(!is_number("inf"));
/// assert!(!is_number("abc"));
/// ```
#[must_use]
pub fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Arithmetic sum of the sample.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Smallest value of the sample; `NaN` if any value is `NaN`.
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}

/// Largest value of the sample; `NaN` if any value is `NaN`.
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// Picks column `column` out of every row.
///
/// Rows too short to have that column contribute `NaN`, so the result always
/// has one entry per row.
///
/// ```
/// # use sos_stats::sample::extract_column;
/// let rows = [vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0]];
/// let column = extract_column(&rows, 1);
/// assert_eq!(&column[..2], &[10.0, 20.0]);
/// assert!(column[2].is_nan());
/// ```
pub fn extract_column<R>(rows: &[R], column: usize) -> Vec<f64>
where
    R: AsRef<[f64]>,
{
    rows.iter()
        .map(|row| row.as_ref().get(column).copied().unwrap_or(f64::NAN))
        .collect()
}

/// Removes duplicates, keeping the first occurrence of each value in order.
///
/// ```
/// # use sos_stats::sample::unique;
/// assert_eq!(unique(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// ```
pub fn unique<T>(values: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}
