use serde::{Deserialize, Serialize};
use sos_stats::descriptive::StatsSummary;

/// How small values are written in exponential form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationStyle {
    /// `1.23e-5`
    Simple,
    /// `1.23 × 10⁻⁵`
    #[default]
    Fancy,
}

/// Formatting rules for observation values.
///
/// Values whose magnitude is below `sci_limit` (zero excepted) are written in
/// exponential notation, everything else in fixed notation. Both use `digits`
/// fractional digits. A value lying exactly halfway between two roundings is
/// rounded away from zero (`0.125` → `0.13`), as web browsers do.
///
/// # Examples
///
/// ```
/// use sos_display::format::{NotationStyle, ValueFormat};
///
/// let format = ValueFormat::default();
/// assert_eq!(format.format(12.3456), "12.35");
/// assert_eq!(format.format(0.0), "0.00");
/// assert_eq!(format.format(0.000_123_4), "1.23 × 10⁻⁴");
///
/// let simple = ValueFormat { style: NotationStyle::Simple, ..format };
/// assert_eq!(simple.format(-0.05), "-5.00e-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueFormat {
    /// Magnitude under which exponential notation is used.
    pub sci_limit: f64,
    /// Number of fractional digits.
    pub digits: usize,
    pub style: NotationStyle,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            sci_limit: 0.1,
            digits: 2,
            style: NotationStyle::default(),
        }
    }
}

impl ValueFormat {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.abs() < self.sci_limit && value != 0.0 {
            let value = round_ties_away(value, self.digits, true);
            let (mantissa, exponent) = exponential_parts(value, self.digits);
            match self.style {
                NotationStyle::Simple => format!("{mantissa}e{exponent}"),
                NotationStyle::Fancy => format!("{mantissa} × 10{}", superscript(&exponent)),
            }
        } else {
            // -0.0 prints as 0.
            let value = if value == 0.0 { 0.0 } else { value };
            let value = round_ties_away(value, self.digits, false);
            let digits = self.digits;
            format!("{value:.digits$}")
        }
    }
}

/// Moves `value` one ulp away from zero when its exact decimal expansion is a
/// tie at `digits` fractional digits, so that the half-to-even rounding of
/// `format!` rounds it up in magnitude.
fn round_ties_away(value: f64, digits: usize, exponential: bool) -> f64 {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return value;
    }

    // Enough digits to hold the exact expansion of any finite f64.
    let exact = if exponential {
        format!("{magnitude:.1100e}")
    } else {
        format!("{magnitude:.1100}")
    };
    let fraction = exact.split_once('.').map_or("", |(_, f)| f);
    let fraction = fraction.split_once('e').map_or(fraction, |(f, _)| f);
    let mut rest = fraction.get(digits..).unwrap_or("").chars();
    let tie = rest.next() == Some('5') && rest.all(|c| c == '0');
    if tie {
        f64::from_bits(magnitude.to_bits() + 1).copysign(value)
    } else {
        value
    }
}

/// Mantissa and signed exponent (`+5`, `-2`) of `value` in exponential form.
fn exponential_parts(value: f64, digits: usize) -> (String, String) {
    let text = format!("{value:.digits$e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent = if exponent.starts_with('-') {
                exponent.to_owned()
            } else {
                format!("+{exponent}")
            };
            (mantissa.to_owned(), exponent)
        }
        None => (text, String::new()),
    }
}

fn superscript(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '-' => '⁻',
            '+' => '⁺',
            other => other,
        })
        .collect()
}

/// Labelled, formatted rows of a stats table.
///
/// Rows are `min`, `max`, `mean`, `median`, `q1`, `q3`, `variance`, `sd`,
/// in that order.
///
/// ```
/// use sos_display::format::{stats_rows, ValueFormat};
/// use sos_stats::descriptive::StatsSummary;
///
/// let stats = StatsSummary::new(&[1.0, 2.0, 3.0, 4.0]);
/// let rows = stats_rows(&stats, &ValueFormat::default());
/// assert_eq!(rows[0], ("min", "1.00".to_owned()));
/// assert_eq!(rows[7].0, "sd");
/// ```
#[must_use]
pub fn stats_rows(stats: &StatsSummary, format: &ValueFormat) -> Vec<(&'static str, String)> {
    [
        ("min", stats.min),
        ("max", stats.max),
        ("mean", stats.mean),
        ("median", stats.median),
        ("q1", stats.q1),
        ("q3", stats.q3),
        ("variance", stats.variance),
        ("sd", stats.sd),
    ]
    .into_iter()
    .map(|(label, value)| (label, format.format(value)))
    .collect()
}
