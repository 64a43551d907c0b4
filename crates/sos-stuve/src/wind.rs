//! Wind barbs.
//!
//! A barb is a shaft pointing into the wind with marks worth 50 kn (flags),
//! 10 kn (full barbs) and 5 kn (half barbs), drawn from the tip of the shaft
//! inwards. Dimensions follow the NCAR wind barb conventions, in pixels.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::thermo::Constants;

/// Most marks a single barb carries; faster winds are drawn at this length.
pub const MAX_MARKS: usize = 32;

/// Dimensions and speed steps of a wind barb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindBarbStyle {
    /// Speeds (kn) worth one flag, one full barb and one half barb.
    pub speeds: [f64; 3],
    pub shaft_len: f64,
    pub flag_height: f64,
    pub flag_base: f64,
    pub flag_space: f64,
    pub barb_space: f64,
    /// Angle between the shaft and a barb (degrees).
    pub barb_angle: f64,
}

impl Default for WindBarbStyle {
    fn default() -> Self {
        Self {
            speeds: [50.0, 10.0, 5.0],
            shaft_len: 30.0,
            flag_height: 10.0,
            flag_base: 6.0,
            flag_space: 6.0,
            barb_space: 3.0,
            barb_angle: 28.0,
        }
    }
}

impl WindBarbStyle {
    /// Length of a barb worth `speed`: a third of the shaft for a full barb,
    /// a sixth for anything else.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn barb_length(&self, speed: f64) -> f64 {
        if speed == self.speeds[1] {
            self.shaft_len / 3.0
        } else {
            self.shaft_len / 6.0
        }
    }
}

/// One mark on the shaft, positioned by its distance from the shaft's base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BarbMark {
    Flag { at: f64, height: f64, base: f64 },
    Barb { at: f64, length: f64, angle: f64 },
}

/// The marks making up the barb for one wind speed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindBarb {
    /// Whether a shaft is drawn; calm winds below the smallest step have none.
    pub shaft: bool,
    pub marks: Vec<BarbMark>,
}

impl WindBarb {
    /// Decomposes a speed in knots into flags and barbs.
    ///
    /// At most [`MAX_MARKS`] marks are produced. Speed steps of the style that
    /// are not positive and finite are skipped.
    ///
    /// ```
    /// use sos_stuve::wind::{WindBarb, WindBarbStyle};
    ///
    /// let barb = WindBarb::from_knots(65.0, &WindBarbStyle::default());
    /// assert!(barb.shaft);
    /// assert_eq!(barb.flags(), 1);
    /// assert_eq!(barb.barbs(), 2);
    /// ```
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_knots(speed: f64, style: &WindBarbStyle) -> Self {
        let mut remaining = speed;
        let mut end = style.shaft_len;
        let mut barb = Self {
            shaft: speed >= style.speeds[2],
            marks: vec![],
        };

        for step in style.speeds {
            if !step.is_finite() || step <= 0.0 {
                continue;
            }
            let room = MAX_MARKS - barb.marks.len();
            let n = ((remaining / step).floor().max(0.0) as usize).min(room);
            for _ in 0..n {
                if remaining >= style.speeds[0] {
                    barb.marks.push(BarbMark::Flag {
                        at: end,
                        height: style.flag_height,
                        base: style.flag_base,
                    });
                    end -= style.flag_space;
                } else {
                    barb.marks.push(BarbMark::Barb {
                        at: end,
                        length: style.barb_length(step),
                        angle: style.barb_angle,
                    });
                    end -= style.barb_space;
                }
                remaining -= step;
            }
        }

        barb
    }

    /// Decomposes a speed in m/s.
    #[must_use]
    pub fn from_speed(speed_ms: f64, constants: &Constants, style: &WindBarbStyle) -> Self {
        Self::from_knots(constants.ms_to_knots(speed_ms), style)
    }

    /// Number of flags.
    #[must_use]
    pub fn flags(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, BarbMark::Flag { .. }))
            .count()
    }

    /// Number of full and half barbs.
    #[must_use]
    pub fn barbs(&self) -> usize {
        self.marks.len() - self.flags()
    }
}

/// Rotation (radians) that turns a barb drawn along +x to point into a wind
/// blowing from `direction` degrees clockwise from north.
#[must_use]
pub fn barb_rotation(direction: f64) -> f64 {
    -(PI / 2.0) + direction / 180.0 * PI
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> WindBarbStyle {
        WindBarbStyle::default()
    }

    #[test]
    fn test_calm_has_no_shaft() {
        let barb = WindBarb::from_knots(4.9, &style());
        assert_eq!(barb, WindBarb::default());
    }

    #[test]
    fn test_half_barb() {
        let barb = WindBarb::from_knots(5.0, &style());
        assert!(barb.shaft);
        assert_eq!(
            barb.marks,
            vec![BarbMark::Barb {
                at: 30.0,
                length: 5.0,
                angle: 28.0
            }]
        );
    }

    #[test]
    fn test_sixty_five_knots() {
        let barb = WindBarb::from_knots(65.0, &style());
        assert_eq!(
            barb.marks,
            vec![
                BarbMark::Flag {
                    at: 30.0,
                    height: 10.0,
                    base: 6.0
                },
                BarbMark::Barb {
                    at: 24.0,
                    length: 10.0,
                    angle: 28.0
                },
                BarbMark::Barb {
                    at: 21.0,
                    length: 5.0,
                    angle: 28.0
                },
            ]
        );
    }

    #[test]
    fn test_two_flags() {
        let barb = WindBarb::from_knots(104.0, &style());
        assert_eq!(barb.flags(), 2);
        assert_eq!(barb.barbs(), 0);
    }

    #[test]
    fn test_from_speed_converts_to_knots() {
        // 10 m/s ≈ 19.4 kn: one full barb and one half barb.
        let barb = WindBarb::from_speed(10.0, &Constants::default(), &style());
        assert_eq!(barb.flags(), 0);
        assert_eq!(barb.barbs(), 2);
    }

    #[test]
    fn test_negative_speed_is_calm() {
        assert_eq!(WindBarb::from_knots(-3.0, &style()), WindBarb::default());
    }

    #[test]
    fn test_mark_count_is_capped() {
        let barb = WindBarb::from_knots(1e15, &style());
        assert_eq!(barb.marks.len(), MAX_MARKS);
        assert_eq!(barb.flags(), MAX_MARKS);

        let barb = WindBarb::from_knots(f64::INFINITY, &style());
        assert_eq!(barb.marks.len(), MAX_MARKS);
        assert_eq!(WindBarb::from_knots(f64::NAN, &style()), WindBarb::default());
    }

    #[test]
    fn test_unusable_steps_are_skipped() {
        let zero_step = WindBarbStyle {
            speeds: [50.0, 0.0, 5.0],
            ..style()
        };
        let barb = WindBarb::from_knots(65.0, &zero_step);
        assert_eq!(barb.flags(), 1);
        assert_eq!(barb.barbs(), 3);

        let no_steps = WindBarbStyle {
            speeds: [f64::NAN, -10.0, 0.0],
            ..style()
        };
        assert!(WindBarb::from_knots(65.0, &no_steps).marks.is_empty());
    }

    #[test]
    fn test_barb_rotation() {
        assert!((barb_rotation(0.0) + PI / 2.0).abs() < 1e-12);
        assert!(barb_rotation(90.0).abs() < 1e-12);
        assert!((barb_rotation(270.0) - PI).abs() < 1e-12);
    }
}
