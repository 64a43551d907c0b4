//! Thermodynamics behind the Stüve diagram.
//!
//! A Stüve diagram plots temperature against `P^k` (pressure raised to
//! `R/Cp`), which makes dry adiabats straight lines through
//! `(absolute zero, 0 hPa)`. Temperatures are in °C and pressures in hPa.

use serde::{Deserialize, Serialize};

/// Physical constants used by the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Reference pressure (hPa).
    pub p0: f64,
    /// Offset from °C to K, as a temperature in °C.
    pub k0: f64,
    /// `R / Cp` for dry air.
    pub k: f64,
    /// Knots per metre per second.
    pub m2kn: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            p0: 1000.0,
            k0: -273.15,
            k: 0.28571,
            m2kn: 1.943_844_49,
        }
    }
}

impl Constants {
    /// Potential temperature of air at temperature `t` and pressure `p`.
    ///
    /// ```
    /// # use sos_stuve::thermo::Constants;
    /// let c = Constants::default();
    /// assert!((c.theta(15.0, 1000.0) - 15.0).abs() < 1e-12);
    /// assert!(c.theta(-20.0, 500.0) > 30.0);
    /// ```
    #[must_use]
    pub fn theta(&self, t: f64, p: f64) -> f64 {
        (t - self.k0) * (self.p0 / p).powf(self.k) + self.k0
    }

    /// Pressure at which air of potential temperature `theta` has temperature `t`.
    #[must_use]
    pub fn pressure(&self, t: f64, theta: f64) -> f64 {
        self.p0 / ((theta - self.k0) / (t - self.k0)).powf(1.0 / self.k)
    }

    /// Pressure axis transform: `-p^k`, so that pressure decreases upwards.
    #[must_use]
    pub fn pk_axis(&self, p: f64) -> f64 {
        -p.powf(self.k)
    }

    /// Inverse of [`Constants::pk_axis`].
    #[must_use]
    pub fn pk_axis_inverse(&self, y: f64) -> f64 {
        (-y).powf(1.0 / self.k)
    }

    /// Converts a speed in m/s to knots.
    #[must_use]
    pub fn ms_to_knots(&self, speed: f64) -> f64 {
        speed * self.m2kn
    }
}

/// A point of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StuvePoint {
    /// Temperature (°C).
    pub t: f64,
    /// Pressure (hPa).
    pub p: f64,
}

/// A dry adiabat gridline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DryAdiabat {
    pub from: StuvePoint,
    pub to: StuvePoint,
}

/// Dry adiabat gridlines, one per 10 °C of surface temperature from −270 °C
/// to 100 °C.
///
/// Each line runs from absolute zero at 0 hPa to its surface temperature at
/// 1000 hPa.
#[must_use]
pub fn dry_adiabats(constants: &Constants) -> Vec<DryAdiabat> {
    (-27..=10)
        .map(|i| DryAdiabat {
            from: StuvePoint {
                t: constants.k0,
                p: 0.0,
            },
            to: StuvePoint {
                t: f64::from(i) * 10.0,
                p: constants.p0,
            },
        })
        .collect()
}

/// A tick of the pressure axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Pressure (hPa).
    pub value: f64,
    /// Label, empty for unlabelled ticks.
    pub label: String,
}

/// Pressure ticks every 50 hPa from 100 hPa up to 1000 hPa, labelled every
/// 100 hPa.
#[must_use]
pub fn pressure_ticks() -> Vec<AxisTick> {
    const MIN: u32 = 100;
    const MAX: u32 = 1050;
    const STEP: u32 = 50;

    (MIN..MAX)
        .step_by(STEP as usize)
        .map(|p| AxisTick {
            value: f64::from(p),
            label: if p % (2 * STEP) == 0 {
                p.to_string()
            } else {
                String::new()
            },
        })
        .collect()
}
