use clap::Args;
use serde::Serialize;
use sos_stuve::{
    thermo::Constants,
    wind::{self, WindBarb, WindBarbStyle},
};

use crate::util::Output;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ThetaArg {
    /// Air temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,
    /// Pressure (hPa)
    #[arg(long)]
    pressure: f64,
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct WindBarbArg {
    /// Wind speed (m/s)
    #[arg(long, allow_negative_numbers = true)]
    speed: f64,
    /// Direction the wind blows from, degrees clockwise from north
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    direction: f64,
}

#[derive(Debug, Serialize)]
struct ThetaReport {
    temperature: f64,
    pressure: f64,
    theta: f64,
    axis: f64,
}

#[derive(Debug, Serialize)]
struct WindBarbReport {
    speed: f64,
    knots: f64,
    direction: f64,
    rotation: f64,
    barb: WindBarb,
}

pub(crate) fn run_theta(arg: &ThetaArg) -> anyhow::Result<()> {
    anyhow::ensure!(arg.pressure > 0.0, "Pressure must be positive: {}", arg.pressure);
    let constants = Constants::default();
    let report = ThetaReport {
        temperature: arg.temperature,
        pressure: arg.pressure,
        theta: constants.theta(arg.temperature, arg.pressure),
        axis: constants.pk_axis(arg.pressure),
    };
    Output::save_json(&report, None)
}

pub(crate) fn run_wind_barb(arg: &WindBarbArg) -> anyhow::Result<()> {
    Output::save_json(&wind_barb_report(arg), None)
}

fn wind_barb_report(arg: &WindBarbArg) -> WindBarbReport {
    let constants = Constants::default();
    let style = WindBarbStyle::default();
    WindBarbReport {
        speed: arg.speed,
        knots: constants.ms_to_knots(arg.speed),
        direction: arg.direction,
        rotation: wind::barb_rotation(arg.direction),
        barb: WindBarb::from_speed(arg.speed, &constants, &style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_numbers_are_accepted() {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[clap(flatten)]
            wind: WindBarbArg,
        }

        let cli = Cli::try_parse_from(["x", "--speed", "-2.5", "--direction", "-90"]).unwrap();
        assert!((cli.wind.speed + 2.5).abs() < f64::EPSILON);
        assert!((cli.wind.direction + 90.0).abs() < f64::EPSILON);
        let report = wind_barb_report(&cli.wind);
        assert!(!report.barb.shaft);
        assert!((report.rotation + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_wind_barb_report() {
        let report = wind_barb_report(&WindBarbArg {
            speed: 30.0,
            direction: 90.0,
        });
        // 30 m/s ≈ 58.3 kn
        assert!((report.knots - 58.315_334_7).abs() < 1e-6);
        assert_eq!(report.barb.flags(), 1);
        assert_eq!(report.barb.barbs(), 1);
        assert!(report.rotation.abs() < 1e-12);
    }
}
