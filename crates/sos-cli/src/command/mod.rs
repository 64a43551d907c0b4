use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{
    names::{NamesArg, UomArg},
    relative_time::RelativeTimeArg,
    stats::{HistogramArg, StatsArg},
    stuve::{ThetaArg, WindBarbArg},
};
use crate::util;

mod names;
mod relative_time;
mod stats;
mod stuve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Display settings JSON file (unit display strings, value format)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summary statistics of one column of a table
    Stats(#[clap(flatten)] StatsArg),
    /// Histogram of one column of a table
    Histogram(#[clap(flatten)] HistogramArg),
    /// Resolve a relative time token such as `lastweek`
    RelativeTime(#[clap(flatten)] RelativeTimeArg),
    /// Names, display names and titles of observed property URNs
    Names(#[clap(flatten)] NamesArg),
    /// Display strings of units of measure
    Uom(#[clap(flatten)] UomArg),
    /// Potential temperature of an air parcel
    Theta(#[clap(flatten)] ThetaArg),
    /// Wind barb marks for a wind speed
    WindBarb(#[clap(flatten)] WindBarbArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let config = util::read_display_config(args.config.as_deref())?;
    match args.mode {
        Mode::Stats(arg) => stats::run_stats(&arg, &config)?,
        Mode::Histogram(arg) => stats::run_histogram(&arg)?,
        Mode::RelativeTime(arg) => relative_time::run(&arg)?,
        Mode::Names(arg) => names::run_names(&arg)?,
        Mode::Uom(arg) => names::run_uom(&arg, &config)?,
        Mode::Theta(arg) => stuve::run_theta(&arg)?,
        Mode::WindBarb(arg) => stuve::run_wind_barb(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = CommandArgs::try_parse_from(["sos-utils", "uom", "Cel", "--config", "d.json"])
            .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("d.json")));
        assert!(matches!(args.mode, Mode::Uom(_)));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(CommandArgs::try_parse_from(["sos-utils"]).is_err());
    }
}
