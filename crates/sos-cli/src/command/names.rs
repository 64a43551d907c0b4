use clap::Args;
use serde::Serialize;
use sos_display::{config::DisplayConfig, names};

use crate::util::Output;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct NamesArg {
    /// Observed property URNs
    urns: Vec<String>,
    /// Names to look up among the URNs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    lookup: Vec<String>,
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct UomArg {
    /// UCUM unit codes
    #[arg(required = true)]
    units: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct NameRow {
    urn: String,
    name: String,
    display: String,
    title: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct LookupRow {
    name: String,
    urn: String,
}

#[derive(Debug, Serialize)]
struct NamesReport {
    names: Vec<NameRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lookups: Vec<LookupRow>,
}

pub(crate) fn run_names(arg: &NamesArg) -> anyhow::Result<()> {
    Output::save_json(&names_report(arg), None)
}

pub(crate) fn run_uom(arg: &UomArg, config: &DisplayConfig) -> anyhow::Result<()> {
    let mut output = Output::stdout();
    output.write_lines(uom_lines(arg, config))
}

fn names_report(arg: &NamesArg) -> NamesReport {
    let names = arg
        .urns
        .iter()
        .map(|urn| {
            let name = names::urn_to_name(urn);
            let display = names::to_display_name(name);
            NameRow {
                urn: urn.clone(),
                name: name.to_owned(),
                title: names::to_title_case(&display),
                display,
            }
        })
        .collect();
    let lookups = arg
        .lookup
        .iter()
        .zip(names::lookup_urns_from_names(&arg.lookup, &arg.urns))
        .map(|(name, urn)| LookupRow {
            name: name.clone(),
            urn,
        })
        .collect();
    NamesReport { names, lookups }
}

fn uom_lines(arg: &UomArg, config: &DisplayConfig) -> Vec<String> {
    arg.units
        .iter()
        .zip(config.uom.display_all(&arg.units))
        .map(|(unit, display)| format!("{unit}\t{display}"))
        .collect()
}
