use std::path::{Path, PathBuf};

use clap::Args;
use sos_display::{config::DisplayConfig, format};
use sos_stats::{descriptive::StatsSummary, histogram::Histogram, quartiles::QuartileRule};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct SampleArg {
    /// Input table, whitespace or comma separated (stdin when omitted or `-`)
    input: Option<PathBuf>,
    /// Zero-based column holding the values
    #[arg(long, default_value_t = 0)]
    column: usize,
    /// Fail on rows that are short or not numeric instead of reading them as NaN
    #[arg(long)]
    strict: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl SampleArg {
    fn read(&self) -> anyhow::Result<Vec<f64>> {
        let text = util::read_input(self.input.as_deref())?;
        let rows = util::parse_table(&text);
        let values = util::column_sample(&rows, self.column, self.strict)?;
        tracing::debug!(
            input = %self.input.as_deref().unwrap_or(Path::new("-")).display(),
            column = self.column,
            count = values.len(),
            "read sample"
        );
        Ok(values)
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct StatsArg {
    #[clap(flatten)]
    sample: SampleArg,
    /// Quartile rule
    #[arg(long, default_value = "tukey")]
    rule: QuartileRule,
    /// Print a formatted table instead of JSON
    #[arg(long)]
    table: bool,
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    #[clap(flatten)]
    sample: SampleArg,
}

pub(crate) fn run_stats(arg: &StatsArg, config: &DisplayConfig) -> anyhow::Result<()> {
    let values = arg.sample.read()?;
    let stats = StatsSummary::with_rule(&values, arg.rule);
    if stats.is_degenerate() {
        tracing::warn!(count = stats.count, "too few values for statistics");
    }

    let output_path = arg.sample.output.clone();
    if arg.table {
        let mut output = Output::from_output_path(output_path)?;
        output.write_lines(stats_table(&stats, config))
    } else {
        Output::save_json(&stats, output_path)
    }
}

pub(crate) fn run_histogram(arg: &HistogramArg) -> anyhow::Result<()> {
    let values = arg.sample.read()?;
    let histogram = Histogram::new(&values);
    Output::save_json(&histogram, arg.sample.output.clone())
}

fn stats_table(stats: &StatsSummary, config: &DisplayConfig) -> Vec<String> {
    let rows = format::stats_rows(stats, &config.values);
    let width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    let mut lines = vec![format!("{:<8} {:>width$}", "count", stats.count)];
    lines.extend(
        rows.into_iter()
            .map(|(label, value)| format!("{label:<8} {value:>width$}")),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_table() {
        let stats = StatsSummary::new(&[1.0, 2.0, 3.0, 4.0]);
        let lines = stats_table(&stats, &DisplayConfig::default());
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "count       4");
        assert_eq!(lines[1], "min      1.00");
        assert!(lines[8].starts_with("sd "));
    }

    #[test]
    fn test_rule_parses_from_command_line() {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[clap(flatten)]
            stats: StatsArg,
        }

        let cli = Cli::try_parse_from(["x", "data.txt", "--column", "1", "--rule", "legacy"]).unwrap();
        assert_eq!(cli.stats.rule, QuartileRule::Legacy);
        assert_eq!(cli.stats.sample.column, 1);
        assert_eq!(cli.stats.sample.input, Some(PathBuf::from("data.txt")));

        let cli = Cli::try_parse_from(["x"]).unwrap();
        assert_eq!(cli.stats.rule, QuartileRule::Tukey);
        assert!(!cli.stats.table);
    }
}
