use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use sos_time::{RelativeTime, TimeInterval, iso, parse_relative_time};

use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct RelativeTimeArg {
    /// Relative time token, e.g. `today`, `lastweek`, `rollingmonth`
    #[arg(default_value = "today")]
    token: String,
    /// Reference instant (ISO-8601, UTC) instead of the current time
    #[arg(long, value_parser = parse_now)]
    now: Option<DateTime<Utc>>,
    /// Fail on unknown tokens instead of falling back to `today`
    #[arg(long)]
    strict: bool,
}

fn parse_now(text: &str) -> Result<DateTime<Utc>, iso::ParseIsoError> {
    iso::parse_iso(text)
}

#[derive(Debug, Serialize)]
struct ResolvedTime {
    token: String,
    /// Canonical form of the token, absent when it fell back to `today`
    relative: Option<RelativeTime>,
    start: String,
    end: String,
}

pub(crate) fn run(arg: &RelativeTimeArg) -> anyhow::Result<()> {
    let resolved = resolve(arg)?;
    Output::save_json(&resolved, None)
}

fn resolve(arg: &RelativeTimeArg) -> anyhow::Result<ResolvedTime> {
    let now = arg.now.unwrap_or_else(Utc::now);
    let relative = if arg.strict {
        Some(
            arg.token
                .parse::<RelativeTime>()
                .with_context(|| format!("Failed to resolve {:?}", arg.token))?,
        )
    } else {
        arg.token.parse::<RelativeTime>().ok()
    };
    let interval: TimeInterval = match relative {
        Some(relative) => relative.resolve(now),
        None => parse_relative_time(&arg.token, now),
    };
    let (start, end) = interval.to_iso();
    Ok(ResolvedTime {
        token: arg.token.clone(),
        relative,
        start,
        end,
    })
}
