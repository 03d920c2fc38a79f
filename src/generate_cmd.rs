//! Generate command: write synthetic classroom observations to CSV.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use tracing::{info, info_span};

use loadcast_io::{parse_timestamp, write_observations_csv};
use loadcast_synth::generate_classroom;

use crate::cli::GenerateArgs;
use crate::config::LoadcastConfig;
use crate::convert;

/// Run the synthetic data pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Config
    let config = LoadcastConfig::load(args.config.as_deref())?;
    let days = args.days.unwrap_or(config.synth.days);

    // 2. Start timestamp
    let start = match args.start.as_deref() {
        Some(text) => {
            parse_timestamp(text).ok_or_else(|| anyhow!("unrecognised --start timestamp {text:?}"))?
        }
        None => default_start(days)?,
    };

    // 3. Generate and write
    let synth_cfg = convert::build_synth_config(&config.synth, start, args.days, args.seed)?;
    let observations = generate_classroom(&synth_cfg).context("synthetic generation failed")?;
    write_observations_csv(&args.output, &observations)
        .with_context(|| format!("failed to write CSV: {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        rows = observations.len(),
        seed = ?synth_cfg.seed(),
        "synthetic observations written"
    );
    Ok(())
}

/// The current hour minus `days`, so the data ends just before now.
fn default_start(days: usize) -> Result<DateTime<Utc>> {
    let now = Utc::now()
        .duration_trunc(TimeDelta::hours(1))
        .context("failed to truncate current time")?;
    let span = i64::try_from(days)
        .ok()
        .and_then(TimeDelta::try_days)
        .ok_or_else(|| anyhow!("days out of range: {days}"))?;
    now.checked_sub_signed(span)
        .ok_or_else(|| anyhow!("start timestamp out of range for {days} days"))
}
