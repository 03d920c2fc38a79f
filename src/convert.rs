//! Pure conversions from TOML sections and CLI strings into crate types.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, TimeDelta, Utc};

use loadcast_arimax::{FitConfig, Forecast, ModelOrder};
use loadcast_io::ForecastRecord;
use loadcast_synth::SynthConfig;

use crate::config::{FitToml, ModelToml, SynthToml};

/// Parse a `p,d,q` order string.
pub fn parse_order(s: &str) -> Result<ModelOrder> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [p, d, q] = parts.as_slice() else {
        bail!("order must be `p,d,q`, got {s:?}");
    };
    let parse = |name: &str, v: &str| -> Result<usize> {
        v.parse()
            .with_context(|| format!("order {name} must be a non-negative integer, got {v:?}"))
    };
    Ok(ModelOrder::new(
        parse("p", *p)?,
        parse("d", *d)?,
        parse("q", *q)?,
    ))
}

pub fn build_order(model: &ModelToml) -> ModelOrder {
    let [p, d, q] = model.order;
    ModelOrder::new(p, d, q)
}

/// Sampling interval of the input series.
pub fn build_frequency(model: &ModelToml) -> Result<TimeDelta> {
    if model.frequency_minutes <= 0 {
        bail!(
            "frequency_minutes must be positive, got {}",
            model.frequency_minutes
        );
    }
    TimeDelta::try_minutes(model.frequency_minutes)
        .with_context(|| format!("frequency_minutes out of range: {}", model.frequency_minutes))
}

pub fn build_fit_config(fit: &FitToml) -> Result<FitConfig> {
    let config = FitConfig::default()
        .with_max_iters(fit.max_iters)
        .with_tolerance(fit.tolerance);
    config.validate().context("invalid [fit] section")?;
    Ok(config)
}

/// Build a [`SynthConfig`]; `seed` and `days` from the CLI win over the file.
pub fn build_synth_config(
    synth: &SynthToml,
    start: DateTime<Utc>,
    days: Option<usize>,
    seed: Option<u64>,
) -> Result<SynthConfig> {
    let mut config = SynthConfig::new(days.unwrap_or(synth.days), start)
        .with_base_load(synth.base_load)
        .with_per_person_load(synth.per_person_load)
        .with_peak_bump(synth.peak_bump)
        .with_noise_sd(synth.noise_sd)
        .with_floor(synth.floor);
    if let Some(s) = seed.or(synth.seed) {
        config = config.with_seed(s);
    }
    config.validate().context("invalid [synth] section")?;
    Ok(config)
}

/// Expand the CLI occupancy list to `horizon` values.
///
/// A single value is repeated; otherwise the list is passed through and the
/// forecaster checks it against the horizon.
pub fn expand_occupancy(occupancy: &[f64], horizon: Option<usize>) -> (Vec<f64>, usize) {
    match (occupancy, horizon) {
        ([single], Some(h)) => (vec![*single; h], h),
        (values, Some(h)) => (values.to_vec(), h),
        (values, None) => (values.to_vec(), values.len()),
    }
}

/// Pair forecasts with their timestamps as 1-based JSON records.
pub fn forecast_records(timestamps: &[DateTime<Utc>], forecasts: &[Forecast]) -> Vec<ForecastRecord> {
    timestamps
        .iter()
        .zip(forecasts)
        .enumerate()
        .map(|(i, (&timestamp, f))| ForecastRecord {
            step: i + 1,
            timestamp,
            mean: f.mean,
            lower: f.lower,
            upper: f.upper,
            confidence_level: f.confidence_level,
        })
        .collect()
}
