//! Observation rows and their conversion into an aligned series.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use loadcast_series::{AlignedSeries, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IoError;

/// Naive formats tried after RFC 3339, all interpreted as UTC.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One metered interval: how many people were present and how much
/// electricity the facility drew (kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Start of the interval, UTC.
    pub timestamp: DateTime<Utc>,
    /// Head count during the interval.
    pub occupancy: u32,
    /// Mean electricity draw over the interval, kW.
    pub electricity_draw: f64,
}

impl Observation {
    /// Creates a new observation.
    pub fn new(timestamp: DateTime<Utc>, occupancy: u32, electricity_draw: f64) -> Self {
        Self {
            timestamp,
            occupancy,
            electricity_draw,
        }
    }
}

impl From<&Observation> for TimeSeriesPoint {
    fn from(obs: &Observation) -> Self {
        TimeSeriesPoint::new(obs.timestamp, obs.electricity_draw, f64::from(obs.occupancy))
    }
}

/// CSV row layout: `timestamp,occupancy,electricity_draw`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CsvRow {
    pub(crate) timestamp: String,
    pub(crate) occupancy: u32,
    pub(crate) electricity_draw: f64,
}

/// Parses an RFC 3339 timestamp, or a naive `YYYY-MM-DD HH:MM:SS[.fff]`
/// (space or `T` separated) taken as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Builds an [`AlignedSeries`] with electricity draw as the target and
/// occupancy as the exogenous regressor.
///
/// # Errors
///
/// Returns [`IoError::Series`] if the observations are empty, out of
/// order, or not spaced exactly `frequency` apart.
pub fn to_series(
    observations: &[Observation],
    frequency: TimeDelta,
) -> Result<AlignedSeries, IoError> {
    let series = AlignedSeries::new(observations.iter(), frequency)?;
    debug!(
        n = series.len(),
        frequency_s = frequency.num_seconds(),
        "built aligned series"
    );
    Ok(series)
}
