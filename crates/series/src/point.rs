//! A single aligned observation.

use chrono::{DateTime, Utc};

/// One observation: a timestamp, the target (electricity draw) and the
/// exogenous regressor (occupancy) measured over the same interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSeriesPoint {
    /// Start of the sampling interval.
    pub timestamp: DateTime<Utc>,
    /// Target value (kW).
    pub target: f64,
    /// Exogenous value observed at the same timestep.
    pub exog: f64,
}

impl TimeSeriesPoint {
    /// Creates a new point.
    pub fn new(timestamp: DateTime<Utc>, target: f64, exog: f64) -> Self {
        Self {
            timestamp,
            target,
            exog,
        }
    }
}

impl From<(DateTime<Utc>, f64, f64)> for TimeSeriesPoint {
    fn from((timestamp, target, exog): (DateTime<Utc>, f64, f64)) -> Self {
        Self::new(timestamp, target, exog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn from_tuple() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let p: TimeSeriesPoint = (ts, 3.5, 20.0).into();
        assert_eq!(p, TimeSeriesPoint::new(ts, 3.5, 20.0));
    }
}
