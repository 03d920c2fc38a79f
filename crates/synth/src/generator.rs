//! Hourly classroom occupancy and electricity draw.

use chrono::{Datelike, TimeDelta, Timelike};
use loadcast_io::Observation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use crate::config::SynthConfig;
use crate::error::SynthError;

/// Builds a seeded or OS-sourced RNG.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Head count for one hour.
///
/// Weekdays: 10-49 people 08-18h, 0-9 people 06-07h and 19-22h.
/// Weekends: 0-4 people 10-16h. Empty otherwise.
fn occupancy<R: Rng>(weekday: bool, hour: u32, rng: &mut R) -> u32 {
    match (weekday, hour) {
        (true, 8..=18) => rng.random_range(10..50),
        (true, 6..=7 | 19..=22) => rng.random_range(0..10),
        (false, 10..=16) => rng.random_range(0..5),
        _ => 0,
    }
}

/// Generates `days * 24` hourly observations for a classroom building.
///
/// Draw is `base + per_person * occupancy`, plus the peak bump for hours
/// 9 through 16, plus `N(0, noise_sd)`, clipped below at the floor.
/// Occupancy for every hour is drawn before any noise, so a fixed seed
/// always reproduces the same rows.
///
/// # Errors
///
/// Returns [`SynthError::InvalidConfig`] if the configuration fails
/// validation and [`SynthError::TimeOverflow`] if the span runs past the
/// representable time range.
pub fn generate_classroom(config: &SynthConfig) -> Result<Vec<Observation>, SynthError> {
    config.validate()?;
    let n = config.days() * 24;
    let mut rng = make_rng(config.seed());

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let timestamp = i64::try_from(i)
            .ok()
            .and_then(|h| config.start().checked_add_signed(TimeDelta::hours(h)))
            .ok_or_else(|| SynthError::TimeOverflow {
                start: config.start().to_rfc3339(),
                hours: i,
            })?;
        let weekday = timestamp.weekday().num_days_from_monday() < 5;
        let count = occupancy(weekday, timestamp.hour(), &mut rng);
        rows.push(Observation::new(timestamp, count, 0.0));
    }

    let noise = Normal::new(0.0, config.noise_sd()).map_err(|e| SynthError::InvalidConfig {
        reason: format!("noise distribution: {e}"),
    })?;
    for row in &mut rows {
        let mut draw = config.base_load() + config.per_person_load() * f64::from(row.occupancy);
        if (9..=16).contains(&row.timestamp.hour()) {
            draw += config.peak_bump();
        }
        draw += noise.sample(&mut rng);
        row.electricity_draw = draw.max(config.floor());
    }

    debug!(seed = ?config.seed(), "synthetic rng seeded");
    info!(
        rows = rows.len(),
        start = %config.start(),
        days = config.days(),
        "generated classroom observations"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn week() -> SynthConfig {
        // 2024-01-01 is a Monday.
        SynthConfig::new(7, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).with_seed(42)
    }

    #[test]
    fn produces_24_rows_per_day() {
        let rows = generate_classroom(&week()).unwrap();
        assert_eq!(rows.len(), 168);
        assert_eq!(rows[0].timestamp, week().start());
        for w in rows.windows(2) {
            assert_eq!(w[1].timestamp - w[0].timestamp, TimeDelta::hours(1));
        }
    }

    #[test]
    fn occupancy_follows_schedule() {
        let rows = generate_classroom(&week()).unwrap();
        for row in &rows {
            let weekday = row.timestamp.weekday().num_days_from_monday() < 5;
            let hour = row.timestamp.hour();
            let occ = row.occupancy;
            match (weekday, hour) {
                (true, 8..=18) => assert!((10..50).contains(&occ), "{row:?}"),
                (true, 6..=7 | 19..=22) => assert!(occ < 10, "{row:?}"),
                (false, 10..=16) => assert!(occ < 5, "{row:?}"),
                _ => assert_eq!(occ, 0, "{row:?}"),
            }
        }
    }

    #[test]
    fn draws_respect_floor() {
        let config = week().with_noise_sd(5.0);
        let rows = generate_classroom(&config).unwrap();
        assert!(rows.iter().all(|r| r.electricity_draw >= 0.5));
        assert!(rows.iter().any(|r| r.electricity_draw == 0.5));
    }

    #[test]
    fn noiseless_draw_is_exact() {
        let rows = generate_classroom(&week().with_noise_sd(0.0)).unwrap();
        for row in &rows {
            let bump = if (9..=16).contains(&row.timestamp.hour()) { 1.5 } else { 0.0 };
            let expected = 2.0 + 0.05 * f64::from(row.occupancy) + bump;
            assert!((row.electricity_draw - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn same_seed_same_rows() {
        let a = generate_classroom(&week()).unwrap();
        let b = generate_classroom(&week()).unwrap();
        assert_eq!(a, b);
        let c = generate_classroom(&week().with_seed(7)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn invalid_config_fails() {
        let err = generate_classroom(&week().with_floor(10.0)).unwrap_err();
        assert!(matches!(err, SynthError::InvalidConfig { .. }));
    }
}
