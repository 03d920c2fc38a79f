//! Forecasting integration tests for loadcast-arimax.

use chrono::{Datelike, TimeDelta, TimeZone, Timelike, Utc};
use loadcast_arimax::{ArimaxError, DEFAULT_CONFIDENCE_LEVEL, FittedModel, Forecaster, ModelOrder};
use loadcast_series::AlignedSeries;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, Uniform};

/// One week of hourly facility load driven by a weekday occupancy profile.
fn facility_week(seed: u64) -> AlignedSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let busy = Uniform::new(10.0_f64, 50.0).unwrap();
    let quiet = Uniform::new(0.0_f64, 10.0).unwrap();
    let noise = Normal::new(0.0_f64, 0.2).unwrap();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let rows: Vec<_> = (0..168)
        .map(|i| {
            let ts = start + TimeDelta::hours(i);
            let weekday = ts.weekday().num_days_from_monday() < 5;
            let hour = ts.hour();
            let occupancy: f64 = match hour {
                8..=18 if weekday => busy.sample(&mut rng).floor(),
                6..=7 | 19..=22 if weekday => quiet.sample(&mut rng).floor(),
                _ => 0.0,
            };
            let bump = if weekday && (9..=16).contains(&hour) { 1.5 } else { 0.0 };
            let draw = (2.0 + 0.05 * occupancy + bump + noise.sample(&mut rng)).max(0.5);
            (ts, draw, occupancy)
        })
        .collect();
    AlignedSeries::new(rows, TimeDelta::hours(1)).unwrap()
}

fn fitted() -> FittedModel {
    Forecaster::new(ModelOrder::new(2, 1, 2))
        .fit(&facility_week(42))
        .unwrap()
}

#[test]
fn next_hour_forecast_is_plausible() {
    let model = fitted();
    let out = model.forecast(&[25.0], DEFAULT_CONFIDENCE_LEVEL).unwrap();
    assert_eq!(out.len(), 1);
    let f = out[0];
    assert!(f.mean > 2.0 && f.mean < 6.0, "mean = {}", f.mean);
    assert!(f.lower < f.mean && f.mean < f.upper);
    assert_eq!(f.confidence_level, 0.95);
}

#[test]
fn intervals_widen_with_horizon() {
    let model = fitted();
    let out = model.forecast(&[0.0; 6], 0.95).unwrap();
    for w in out.windows(2) {
        assert!(w[1].width() >= w[0].width() - 1e-12);
    }
    for f in &out {
        assert!(f.mean.is_finite());
        assert!(f.lower <= f.mean && f.mean <= f.upper);
    }
}

#[test]
fn higher_occupancy_raises_forecast() {
    let model = fitted();
    assert!(model.exog_coefficient() > 0.0);
    let low = model.forecast(&[0.0], 0.95).unwrap()[0];
    let high = model.forecast(&[40.0], 0.95).unwrap()[0];
    assert!(high.mean > low.mean);
    assert!((high.width() - low.width()).abs() < 1e-12);
}

#[test]
fn horizon_must_match_exog() {
    let err = fitted().forecast_horizon(&[25.0], 3, 0.95).unwrap_err();
    assert_eq!(err, ArimaxError::Shape { expected: 3, got: 1 });
}

#[test]
fn confidence_outside_unit_interval_is_rejected() {
    let model = fitted();
    for level in [0.0, 1.0, 1.2] {
        assert!(matches!(
            model.forecast(&[25.0], level),
            Err(ArimaxError::InvalidArgument { name: "confidence_level", .. })
        ));
    }
}

#[test]
fn fitted_model_is_shareable_across_threads() {
    fn assert_impl<T: Send + Sync>() {}
    assert_impl::<FittedModel>();

    let model = fitted();
    let expected = model.forecast(&[25.0], 0.95).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| model.forecast(&[25.0], 0.95).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
