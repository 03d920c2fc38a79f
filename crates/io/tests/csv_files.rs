//! Integration tests: CSV and JSON files on disk.

use chrono::{TimeDelta, TimeZone, Utc};
use loadcast_io::{
    ForecastRecord, IoError, Observation, read_observations_csv, to_series, write_forecasts_json,
    write_observations_csv,
};

fn day_of_observations() -> Vec<Observation> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..24)
        .map(|h| {
            let occupancy = if (8..=18).contains(&h) { 20 + h as u32 } else { 0 };
            Observation::new(
                start + TimeDelta::hours(h),
                occupancy,
                2.0 + 0.05 * f64::from(occupancy),
            )
        })
        .collect()
}

#[test]
fn observations_survive_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    let written = day_of_observations();

    write_observations_csv(&path, &written).unwrap();
    let read = read_observations_csv(&path).unwrap();

    assert_eq!(read, written);
}

#[test]
fn read_file_builds_hourly_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    write_observations_csv(&path, &day_of_observations()).unwrap();

    let series = to_series(&read_observations_csv(&path).unwrap(), TimeDelta::hours(1)).unwrap();
    assert_eq!(series.len(), 24);
    assert_eq!(series.exogs()[9], 29.0);
    assert_eq!(
        series.next_timestamps(1)[0],
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
    );
}

#[test]
fn wrong_frequency_is_series_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    write_observations_csv(&path, &day_of_observations()).unwrap();

    let observations = read_observations_csv(&path).unwrap();
    let err = to_series(&observations, TimeDelta::minutes(30)).unwrap_err();
    assert!(matches!(err, IoError::Series { .. }), "{err:?}");
}

#[test]
fn forecasts_are_written_as_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forecast.json");
    let records: Vec<ForecastRecord> = (1..=3)
        .map(|step| ForecastRecord {
            step,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, step as u32 - 1, 0, 0).unwrap(),
            mean: 3.0,
            lower: 2.0,
            upper: 4.0,
            confidence_level: 0.95,
        })
        .collect();

    write_forecasts_json(&path, &records).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<ForecastRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, records);
}
