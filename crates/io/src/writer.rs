//! CSV observation writer and JSON forecast writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::IoError;
use crate::observation::{CsvRow, Observation};

/// One forecast step as written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// 1-based step ahead of the last observation.
    pub step: usize,
    /// Timestamp the step refers to.
    pub timestamp: DateTime<Utc>,
    /// Point forecast, kW.
    pub mean: f64,
    /// Lower interval bound, kW.
    pub lower: f64,
    /// Upper interval bound, kW.
    pub upper: f64,
    /// Confidence level of the interval.
    pub confidence_level: f64,
}

/// Writes observations to a CSV file, timestamps as RFC 3339 UTC.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the parent directory is missing,
/// [`IoError::Io`] for other filesystem failures and [`IoError::Csv`] if a
/// row cannot be written.
pub fn write_observations_csv(path: &Path, observations: &[Observation]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::open(path, e))?;
    write_observations(BufWriter::new(file), observations)?;
    info!(
        path = %path.display(),
        rows = observations.len(),
        "wrote observations"
    );
    Ok(())
}

/// Writes observations as CSV to any sink. See [`write_observations_csv`].
pub fn write_observations<W: Write>(sink: W, observations: &[Observation]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_writer(sink);
    for obs in observations {
        writer.serialize(CsvRow {
            timestamp: obs.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            occupancy: obs.occupancy,
            electricity_draw: obs.electricity_draw,
        })?;
    }
    writer.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Writes forecast records to a JSON file as a pretty-printed array.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] / [`IoError::Io`] for filesystem
/// failures and [`IoError::Json`] if serialisation fails.
pub fn write_forecasts_json(path: &Path, records: &[ForecastRecord]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::open(path, e))?;
    let mut sink = BufWriter::new(file);
    write_forecasts(&mut sink, records)?;
    sink.flush().map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), steps = records.len(), "wrote forecasts");
    Ok(())
}

/// Writes forecast records as pretty JSON followed by a newline.
pub fn write_forecasts<W: Write>(mut sink: W, records: &[ForecastRecord]) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut sink, records)?;
    writeln!(sink).map_err(|e| IoError::Json {
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn observation_csv_layout() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut buf = Vec::new();
        write_observations(&mut buf, &[Observation::new(ts, 31, 5.05)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "timestamp,occupancy,electricity_draw\n2024-01-01T09:00:00Z,31,5.05\n"
        );
    }

    #[test]
    fn forecast_json_fields() {
        let record = ForecastRecord {
            step: 1,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
            mean: 3.0,
            lower: 2.5,
            upper: 3.5,
            confidence_level: 0.95,
        };
        let mut buf = Vec::new();
        write_forecasts(&mut buf, &[record]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let first = &value[0];
        assert_eq!(first["step"], 1);
        assert_eq!(first["timestamp"], "2024-01-08T00:00:00Z");
        assert_eq!(first["mean"], 3.0);
        assert_eq!(first["confidence_level"], 0.95);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let err = write_forecasts_json(Path::new("/nonexistent-loadcast-dir/out.json"), &[])
            .unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
