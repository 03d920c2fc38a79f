//! CSV observation reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::observation::{CsvRow, Observation, parse_timestamp};
use crate::validate::validate_draws;

/// Reads observations from a CSV file with header
/// `timestamp,occupancy,electricity_draw`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Csv`] | malformed row, missing column, non-integer occupancy |
/// | [`IoError::InvalidTime`] | a timestamp is neither RFC 3339 nor a supported naive form |
/// | [`IoError::Validation`] | one or more draws are negative or non-finite |
pub fn read_observations_csv(path: &Path) -> Result<Vec<Observation>, IoError> {
    let file = File::open(path).map_err(|e| IoError::open(path, e))?;
    debug!(path = %path.display(), "reading observations");
    let observations = read_observations(BufReader::new(file))?;
    info!(
        path = %path.display(),
        rows = observations.len(),
        "loaded observations"
    );
    Ok(observations)
}

/// Reads observations from any CSV source. See [`read_observations_csv`].
pub fn read_observations<R: Read>(source: R) -> Result<Vec<Observation>, IoError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let mut observations = Vec::new();
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let timestamp = parse_timestamp(&row.timestamp).ok_or_else(|| IoError::InvalidTime {
            row: i + 1,
            reason: format!("unrecognised timestamp '{}'", row.timestamp),
        })?;
        observations.push(Observation::new(
            timestamp,
            row.occupancy,
            row.electricity_draw,
        ));
    }

    validate_draws(&observations).finish()?;
    Ok(observations)
}
