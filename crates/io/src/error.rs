//! Error types for loadcast-io.

use std::path::{Path, PathBuf};

use loadcast_series::SeriesError;

/// Error type for all fallible operations in the loadcast-io crate.
///
/// Covers missing files, CSV and JSON format failures, unparseable
/// timestamps, accumulated row validation problems, and series
/// construction failures when observations are turned into an
/// [`AlignedSeries`](loadcast_series::AlignedSeries).
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader or writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from JSON serialisation.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when a timestamp cannot be parsed.
    #[error("invalid time at row {row}: {reason}")]
    InvalidTime {
        /// 1-based data row (header excluded).
        row: usize,
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when observations do not form a valid fixed-frequency series.
    #[error("invalid series: {source}")]
    Series {
        /// The series validation failure.
        #[from]
        source: SeriesError,
    },

    /// Wraps a filesystem error other than a missing file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl IoError {
    /// Maps an open/create failure, singling out missing files.
    pub(crate) fn open(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: unequal lengths");
    }

    #[test]
    fn display_invalid_time() {
        let err = IoError::InvalidTime {
            row: 4,
            reason: "unrecognised timestamp 'noon'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid time at row 4: unrecognised timestamp 'noon'"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "negative electricity_draw at row 3: -1; non-finite electricity_draw at row 9"
                .to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): negative electricity_draw at row 3: -1; non-finite electricity_draw at row 9"
        );
    }

    #[test]
    fn from_series_error() {
        let err: IoError = SeriesError::Empty.into();
        assert!(matches!(err, IoError::Series { .. }));
        assert!(err.to_string().starts_with("invalid series: "));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err: IoError = json_err.into();
        assert!(matches!(err, IoError::Json { .. }));
    }

    #[test]
    fn open_maps_not_found() {
        let path = Path::new("/tmp/x.csv");
        let err = IoError::open(path, std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(err, IoError::FileNotFound { .. }));
        let err = IoError::open(
            path,
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IoError::Io { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
