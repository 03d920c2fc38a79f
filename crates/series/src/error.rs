//! Error types for the loadcast-series crate.

use chrono::{DateTime, TimeDelta, Utc};

/// Error type for all fallible operations in the loadcast-series crate.
///
/// Covers construction-time validation of raw rows (ordering, spacing,
/// finiteness) and out-of-range views into a validated series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when no rows are supplied.
    #[error("series is empty")]
    Empty,

    /// Returned when the declared sampling interval is zero or negative.
    #[error("invalid frequency: {seconds}s (must be positive)")]
    InvalidFrequency {
        /// The declared interval in whole seconds.
        seconds: i64,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamp at index {index} ({got}) is not after the previous one ({previous})")]
    NotIncreasing {
        /// Index of the offending row.
        index: usize,
        /// Timestamp of the previous row.
        previous: DateTime<Utc>,
        /// Timestamp of the offending row.
        got: DateTime<Utc>,
    },

    /// Returned when the gap before a row differs from the declared frequency.
    #[error(
        "irregular series: gap before index {index} is {}s, expected {}s",
        got.num_seconds(),
        expected.num_seconds()
    )]
    Irregular {
        /// Index of the first row whose preceding gap is wrong.
        index: usize,
        /// Declared sampling interval.
        expected: TimeDelta,
        /// Observed gap.
        got: TimeDelta,
    },

    /// Returned when a target or exogenous value is NaN or infinite.
    #[error("non-finite {field} value at index {index}")]
    NonFinite {
        /// Index of the offending row.
        index: usize,
        /// Which column was non-finite (`"target"` or `"exog"`).
        field: &'static str,
    },

    /// Returned when a view asks for more points than the series holds.
    #[error("insufficient history: requested {requested} points, series has {available}")]
    InsufficientHistory {
        /// Number of points requested.
        requested: usize,
        /// Number of points available.
        available: usize,
    },
}
