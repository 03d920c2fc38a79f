//! Validated fixed-frequency series and read-only views into it.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::SeriesError;
use crate::point::TimeSeriesPoint;

/// A chronologically ordered, gap-free series of (timestamp, target, exog)
/// points sampled at a constant frequency.
///
/// Construction validates every row; afterwards the series is immutable.
/// Refitting on new data means building a new `AlignedSeries`.
///
/// # Example
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use loadcast_series::{AlignedSeries, TimeSeriesPoint};
///
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let rows: Vec<TimeSeriesPoint> = (0..3)
///     .map(|i| TimeSeriesPoint::new(t0 + TimeDelta::hours(i), 2.0, 0.0))
///     .collect();
/// let series = AlignedSeries::new(rows, TimeDelta::hours(1)).unwrap();
/// assert_eq!(series.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedSeries {
    points: Vec<TimeSeriesPoint>,
    targets: Vec<f64>,
    exogs: Vec<f64>,
    frequency: TimeDelta,
}

impl AlignedSeries {
    /// Validates `rows` against `frequency` and builds the series.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::Empty`] | `rows` is empty |
    /// | [`SeriesError::InvalidFrequency`] | `frequency <= 0` |
    /// | [`SeriesError::NonFinite`] | a target or exog value is NaN/inf |
    /// | [`SeriesError::NotIncreasing`] | a timestamp does not move forward |
    /// | [`SeriesError::Irregular`] | a gap differs from `frequency` |
    ///
    /// The first offending row is reported; rows are never resampled.
    pub fn new<I>(rows: I, frequency: TimeDelta) -> Result<Self, SeriesError>
    where
        I: IntoIterator,
        I::Item: Into<TimeSeriesPoint>,
    {
        if frequency <= TimeDelta::zero() {
            return Err(SeriesError::InvalidFrequency {
                seconds: frequency.num_seconds(),
            });
        }

        let points: Vec<TimeSeriesPoint> = rows.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (index, point) in points.iter().enumerate() {
            if !point.target.is_finite() {
                return Err(SeriesError::NonFinite {
                    index,
                    field: "target",
                });
            }
            if !point.exog.is_finite() {
                return Err(SeriesError::NonFinite {
                    index,
                    field: "exog",
                });
            }
            if index == 0 {
                continue;
            }
            let previous = points[index - 1].timestamp;
            let gap = point.timestamp - previous;
            if gap <= TimeDelta::zero() {
                return Err(SeriesError::NotIncreasing {
                    index,
                    previous,
                    got: point.timestamp,
                });
            }
            if gap != frequency {
                return Err(SeriesError::Irregular {
                    index,
                    expected: frequency,
                    got: gap,
                });
            }
        }

        let targets = points.iter().map(|p| p.target).collect();
        let exogs = points.iter().map(|p| p.exog).collect();

        Ok(Self {
            points,
            targets,
            exogs,
            frequency,
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a validated series; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Declared sampling interval.
    pub fn frequency(&self) -> TimeDelta {
        self.frequency
    }

    /// All points in chronological order.
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Target values in chronological order.
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Exogenous values in chronological order.
    pub fn exogs(&self) -> &[f64] {
        &self.exogs
    }

    /// Timestamps in chronological order.
    pub fn timestamps(&self) -> impl ExactSizeIterator<Item = DateTime<Utc>> + '_ {
        self.points.iter().map(|p| p.timestamp)
    }

    /// First point.
    pub fn first(&self) -> &TimeSeriesPoint {
        &self.points[0]
    }

    /// Most recent point.
    pub fn last(&self) -> &TimeSeriesPoint {
        &self.points[self.points.len() - 1]
    }

    /// Timestamps of the `horizon` slots following the last point.
    pub fn next_timestamps(&self, horizon: usize) -> Vec<DateTime<Utc>> {
        let last = self.last().timestamp;
        (1..=horizon)
            .map(|step| last + self.frequency * step as i32)
            .collect()
    }

    /// Read-only view of the whole series.
    pub fn view(&self) -> SeriesView<'_> {
        SeriesView {
            points: &self.points,
            targets: &self.targets,
            exogs: &self.exogs,
            frequency: self.frequency,
        }
    }

    /// Read-only view of the last `n` points.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InsufficientHistory`] if `n > self.len()`.
    pub fn tail(&self, n: usize) -> Result<SeriesView<'_>, SeriesError> {
        let len = self.len();
        if n > len {
            return Err(SeriesError::InsufficientHistory {
                requested: n,
                available: len,
            });
        }
        let start = len - n;
        Ok(SeriesView {
            points: &self.points[start..],
            targets: &self.targets[start..],
            exogs: &self.exogs[start..],
            frequency: self.frequency,
        })
    }
}

/// Borrowed, read-only window over an [`AlignedSeries`].
///
/// Inherits the parent's alignment guarantees: contiguous, ordered and
/// sampled at [`SeriesView::frequency`].
#[derive(Clone, Copy, Debug)]
pub struct SeriesView<'a> {
    points: &'a [TimeSeriesPoint],
    targets: &'a [f64],
    exogs: &'a [f64],
    frequency: TimeDelta,
}

impl<'a> SeriesView<'a> {
    /// Number of points in the view.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` for a zero-length view (`tail(0)`).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampling interval of the parent series.
    pub fn frequency(&self) -> TimeDelta {
        self.frequency
    }

    /// Points in the view.
    pub fn points(&self) -> &'a [TimeSeriesPoint] {
        self.points
    }

    /// Target values in the view.
    pub fn targets(&self) -> &'a [f64] {
        self.targets
    }

    /// Exogenous values in the view.
    pub fn exogs(&self) -> &'a [f64] {
        self.exogs
    }
}
