//! # loadcast-series
//!
//! Immutable, validated container for a fixed-frequency series of
//! (timestamp, target, exogenous) points.
//!
//! ```mermaid
//! graph LR
//!     A["raw rows + frequency"] -->|"AlignedSeries::new()?"| B["AlignedSeries"]
//!     B -->|".tail(n)?"| C["SeriesView"]
//!     B -->|".targets() / .exogs()"| D["&[f64]"]
//! ```
//!
//! Validation rejects empty input, non-positive frequencies, non-finite
//! values, non-increasing timestamps and any gap that differs from the
//! declared frequency. Nothing is resampled or filled.

mod error;
mod point;
mod series;

pub use error::SeriesError;
pub use point::TimeSeriesPoint;
pub use series::{AlignedSeries, SeriesView};
