//! # loadcast-io
//!
//! Reads metered observations from CSV, turns them into an
//! [`AlignedSeries`](loadcast_series::AlignedSeries), and writes forecast
//! records to JSON.
//!
//! ```mermaid
//! graph LR
//!     A["observations.csv"] -->|"read_observations_csv()?"| B["Vec&lt;Observation&gt;"]
//!     B -->|"to_series(&obs, freq)?"| C["AlignedSeries"]
//!     D["Vec&lt;ForecastRecord&gt;"] -->|"write_forecasts_json()?"| E["forecast.json"]
//!     B -->|"write_observations_csv()?"| A
//! ```
//!
//! Timestamps are read as RFC 3339 or as naive `YYYY-MM-DD HH:MM:SS`
//! values, which are taken to be UTC. Written timestamps are always
//! RFC 3339 UTC.

mod error;
mod observation;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use observation::{Observation, parse_timestamp, to_series};
pub use reader::{read_observations, read_observations_csv};
pub use writer::{
    ForecastRecord, write_forecasts, write_forecasts_json, write_observations,
    write_observations_csv,
};
