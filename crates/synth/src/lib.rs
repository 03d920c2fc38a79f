//! # loadcast-synth
//!
//! Synthetic hourly data for a classroom building: Wi-Fi style head counts
//! and the electricity draw they drive. Used to exercise the forecaster end
//! to end without metered data.
//!
//! ```mermaid
//! graph LR
//!     A["SynthConfig::new(days, start)"] -->|".with_seed(42)"| A
//!     A -->|"generate_classroom(&config)?"| B["Vec&lt;Observation&gt;"]
//! ```

mod config;
mod error;
mod generator;

pub use config::SynthConfig;
pub use error::SynthError;
pub use generator::generate_classroom;
