//! Error types for loadcast-synth.

/// Errors produced by the synthetic data generator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    /// Returned when a generator setting is out of range.
    #[error("invalid synth config: {reason}")]
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },

    /// Returned when the requested span overflows the timestamp range.
    #[error("timestamp overflow after {hours} hours from {start}")]
    TimeOverflow {
        /// Start of the generated span, RFC 3339.
        start: String,
        /// Hours past the start at which the overflow happened.
        hours: usize,
    },
}
