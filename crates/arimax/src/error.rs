//! Error types for the loadcast-arimax crate.

/// Error type for all fallible operations in the loadcast-arimax crate.
///
/// Covers order/length validation at fit time, estimation failures, and
/// argument checks at forecast time. Every variant carries enough context
/// (lengths, parameter names, the failing condition) to act on directly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArimaxError {
    /// Returned when the differencing order leaves no observations.
    #[error("invalid order: d={d} must be smaller than the series length {len}")]
    InvalidOrder {
        /// Requested differencing order.
        d: usize,
        /// Number of observations in the series.
        len: usize,
    },

    /// Returned when the series is too short for the requested order.
    #[error("insufficient history: order needs at least {required} observations, got {available}")]
    InsufficientHistory {
        /// Minimum number of observations (`p + d + q + 1`).
        required: usize,
        /// Number of observations supplied.
        available: usize,
    },

    /// Returned when estimation fails: non-convergence, a non-identifiable
    /// coefficient, or a degenerate likelihood.
    #[error("model fit failed: {reason}")]
    ModelFit {
        /// What went wrong.
        reason: String,
    },

    /// Returned when the future exogenous values do not match the horizon.
    #[error("shape mismatch: expected {expected} future exogenous values, got {got}")]
    Shape {
        /// Requested horizon.
        expected: usize,
        /// Number of exogenous values supplied.
        got: usize,
    },

    /// Returned when a scalar argument is out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ArimaxError {
    pub(crate) fn fit(reason: impl Into<String>) -> Self {
        Self::ModelFit {
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
