//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering every row-level problem
//! into a single [`IoError::Validation`], plus the observation checks run
//! by the CSV reader.

use crate::error::IoError;
use crate::observation::Observation;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Push zero or more messages, then call [`finish`](Self::finish) to get
/// `Ok(())` when everything is valid or one `Err` summarising every
/// violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector. `details` joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that every electricity draw is finite and non-negative.
///
/// Rows are reported 1-based, header excluded, one message per offending row.
pub(crate) fn validate_draws(observations: &[Observation]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, obs) in observations.iter().enumerate() {
        let draw = obs.electricity_draw;
        if !draw.is_finite() {
            c.push(format!("non-finite electricity_draw at row {}", i + 1));
        } else if draw < 0.0 {
            c.push(format!("negative electricity_draw at row {}: {draw}", i + 1));
        }
    }

    c
}
