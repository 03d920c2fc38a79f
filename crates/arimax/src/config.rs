//! Optimizer settings for model fitting.

use crate::error::ArimaxError;

/// Settings for the maximum-likelihood optimizer used by
/// [`Forecaster::fit()`](crate::Forecaster::fit).
///
/// # Example
///
/// ```
/// use loadcast_arimax::FitConfig;
///
/// let config = FitConfig::default().with_max_iters(2_000).with_tolerance(1e-9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    /// Iteration cap for Nelder-Mead. Reaching it is a fit failure.
    max_iters: u64,
    /// Convergence threshold on the spread of simplex costs.
    tolerance: f64,
}

impl Default for FitConfig {
    /// `max_iters = 5000`, `tolerance = 1e-8`.
    fn default() -> Self {
        Self {
            max_iters: 5_000,
            tolerance: 1e-8,
        }
    }
}

impl FitConfig {
    /// Sets the iteration cap.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the iteration cap.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArimaxError::InvalidArgument`] if `max_iters` is zero or
    /// `tolerance` is non-finite or non-positive.
    pub fn validate(&self) -> Result<(), ArimaxError> {
        if self.max_iters == 0 {
            return Err(ArimaxError::argument("max_iters", "must be at least 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ArimaxError::argument(
                "tolerance",
                format!("must be finite and positive, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}
