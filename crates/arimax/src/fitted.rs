//! Fitted ARIMAX model and multi-step forecasting.

use crate::diff::{difference, extend};
use crate::error::ArimaxError;
use crate::forecast::{self, Forecast};
use crate::order::ModelOrder;
use crate::params::Coefficients;

/// Values at the end of the fitted sample needed to continue the model.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TerminalState {
    /// Kalman predicted state for the first step past the sample; its
    /// first element is the expected regression error.
    pub(crate) state: Vec<f64>,
    /// Last `d` raw regressor values.
    pub(crate) exogs: Vec<f64>,
    /// Last value of the target at each differencing level.
    pub(crate) target_tails: Vec<f64>,
}

/// An ARIMAX model fitted by [`Forecaster::fit()`](crate::Forecaster::fit).
///
/// Immutable once built; forecasting takes `&self`, so a fitted model can
/// be shared across threads.
///
/// ```mermaid
/// graph LR
///     A["FittedModel"] --> B[".exog_coefficient() / .intercept()"]
///     A --> C[".ar() / .ma() / .sigma2()"]
///     A --> D[".aic() / .bic()"]
///     A --> E[".forecast(&next_exog, level)?"]
/// ```
#[derive(Clone, Debug)]
pub struct FittedModel {
    order: ModelOrder,
    ar: Vec<f64>,
    ma: Vec<f64>,
    exog_coefficient: f64,
    intercept: Option<f64>,
    sigma2: f64,
    log_likelihood: f64,
    residuals: Vec<f64>,
    iterations: u64,
    terminal: TerminalState,
}

impl FittedModel {
    pub(crate) fn new(
        order: ModelOrder,
        coefficients: Coefficients,
        sigma2: f64,
        log_likelihood: f64,
        residuals: Vec<f64>,
        iterations: u64,
        terminal: TerminalState,
    ) -> Self {
        let Coefficients { ar, ma, regression } = coefficients;
        Self {
            order,
            ar,
            ma,
            exog_coefficient: regression[0],
            intercept: regression.get(1).copied(),
            sigma2,
            log_likelihood,
            residuals,
            iterations,
            terminal,
        }
    }

    /// Returns the `(p, d, q)` order.
    pub fn order(&self) -> ModelOrder {
        self.order
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the regressor coefficient (`beta`).
    pub fn exog_coefficient(&self) -> f64 {
        self.exog_coefficient
    }

    /// Returns the intercept; `None` when `d > 0`.
    pub fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    /// Returns the innovation variance.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the maximised exact Gaussian log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Returns the one-step-ahead innovations on the differenced scale.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the number of observations entering the likelihood (`n - d`).
    pub fn nobs(&self) -> usize {
        self.residuals.len()
    }

    /// Returns the number of optimizer iterations (0 for `p = q = 0`).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Number of estimated parameters, including `sigma2`.
    fn n_params(&self) -> usize {
        self.ar.len() + self.ma.len() + 2 + usize::from(self.intercept.is_some())
    }

    /// Akaike Information Criterion, `2k - 2 log L`.
    pub fn aic(&self) -> f64 {
        2.0 * self.n_params() as f64 - 2.0 * self.log_likelihood
    }

    /// Bayesian Information Criterion, `k ln(n) - 2 log L`.
    pub fn bic(&self) -> f64 {
        self.n_params() as f64 * (self.nobs() as f64).ln() - 2.0 * self.log_likelihood
    }

    /// Forecasts one step per entry of `next_exog`.
    ///
    /// # Errors
    ///
    /// - [`ArimaxError::InvalidArgument`] if `next_exog` is empty or holds a
    ///   non-finite value, or `confidence_level` is outside `(0, 1)`
    pub fn forecast(
        &self,
        next_exog: &[f64],
        confidence_level: f64,
    ) -> Result<Vec<Forecast>, ArimaxError> {
        self.forecast_horizon(next_exog, next_exog.len(), confidence_level)
    }

    /// Forecasts `horizon` steps, checking that `next_exog` covers them.
    ///
    /// Means follow the ARMA recursion on the regression errors with future
    /// innovations set to zero, started from the filtered state at the end
    /// of the sample, plus `beta` times the differenced future
    /// regressor, integrated back to the target scale. Interval widths come
    /// from the psi weights of the integrated process and never shrink with
    /// the horizon.
    ///
    /// # Errors
    ///
    /// - [`ArimaxError::Shape`] if `next_exog.len() != horizon`
    /// - [`ArimaxError::InvalidArgument`] if `horizon == 0`, a regressor
    ///   value is non-finite, or `confidence_level` is outside `(0, 1)`
    pub fn forecast_horizon(
        &self,
        next_exog: &[f64],
        horizon: usize,
        confidence_level: f64,
    ) -> Result<Vec<Forecast>, ArimaxError> {
        if horizon == 0 {
            return Err(ArimaxError::argument("horizon", "must be at least 1"));
        }
        if next_exog.len() != horizon {
            return Err(ArimaxError::Shape {
                expected: horizon,
                got: next_exog.len(),
            });
        }
        if let Some(i) = next_exog.iter().position(|v| !v.is_finite()) {
            return Err(ArimaxError::argument(
                "next_exog",
                format!("non-finite value at step {}", i + 1),
            ));
        }
        let z = forecast::critical_value(confidence_level)?;

        let means = self.forecast_means(next_exog);
        let psi = forecast::psi_weights(
            &forecast::integrated_ar(&self.ar, self.order.d()),
            &self.ma,
            horizon,
        );
        let variances = forecast::step_variances(&psi, self.sigma2);

        Ok(means
            .into_iter()
            .zip(variances)
            .map(|(mean, var)| {
                let half = z * var.sqrt();
                Forecast {
                    mean,
                    lower: mean - half,
                    upper: mean + half,
                    confidence_level,
                }
            })
            .collect())
    }

    fn forecast_means(&self, next_exog: &[f64]) -> Vec<f64> {
        let mut exog_path = self.terminal.exogs.clone();
        exog_path.extend_from_slice(next_exog);
        let exog_diff = difference(&exog_path, self.order.d());

        // Future innovations are zero, so the state evolves as a[t+1] = T a[t].
        let mut state = self.terminal.state.clone();
        let mut future = Vec::with_capacity(next_exog.len());
        for dx in exog_diff {
            let w = state[0];
            state = (0..state.len())
                .map(|i| {
                    let phi = self.ar.get(i).copied().unwrap_or(0.0);
                    phi * w + state.get(i + 1).copied().unwrap_or(0.0)
                })
                .collect();
            future.push(self.exog_coefficient * dx + self.intercept.unwrap_or(0.0) + w);
        }
        extend(&future, &self.terminal.target_tails)
    }
}
