//! Maximum-likelihood fitting pipeline.
//!
//! Wraps `argmin`'s Nelder-Mead to minimise the negative concentrated
//! log-likelihood over the packed parameter vector described in
//! [`crate::params`].
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;
use tracing::{debug, info};

use crate::config::FitConfig;
use crate::diff::{Differenced, difference};
use crate::error::ArimaxError;
use crate::fitted::{FittedModel, TerminalState};
use crate::kalman;
use crate::order::ModelOrder;
use crate::params::{Coefficients, ParamLayout};
use crate::regression::{ols_start, regression_errors};
use crate::state_space::StateSpace;

/// Initial simplex edge for the PACF-transformed ARMA parameters.
const ARMA_STEP: f64 = 0.5;
/// Initial simplex edge for regression offsets, in OLS scale units.
const REGRESSION_STEP: f64 = 0.1;

/// Fits a regression-with-ARIMA-errors model.
///
/// 1. Validate order against the series length
/// 2. Difference target and regressor `d` times
/// 3. Least-squares start for the regression coefficients
/// 4. Nelder-Mead on the concentrated Kalman likelihood
/// 5. Final Kalman pass for `sigma2`, innovations and log-likelihood
pub(crate) fn fit_arimax(
    order: ModelOrder,
    config: &FitConfig,
    targets: &[f64],
    exogs: &[f64],
) -> Result<FittedModel, ArimaxError> {
    // 1. Validate
    config.validate()?;
    let n = targets.len();
    if exogs.len() != n {
        return Err(ArimaxError::Shape {
            expected: n,
            got: exogs.len(),
        });
    }
    if order.d() >= n {
        return Err(ArimaxError::InvalidOrder { d: order.d(), len: n });
    }
    let required = order.min_observations();
    if n < required {
        return Err(ArimaxError::InsufficientHistory {
            required,
            available: n,
        });
    }

    // 2. Difference
    let target_diff = Differenced::new(targets, order.d());
    let z = target_diff.values();
    let x = difference(exogs, order.d());

    // 3. Regression start
    let ols = ols_start(z, &x, order.has_intercept())?;
    debug!(coeffs = ?ols.coeffs, sigma2 = ols.sigma2, "least-squares start");

    // 4. Optimise (white-noise errors reduce to least squares)
    let (coefficients, iterations) = if order.p() == 0 && order.q() == 0 {
        let coefficients = Coefficients {
            ar: Vec::new(),
            ma: Vec::new(),
            regression: ols.coeffs,
        };
        (coefficients, 0)
    } else {
        let layout = ParamLayout::new(order.p(), order.q(), ols.coeffs, ols.scale);
        optimise(&layout, config, z, &x)?
    };

    // 5. Final pass
    let w = regression_errors(z, &x, &coefficients.regression);
    let ss = StateSpace::new(&coefficients.ar, &coefficients.ma);
    let output = kalman::kalman_full(&ss, &w)?;
    if !output.log_likelihood.is_finite() {
        return Err(ArimaxError::fit("log-likelihood is not finite at the optimum"));
    }

    let terminal = TerminalState {
        state: output.next_state,
        exogs: exogs[n - order.d()..].to_vec(),
        target_tails: target_diff.tails().to_vec(),
    };

    let model = FittedModel::new(
        order,
        coefficients,
        output.sigma2,
        output.log_likelihood,
        output.innovations,
        iterations,
        terminal,
    );
    info!(
        order = %order,
        exog_coef = model.exog_coefficient(),
        sigma2 = model.sigma2(),
        log_likelihood = model.log_likelihood(),
        iterations,
        "ARIMAX fit complete"
    );
    Ok(model)
}

fn optimise(
    layout: &ParamLayout,
    config: &FitConfig,
    z: &[f64],
    x: &[f64],
) -> Result<(Coefficients, u64), ArimaxError> {
    let dim = layout.dim();
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(vec![0.0; dim]);
    for i in 0..dim {
        let mut vertex = vec![0.0; dim];
        vertex[i] = if i < layout.arma_dim() {
            ARMA_STEP
        } else {
            REGRESSION_STEP
        };
        simplex.push(vertex);
    }

    let cost = ArimaxCost { layout, z, x };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(config.tolerance())
        .map_err(|e| ArimaxError::fit(format!("invalid optimizer setup: {e}")))?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(config.max_iters()))
        .run()
        .map_err(|e| ArimaxError::fit(format!("optimizer error: {e}")))?;

    let state = result.state();
    match state.get_termination_status() {
        TerminationStatus::Terminated(
            TerminationReason::SolverConverged | TerminationReason::TargetCostReached,
        ) => {}
        TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
            return Err(ArimaxError::fit(format!(
                "optimizer did not converge within {} iterations",
                config.max_iters()
            )));
        }
        other => {
            return Err(ArimaxError::fit(format!(
                "optimizer stopped without converging: {other:?}"
            )));
        }
    }

    let best = state
        .get_best_param()
        .ok_or_else(|| ArimaxError::fit("optimizer returned no parameters"))?;
    let best_cost = state.get_best_cost();
    if !best_cost.is_finite() || best_cost == f64::MAX {
        return Err(ArimaxError::fit(
            "no admissible parameters: likelihood could not be evaluated",
        ));
    }
    debug!(
        iterations = state.get_iter(),
        neg_log_likelihood = best_cost,
        "nelder-mead converged"
    );
    Ok((layout.decode(best), state.get_iter()))
}

/// Cost function for argmin: negative concentrated log-likelihood of the
/// regression errors implied by a parameter vector.
struct ArimaxCost<'a> {
    layout: &'a ParamLayout,
    z: &'a [f64],
    x: &'a [f64],
}

impl CostFunction for ArimaxCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let coeffs = self.layout.decode(params);
        let w = regression_errors(self.z, self.x, &coeffs.regression);
        let ss = StateSpace::new(&coeffs.ar, &coeffs.ma);
        match kalman::concentrated_loglik(&ss, &w) {
            Ok(loglik) if loglik.is_finite() => Ok(-loglik),
            _ => Ok(f64::MAX),
        }
    }
}
