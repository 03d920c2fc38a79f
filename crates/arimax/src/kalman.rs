//! Kalman filter for the exact Gaussian ARMA likelihood.
//!
//! Runs the prediction-error decomposition on the [`StateSpace`] form with
//! unit innovation variance; the variance itself is concentrated out
//! (`sigma2 = sum(v² / F) / n`), leaving a likelihood in the ARMA
//! coefficients only.
//!
//! **Not part of the public API.**

use std::f64::consts::PI;

use ndarray::{Array1, Axis};

use crate::error::ArimaxError;
use crate::state_space::StateSpace;

/// Everything a full filter pass produces.
#[derive(Clone, Debug)]
pub(crate) struct KalmanOutput {
    /// Concentrated innovation variance.
    pub(crate) sigma2: f64,
    /// One-step prediction errors `v[t] = w[t] - E[w[t] | w[..t]]`.
    pub(crate) innovations: Vec<f64>,
    /// Exact Gaussian log-likelihood at `sigma2`.
    pub(crate) log_likelihood: f64,
    /// Predicted state for the step after the last observation.
    pub(crate) next_state: Vec<f64>,
}

/// Concentrated log-likelihood of `data` under `ss`.
pub(crate) fn concentrated_loglik(ss: &StateSpace, data: &[f64]) -> Result<f64, ArimaxError> {
    filter(ss, data, false).map(|out| out.log_likelihood)
}

/// Full filter pass keeping the innovations.
pub(crate) fn kalman_full(ss: &StateSpace, data: &[f64]) -> Result<KalmanOutput, ArimaxError> {
    filter(ss, data, true)
}

fn filter(ss: &StateSpace, data: &[f64], keep: bool) -> Result<KalmanOutput, ArimaxError> {
    let n = data.len();
    if n == 0 {
        return Err(ArimaxError::fit("no observations left to filter"));
    }

    let t = ss.t();
    let rrt = ss.rrt();
    let mut a = Array1::<f64>::zeros(ss.r());
    let mut p = ss.stationary_covariance()?;

    let mut sum_sq = 0.0;
    let mut sum_log_f = 0.0;
    let mut innovations = Vec::with_capacity(if keep { n } else { 0 });

    for (i, &obs) in data.iter().enumerate() {
        let f = p[[0, 0]];
        if !f.is_finite() || f <= 0.0 {
            return Err(ArimaxError::fit(format!(
                "Kalman filter prediction variance is not positive at t={i}"
            )));
        }
        let v = obs - a[0];

        // K = T P Z / F with Z = e1, i.e. the first column of T P.
        let tp = t.dot(&p);
        let k = tp.column(0).to_owned() / f;

        a = t.dot(&a) + &k * v;
        let kk = k
            .view()
            .insert_axis(Axis(1))
            .dot(&k.view().insert_axis(Axis(0)));
        p = tp.dot(&t.t()) + rrt - kk * f;

        sum_sq += v * v / f;
        sum_log_f += f.ln();
        if keep {
            innovations.push(v);
        }
    }

    let nf = n as f64;
    let sigma2 = sum_sq / nf;
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        return Err(ArimaxError::fit(
            "residual variance is zero or non-finite; the regression errors are degenerate",
        ));
    }
    let log_likelihood = -0.5 * nf * ((2.0 * PI).ln() + 1.0 + sigma2.ln()) - 0.5 * sum_log_f;

    Ok(KalmanOutput {
        sigma2,
        innovations,
        log_likelihood,
        next_state: a.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_noise_matches_closed_form() {
        let data = [0.5, -1.0, 0.25, 2.0, -0.75];
        let out = kalman_full(&StateSpace::new(&[], &[]), &data).unwrap();
        let n = data.len() as f64;
        let sigma2 = data.iter().map(|x| x * x).sum::<f64>() / n;
        assert_abs_diff_eq!(out.sigma2, sigma2, epsilon = 1e-12);
        assert_eq!(out.innovations, data.to_vec());
        let ll = -0.5 * n * ((2.0 * PI).ln() + 1.0 + sigma2.ln());
        assert_abs_diff_eq!(out.log_likelihood, ll, epsilon = 1e-10);
    }

    #[test]
    fn ar1_innovations_are_conditional_residuals() {
        let phi = 0.6;
        let data = [1.0, 0.2, -0.5, 0.9, 0.1];
        let out = kalman_full(&StateSpace::new(&[phi], &[]), &data).unwrap();
        // The first prediction is the mean; afterwards E[w_t | past] = phi w_{t-1}.
        assert_abs_diff_eq!(out.innovations[0], 1.0, epsilon = 1e-12);
        for t in 1..data.len() {
            assert_abs_diff_eq!(
                out.innovations[t],
                data[t] - phi * data[t - 1],
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn ar1_next_state_is_one_step_prediction() {
        let phi = 0.6;
        let data = [1.0, 0.2, -0.5, 0.9];
        let out = kalman_full(&StateSpace::new(&[phi], &[]), &data).unwrap();
        assert_eq!(out.next_state.len(), 1);
        assert_abs_diff_eq!(out.next_state[0], phi * 0.9, epsilon = 1e-12);
    }

    #[test]
    fn ar1_exact_likelihood() {
        let phi: f64 = 0.5;
        let data = [0.3, -0.4, 1.1, 0.7];
        let n = data.len() as f64;
        // Exact AR(1): first term scaled by 1/(1-phi^2).
        let f0 = 1.0 / (1.0 - phi * phi);
        let mut ss = data[0] * data[0] / f0;
        for t in 1..data.len() {
            let v = data[t] - phi * data[t - 1];
            ss += v * v;
        }
        let sigma2 = ss / n;
        let expected = -0.5 * n * ((2.0 * PI).ln() + 1.0 + sigma2.ln()) - 0.5 * f0.ln();
        let ll = concentrated_loglik(&StateSpace::new(&[phi], &[]), &data).unwrap();
        assert_abs_diff_eq!(ll, expected, epsilon = 1e-10);
    }

    #[test]
    fn empty_data_fails() {
        let err = concentrated_loglik(&StateSpace::new(&[0.1], &[]), &[]).unwrap_err();
        assert!(matches!(err, ArimaxError::ModelFit { .. }));
    }

    #[test]
    fn zero_data_is_degenerate() {
        let err = kalman_full(&StateSpace::new(&[], &[]), &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ArimaxError::ModelFit { .. }));
    }
}
