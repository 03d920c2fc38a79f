//! State-space form of the ARMA error process.
//!
//! ```text
//! a[t+1] = T a[t] + R e[t]
//! w[t]   = a[t][0]
//! ```
//!
//! `T` is the companion matrix with the AR coefficients in its first
//! column, `R = [1, theta_1, ..., theta_q, 0, ...]`, and `e[t]` is white
//! noise. The state dimension is `r = max(p, q + 1)`.

use ndarray::{Array1, Array2, Axis};

use crate::error::ArimaxError;

/// Doubling steps for the stationary covariance; each step doubles the
/// number of summed terms, so 64 covers any stationary model.
const MAX_DOUBLINGS: usize = 64;

/// State-space matrices for an ARMA(p, q) process.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    r: usize,
    t: Array2<f64>,
    rrt: Array2<f64>,
}

impl StateSpace {
    pub(crate) fn new(ar: &[f64], ma: &[f64]) -> Self {
        let r = ar.len().max(ma.len() + 1);

        let mut t = Array2::zeros((r, r));
        for (i, &phi) in ar.iter().enumerate() {
            t[[i, 0]] = phi;
        }
        for i in 1..r {
            t[[i - 1, i]] = 1.0;
        }

        let mut r_vec = Array1::zeros(r);
        r_vec[0] = 1.0;
        for (j, &theta) in ma.iter().enumerate() {
            r_vec[j + 1] = theta;
        }
        let rrt = r_vec
            .view()
            .insert_axis(Axis(1))
            .dot(&r_vec.view().insert_axis(Axis(0)));

        Self { r, t, rrt }
    }

    /// State dimension.
    pub(crate) fn r(&self) -> usize {
        self.r
    }

    /// Transition matrix `T`.
    pub(crate) fn t(&self) -> &Array2<f64> {
        &self.t
    }

    /// `R Rᵀ`, the state noise covariance for unit innovation variance.
    pub(crate) fn rrt(&self) -> &Array2<f64> {
        &self.rrt
    }

    /// Unconditional state covariance `P = T P Tᵀ + R Rᵀ` (unit variance),
    /// used to initialise the Kalman filter.
    ///
    /// Solved by the doubling iteration `P += A P Aᵀ`, `A = A²`, which sums
    /// `T^k R Rᵀ (T^k)ᵀ` over `k < 2^n` after `n` steps.
    pub(crate) fn stationary_covariance(&self) -> Result<Array2<f64>, ArimaxError> {
        let mut p = self.rrt.clone();
        let mut a = self.t.clone();
        for _ in 0..MAX_DOUBLINGS {
            let increment = a.dot(&p).dot(&a.t());
            let change = increment.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            p += &increment;
            if !change.is_finite() {
                break;
            }
            let size = p.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            if change <= 1e-14 * (1.0 + size) {
                return Ok(p);
            }
            a = a.dot(&a);
        }
        Err(ArimaxError::fit(
            "stationary state covariance did not converge (AR part too close to a unit root)",
        ))
    }
}
