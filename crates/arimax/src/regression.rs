//! Least-squares starting values for the regression part of the model.
//!
//! On the differenced scale the model is `z[t] = beta * x[t] (+ c) + w[t]`.
//! Ordinary least squares gives starting values and step units for the
//! likelihood search, and detects regressors that carry no information.

use crate::error::ArimaxError;

/// Relative spread below which a column is treated as constant.
const DEGENERATE_TOL: f64 = 1e-12;

/// Least-squares solution on the differenced scale.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OlsStart {
    /// Coefficients: `[beta]`, or `[beta, intercept]` when an intercept is fitted.
    pub(crate) coeffs: Vec<f64>,
    /// Step unit per coefficient (one standard deviation of `z` expressed
    /// in coefficient units).
    pub(crate) scale: Vec<f64>,
    /// Residual sum of squares divided by `n`.
    pub(crate) sigma2: f64,
}

fn spread(x: &[f64]) -> (f64, f64) {
    let (lo, hi) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let magnitude = lo.abs().max(hi.abs());
    (hi - lo, magnitude)
}

/// Fits `z = beta * x (+ c)` by least squares.
///
/// # Errors
///
/// Returns [`ArimaxError::ModelFit`] if the regressor has no variation
/// (constant occupancy with an intercept, or an all-zero column after
/// differencing), or if the differenced target is constant.
pub(crate) fn ols_start(z: &[f64], x: &[f64], intercept: bool) -> Result<OlsStart, ArimaxError> {
    debug_assert_eq!(z.len(), x.len());
    let n = z.len() as f64;

    let (x_spread, x_mag) = spread(x);
    let x_degenerate = if intercept {
        x_spread <= DEGENERATE_TOL * (1.0 + x_mag)
    } else {
        x_mag <= DEGENERATE_TOL
    };
    if x_degenerate {
        return Err(ArimaxError::fit(
            "exogenous regressor has no variation after differencing; \
             its coefficient is not identifiable",
        ));
    }
    let (z_spread, z_mag) = spread(z);
    if z_spread <= DEGENERATE_TOL * (1.0 + z_mag) && (intercept || z_mag <= DEGENERATE_TOL) {
        return Err(ArimaxError::fit("differenced target has zero variance"));
    }

    if intercept {
        let x_mean = x.iter().sum::<f64>() / n;
        let z_mean = z.iter().sum::<f64>() / n;
        let sxx: f64 = x.iter().map(|v| (v - x_mean).powi(2)).sum();
        let sxz: f64 = x.iter().zip(z).map(|(a, b)| (a - x_mean) * (b - z_mean)).sum();
        let szz: f64 = z.iter().map(|v| (v - z_mean).powi(2)).sum();
        let beta = sxz / sxx;
        let c = z_mean - beta * x_mean;
        let rss = (szz - beta * sxz).max(0.0);
        let z_sd = (szz / n).sqrt();
        let x_sd = (sxx / n).sqrt();
        Ok(OlsStart {
            coeffs: vec![beta, c],
            scale: vec![z_sd / x_sd, z_sd],
            sigma2: rss / n,
        })
    } else {
        let sxx: f64 = x.iter().map(|v| v * v).sum();
        let sxz: f64 = x.iter().zip(z).map(|(a, b)| a * b).sum();
        let szz: f64 = z.iter().map(|v| v * v).sum();
        let beta = sxz / sxx;
        let rss = (szz - beta * sxz).max(0.0);
        Ok(OlsStart {
            coeffs: vec![beta],
            scale: vec![(szz / sxx).sqrt()],
            sigma2: rss / n,
        })
    }
}

/// Regression errors `w = z - beta * x (- c)` for coefficients laid out
/// as in [`OlsStart::coeffs`].
pub(crate) fn regression_errors(z: &[f64], x: &[f64], coeffs: &[f64]) -> Vec<f64> {
    let beta = coeffs[0];
    let c = coeffs.get(1).copied().unwrap_or(0.0);
    z.iter().zip(x).map(|(zi, xi)| zi - beta * xi - c).collect()
}
