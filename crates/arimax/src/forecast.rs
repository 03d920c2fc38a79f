//! Point forecasts with Gaussian prediction intervals.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::ArimaxError;

/// Confidence level used when none is given.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// One forecast step: the conditional mean and a symmetric interval.
///
/// `lower <= mean <= upper` always holds; the interval is
/// `mean ± z * sqrt(variance)` with `z` the standard normal quantile at
/// `(1 + confidence_level) / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Forecast {
    /// Conditional mean of the target.
    pub mean: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
    /// Confidence level the bounds were computed for.
    pub confidence_level: f64,
}

impl Forecast {
    /// Returns `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Checks that a confidence level lies strictly inside `(0, 1)`.
pub(crate) fn validate_confidence(level: f64) -> Result<(), ArimaxError> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(ArimaxError::argument(
            "confidence_level",
            format!("must lie in (0, 1), got {level}"),
        ))
    }
}

/// Two-sided standard normal critical value for `level`.
pub(crate) fn critical_value(level: f64) -> Result<f64, ArimaxError> {
    validate_confidence(level)?;
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| ArimaxError::argument("confidence_level", e.to_string()))?;
    Ok(normal.inverse_cdf(0.5 + level / 2.0))
}

/// Expands `phi(L) (1 - L)^d` into the AR coefficients of the integrated
/// process.
pub(crate) fn integrated_ar(ar: &[f64], d: usize) -> Vec<f64> {
    let mut poly = Vec::with_capacity(ar.len() + d + 1);
    poly.push(1.0);
    poly.extend(ar.iter().map(|c| -c));
    for _ in 0..d {
        let mut next = vec![0.0; poly.len() + 1];
        for (i, &c) in poly.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c;
        }
        poly = next;
    }
    poly[1..].iter().map(|c| -c).collect()
}

/// First `h` psi weights of the MA(inf) representation, `psi[0] = 1`.
pub(crate) fn psi_weights(ar: &[f64], ma: &[f64], h: usize) -> Vec<f64> {
    let mut psi = Vec::with_capacity(h);
    for j in 0..h {
        if j == 0 {
            psi.push(1.0);
            continue;
        }
        let mut value = ma.get(j - 1).copied().unwrap_or(0.0);
        for (i, &phi) in ar.iter().enumerate().take(j) {
            value += phi * psi[j - 1 - i];
        }
        psi.push(value);
    }
    psi
}

/// Forecast error variance for steps `1..=h`: `sigma2 * cumsum(psi^2)`.
pub(crate) fn step_variances(psi: &[f64], sigma2: f64) -> Vec<f64> {
    let mut acc = 0.0;
    psi.iter()
        .map(|w| {
            acc += w * w;
            sigma2 * acc
        })
        .collect()
}
