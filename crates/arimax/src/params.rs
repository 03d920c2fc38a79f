//! Parameter packing and the stationarity/invertibility transform.
//!
//! The optimizer works on an unconstrained vector laid out as
//! `[ar (p) | ma (q) | regression (k)]`. AR and MA blocks pass through the
//! partial-autocorrelation transform (Jones 1980, Monahan 1984) so every
//! candidate is stationary and invertible. Regression coefficients are
//! stored as offsets from their least-squares starting values, measured in
//! units of `scale`, which keeps all simplex directions comparable.

/// Maps unconstrained values to the coefficients of a stable polynomial
/// `1 - c_1 z - ... - c_k z^k`.
///
/// `r_k = tanh(alpha_k)` gives partial autocorrelations in (-1, 1); the
/// Levinson-Durbin recursion turns them into polynomial coefficients.
pub(crate) fn pacf_to_coeffs(alpha: &[f64]) -> Vec<f64> {
    let k = alpha.len();
    let mut coeffs = vec![0.0; k];
    let mut prev = vec![0.0; k];
    for (m, a) in alpha.iter().enumerate() {
        let r = a.tanh();
        prev[..m].copy_from_slice(&coeffs[..m]);
        coeffs[m] = r;
        for j in 0..m {
            coeffs[j] = prev[j] - r * prev[m - 1 - j];
        }
    }
    coeffs
}

/// AR coefficients `phi` for `y_t = sum(phi_i y_{t-i}) + ...`.
pub(crate) fn ar_from_unconstrained(alpha: &[f64]) -> Vec<f64> {
    pacf_to_coeffs(alpha)
}

/// MA coefficients `theta` for `... + e_t + sum(theta_j e_{t-j})`.
///
/// Negating the stable-polynomial coefficients makes `1 + theta(z)` equal
/// to `1 - c(z)`, whose roots lie outside the unit circle.
pub(crate) fn ma_from_unconstrained(beta: &[f64]) -> Vec<f64> {
    pacf_to_coeffs(beta).into_iter().map(|c| -c).collect()
}

/// Layout of the optimizer's parameter vector.
#[derive(Clone, Debug)]
pub(crate) struct ParamLayout {
    p: usize,
    q: usize,
    /// Least-squares starting values for the regression coefficients.
    start: Vec<f64>,
    /// Per-coefficient step unit.
    scale: Vec<f64>,
}

/// Constrained model coefficients decoded from an optimizer vector.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Coefficients {
    pub(crate) ar: Vec<f64>,
    pub(crate) ma: Vec<f64>,
    pub(crate) regression: Vec<f64>,
}

impl ParamLayout {
    pub(crate) fn new(p: usize, q: usize, start: Vec<f64>, scale: Vec<f64>) -> Self {
        debug_assert_eq!(start.len(), scale.len());
        Self { p, q, start, scale }
    }

    /// Total number of free parameters.
    pub(crate) fn dim(&self) -> usize {
        self.p + self.q + self.start.len()
    }

    /// Number of ARMA parameters (`p + q`).
    pub(crate) fn arma_dim(&self) -> usize {
        self.p + self.q
    }

    pub(crate) fn decode(&self, params: &[f64]) -> Coefficients {
        let (alpha, rest) = params.split_at(self.p);
        let (beta, offsets) = rest.split_at(self.q);
        let regression = self
            .start
            .iter()
            .zip(&self.scale)
            .zip(offsets)
            .map(|((s, u), o)| s + u * o)
            .collect();
        Coefficients {
            ar: ar_from_unconstrained(alpha),
            ma: ma_from_unconstrained(beta),
            regression,
        }
    }
}
