//! ARIMA order (unfitted model shape).

use std::fmt;

/// The `(p, d, q)` order of a regression-with-ARIMA-errors model.
///
/// - `p`: autoregressive terms on the differenced regression errors
/// - `d`: number of differencing passes applied to target and regressor
/// - `q`: moving-average terms
///
/// The order is fixed configuration; it is never inferred from data.
///
/// # Example
///
/// ```
/// use loadcast_arimax::ModelOrder;
///
/// let order = ModelOrder::new(2, 1, 2);
/// assert_eq!(order.min_observations(), 6);
/// assert_eq!(order, ModelOrder::default());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelOrder {
    p: usize,
    d: usize,
    q: usize,
}

impl ModelOrder {
    /// Creates an ARIMA(p, d, q) order.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing order (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Minimum series length accepted by [`Forecaster::fit()`](crate::Forecaster::fit):
    /// `p + d + q + 1`.
    pub fn min_observations(&self) -> usize {
        self.p + self.d + self.q + 1
    }

    /// Whether the model carries an intercept. Only undifferenced models
    /// (`d = 0`) estimate one; differencing removes any constant level.
    pub fn has_intercept(&self) -> bool {
        self.d == 0
    }
}

impl Default for ModelOrder {
    /// ARIMA(2, 1, 2).
    fn default() -> Self {
        Self::new(2, 1, 2)
    }
}

impl From<(usize, usize, usize)> for ModelOrder {
    fn from((p, d, q): (usize, usize, usize)) -> Self {
        Self::new(p, d, q)
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_accessors() {
        let order = ModelOrder::new(3, 1, 2);
        assert_eq!(order.p(), 3);
        assert_eq!(order.d(), 1);
        assert_eq!(order.q(), 2);
    }

    #[test]
    fn default_is_212() {
        assert_eq!(ModelOrder::default(), ModelOrder::new(2, 1, 2));
    }

    #[test]
    fn min_observations() {
        assert_eq!(ModelOrder::new(0, 0, 0).min_observations(), 1);
        assert_eq!(ModelOrder::new(2, 1, 2).min_observations(), 6);
    }

    #[test]
    fn intercept_only_without_differencing() {
        assert!(ModelOrder::new(1, 0, 0).has_intercept());
        assert!(!ModelOrder::new(1, 1, 0).has_intercept());
    }

    #[test]
    fn from_tuple_and_display() {
        let order: ModelOrder = (1, 2, 3).into();
        assert_eq!(order.to_string(), "(1, 2, 3)");
    }

    #[test]
    fn order_is_copy() {
        let a = ModelOrder::new(1, 1, 1);
        let b = a;
        assert_eq!(a, b);
    }
}
