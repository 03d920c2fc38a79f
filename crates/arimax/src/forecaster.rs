//! Unfitted model: order plus optimizer settings.

use loadcast_series::{AlignedSeries, SeriesView};
use tracing::info_span;

use crate::config::FitConfig;
use crate::error::ArimaxError;
use crate::fitted::FittedModel;
use crate::optimizer;
use crate::order::ModelOrder;

/// An unfitted regression-with-ARIMA-errors model.
///
/// Call [`Forecaster::fit()`] to estimate parameters from an
/// [`AlignedSeries`]. Fitting is deterministic: the same series and
/// settings always produce the same [`FittedModel`].
///
/// # Example
///
/// ```ignore
/// let model = Forecaster::new(ModelOrder::new(2, 1, 2)).fit(&series)?;
/// let next = model.forecast(&[25.0], 0.95)?;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Forecaster {
    order: ModelOrder,
    config: FitConfig,
}

impl Forecaster {
    /// Creates a forecaster with default optimizer settings.
    pub fn new(order: ModelOrder) -> Self {
        Self {
            order,
            config: FitConfig::default(),
        }
    }

    /// Replaces the optimizer settings.
    pub fn with_config(mut self, config: FitConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the model order.
    pub fn order(&self) -> ModelOrder {
        self.order
    }

    /// Returns the optimizer settings.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Fits the model to a whole series.
    ///
    /// # Errors
    ///
    /// - [`ArimaxError::InvalidOrder`] if `d >= series.len()`
    /// - [`ArimaxError::InsufficientHistory`] if the series is shorter than
    ///   `p + d + q + 1`
    /// - [`ArimaxError::ModelFit`] if the regressor is not identifiable,
    ///   the optimizer does not converge, or the likelihood degenerates
    /// - [`ArimaxError::InvalidArgument`] if the optimizer settings are invalid
    pub fn fit(&self, series: &AlignedSeries) -> Result<FittedModel, ArimaxError> {
        self.fit_view(series.view())
    }

    /// Fits the model to a borrowed window, e.g. from
    /// [`AlignedSeries::tail()`].
    pub fn fit_view(&self, view: SeriesView<'_>) -> Result<FittedModel, ArimaxError> {
        let _span = info_span!("fit", order = %self.order, n = view.len()).entered();
        optimizer::fit_arimax(self.order, &self.config, view.targets(), view.exogs())
    }
}
