//! # loadcast-arimax
//!
//! Regression with ARIMA errors: a single exogenous regressor enters the
//! mean linearly and the remaining error follows an ARMA(p, q) process
//! after `d` differences. Parameters are estimated by exact Gaussian
//! maximum likelihood (Kalman filter); forecasts carry normal prediction
//! intervals.
//!
//! ```mermaid
//! graph LR
//!     A["Forecaster::new(order)"] -->|".with_config(FitConfig)"| A
//!     A -->|".fit(&AlignedSeries)?"| B["FittedModel"]
//!     B -->|".forecast(&next_exog, level)?"| C["Vec&lt;Forecast&gt;"]
//! ```
//!
//! ## Model
//!
//! With `z = (1 - L)^d y` and `u = (1 - L)^d x`:
//!
//! ```text
//! z_t = beta * u_t + c + w_t           (c only when d = 0)
//! w_t = phi_1 w_{t-1} + ... + phi_p w_{t-p}
//!     + e_t + theta_1 e_{t-1} + ... + theta_q e_{t-q}
//! e_t ~ N(0, sigma2)
//! ```
//!
//! AR coefficients are kept stationary and MA coefficients invertible by
//! optimizing over a partial-autocorrelation parameterisation.
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | beta | [`FittedModel::exog_coefficient()`] | Effect of one unit of the regressor |
//! | c | [`FittedModel::intercept()`] | Constant level (`d = 0` only) |
//! | phi | [`FittedModel::ar()`] | AR coefficients of the regression errors |
//! | theta | [`FittedModel::ma()`] | MA coefficients of the regression errors |
//! | sigma2 | [`FittedModel::sigma2()`] | Innovation variance |

mod config;
mod error;
mod fitted;
mod forecast;
mod forecaster;
mod order;

pub mod diff;

pub(crate) mod kalman;
pub(crate) mod optimizer;
pub(crate) mod params;
pub(crate) mod regression;
pub(crate) mod state_space;

pub use config::FitConfig;
pub use error::ArimaxError;
pub use fitted::FittedModel;
pub use forecast::{DEFAULT_CONFIDENCE_LEVEL, Forecast};
pub use forecaster::Forecaster;
pub use order::ModelOrder;
