//! Single-response Partial Least Squares regression (PLS1).
//!
//! PLS1 extracts a small number of latent components that jointly explain
//! the covariance between a block of (possibly collinear) predictors and one
//! response, then derives linear regression coefficients and in-sample
//! predictions from them.
//!
//! Two levels of API are provided:
//!
//! - [`solvers::Pls1Regressor`]: a builder-configured estimator that returns a
//!   [`solvers::FittedPls1`] holding weights, loadings, scores and fit
//!   statistics.
//! - [`api`]: entry points that read and write caller-owned buffers and report
//!   failures that map onto integer [`core::StatusCode`]s.
//!
//! All computations are generic over `f32` and `f64`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pls1::prelude::*;
//! use faer::Mat;
//!
//! let x = Mat::from_fn(4, 2, |i, j| (2 * i + j + 1) as f64);
//! let y = [1.0, 2.0, 3.0, 4.0];
//!
//! let fitted = Pls1Regressor::builder()
//!     .n_components(1)
//!     .build()
//!     .fit(x.as_ref(), &y)?;
//!
//! // Predictions are D b, without an intercept.
//! println!("b = {:?}", fitted.coefficients());
//! println!("D b = {:?}", fitted.fitted_values());
//! ```

pub mod api;
pub mod core;
pub mod diagnostics;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::api::{
        mad, partial_least_squares, partial_least_squares_deflation,
        partial_least_squares_extended, partial_least_squares_normalized,
    };
    pub use crate::core::{FitSummary, StatusCode};
    pub use crate::diagnostics::max_absolute_deviation;
    pub use crate::solvers::{
        FittedPls1, FittedRegressor, Pls1Algorithm, Pls1Regressor, Pls1RegressorBuilder,
        PlsError, Regressor, Standardization,
    };
    pub use crate::utils::Real;
}

pub use crate::core::{FitSummary, StatusCode};
pub use crate::solvers::{FittedPls1, FittedRegressor, Pls1Regressor, PlsError, Regressor};
