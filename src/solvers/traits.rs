//! Core traits and errors for PLS1 estimators.

use crate::core::StatusCode;
use crate::utils::Real;
use faer::{Col, MatRef};
use thiserror::Error;

/// Errors that can occur during PLS1 fitting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlsError {
    #[error("component count must be in [1, {columns}], got {requested}")]
    InvalidComponentCount { requested: usize, columns: usize },

    #[error("predictor matrix must be non-empty, got {rows}x{columns}")]
    EmptyInput { rows: usize, columns: usize },

    #[error("dimension mismatch: {what} has {got} elements, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("tolerance must be non-negative and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("weight vector of component {component} has zero norm")]
    ZeroNormWeight { component: usize },

    #[error("score vector of component {component} has zero norm")]
    ZeroNormScore { component: usize },

    #[error("{} has zero dispersion and cannot be standardized", describe_column(.column))]
    ZeroDispersion { column: Option<usize> },

    #[error("loading-weight product PᵀW is singular (determinant {determinant})")]
    SingularLoadingProduct { determinant: f64 },
}

fn describe_column(column: &Option<usize>) -> String {
    match column {
        Some(j) => format!("predictor column {}", j),
        None => "response".to_string(),
    }
}

impl PlsError {
    /// Legacy status code reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            PlsError::InvalidComponentCount { .. }
            | PlsError::EmptyInput { .. }
            | PlsError::DimensionMismatch { .. }
            | PlsError::InvalidTolerance(_) => StatusCode::UncorrectArgumentsError,
            PlsError::ZeroNormWeight { .. }
            | PlsError::ZeroNormScore { .. }
            | PlsError::ZeroDispersion { .. }
            | PlsError::SingularLoadingProduct { .. } => StatusCode::MethodError,
        }
    }
}

/// A PLS1 estimator that can be fit to data.
///
/// Fitting returns a fitted model that holds the extracted components and
/// can make predictions.
pub trait Regressor<T: Real> {
    /// The type of the fitted model.
    type Fitted: FittedRegressor<T>;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Predictor matrix of shape (n_samples, n_features)
    /// * `y` - Response of length n_samples
    fn fit(&self, x: MatRef<'_, T>, y: &[T]) -> Result<Self::Fitted, PlsError>;
}

/// A fitted PLS1 model.
pub trait FittedRegressor<T: Real> {
    /// Predictions `X b` for new rows, in the same convention as the
    /// in-sample fitted values.
    fn predict(&self, x: MatRef<'_, T>) -> Col<T>;

    /// Regression coefficients in original predictor/response units.
    fn coefficients(&self) -> &Col<T>;

    /// In-sample predictions `D b`.
    fn fitted_values(&self) -> &Col<T>;
}
