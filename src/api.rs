//! Entry points over caller-owned buffers.
//!
//! Each function reads a column-major predictor buffer of
//! `row_count × column_count` values and a response of `row_count` values,
//! and writes predictions and coefficients into caller-provided slices.
//! The predictor buffer is viewed in place, never copied.
//!
//! Arguments are validated before any numeric work: an invalid component
//! count or a buffer of the wrong length leaves every output untouched. On a
//! numerical failure the outputs may be partially written and must not be
//! used. [`StatusCode::of`](crate::core::StatusCode::of) converts the result
//! to the integer status protocol.

use crate::diagnostics::max_absolute_deviation;
use crate::solvers::{FittedPls1, FittedRegressor, Pls1Regressor, PlsError, Regressor};
use crate::utils::Real;
use faer::{Mat, MatRef};

/// PLS1 with the fast non-deflating extractor on mean-centered data.
pub fn partial_least_squares<T: Real>(
    predictors: &[T],
    row_count: usize,
    column_count: usize,
    response: &[T],
    components: usize,
    prediction: &mut [T],
    coefficients: &mut [T],
) -> Result<(), PlsError> {
    let model = Pls1Regressor::recurrence(components);
    let fitted = fit_buffers(
        &model,
        predictors,
        row_count,
        column_count,
        response,
        prediction,
        coefficients,
    )?;
    write_outputs(&fitted, prediction, coefficients);
    Ok(())
}

/// PLS1 with the explicit-deflation extractor on mean-centered data.
pub fn partial_least_squares_deflation<T: Real>(
    predictors: &[T],
    row_count: usize,
    column_count: usize,
    response: &[T],
    components: usize,
    prediction: &mut [T],
    coefficients: &mut [T],
) -> Result<(), PlsError> {
    let model = Pls1Regressor::deflation(components);
    let fitted = fit_buffers(
        &model,
        predictors,
        row_count,
        column_count,
        response,
        prediction,
        coefficients,
    )?;
    write_outputs(&fitted, prediction, coefficients);
    Ok(())
}

/// PLS1 on standardized columns and response; coefficients are reported in
/// original units.
pub fn partial_least_squares_normalized<T: Real>(
    predictors: &[T],
    row_count: usize,
    column_count: usize,
    response: &[T],
    components: usize,
    prediction: &mut [T],
    coefficients: &mut [T],
) -> Result<(), PlsError> {
    let model = Pls1Regressor::normalized(components);
    let fitted = fit_buffers(
        &model,
        predictors,
        row_count,
        column_count,
        response,
        prediction,
        coefficients,
    )?;
    write_outputs(&fitted, prediction, coefficients);
    Ok(())
}

/// Standardized PLS1 that also reports the predictor scores T and response
/// scores U, each `row_count × components` in column-major order.
#[allow(clippy::too_many_arguments)]
pub fn partial_least_squares_extended<T: Real>(
    predictors: &[T],
    row_count: usize,
    column_count: usize,
    response: &[T],
    components: usize,
    prediction: &mut [T],
    coefficients: &mut [T],
    predictor_scores: &mut [T],
    response_scores: &mut [T],
) -> Result<(), PlsError> {
    let model = Pls1Regressor::extended(components);
    model.validate(row_count, column_count, response.len())?;
    let score_len = row_count.saturating_mul(components);
    check_len("predictor scores", score_len, predictor_scores.len())?;
    check_len("response scores", score_len, response_scores.len())?;

    let fitted = fit_buffers(
        &model,
        predictors,
        row_count,
        column_count,
        response,
        prediction,
        coefficients,
    )?;

    copy_column_major(fitted.scores(), predictor_scores);
    if let Some(u) = fitted.response_scores() {
        copy_column_major(u, response_scores);
    }
    write_outputs(&fitted, prediction, coefficients);
    Ok(())
}

/// Maximum absolute deviation between two equal-length buffers.
pub fn mad<T: Real>(a: &[T], b: &[T]) -> T {
    max_absolute_deviation(a, b)
}

fn fit_buffers<T: Real>(
    model: &Pls1Regressor,
    predictors: &[T],
    row_count: usize,
    column_count: usize,
    response: &[T],
    prediction: &[T],
    coefficients: &[T],
) -> Result<FittedPls1<T>, PlsError> {
    model.validate(row_count, column_count, response.len())?;
    let expected = row_count
        .checked_mul(column_count)
        .ok_or(PlsError::DimensionMismatch {
            what: "predictors",
            expected: usize::MAX,
            got: predictors.len(),
        })?;
    check_len("predictors", expected, predictors.len())?;
    check_len("prediction", row_count, prediction.len())?;
    check_len("coefficients", column_count, coefficients.len())?;

    let d = MatRef::from_column_major_slice(predictors, row_count, column_count);
    model.fit(d, response)
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<(), PlsError> {
    if expected != got {
        return Err(PlsError::DimensionMismatch { what, expected, got });
    }
    Ok(())
}

fn write_outputs<T: Real>(fitted: &FittedPls1<T>, prediction: &mut [T], coefficients: &mut [T]) {
    let values = fitted.fitted_values();
    for (i, out) in prediction.iter_mut().enumerate() {
        *out = values[i];
    }
    let b = fitted.coefficients();
    for (j, out) in coefficients.iter_mut().enumerate() {
        *out = b[j];
    }
}

fn copy_column_major<T: Real>(m: &Mat<T>, out: &mut [T]) {
    let n = m.nrows();
    for j in 0..m.ncols() {
        for i in 0..n {
            out[j * n + i] = m[(i, j)];
        }
    }
}
