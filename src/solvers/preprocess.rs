//! Centering and standardization applied before component extraction.

use crate::solvers::traits::PlsError;
use crate::utils::{center_columns, center_vector, column_norm, dot, Real};
use faer::{Col, Mat, MatRef};

/// Location and scale parameters estimated from the training data.
///
/// Dispersions are population standard deviations: `‖centered‖ / sqrt(n)`.
#[derive(Debug, Clone)]
pub struct Standardization<T> {
    x_means: Col<T>,
    x_scales: Option<Col<T>>,
    y_mean: T,
    y_scale: Option<T>,
}

impl<T: Real> Standardization<T> {
    /// Center `d` and `response`; with `scale`, also divide every column and
    /// the response by its dispersion.
    ///
    /// Returns the parameters together with the working matrix X and the
    /// working response y.
    ///
    /// # Errors
    ///
    /// [`PlsError::ZeroDispersion`] when `scale` is set and a column or the
    /// response is constant.
    pub fn fit(
        d: MatRef<'_, T>,
        response: &[T],
        scale: bool,
    ) -> Result<(Self, Mat<T>, Col<T>), PlsError> {
        let (mut x, x_means) = center_columns(d);
        let (mut y, y_mean) = center_vector(response);

        if !scale {
            let params = Self {
                x_means,
                x_scales: None,
                y_mean,
                y_scale: None,
            };
            return Ok((params, x, y));
        }

        let n_rows = x.nrows();
        let root_n = T::from_usize(n_rows).sqrt();

        let mut x_scales = Col::from_fn(x.ncols(), |_| T::one());
        for j in 0..x.ncols() {
            let dispersion = column_norm(&x, j) / root_n;
            if dispersion == T::zero() {
                return Err(PlsError::ZeroDispersion { column: Some(j) });
            }
            x_scales[j] = dispersion;
            for i in 0..n_rows {
                x[(i, j)] = x[(i, j)] / dispersion;
            }
        }

        let y_scale = (dot(&y, &y) / T::from_usize(n_rows)).sqrt();
        if y_scale == T::zero() {
            return Err(PlsError::ZeroDispersion { column: None });
        }
        for i in 0..n_rows {
            y[i] = y[i] / y_scale;
        }

        let params = Self {
            x_means,
            x_scales: Some(x_scales),
            y_mean,
            y_scale: Some(y_scale),
        };
        Ok((params, x, y))
    }

    pub fn x_means(&self) -> &Col<T> {
        &self.x_means
    }

    /// Per-column dispersions, present only for standardized fits.
    pub fn x_scales(&self) -> Option<&Col<T>> {
        self.x_scales.as_ref()
    }

    pub fn y_mean(&self) -> T {
        self.y_mean
    }

    pub fn y_scale(&self) -> Option<T> {
        self.y_scale
    }

    pub fn is_scaled(&self) -> bool {
        self.x_scales.is_some()
    }

    /// Apply the stored centering (and scaling) to new rows.
    pub fn transform_rows(&self, x: MatRef<'_, T>) -> Mat<T> {
        Mat::from_fn(x.nrows(), x.ncols(), |i, j| {
            let centered = x[(i, j)] - self.x_means[j];
            match self.x_scales {
                Some(ref scales) => centered / scales[j],
                None => centered,
            }
        })
    }

    /// Map coefficients fitted on standardized data back to original units:
    /// `b_j ← b_j · s_y / s_j`.
    pub(crate) fn rescale_coefficients(&self, coefficients: &mut Col<T>) {
        if let (Some(scales), Some(y_scale)) = (self.x_scales.as_ref(), self.y_scale) {
            for j in 0..coefficients.nrows() {
                coefficients[j] = coefficients[j] * (y_scale / scales[j]);
            }
        }
    }
}
