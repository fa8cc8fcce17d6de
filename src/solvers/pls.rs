//! Partial Least Squares regression with a single response (PLS1).
//!
//! PLS1 extracts a few latent components that maximize the covariance between
//! predictor scores and the response, then regresses the response on them.
//! It is useful when predictors are highly collinear or when there are more
//! predictors than can be safely handled by ordinary least squares.
//!
//! # Variants
//!
//! - [`Pls1Algorithm::Recurrence`] (default): non-deflating extraction, the
//!   working matrix is reused unchanged for every component.
//! - [`Pls1Algorithm::Deflation`]: the slower reference form that removes each
//!   component from the working matrix.
//! - `scale(true)`: standardize predictors and response to unit dispersion
//!   before extraction; coefficients are mapped back to original units.
//! - `response_scores(true)`: additionally report the response score matrix U.
//!
//! # Conventions
//!
//! Predictions are `D b` with the raw predictor matrix `D`; no intercept is
//! added. The offset that makes the fit affine is available separately via
//! [`FittedPls1::intercept`].
//!
//! # References
//!
//! - Andersson, M. (2009). A comparison of nine PLS1 algorithms.
//!   Journal of Chemometrics, 23, 518-529.

use crate::core::FitSummary;
use crate::solvers::assembly::{assemble, response_scores, Assembly};
use crate::solvers::extract::{self, Components};
use crate::solvers::preprocess::Standardization;
use crate::solvers::traits::{FittedRegressor, PlsError, Regressor};
use crate::utils::{dot, mat_vec, Real};
use faer::{Col, Mat, MatRef};

/// Component extraction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pls1Algorithm {
    /// Closed-form weight recurrence, no deflation of the working matrix.
    #[default]
    Recurrence,
    /// Explicit rank-one deflation after every component.
    Deflation,
}

/// PLS1 regression estimator.
///
/// # Example
///
/// ```rust,ignore
/// use pls1::solvers::{FittedRegressor, Pls1Regressor, Regressor};
/// use faer::Mat;
///
/// let x = Mat::from_fn(100, 10, |i, j| ((i * (j + 1)) as f64).sin());
/// let y: Vec<f64> = (0..100).map(|i| 1.0 + 0.1 * i as f64).collect();
///
/// let fitted = Pls1Regressor::builder()
///     .n_components(3)
///     .scale(true)
///     .build()
///     .fit(x.as_ref(), &y)?;
///
/// println!("R² = {}", fitted.summary().r_squared);
/// println!("Coefficients: {:?}", fitted.coefficients());
/// ```
#[derive(Debug, Clone)]
pub struct Pls1Regressor {
    /// Number of latent components to extract
    n_components: usize,
    /// Extraction method
    algorithm: Pls1Algorithm,
    /// Whether to standardize columns and response
    scale: bool,
    /// Whether to compute the response score matrix
    response_scores: bool,
    /// Threshold for zero-norm and singular-determinant checks
    tolerance: f64,
}

impl Pls1Regressor {
    /// Create a new regressor with the given number of components and default
    /// options (recurrence extractor, centering only).
    pub fn new(n_components: usize) -> Self {
        Self::builder().n_components(n_components).build()
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> Pls1RegressorBuilder {
        Pls1RegressorBuilder::default()
    }

    /// Fast non-deflating fit on mean-centered data.
    pub fn recurrence(n_components: usize) -> Self {
        Self::new(n_components)
    }

    /// Deflation fit on mean-centered data.
    pub fn deflation(n_components: usize) -> Self {
        Self::builder()
            .n_components(n_components)
            .algorithm(Pls1Algorithm::Deflation)
            .build()
    }

    /// Fast fit on standardized data.
    pub fn normalized(n_components: usize) -> Self {
        Self::builder()
            .n_components(n_components)
            .scale(true)
            .build()
    }

    /// Fast fit on standardized data that also reports response scores.
    pub fn extended(n_components: usize) -> Self {
        Self::builder()
            .n_components(n_components)
            .scale(true)
            .response_scores(true)
            .build()
    }

    pub fn n_components(&self) -> usize {
        self.n_components
    }

    pub fn algorithm(&self) -> Pls1Algorithm {
        self.algorithm
    }

    /// Check arguments against the data shape. Runs before any numeric work.
    pub fn validate(&self, n_rows: usize, n_cols: usize, y_len: usize) -> Result<(), PlsError> {
        if self.n_components == 0 || self.n_components > n_cols {
            return Err(PlsError::InvalidComponentCount {
                requested: self.n_components,
                columns: n_cols,
            });
        }
        if n_rows == 0 {
            return Err(PlsError::EmptyInput {
                rows: n_rows,
                columns: n_cols,
            });
        }
        if y_len != n_rows {
            return Err(PlsError::DimensionMismatch {
                what: "response",
                expected: n_rows,
                got: y_len,
            });
        }
        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(PlsError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

impl<T: Real> Regressor<T> for Pls1Regressor {
    type Fitted = FittedPls1<T>;

    fn fit(&self, x: MatRef<'_, T>, y: &[T]) -> Result<Self::Fitted, PlsError> {
        self.validate(x.nrows(), x.ncols(), y.len())?;

        let n_components = self.n_components;
        let tolerance = T::from_f64(self.tolerance);

        log::debug!(
            "fitting PLS1: {}x{} predictors, {} components, {:?}, scale={}",
            x.nrows(),
            x.ncols(),
            n_components,
            self.algorithm,
            self.scale
        );

        let (standardization, x_work, y_work) = Standardization::fit(x, y, self.scale)?;
        let x_total_ss = frobenius_squared(&x_work);
        let y_total_ss = dot(&y_work, &y_work);

        let components = match self.algorithm {
            Pls1Algorithm::Recurrence => {
                extract::recurrence(&x_work, &y_work, n_components, tolerance)?
            }
            Pls1Algorithm::Deflation => extract::deflation(x_work, &y_work, n_components),
        };

        let u = if self.response_scores {
            Some(response_scores(&y_work, &components.y_loadings))
        } else {
            None
        };

        let Assembly {
            mut coefficients,
            rotations,
        } = assemble(&components, tolerance)?;
        standardization.rescale_coefficients(&mut coefficients);

        let fitted_values = mat_vec(x, &coefficients);

        let mut intercept = standardization.y_mean();
        for j in 0..coefficients.nrows() {
            intercept = intercept - standardization.x_means()[j] * coefficients[j];
        }

        let summary = FitSummary::compute(y, &fitted_values, intercept, n_components);

        log::debug!(
            "PLS1 fit complete: R² = {:.6}, intercept = {}",
            summary.r_squared,
            intercept
        );

        Ok(FittedPls1 {
            algorithm: self.algorithm,
            components,
            rotations,
            response_scores: u,
            coefficients,
            fitted_values,
            intercept,
            standardization,
            x_total_ss,
            y_total_ss,
            summary,
        })
    }
}

fn frobenius_squared<T: Real>(x: &Mat<T>) -> T {
    let mut sum = T::zero();
    for j in 0..x.ncols() {
        for i in 0..x.nrows() {
            sum = sum + x[(i, j)] * x[(i, j)];
        }
    }
    sum
}

/// A fitted PLS1 model.
#[derive(Debug, Clone)]
pub struct FittedPls1<T> {
    algorithm: Pls1Algorithm,
    /// W, P, T, q
    components: Components<T>,
    /// W* = W (PᵀW)⁻¹ (n_features x n_components)
    rotations: Mat<T>,
    /// U (n_samples x n_components), if requested
    response_scores: Option<Mat<T>>,
    /// b, original units
    coefficients: Col<T>,
    /// D b
    fitted_values: Col<T>,
    intercept: T,
    standardization: Standardization<T>,
    /// ‖X‖² of the preprocessed predictors
    x_total_ss: T,
    /// ‖y‖² of the preprocessed response
    y_total_ss: T,
    summary: FitSummary,
}

impl<T: Real> FittedPls1<T> {
    /// Number of components used in the model.
    pub fn n_components(&self) -> usize {
        self.components.n_components()
    }

    pub fn algorithm(&self) -> Pls1Algorithm {
        self.algorithm
    }

    /// Weight matrix W (p x n_components), unit-norm columns.
    pub fn weights(&self) -> &Mat<T> {
        &self.components.weights
    }

    /// X-loadings matrix P (p x n_components).
    pub fn x_loadings(&self) -> &Mat<T> {
        &self.components.x_loadings
    }

    /// Y-loadings vector q (n_components).
    pub fn y_loadings(&self) -> &Col<T> {
        &self.components.y_loadings
    }

    /// Score matrix T (n x n_components), orthonormal columns.
    pub fn scores(&self) -> &Mat<T> {
        &self.components.scores
    }

    /// Response score matrix U (n x n_components), present when the
    /// regressor was built with `response_scores(true)`.
    pub fn response_scores(&self) -> Option<&Mat<T>> {
        self.response_scores.as_ref()
    }

    /// Rotation matrix W* (p x n_components) mapping preprocessed rows to
    /// scores: `T = X W*`.
    pub fn rotations(&self) -> &Mat<T> {
        &self.rotations
    }

    /// `ȳ − μᵀb`: the constant that `D b` omits.
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// Mean of X columns used for centering.
    pub fn x_means(&self) -> &Col<T> {
        self.standardization.x_means()
    }

    /// Dispersion of X columns, for standardized fits.
    pub fn x_scales(&self) -> Option<&Col<T>> {
        self.standardization.x_scales()
    }

    /// Mean of y used for centering.
    pub fn y_mean(&self) -> T {
        self.standardization.y_mean()
    }

    /// Dispersion of y, for standardized fits.
    pub fn y_scale(&self) -> Option<T> {
        self.standardization.y_scale()
    }

    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    /// Compute scores for new X data.
    ///
    /// Rows are centered (and scaled) with the training parameters and
    /// projected with W*. Applied to the training matrix this reproduces
    /// [`scores`](Self::scores).
    pub fn transform(&self, x: MatRef<'_, T>) -> Mat<T> {
        let processed = self.standardization.transform_rows(x);
        let n = processed.nrows();
        let p = processed.ncols();
        let ncomp = self.n_components();

        let mut new_scores = Mat::zeros(n, ncomp);
        for i in 0..n {
            for a in 0..ncomp {
                let mut sum = T::zero();
                for j in 0..p {
                    sum = sum + processed[(i, j)] * self.rotations[(j, a)];
                }
                new_scores[(i, a)] = sum;
            }
        }

        new_scores
    }

    /// Fraction of the preprocessed predictor sum of squares captured by
    /// each component, `‖p_a‖² / ‖X‖²`.
    pub fn explained_variance_ratio(&self) -> Col<T> {
        let loadings = &self.components.x_loadings;
        let mut ratios = Col::zeros(self.n_components());
        for a in 0..self.n_components() {
            let mut ss = T::zero();
            for j in 0..loadings.nrows() {
                ss = ss + loadings[(j, a)] * loadings[(j, a)];
            }
            ratios[a] = ss / self.x_total_ss;
        }
        ratios
    }

    /// Fraction of the preprocessed response sum of squares captured by each
    /// component, `q_a² / ‖y‖²`.
    pub fn explained_response_ratio(&self) -> Col<T> {
        let q = &self.components.y_loadings;
        Col::from_fn(q.nrows(), |a| q[a] * q[a] / self.y_total_ss)
    }
}

impl<T: Real> FittedRegressor<T> for FittedPls1<T> {
    fn predict(&self, x: MatRef<'_, T>) -> Col<T> {
        mat_vec(x, &self.coefficients)
    }

    fn coefficients(&self) -> &Col<T> {
        &self.coefficients
    }

    fn fitted_values(&self) -> &Col<T> {
        &self.fitted_values
    }
}

/// Builder for `Pls1Regressor`.
#[derive(Debug, Clone)]
pub struct Pls1RegressorBuilder {
    n_components: usize,
    algorithm: Pls1Algorithm,
    scale: bool,
    response_scores: bool,
    tolerance: f64,
}

impl Default for Pls1RegressorBuilder {
    fn default() -> Self {
        Self {
            n_components: 2,
            algorithm: Pls1Algorithm::Recurrence,
            scale: false,
            response_scores: false,
            tolerance: 0.0,
        }
    }
}

impl Pls1RegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of latent components to extract.
    ///
    /// Default is 2. Must lie in `[1, n_features]`; this is checked at fit
    /// time, not clamped.
    pub fn n_components(mut self, n: usize) -> Self {
        self.n_components = n;
        self
    }

    /// Set the extraction method.
    ///
    /// Default is [`Pls1Algorithm::Recurrence`].
    pub fn algorithm(mut self, algorithm: Pls1Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set whether to standardize predictors and response before fitting.
    ///
    /// Default is false. Each column is divided by `‖x_j − x̄_j‖ / sqrt(n)`
    /// and the response likewise; coefficients are reported in original units.
    pub fn scale(mut self, scale: bool) -> Self {
        self.scale = scale;
        self
    }

    /// Set whether to compute the response score matrix U.
    ///
    /// Default is false.
    pub fn response_scores(mut self, compute: bool) -> Self {
        self.response_scores = compute;
        self
    }

    /// Set the threshold for the zero-norm and singular-matrix checks.
    ///
    /// Default is 0.0, meaning only exact zeros are rejected. A norm or
    /// determinant magnitude `<= tolerance` is treated as degenerate. The
    /// deflation extractor has no zero-norm checks, so there it only affects
    /// the determinant check.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Build the PLS1 regressor.
    pub fn build(self) -> Pls1Regressor {
        Pls1Regressor {
            n_components: self.n_components,
            algorithm: self.algorithm,
            scale: self.scale,
            response_scores: self.response_scores,
            tolerance: self.tolerance,
        }
    }
}
