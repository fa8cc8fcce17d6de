//! Regression coefficients from extracted PLS1 components.

use crate::solvers::extract::Components;
use crate::solvers::traits::PlsError;
use crate::utils::Real;
use faer::linalg::solvers::DenseSolveCore;
use faer::{Col, Mat};

/// Output of the shared assembly step, in preprocessed units.
#[derive(Debug, Clone)]
pub(crate) struct Assembly<T> {
    /// b = W* q
    pub coefficients: Col<T>,
    /// W* = W (PᵀW)⁻¹
    pub rotations: Mat<T>,
}

/// Form `H = PᵀW`, reject it when `|det H| ≤ tolerance`, then compute
/// `W* = W H⁻¹` and `b = W* q`.
///
/// A zero leading pivot makes faer's LU report a NaN determinant, which is
/// classified as singular as well.
pub(crate) fn assemble<T: Real>(
    components: &Components<T>,
    tolerance: T,
) -> Result<Assembly<T>, PlsError> {
    let weights = &components.weights;
    let x_loadings = &components.x_loadings;
    let y_loadings = &components.y_loadings;
    let p = weights.nrows();
    let ncomp = components.n_components();

    let h = Mat::from_fn(ncomp, ncomp, |i, j| {
        let mut sum = T::zero();
        for k in 0..p {
            sum = sum + x_loadings[(k, i)] * weights[(k, j)];
        }
        sum
    });

    let determinant = h.as_ref().determinant();
    if determinant.is_nan() || determinant.abs() <= tolerance {
        log::debug!("assembly: PᵀW is singular (det = {})", determinant);
        return Err(PlsError::SingularLoadingProduct {
            determinant: determinant.as_f64(),
        });
    }
    let h_inv = h.partial_piv_lu().inverse();

    let mut rotations = Mat::zeros(p, ncomp);
    for j in 0..p {
        for a in 0..ncomp {
            let mut sum = T::zero();
            for k in 0..ncomp {
                sum = sum + weights[(j, k)] * h_inv[(k, a)];
            }
            rotations[(j, a)] = sum;
        }
    }

    let mut coefficients = Col::zeros(p);
    for j in 0..p {
        let mut sum = T::zero();
        for a in 0..ncomp {
            sum = sum + rotations[(j, a)] * y_loadings[a];
        }
        coefficients[j] = sum;
    }

    Ok(Assembly {
        coefficients,
        rotations,
    })
}

/// Response scores as the rank-one broadcast `U = y qᵀ / ‖q‖²`.
///
/// This is not a per-component deflated score: every column is the working
/// response scaled by the matching y-loading.
pub(crate) fn response_scores<T: Real>(y: &Col<T>, y_loadings: &Col<T>) -> Mat<T> {
    let mut squared_norm = T::zero();
    for a in 0..y_loadings.nrows() {
        squared_norm = squared_norm + y_loadings[a] * y_loadings[a];
    }
    Mat::from_fn(y.nrows(), y_loadings.nrows(), |i, a| {
        y[i] * y_loadings[a] / squared_norm
    })
}
