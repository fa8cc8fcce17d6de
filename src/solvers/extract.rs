//! Latent component extraction for PLS1.
//!
//! Two derivations of the same components are provided:
//!
//! - [`recurrence`]: the non-deflating form (Algorithm 2 of Andersson, 2009).
//!   The working matrix is never modified; each weight vector is obtained from
//!   the previous weight and loading by a closed-form update.
//! - [`deflation`]: the classical NIPALS form (Algorithm 1). The extracted
//!   rank-one part `t pᵀ` is removed from the working matrix after every
//!   component.
//!
//! Both store unit-norm weights and scores, so `TᵀT = I` and the loadings are
//! `P = XᵀT`.
//!
//! # References
//!
//! - Andersson, M. (2009). A comparison of nine PLS1 algorithms.
//!   Journal of Chemometrics, 23, 518-529. <https://doi.org/10.1002/cem.2589>

use crate::solvers::traits::PlsError;
use crate::utils::{dot, mat_vec, norm, transpose_mat_vec, Real};
use faer::{Col, Mat};

/// Matrices produced by an extractor, one column per component.
#[derive(Debug, Clone)]
pub(crate) struct Components<T> {
    /// W: n_features x n_components
    pub weights: Mat<T>,
    /// P: n_features x n_components
    pub x_loadings: Mat<T>,
    /// T: n_samples x n_components
    pub scores: Mat<T>,
    /// q: n_components
    pub y_loadings: Col<T>,
}

impl<T: Real> Components<T> {
    fn with_capacity(n_samples: usize, n_features: usize, n_components: usize) -> Self {
        Self {
            weights: Mat::zeros(n_features, n_components),
            x_loadings: Mat::zeros(n_features, n_components),
            scores: Mat::zeros(n_samples, n_components),
            y_loadings: Col::zeros(n_components),
        }
    }

    pub fn n_components(&self) -> usize {
        self.y_loadings.nrows()
    }
}

/// Extract components without deflating `x`.
///
/// Component 0 starts from `w = Xᵀy`. For `a ≥ 1` the weight is
/// `normV[a-1] · (w[a-1] − p[a-1] / normTau[a-1])` and the raw score `X w` is
/// orthogonalized against every stored score column. A weight or score norm
/// at or below `tolerance` aborts with the failing component index.
pub(crate) fn recurrence<T: Real>(
    x: &Mat<T>,
    y: &Col<T>,
    n_components: usize,
    tolerance: T,
) -> Result<Components<T>, PlsError> {
    let n = x.nrows();
    let p = x.ncols();
    let mut out = Components::with_capacity(n, p, n_components);

    let mut w = Col::zeros(p);
    let mut loading = Col::zeros(p);
    let mut norm_v = T::zero();
    let mut norm_tau = T::zero();

    for a in 0..n_components {
        w = if a == 0 {
            transpose_mat_vec(x.as_ref(), y)
        } else {
            Col::from_fn(p, |j| norm_v * (w[j] - loading[j] / norm_tau))
        };

        norm_v = norm(&w);
        if norm_v <= tolerance {
            log::debug!("recurrence: zero-norm weight at component {}", a);
            return Err(PlsError::ZeroNormWeight { component: a });
        }
        for j in 0..p {
            w[j] = w[j] / norm_v;
            out.weights[(j, a)] = w[j];
        }

        let mut t = mat_vec(x.as_ref(), &w);
        if a > 0 {
            // t ← t − T[:, :a] (T[:, :a]ᵀ t)
            let projections = Col::from_fn(a, |k| {
                let mut sum = T::zero();
                for i in 0..n {
                    sum = sum + out.scores[(i, k)] * t[i];
                }
                sum
            });
            for i in 0..n {
                let mut correction = T::zero();
                for k in 0..a {
                    correction = correction + out.scores[(i, k)] * projections[k];
                }
                t[i] = t[i] - correction;
            }
        }

        norm_tau = norm(&t);
        if norm_tau <= tolerance {
            log::debug!("recurrence: zero-norm score at component {}", a);
            return Err(PlsError::ZeroNormScore { component: a });
        }
        for i in 0..n {
            t[i] = t[i] / norm_tau;
            out.scores[(i, a)] = t[i];
        }

        loading = transpose_mat_vec(x.as_ref(), &t);
        for j in 0..p {
            out.x_loadings[(j, a)] = loading[j];
        }

        out.y_loadings[a] = dot(&t, y);

        log::trace!(
            "recurrence: component {} norm_v={} norm_tau={} q={}",
            a,
            norm_v,
            norm_tau,
            out.y_loadings[a]
        );
    }

    Ok(out)
}

/// Extract components by explicit deflation of `x`.
///
/// Weights and scores are normalized without a zero-norm guard: a vanishing
/// vector is left as is, which later surfaces as a singular `PᵀW`.
pub(crate) fn deflation<T: Real>(mut x: Mat<T>, y: &Col<T>, n_components: usize) -> Components<T> {
    let n = x.nrows();
    let p = x.ncols();
    let mut out = Components::with_capacity(n, p, n_components);

    for k in 0..n_components {
        let w = normalized(transpose_mat_vec(x.as_ref(), y), k, "weight");
        for j in 0..p {
            out.weights[(j, k)] = w[j];
        }

        let t = normalized(mat_vec(x.as_ref(), &w), k, "score");
        for i in 0..n {
            out.scores[(i, k)] = t[i];
        }

        let loading = transpose_mat_vec(x.as_ref(), &t);
        for j in 0..p {
            out.x_loadings[(j, k)] = loading[j];
        }

        // X ← X − t pᵀ
        for j in 0..p {
            for i in 0..n {
                x[(i, j)] = x[(i, j)] - t[i] * loading[j];
            }
        }

        out.y_loadings[k] = dot(&t, y);

        log::trace!("deflation: component {} q={}", k, out.y_loadings[k]);
    }

    out
}

/// Scale to unit norm; a zero vector is returned unchanged.
fn normalized<T: Real>(mut v: Col<T>, component: usize, what: &str) -> Col<T> {
    let length = norm(&v);
    if length > T::zero() {
        for i in 0..v.nrows() {
            v[i] = v[i] / length;
        }
    } else {
        log::warn!(
            "deflation: {} vector of component {} has zero norm",
            what,
            component
        );
    }
    v
}
