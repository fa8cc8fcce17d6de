//! Dense matrix helpers shared by the PLS1 extractors.
//!
//! Products are written as explicit loops in a fixed summation order so the
//! recurrence and deflation extractors stay reproducible run to run.

use super::Real;
use faer::{Col, Mat, MatRef};

/// Center a matrix by subtracting column means.
pub fn center_columns<T: Real>(x: MatRef<'_, T>) -> (Mat<T>, Col<T>) {
    let n_rows = x.nrows();
    let n_cols = x.ncols();
    let count = T::from_usize(n_rows);

    let means = Col::from_fn(n_cols, |j| {
        let mut sum = T::zero();
        for i in 0..n_rows {
            sum = sum + x[(i, j)];
        }
        sum / count
    });

    let centered = Mat::from_fn(n_rows, n_cols, |i, j| x[(i, j)] - means[j]);

    (centered, means)
}

/// Center a vector by subtracting the mean.
pub fn center_vector<T: Real>(y: &[T]) -> (Col<T>, T) {
    let n = y.len();
    let mut sum = T::zero();
    for &yi in y {
        sum = sum + yi;
    }
    let mean = sum / T::from_usize(n);

    let centered = Col::from_fn(n, |i| y[i] - mean);

    (centered, mean)
}

/// Euclidean norm of a vector.
pub fn norm<T: Real>(v: &Col<T>) -> T {
    dot(v, v).sqrt()
}

/// Euclidean norm of column `j` of a matrix.
pub fn column_norm<T: Real>(x: &Mat<T>, j: usize) -> T {
    let mut sum = T::zero();
    for i in 0..x.nrows() {
        sum = sum + x[(i, j)] * x[(i, j)];
    }
    sum.sqrt()
}

/// Inner product `aᵀb`.
pub fn dot<T: Real>(a: &Col<T>, b: &Col<T>) -> T {
    debug_assert_eq!(a.nrows(), b.nrows());
    let mut sum = T::zero();
    for i in 0..a.nrows() {
        sum = sum + a[i] * b[i];
    }
    sum
}

/// Matrix-vector product `X v`.
pub fn mat_vec<T: Real>(x: MatRef<'_, T>, v: &Col<T>) -> Col<T> {
    debug_assert_eq!(x.ncols(), v.nrows());
    let n_cols = x.ncols();
    Col::from_fn(x.nrows(), |i| {
        let mut sum = T::zero();
        for j in 0..n_cols {
            sum = sum + x[(i, j)] * v[j];
        }
        sum
    })
}

/// Transposed matrix-vector product `Xᵀ v`.
pub fn transpose_mat_vec<T: Real>(x: MatRef<'_, T>, v: &Col<T>) -> Col<T> {
    debug_assert_eq!(x.nrows(), v.nrows());
    let n_rows = x.nrows();
    Col::from_fn(x.ncols(), |j| {
        let mut sum = T::zero();
        for i in 0..n_rows {
            sum = sum + x[(i, j)] * v[i];
        }
        sum
    })
}
