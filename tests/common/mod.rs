//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::Mat;

/// Deterministic uniform draws in [-1, 1].
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Generate linear data without intercept: y = X beta + noise, beta_j = j + 1.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = Lcg::new(seed);

    let beta: Vec<f64> = (0..n_features).map(|j| (j + 1) as f64).collect();
    let mut x = Mat::from_fn(n_samples, n_features, |_, _| 0.0);
    let mut y = vec![0.0; n_samples];

    for i in 0..n_samples {
        let mut yi = 0.0;
        for j in 0..n_features {
            x[(i, j)] = rng.uniform();
            yi += x[(i, j)] * beta[j];
        }
        y[i] = yi + noise_std * rng.uniform();
    }

    (x, y, beta)
}

/// Generate strongly (but not perfectly) collinear predictors.
pub fn generate_collinear_data(n_samples: usize, seed: u64) -> (Mat<f64>, Vec<f64>) {
    let mut rng = Lcg::new(seed);
    let mut x = Mat::from_fn(n_samples, 4, |_, _| 0.0);
    let mut y = vec![0.0; n_samples];

    for i in 0..n_samples {
        let base = rng.uniform();
        x[(i, 0)] = base;
        x[(i, 1)] = 2.0 * base + 0.05 * rng.uniform();
        x[(i, 2)] = -base + 0.05 * rng.uniform();
        x[(i, 3)] = rng.uniform();
        y[i] = 3.0 * base + 0.5 * x[(i, 3)] + 0.1 * rng.uniform();
    }

    (x, y)
}

/// Flatten a matrix in column-major order.
pub fn column_major(x: &Mat<f64>) -> Vec<f64> {
    let mut out = Vec::with_capacity(x.nrows() * x.ncols());
    for j in 0..x.ncols() {
        for i in 0..x.nrows() {
            out.push(x[(i, j)]);
        }
    }
    out
}

/// Largest deviation of `TᵀT` from the identity, for a column-major buffer.
pub fn orthonormality_error(t: &[f64], n_rows: usize, n_cols: usize) -> f64 {
    let mut worst: f64 = 0.0;
    for k in 0..n_cols {
        for l in 0..n_cols {
            let mut sum = 0.0;
            for i in 0..n_rows {
                sum += t[k * n_rows + i] * t[l * n_rows + i];
            }
            let expected = if k == l { 1.0 } else { 0.0 };
            worst = worst.max((sum - expected).abs());
        }
    }
    worst
}
