//! Goodness-of-fit summary for a PLS1 fit.

use crate::utils::Real;
use faer::Col;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// In-sample fit statistics.
///
/// Residuals are taken against `fitted_values + intercept`, so the summary
/// describes the affine model even though the prediction vector itself is
/// `D b`. Quantities that are undefined for the given degrees of freedom are
/// `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    /// Number of observations.
    pub n_observations: usize,

    /// Number of latent components.
    pub n_components: usize,

    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R², counting components plus intercept as parameters.
    pub adj_r_squared: f64,

    /// Residual sum of squares.
    pub rss: f64,

    /// Mean squared error (RSS over residual degrees of freedom).
    pub mse: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value for F-statistic.
    pub f_pvalue: f64,
}

impl FitSummary {
    pub(crate) fn compute<T: Real>(
        response: &[T],
        fitted_values: &Col<T>,
        intercept: T,
        n_components: usize,
    ) -> Self {
        let n = response.len();

        let y_mean: f64 = response.iter().map(|&yi| yi.as_f64()).sum::<f64>() / n as f64;
        let tss: f64 = response
            .iter()
            .map(|&yi| (yi.as_f64() - y_mean).powi(2))
            .sum();
        let rss: f64 = (0..n)
            .map(|i| (response[i].as_f64() - (fitted_values[i] + intercept).as_f64()).powi(2))
            .sum();

        let r_squared = if tss > 0.0 {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        } else if rss < 1e-10 {
            1.0
        } else {
            0.0
        };

        let n_params = n_components + 1;
        let df_total = n.saturating_sub(1) as f64;
        let df_resid = n.saturating_sub(n_params) as f64;
        let df_model = n_components as f64;

        let adj_r_squared = if df_resid > 0.0 && df_total > 0.0 {
            1.0 - (1.0 - r_squared) * df_total / df_resid
        } else {
            f64::NAN
        };

        let mse = if df_resid > 0.0 {
            rss / df_resid
        } else {
            f64::NAN
        };
        let rmse = mse.sqrt();

        let ess = tss - rss;
        let f_statistic = if df_model > 0.0 && df_resid > 0.0 && mse > 0.0 {
            (ess / df_model) / mse
        } else {
            f64::NAN
        };

        let f_pvalue = if f_statistic.is_finite() {
            FisherSnedecor::new(df_model, df_resid)
                .ok()
                .map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        Self {
            n_observations: n,
            n_components,
            r_squared,
            adj_r_squared,
            rss,
            mse,
            rmse,
            f_statistic,
            f_pvalue,
        }
    }
}
