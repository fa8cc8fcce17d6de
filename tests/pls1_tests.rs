//! PLS1 estimator tests.

mod common;

use approx::assert_relative_eq;
use faer::Mat;
use pls1::diagnostics::max_absolute_deviation;
use pls1::solvers::{
    FittedRegressor, Pls1Algorithm, Pls1Regressor, PlsError, Regressor, Standardization,
};

fn as_vec(col: &faer::Col<f64>) -> Vec<f64> {
    (0..col.nrows()).map(|i| col[i]).collect()
}

// ============================================================================
// Full-rank reconstruction
// ============================================================================

#[test]
fn test_full_components_reproduce_noiseless_response() {
    let (x, y, beta) = common::generate_linear_data(40, 4, 0.0, 7);

    for model in [
        Pls1Regressor::recurrence(4),
        Pls1Regressor::deflation(4),
        Pls1Regressor::normalized(4),
    ] {
        let fitted = model.fit(x.as_ref(), &y).expect("fit should succeed");

        for i in 0..40 {
            assert_relative_eq!(fitted.fitted_values()[i], y[i], epsilon = 1e-8);
        }
        for j in 0..4 {
            assert_relative_eq!(fitted.coefficients()[j], beta[j], epsilon = 1e-8);
        }
        assert_relative_eq!(fitted.intercept(), 0.0, epsilon = 1e-8);
        assert_relative_eq!(fitted.summary().r_squared, 1.0, epsilon = 1e-10);
    }
}

// ============================================================================
// Score orthonormality
// ============================================================================

#[test]
fn test_scores_are_orthonormal() {
    let (x, y, _) = common::generate_linear_data(50, 5, 0.5, 42);

    for algorithm in [Pls1Algorithm::Recurrence, Pls1Algorithm::Deflation] {
        let fitted = Pls1Regressor::builder()
            .n_components(4)
            .algorithm(algorithm)
            .build()
            .fit(x.as_ref(), &y)
            .expect("fit should succeed");

        let t = common::column_major(fitted.scores());
        assert!(common::orthonormality_error(&t, 50, 4) < 1e-10);
    }
}

#[test]
fn test_scores_orthonormal_on_collinear_data() {
    let (x, y) = common::generate_collinear_data(80, 3);
    let fitted = Pls1Regressor::new(3).fit(x.as_ref(), &y).unwrap();

    let t = common::column_major(fitted.scores());
    assert!(common::orthonormality_error(&t, 80, 3) < 1e-10);
}

// ============================================================================
// Agreement between extractors
// ============================================================================

#[test]
fn test_recurrence_and_deflation_agree() {
    let (x, y, _) = common::generate_linear_data(60, 6, 0.3, 11);

    for n_components in 1..=6 {
        let fast = Pls1Regressor::recurrence(n_components)
            .fit(x.as_ref(), &y)
            .unwrap();
        let slow = Pls1Regressor::deflation(n_components)
            .fit(x.as_ref(), &y)
            .unwrap();

        let b_dev = max_absolute_deviation(
            &as_vec(fast.coefficients()),
            &as_vec(slow.coefficients()),
        );
        let pred_dev = max_absolute_deviation(
            &as_vec(fast.fitted_values()),
            &as_vec(slow.fitted_values()),
        );
        assert!(b_dev < 1e-8, "coefficients differ by {b_dev} at A = {n_components}");
        assert!(pred_dev < 1e-8, "predictions differ by {pred_dev} at A = {n_components}");
    }
}

#[test]
fn test_normalized_deflation_matches_normalized_recurrence() {
    let (x, y) = common::generate_collinear_data(50, 9);

    let fast = Pls1Regressor::normalized(2).fit(x.as_ref(), &y).unwrap();
    let slow = Pls1Regressor::builder()
        .n_components(2)
        .algorithm(Pls1Algorithm::Deflation)
        .scale(true)
        .build()
        .fit(x.as_ref(), &y)
        .unwrap();

    for j in 0..4 {
        assert_relative_eq!(fast.coefficients()[j], slow.coefficients()[j], epsilon = 1e-8);
    }
}

// ============================================================================
// Concrete single-component scenario
// ============================================================================

#[test]
fn test_single_component_reference_values() {
    let x = Mat::from_fn(4, 2, |i, j| (2 * i + j + 1) as f64);
    let y = [1.0, 2.0, 3.0, 4.0];

    for model in [
        Pls1Regressor::recurrence(1),
        Pls1Regressor::deflation(1),
        Pls1Regressor::normalized(1),
        Pls1Regressor::extended(1),
    ] {
        let fitted = model.fit(x.as_ref(), &y).unwrap();

        assert_relative_eq!(fitted.coefficients()[0], 0.25, epsilon = 1e-12);
        assert_relative_eq!(fitted.coefficients()[1], 0.25, epsilon = 1e-12);
        let expected = [0.75, 1.75, 2.75, 3.75];
        for i in 0..4 {
            assert_relative_eq!(fitted.fitted_values()[i], expected[i], epsilon = 1e-12);
        }
    }
}

// ============================================================================
// Normalized variant
// ============================================================================

#[test]
fn test_normalized_is_invariant_to_column_units() {
    let (x, y, _) = common::generate_linear_data(30, 3, 0.2, 5);
    let factors = [1000.0, 1.0, 0.001];
    let x_rescaled = Mat::from_fn(30, 3, |i, j| x[(i, j)] * factors[j]);

    let base = Pls1Regressor::normalized(2).fit(x.as_ref(), &y).unwrap();
    let rescaled = Pls1Regressor::normalized(2)
        .fit(x_rescaled.as_ref(), &y)
        .unwrap();

    for j in 0..3 {
        assert_relative_eq!(
            rescaled.coefficients()[j] * factors[j],
            base.coefficients()[j],
            max_relative = 1e-8
        );
    }
    for i in 0..30 {
        assert_relative_eq!(
            rescaled.fitted_values()[i],
            base.fitted_values()[i],
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_normalized_rejects_constant_column() {
    let x = Mat::from_fn(10, 3, |i, j| if j == 2 { 4.0 } else { (i * (j + 1)) as f64 });
    let y: Vec<f64> = (0..10).map(|i| i as f64 * 0.5).collect();

    let err = Pls1Regressor::normalized(1).fit(x.as_ref(), &y).unwrap_err();
    assert_eq!(err, PlsError::ZeroDispersion { column: Some(2) });
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_orthogonal_response_is_method_error() {
    // All columns identical; centered response orthogonal to them.
    let x = Mat::from_fn(4, 3, |i, _| if i < 2 { 0.0f64 } else { 2.0 });
    let y = [1.0, -1.0, -1.0, 1.0];

    let fast = Pls1Regressor::recurrence(1).fit(x.as_ref(), &y).unwrap_err();
    assert_eq!(fast, PlsError::ZeroNormWeight { component: 0 });

    let normalized = Pls1Regressor::normalized(1).fit(x.as_ref(), &y).unwrap_err();
    assert_eq!(normalized, PlsError::ZeroNormWeight { component: 0 });

    // The deflation extractor carries no norm guard; the zero weight makes
    // PᵀW singular instead.
    let slow = Pls1Regressor::deflation(1).fit(x.as_ref(), &y).unwrap_err();
    assert!(matches!(slow, PlsError::SingularLoadingProduct { .. }));
}

#[test]
fn test_perfectly_collinear_columns_single_component() {
    let x = Mat::from_fn(20, 2, |i, j| (i as f64) * (j + 1) as f64);
    let y: Vec<f64> = (0..20).map(|i| 1.0 + 3.0 * i as f64).collect();

    let fitted = Pls1Regressor::new(1).fit(x.as_ref(), &y).unwrap();
    // y = 1 + 3 x0 is split along the shared direction: b0 + 2 b1 = 3.
    assert_relative_eq!(
        fitted.coefficients()[0] + 2.0 * fitted.coefficients()[1],
        3.0,
        epsilon = 1e-10
    );
    assert_relative_eq!(fitted.intercept(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_tolerance_catches_exhausted_rank() {
    let x = Mat::from_fn(20, 2, |i, j| (i as f64) * (j + 1) as f64);
    let y: Vec<f64> = (0..20).map(|i| ((i * 7) % 5) as f64).collect();

    let result = Pls1Regressor::builder()
        .n_components(2)
        .tolerance(1e-8)
        .build()
        .fit(x.as_ref(), &y);

    assert!(matches!(
        result,
        Err(PlsError::ZeroNormWeight { component: 1 })
            | Err(PlsError::ZeroNormScore { component: 1 })
    ));
}

// ============================================================================
// Precision
// ============================================================================

#[test]
fn test_single_precision_tracks_double() {
    let (x, y, _) = common::generate_linear_data(25, 3, 0.1, 17);
    let x32 = Mat::from_fn(25, 3, |i, j| x[(i, j)] as f32);
    let y32: Vec<f32> = y.iter().map(|&v| v as f32).collect();

    let f64_fit = Pls1Regressor::new(2).fit(x.as_ref(), &y).unwrap();
    let f32_fit = Pls1Regressor::new(2).fit(x32.as_ref(), &y32).unwrap();

    for j in 0..3 {
        assert_relative_eq!(
            f32_fit.coefficients()[j] as f64,
            f64_fit.coefficients()[j],
            epsilon = 1e-3
        );
    }
}

// ============================================================================
// Fitted model accessors
// ============================================================================

#[test]
fn test_predict_new_rows() {
    let (x, y, beta) = common::generate_linear_data(40, 3, 0.0, 21);
    let fitted = Pls1Regressor::new(3).fit(x.as_ref(), &y).unwrap();

    let x_new = Mat::from_fn(5, 3, |i, j| (i + j) as f64 * 0.1);
    let preds = fitted.predict(x_new.as_ref());

    for i in 0..5 {
        let expected: f64 = (0..3).map(|j| x_new[(i, j)] * beta[j]).sum();
        assert_relative_eq!(preds[i], expected, epsilon = 1e-8);
    }
}

#[test]
fn test_summary_statistics() {
    let (x, y, _) = common::generate_linear_data(60, 4, 0.5, 99);
    let fitted = Pls1Regressor::new(2).fit(x.as_ref(), &y).unwrap();
    let summary = fitted.summary();

    assert_eq!(summary.n_observations, 60);
    assert_eq!(summary.n_components, 2);
    assert!(summary.r_squared > 0.7 && summary.r_squared <= 1.0);
    assert!(summary.adj_r_squared <= summary.r_squared);
    assert!(summary.f_pvalue < 1e-6);
    assert_relative_eq!(summary.rmse, summary.mse.sqrt());
}

#[test]
fn test_more_components_explain_more_response() {
    let (x, y) = common::generate_collinear_data(60, 4);

    let one = Pls1Regressor::new(1).fit(x.as_ref(), &y).unwrap();
    let three = Pls1Regressor::new(3).fit(x.as_ref(), &y).unwrap();

    assert!(three.summary().r_squared >= one.summary().r_squared - 1e-12);

    let ratios = three.explained_response_ratio();
    let total: f64 = (0..3).map(|a| ratios[a]).sum();
    assert_relative_eq!(total, three.summary().r_squared, epsilon = 1e-8);
}

// ============================================================================
// Preprocessing
// ============================================================================

#[test]
fn test_standardization_matches_fitted_parameters() {
    let (x, y, _) = common::generate_linear_data(25, 3, 0.2, 13);

    let (params, x_work, y_work) = Standardization::fit(x.as_ref(), &y, true).unwrap();
    let fitted = Pls1Regressor::normalized(2).fit(x.as_ref(), &y).unwrap();

    assert!(params.is_scaled());
    let scales = params.x_scales().unwrap();
    let fitted_scales = fitted.x_scales().unwrap();
    for j in 0..3 {
        assert_relative_eq!(params.x_means()[j], fitted.x_means()[j]);
        assert_relative_eq!(scales[j], fitted_scales[j]);
    }
    assert_relative_eq!(params.y_mean(), fitted.y_mean());
    assert_relative_eq!(params.y_scale().unwrap(), fitted.y_scale().unwrap());

    let again = params.transform_rows(x.as_ref());
    for i in 0..25 {
        for j in 0..3 {
            assert_relative_eq!(again[(i, j)], x_work[(i, j)], epsilon = 1e-12);
        }
    }
    let y_ss: f64 = (0..25).map(|i| y_work[i] * y_work[i]).sum();
    assert_relative_eq!(y_ss / 25.0, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Singular loading products
// ============================================================================

#[test]
fn test_deflation_degenerate_with_several_components() {
    // The first weight vanishes, so every later component is zero as well and
    // PᵀW is the zero matrix.
    let x = Mat::from_fn(4, 3, |i, _| if i < 2 { 0.0f64 } else { 2.0 });
    let y = [1.0, -1.0, -1.0, 1.0];

    let err = Pls1Regressor::deflation(2).fit(x.as_ref(), &y).unwrap_err();
    assert!(matches!(err, PlsError::SingularLoadingProduct { .. }));
}
