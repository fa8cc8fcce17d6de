//! # Single-Response Partial Least Squares (PLS1)
//!
//! PLS1 projects the predictors onto a few latent components chosen for
//! their covariance with the response, then regresses on those components.
//!
//! ## When to Use
//! - More predictors than observations
//! - Strongly collinear predictors (spectra, sensor arrays)
//! - A low-dimensional summary of X that is relevant for y
//!
//! ## Key Features
//! - Fast non-deflating extractor and the classical deflation extractor
//! - Optional standardization with coefficients reported in original units
//! - Predictor and response scores
//! - Buffer-level entry points with integer status codes
//!
//! Run with: `RUST_LOG=debug cargo run --example pls1`

use faer::Mat;
use pls1::api;
use pls1::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Partial Least Squares (PLS1) ===\n");

    collinear_predictors();
    choosing_components();
    standardized_fit();
    buffer_interface();
}

/// Spectral-like data: five nearly collinear channels
fn collinear_predictors() {
    println!("--- Collinear Predictors ---\n");

    let n = 40;
    let x = Mat::from_fn(n, 5, |i, j| {
        let t = i as f64 / n as f64;
        (t * 6.0).sin() * (1.0 + 0.1 * j as f64) + 0.02 * ((i * 7 + j * 3) % 11) as f64
    });
    let y: Vec<f64> = (0..n)
        .map(|i| 2.0 * x[(i, 0)] - x[(i, 4)] + 0.01 * ((i * 5) % 7) as f64)
        .collect();

    let fitted = match Pls1Regressor::new(2).fit(x.as_ref(), &y) {
        Ok(f) => f,
        Err(e) => {
            println!("Fit failed: {e}");
            return;
        }
    };

    println!("Coefficients:");
    for j in 0..5 {
        println!("  x{}: {:>10.5}", j, fitted.coefficients()[j]);
    }
    println!("Intercept: {:.5}", fitted.intercept());

    let summary = fitted.summary();
    println!("\nR²: {:.5}", summary.r_squared);
    println!("RMSE: {:.5}", summary.rmse);
    println!("F p-value: {:.3e}\n", summary.f_pvalue);
}

/// Variance captured per component
fn choosing_components() {
    println!("--- Choosing the Number of Components ---\n");

    let n = 60;
    let x = Mat::from_fn(n, 6, |i, j| (((i + 1) * (j + 1)) as f64 * 0.37).sin());
    let y: Vec<f64> = (0..n)
        .map(|i| x[(i, 0)] + 0.5 * x[(i, 2)] - 0.25 * x[(i, 5)])
        .collect();

    println!("{:>3} {:>10} {:>10}", "A", "R²", "x-var");
    for a in 1..=6 {
        match Pls1Regressor::new(a).fit(x.as_ref(), &y) {
            Ok(fitted) => {
                let ratios = fitted.explained_variance_ratio();
                let x_var: f64 = (0..a).map(|k| ratios[k]).sum();
                println!("{:>3} {:>10.6} {:>10.6}", a, fitted.summary().r_squared, x_var);
            }
            Err(e) => println!("{:>3} {}", a, e),
        }
    }
    println!();
}

/// Predictors on very different scales
fn standardized_fit() {
    println!("--- Standardized Fit ---\n");

    let n = 30;
    let x = Mat::from_fn(n, 3, |i, j| {
        let base = ((i * (j + 2)) % 9) as f64 - 4.0;
        base * [1000.0, 1.0, 0.001][j]
    });
    let y: Vec<f64> = (0..n)
        .map(|i| 0.002 * x[(i, 0)] + 0.5 * x[(i, 1)] + 300.0 * x[(i, 2)])
        .collect();

    for (label, model) in [
        ("centered", Pls1Regressor::recurrence(2)),
        ("standardized", Pls1Regressor::normalized(2)),
    ] {
        match model.fit(x.as_ref(), &y) {
            Ok(fitted) => println!(
                "{:>12}: b = [{:.5}, {:.5}, {:.5}]  R² = {:.5}",
                label,
                fitted.coefficients()[0],
                fitted.coefficients()[1],
                fitted.coefficients()[2],
                fitted.summary().r_squared
            ),
            Err(e) => println!("{:>12}: {}", label, e),
        }
    }
    println!();
}

/// Column-major buffers and status codes
fn buffer_interface() {
    println!("--- Buffer Interface ---\n");

    let predictors = [1.0, 3.0, 5.0, 7.0, 2.0, 4.0, 6.0, 8.0];
    let response = [1.0, 2.0, 3.0, 4.0];
    let mut fast_pred = [0.0; 4];
    let mut fast_coef = [0.0; 2];
    let mut slow_pred = [0.0; 4];
    let mut slow_coef = [0.0; 2];

    let fast = api::partial_least_squares(
        &predictors,
        4,
        2,
        &response,
        1,
        &mut fast_pred,
        &mut fast_coef,
    );
    let slow = api::partial_least_squares_deflation(
        &predictors,
        4,
        2,
        &response,
        1,
        &mut slow_pred,
        &mut slow_coef,
    );

    println!("Fast status: {:?}", StatusCode::of(&fast));
    println!("Slow status: {:?}", StatusCode::of(&slow));
    println!("Coefficients: {:?}", fast_coef);
    println!("Predictions: {:?}", fast_pred);
    println!("Max deviation: {:.2e}", api::mad(&fast_pred, &slow_pred));

    let mut bad_coef = [0.0; 2];
    let invalid = api::partial_least_squares(
        &predictors,
        4,
        2,
        &response,
        3,
        &mut fast_pred,
        &mut bad_coef,
    );
    println!(
        "Three components on two columns: {:?} (code {})",
        StatusCode::of(&invalid),
        StatusCode::of(&invalid).code()
    );
}
