#![cfg(feature = "dev")]
//! Tests for the least-squares fits.
//!
//! These tests verify:
//! - Ordinary least squares (SIMD and scalar accumulation agree)
//! - Levenberg–Marquardt fits of the exponential-plus-offset model
//! - Fit failures for degenerate windows
//!
//! ## Test Organization
//!
//! 1. **Linear Regression** - Exact lines, noisy lines, errors
//! 2. **Accumulation** - SIMD vs. scalar sums
//! 3. **Exponential Regression** - Exact recovery, point requirements

use approx::assert_relative_eq;

use langmuir::internals::algorithms::exponential::ExponentialRegression;
use langmuir::internals::algorithms::regression::{
    accumulate_ols_scalar, accumulate_ols_simd_f32, accumulate_ols_simd_f64, LinearRegression,
};
use langmuir::internals::primitives::errors::FitError;

// ============================================================================
// Linear Regression Tests
// ============================================================================

/// Test an exact line is recovered with zero residual.
#[test]
fn test_linear_exact() {
    let x: Vec<f64> = (0..11).map(|i| i as f64 * 0.5 - 2.0).collect();
    let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 1.5).collect();

    let fit = LinearRegression::fit(&x, &y).unwrap();

    assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, -1.5, epsilon = 1e-12);
    assert_relative_eq!(fit.ssr, 0.0, epsilon = 1e-10);
    assert_relative_eq!(fit.rsq, 1.0, epsilon = 1e-12);
    assert_eq!(fit.n, 11);
}

/// Test slope error and correlation on a small noisy set.
#[test]
fn test_linear_noisy() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 1.0, 3.0];

    let fit = LinearRegression::fit(&x, &y).unwrap();

    // Sxx = 5, Sxy = 4.5, Syy = 4.75
    assert_relative_eq!(fit.slope, 0.9, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, -0.1, epsilon = 1e-12);
    assert_relative_eq!(fit.sxx, 5.0, epsilon = 1e-12);
    assert_relative_eq!(fit.ssr, 0.7, epsilon = 1e-12);
    assert_relative_eq!(fit.rsq, 20.25 / 23.75, epsilon = 1e-12);
    assert_relative_eq!(fit.slope_err, (0.7_f64 / 2.0 / 5.0).sqrt(), epsilon = 1e-12);
}

/// Test two points fit exactly with zero slope error.
#[test]
fn test_linear_two_points() {
    let fit = LinearRegression::fit(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();

    assert_relative_eq!(fit.slope, 2.0);
    assert_relative_eq!(fit.intercept, -1.0);
    assert_eq!(fit.slope_err, 0.0);
}

/// Test degenerate inputs are rejected.
#[test]
fn test_linear_failures() {
    assert_eq!(
        LinearRegression::fit(&[1.0], &[1.0]).unwrap_err(),
        FitError::TooFewPoints { got: 1, min: 2 }
    );
    assert_eq!(
        LinearRegression::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err(),
        FitError::DegenerateWindow
    );
}

/// Test single precision fits go through the same path.
#[test]
fn test_linear_f32() {
    let x: Vec<f32> = (0..37).map(|i| i as f32).collect();
    let y: Vec<f32> = x.iter().map(|v| -0.25 * v + 4.0).collect();

    let fit = LinearRegression::fit(&x, &y).unwrap();

    assert_relative_eq!(fit.slope, -0.25, epsilon = 1e-4);
    assert_relative_eq!(fit.intercept, 4.0, epsilon = 1e-4);
}

// ============================================================================
// Accumulation Tests
// ============================================================================

/// Test SIMD and scalar accumulation agree, including the scalar tail.
#[test]
fn test_simd_matches_scalar() {
    let x: Vec<f64> = (0..23).map(|i| (i as f64).sin() + i as f64).collect();
    let y: Vec<f64> = (0..23).map(|i| (i as f64 * 0.3).cos()).collect();

    let scalar = accumulate_ols_scalar(&x, &y, x[0], y[0]);
    let simd = accumulate_ols_simd_f64(&x, &y, x[0], y[0]);

    assert_relative_eq!(simd.sum_x, scalar.sum_x, max_relative = 1e-12);
    assert_relative_eq!(simd.sum_y, scalar.sum_y, max_relative = 1e-12);
    assert_relative_eq!(simd.sum_xx, scalar.sum_xx, max_relative = 1e-12);
    assert_relative_eq!(simd.sum_xy, scalar.sum_xy, max_relative = 1e-12);
    assert_relative_eq!(simd.sum_yy, scalar.sum_yy, max_relative = 1e-12);

    let xf: Vec<f32> = x.iter().map(|&v| v as f32).collect();
    let yf: Vec<f32> = y.iter().map(|&v| v as f32).collect();
    let scalar = accumulate_ols_scalar(&xf, &yf, xf[0], yf[0]);
    let simd = accumulate_ols_simd_f32(&xf, &yf, xf[0], yf[0]);

    assert_relative_eq!(simd.sum_xx, scalar.sum_xx, max_relative = 1e-4);
    assert_relative_eq!(simd.sum_xy, scalar.sum_xy, max_relative = 1e-4);
}

// ============================================================================
// Exponential Regression Tests
// ============================================================================

/// Test exact exponential data is recovered.
#[test]
fn test_exponential_exact() {
    let x: Vec<f64> = (0..25).map(|i| -2.0 + i as f64 * 0.125).collect();
    let y: Vec<f64> = x.iter().map(|v| 0.8 * (1.7 * v).exp() - 0.4).collect();

    let fit = ExponentialRegression::fit(&x, &y).unwrap();

    assert_relative_eq!(fit.a, 0.8, max_relative = 1e-6);
    assert_relative_eq!(fit.alpha, 1.7, max_relative = 1e-6);
    assert_relative_eq!(fit.b, -0.4, max_relative = 1e-6);
    assert!(fit.ssr < 1e-12);
    assert_eq!(fit.n, 25);
}

/// Test decaying exponentials are found by the scan as well.
#[test]
fn test_exponential_decay() {
    let x: Vec<f64> = (0..30).map(|i| i as f64 * 0.2).collect();
    let y: Vec<f64> = x.iter().map(|v| 5.0 * (-0.9 * v).exp() + 1.0).collect();

    let fit = ExponentialRegression::fit(&x, &y).unwrap();

    assert_relative_eq!(fit.alpha, -0.9, max_relative = 1e-6);
    assert_relative_eq!(fit.b, 1.0, max_relative = 1e-6);
}

/// Test at least three points are required, and three give infinite errors.
#[test]
fn test_exponential_point_requirements() {
    assert_eq!(
        ExponentialRegression::fit(&[0.0, 1.0], &[1.0, 2.0]).unwrap_err(),
        FitError::TooFewPoints { got: 2, min: 3 }
    );

    let x: [f64; 3] = [0.0, 1.0, 2.0];
    let y: [f64; 3] = [0.0, 1.0, 3.0];
    let fit = ExponentialRegression::fit(&x, &y).unwrap();
    assert!(fit.ssr < 1e-12);
    assert!(fit.errors.iter().all(|e| e.is_infinite()));
}

/// Test a window without voltage spread is rejected.
#[test]
fn test_exponential_degenerate() {
    assert_eq!(
        ExponentialRegression::fit(&[1.0, 1.0, 1.0, 1.0], &[0.0, 1.0, 2.0, 3.0]).unwrap_err(),
        FitError::DegenerateWindow
    );
}
