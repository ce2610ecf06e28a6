//! Linear Least-Squares Logic
//!
//! ## Purpose
//!
//! This module provides the ordinary least-squares (OLS) machinery behind the
//! linear fit model, including:
//! - Generic and SIMD-optimized accumulation of the regression sums.
//! - A solver producing slope, intercept, slope standard error and r².
//!
//! Sums are accumulated about the first sample of the window, which keeps
//! the centered sums accurate when voltages carry a large common offset.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Regression Sums
// ============================================================================

/// Raw regression sums over `(x - x0, y - y0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlsSums<T> {
    /// Sum of shifted x-values.
    pub sum_x: T,
    /// Sum of shifted y-values.
    pub sum_y: T,
    /// Sum of squared shifted x-values.
    pub sum_xx: T,
    /// Sum of shifted x*y products.
    pub sum_xy: T,
    /// Sum of squared shifted y-values.
    pub sum_yy: T,
}

impl<T: Float> OlsSums<T> {
    fn zero() -> Self {
        Self {
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xx: T::zero(),
            sum_xy: T::zero(),
            sum_yy: T::zero(),
        }
    }
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of the OLS sums (generic Float).
#[inline]
pub fn accumulate_ols_scalar<T: Float>(x: &[T], y: &[T], x0: T, y0: T) -> OlsSums<T> {
    let mut sums = OlsSums::zero();

    for (&xv, &yv) in x.iter().zip(y.iter()) {
        let dx = xv - x0;
        let dy = yv - y0;

        sums.sum_x = sums.sum_x + dx;
        sums.sum_y = sums.sum_y + dy;
        sums.sum_xx = sums.sum_xx + dx * dx;
        sums.sum_xy = sums.sum_xy + dx * dy;
        sums.sum_yy = sums.sum_yy + dy * dy;
    }

    sums
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation of the OLS sums (f64).
#[inline]
pub fn accumulate_ols_simd_f64(x: &[f64], y: &[f64], x0: f64, y0: f64) -> OlsSums<f64> {
    let n = x.len().min(y.len());

    let shift_x = f64x2::splat(x0);
    let shift_y = f64x2::splat(y0);
    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);
    let mut s_yy = f64x2::splat(0.0);

    let mut x_chunks = x[..n].chunks_exact(2);
    let mut y_chunks = y[..n].chunks_exact(2);
    for (xc, yc) in (&mut x_chunks).zip(&mut y_chunks) {
        let dx = f64x2::new([xc[0], xc[1]]) - shift_x;
        let dy = f64x2::new([yc[0], yc[1]]) - shift_y;

        s_x += dx;
        s_y += dy;
        s_xx += dx * dx;
        s_xy += dx * dy;
        s_yy += dy * dy;
    }

    let tail = accumulate_ols_scalar(x_chunks.remainder(), y_chunks.remainder(), x0, y0);

    OlsSums {
        sum_x: s_x.reduce_add() + tail.sum_x,
        sum_y: s_y.reduce_add() + tail.sum_y,
        sum_xx: s_xx.reduce_add() + tail.sum_xx,
        sum_xy: s_xy.reduce_add() + tail.sum_xy,
        sum_yy: s_yy.reduce_add() + tail.sum_yy,
    }
}

/// SIMD-optimized accumulation of the OLS sums (f32).
#[inline]
pub fn accumulate_ols_simd_f32(x: &[f32], y: &[f32], x0: f32, y0: f32) -> OlsSums<f32> {
    let n = x.len().min(y.len());

    let shift_x = f32x8::splat(x0);
    let shift_y = f32x8::splat(y0);
    let mut s_x = f32x8::splat(0.0);
    let mut s_y = f32x8::splat(0.0);
    let mut s_xx = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);
    let mut s_yy = f32x8::splat(0.0);

    let mut x_chunks = x[..n].chunks_exact(8);
    let mut y_chunks = y[..n].chunks_exact(8);
    for (xc, yc) in (&mut x_chunks).zip(&mut y_chunks) {
        let mut xa = [0.0f32; 8];
        let mut ya = [0.0f32; 8];
        xa.copy_from_slice(xc);
        ya.copy_from_slice(yc);

        let dx = f32x8::new(xa) - shift_x;
        let dy = f32x8::new(ya) - shift_y;

        s_x += dx;
        s_y += dy;
        s_xx += dx * dx;
        s_xy += dx * dy;
        s_yy += dy * dy;
    }

    let tail = accumulate_ols_scalar(x_chunks.remainder(), y_chunks.remainder(), x0, y0);

    OlsSums {
        sum_x: s_x.reduce_add() + tail.sum_x,
        sum_y: s_y.reduce_add() + tail.sum_y,
        sum_xx: s_xx.reduce_add() + tail.sum_xx,
        sum_xy: s_xy.reduce_add() + tail.sum_xy,
        sum_yy: s_yy.reduce_add() + tail.sum_yy,
    }
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific least-squares accumulation.
pub trait OlsSolver: Float {
    /// Accumulate regression sums about `(x0, y0)`.
    #[inline]
    fn accumulate_ols(x: &[Self], y: &[Self], x0: Self, y0: Self) -> OlsSums<Self> {
        accumulate_ols_scalar(x, y, x0, y0)
    }
}

impl OlsSolver for f64 {
    #[inline]
    fn accumulate_ols(x: &[f64], y: &[f64], x0: f64, y0: f64) -> OlsSums<f64> {
        accumulate_ols_simd_f64(x, y, x0, y0)
    }
}

impl OlsSolver for f32 {
    #[inline]
    fn accumulate_ols(x: &[f32], y: &[f32], x0: f32, y0: f32) -> OlsSums<f32> {
        accumulate_ols_simd_f32(x, y, x0, y0)
    }
}

// ============================================================================
// LinearRegression
// ============================================================================

/// Ordinary least-squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression<T> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Standard error of the slope; zero for a two-point fit.
    pub slope_err: T,

    /// Centered sum of squares of x, `sum((x - x_mean)^2)`.
    pub sxx: T,

    /// Residual sum of squares.
    pub ssr: T,

    /// Squared Pearson correlation between x and y.
    pub rsq: T,

    /// Number of points fitted.
    pub n: usize,
}

impl<T: OlsSolver> LinearRegression<T> {
    /// Fit OLS regression over paired samples.
    pub fn fit(x: &[T], y: &[T]) -> Result<Self, FitError> {
        let n = x.len().min(y.len());
        if n < 2 {
            return Err(FitError::TooFewPoints { got: n, min: 2 });
        }

        let (x0, y0) = (x[0], y[0]);
        let sums = T::accumulate_ols(&x[..n], &y[..n], x0, y0);

        let n_t = T::from(n).unwrap_or(T::one());
        let x_mean = sums.sum_x / n_t;
        let y_mean = sums.sum_y / n_t;

        let sxx = sums.sum_xx - sums.sum_x * x_mean;
        let sxy = sums.sum_xy - sums.sum_x * y_mean;
        let syy = (sums.sum_yy - sums.sum_y * y_mean).max(T::zero());

        if !(sxx > T::epsilon() * sums.sum_xx) {
            return Err(FitError::DegenerateWindow);
        }

        let slope = sxy / sxx;
        let intercept = (y_mean + y0) - slope * (x_mean + x0);
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(FitError::NonFinite);
        }

        let ssr = (syy - slope * sxy).max(T::zero());
        let rsq = if syy > T::zero() {
            ((sxy * sxy) / (sxx * syy)).min(T::one())
        } else {
            T::zero()
        };

        // Two points fit exactly; there is no residual degree of freedom.
        let slope_err = if n == 2 {
            T::zero()
        } else {
            let dof = T::from(n - 2).unwrap_or(T::one());
            (ssr / dof / sxx).sqrt()
        };

        Ok(Self {
            slope,
            intercept,
            slope_err,
            sxx,
            ssr,
            rsq,
            n,
        })
    }
}
