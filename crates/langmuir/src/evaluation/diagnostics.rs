//! Goodness-of-fit metrics for a fitted window.
//!
//! ## Purpose
//!
//! This module evaluates how well a fitted model describes the windowed
//! current samples it was fitted to.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: SSR and RMSE measure the fit error.
//! * **Goodness-of-Fit**: R^2 measures the share of current variance explained.
//!
//! ## Invariants
//!
//! * SSR and RMSE are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a least-squares fit over a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics<T> {
    /// Number of samples in the window.
    pub n: usize,

    /// Residual sum of squares.
    pub ssr: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Compute diagnostics from observed and fitted values.
    pub fn compute(y: &[T], fitted: &[T]) -> Self {
        let n = y.len().min(fitted.len());
        if n == 0 {
            return Self {
                n: 0,
                ssr: T::zero(),
                rmse: T::zero(),
                r_squared: T::zero(),
            };
        }

        let ssr = y
            .iter()
            .zip(fitted.iter())
            .fold(T::zero(), |acc, (&yi, &fi)| acc + (yi - fi) * (yi - fi));

        Self::from_ssr(&y[..n], ssr)
    }

    /// Compute diagnostics from observed values and a known residual sum of squares.
    pub fn from_ssr(y: &[T], ssr: T) -> Self {
        let n = y.len();
        let n_t = T::from(n).unwrap_or(T::one());

        let rmse = if n == 0 { T::zero() } else { (ssr / n_t).sqrt() };

        Self {
            n,
            ssr,
            rmse,
            r_squared: Self::calculate_r_squared(y, ssr),
        }
    }

    /// R^2 = 1 - SS_res / SS_tot; a constant window scores 0.
    pub fn calculate_r_squared(y: &[T], ssr: T) -> T {
        if y.is_empty() {
            return T::zero();
        }

        let n_t = T::from(y.len()).unwrap_or(T::one());
        let mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let ss_tot = y
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));

        if ss_tot > T::zero() {
            (T::one() - ssr / ss_tot).min(T::one())
        } else {
            T::zero()
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Points:  {}", self.n)?;
        writeln!(f, "  SSR:     {:.6}", self.ssr)?;
        writeln!(f, "  RMSE:    {:.6}", self.rmse)?;
        write!(f, "  R^2:     {:.6}", self.r_squared)
    }
}
