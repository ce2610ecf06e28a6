//! Nonlinear least squares for `y = a * exp(alpha * x) + b`.
//!
//! ## Purpose
//!
//! This module fits the exponential-plus-offset model used to describe the
//! ion/electron transition region of a Langmuir sweep.
//!
//! ## Design notes
//!
//! * **Initial guess**: For a fixed `alpha` the model is linear in `a` and
//!   `b`, so a logarithmic scan over `alpha` with a closed-form sub-fit picks
//!   a starting point without user-supplied guesses.
//! * **Refinement**: Levenberg–Marquardt with multiplicative damping on the
//!   diagonal of the normal equations.
//! * **Uncertainty**: Parameter errors follow the usual nonlinear
//!   least-squares estimate `sqrt(diag((J^T J)^-1) * SSR / (n - 3))`.
//!
//! ## Invariants
//!
//! * At least 3 points are required; with exactly 3 the parameter errors are infinite.
//! * Returned parameters are finite.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{invert, solve};
use crate::primitives::errors::FitError;

// ============================================================================
// Constants
// ============================================================================

/// Number of free parameters (`a`, `alpha`, `b`).
pub const N_PARAMS: usize = 3;

// Levenberg–Marquardt budget and stopping tolerances.
const MAX_ITERATIONS: usize = 500;
const FTOL: f64 = 1e-14;
const XTOL: f64 = 1e-14;
const LAMBDA_INIT: f64 = 1e-3;
const LAMBDA_MAX: f64 = 1e16;

// Scan grid: alpha = +/- 10^(k / 4) / span for k in SCAN_K.
const SCAN_K: core::ops::RangeInclusive<i32> = -8..=12;

// ============================================================================
// ExponentialRegression
// ============================================================================

/// Least-squares fit of `y = a * exp(alpha * x) + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialRegression<T> {
    /// Amplitude `a`.
    pub a: T,

    /// Rate `alpha`.
    pub alpha: T,

    /// Offset `b`.
    pub b: T,

    /// Standard errors of `(a, alpha, b)`.
    pub errors: [T; N_PARAMS],

    /// Residual sum of squares.
    pub ssr: T,

    /// Levenberg–Marquardt iterations performed.
    pub iterations: usize,

    /// Number of points fitted.
    pub n: usize,
}

impl<T: Float> ExponentialRegression<T> {
    /// Fit the model over paired samples (x sorted non-decreasing).
    pub fn fit(x: &[T], y: &[T]) -> Result<Self, FitError> {
        let n = x.len().min(y.len());
        if n < N_PARAMS {
            return Err(FitError::TooFewPoints {
                got: n,
                min: N_PARAMS,
            });
        }
        let (x, y) = (&x[..n], &y[..n]);

        let mut params = initial_guess(x, y)?;
        let mut ssr = sum_squared_residuals(x, y, &params);
        let mut lambda = cast::<T>(LAMBDA_INIT);
        let ftol = cast::<T>(FTOL);
        let xtol = cast::<T>(XTOL);

        let mut iterations = 0;
        let mut converged = false;
        while iterations < MAX_ITERATIONS {
            iterations += 1;
            let (jtj, jtr) = normal_equations(x, y, &params);

            let diag_floor = T::epsilon()
                * (0..N_PARAMS).fold(T::zero(), |acc, i| acc.max(jtj[i][i]));

            // Increase damping until a step lowers the residual
            let mut accepted = false;
            while lambda <= cast::<T>(LAMBDA_MAX) {
                let mut damped = jtj;
                for (i, row) in damped.iter_mut().enumerate() {
                    row[i] = jtj[i][i] + lambda * jtj[i][i].max(diag_floor);
                }

                let Some(step) = solve(&damped, &jtr, T::epsilon()) else {
                    lambda = lambda * cast(10.0);
                    continue;
                };

                let trial = [params[0] + step[0], params[1] + step[1], params[2] + step[2]];
                let trial_ssr = sum_squared_residuals(x, y, &trial);

                if trial_ssr.is_finite() && trial_ssr <= ssr {
                    let small_step = (0..N_PARAMS)
                        .all(|i| step[i].abs() <= xtol * (params[i].abs() + xtol));
                    let small_gain = ssr - trial_ssr <= ftol * ssr;

                    params = trial;
                    ssr = trial_ssr;
                    lambda = (lambda / cast(10.0)).max(T::epsilon());
                    accepted = true;
                    converged = small_step || small_gain;
                    break;
                }

                lambda = lambda * cast(10.0);
            }

            // No descent direction left at any damping: a local minimum
            if !accepted {
                converged = true;
            }
            if converged {
                break;
            }
        }

        if !converged {
            return Err(FitError::NotConverged { iterations });
        }
        if params.iter().any(|p| !p.is_finite()) {
            return Err(FitError::NonFinite);
        }

        let errors = parameter_errors(x, y, &params, ssr)?;
        log::debug!(
            "exponential fit converged after {} iterations (ssr = {:?})",
            iterations,
            ssr.to_f64()
        );

        Ok(Self {
            a: params[0],
            alpha: params[1],
            b: params[2],
            errors,
            ssr,
            iterations,
            n,
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn cast<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

#[inline]
fn model<T: Float>(x: T, p: &[T; N_PARAMS]) -> T {
    p[0] * (p[1] * x).exp() + p[2]
}

fn sum_squared_residuals<T: Float>(x: &[T], y: &[T], p: &[T; N_PARAMS]) -> T {
    x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xv, &yv)| {
        let r = yv - model(xv, p);
        acc + r * r
    })
}

// Assemble J^T J and J^T r for the current parameters.
fn normal_equations<T: Float>(
    x: &[T],
    y: &[T],
    p: &[T; N_PARAMS],
) -> ([[T; N_PARAMS]; N_PARAMS], [T; N_PARAMS]) {
    let mut jtj = [[T::zero(); N_PARAMS]; N_PARAMS];
    let mut jtr = [T::zero(); N_PARAMS];

    for (&xv, &yv) in x.iter().zip(y.iter()) {
        let e = (p[1] * xv).exp();
        let grad = [e, p[0] * xv * e, T::one()];
        let r = yv - (p[0] * e + p[2]);

        for i in 0..N_PARAMS {
            jtr[i] = jtr[i] + grad[i] * r;
            for j in 0..N_PARAMS {
                jtj[i][j] = jtj[i][j] + grad[i] * grad[j];
            }
        }
    }

    (jtj, jtr)
}

// Scan alpha on a log grid; for each candidate solve the linear sub-problem.
fn initial_guess<T: Float>(x: &[T], y: &[T]) -> Result<[T; N_PARAMS], FitError> {
    let n = x.len();
    let span = x[n - 1] - x[0];
    if !(span > T::zero()) {
        return Err(FitError::DegenerateWindow);
    }
    let center = (x[0] + x[n - 1]) / cast(2.0);

    let mut best: Option<([T; N_PARAMS], T)> = None;
    for k in SCAN_K {
        let magnitude = cast::<T>(10.0).powf(cast(f64::from(k) / 4.0)) / span;
        for alpha in [magnitude, -magnitude] {
            let Some((a_shifted, b)) = linear_subfit(x, y, alpha, center) else {
                continue;
            };
            let candidate = [a_shifted * (-alpha * center).exp(), alpha, b];
            let ssr = sum_squared_residuals(x, y, &candidate);
            if !ssr.is_finite() {
                continue;
            }
            if best.map_or(true, |(_, best_ssr)| ssr < best_ssr) {
                best = Some((candidate, ssr));
            }
        }
    }

    best.map(|(p, _)| p).ok_or(FitError::Singular)
}

// Least squares of y on exp(alpha * (x - center)) and a constant.
fn linear_subfit<T: Float>(x: &[T], y: &[T], alpha: T, center: T) -> Option<(T, T)> {
    let n_t = T::from(x.len())?;
    let (mut se, mut sy, mut see, mut sey) = (T::zero(), T::zero(), T::zero(), T::zero());
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        let e = (alpha * (xv - center)).exp();
        se = se + e;
        sy = sy + yv;
        see = see + e * e;
        sey = sey + e * yv;
    }

    let var = see - se * se / n_t;
    if !(var > T::epsilon() * see) || !var.is_finite() {
        return None;
    }
    let a = (sey - se * sy / n_t) / var;
    let b = (sy - a * se) / n_t;
    Some((a, b))
}

fn parameter_errors<T: Float>(
    x: &[T],
    y: &[T],
    p: &[T; N_PARAMS],
    ssr: T,
) -> Result<[T; N_PARAMS], FitError> {
    let (jtj, _) = normal_equations(x, y, p);
    let cov = invert(&jtj, T::epsilon()).ok_or(FitError::Singular)?;

    let dof = x.len() - N_PARAMS;
    if dof == 0 {
        return Ok([T::infinity(); N_PARAMS]);
    }
    let s2 = ssr / T::from(dof).unwrap_or(T::one());

    Ok([
        (cov[0][0].abs() * s2).sqrt(),
        (cov[1][1].abs() * s2).sqrt(),
        (cov[2][2].abs() * s2).sqrt(),
    ])
}
