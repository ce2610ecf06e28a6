//! Fit models for the zero-current crossing.
//!
//! ## Purpose
//!
//! This module defines the closed set of models that can be fitted to a window
//! of sweep samples, and the operations the engine needs from a fitted model:
//! evaluation, the root (zero-current voltage) with its propagated standard
//! error, and goodness of fit.
//!
//! ## Design notes
//!
//! * **Closed**: [`FitType`] and [`FitFunction`] enumerate exactly the two
//!   supported forms; [`FitModel`] is the seam both variants implement.
//! * **Immutable**: A model value only exists once fitted.
//!
//! ## Key concepts
//!
//! * **Linear**: `f(x) = m * x + b`.
//! * **Exponential plus offset**: `f(x) = a * exp(alpha * x) + b`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::exponential::ExponentialRegression;
use crate::algorithms::regression::{LinearRegression, OlsSolver};
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::primitives::errors::{FitError, FloatingPotentialError};

// ============================================================================
// Fit Type
// ============================================================================

/// Functional form fitted around the zero-crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitType {
    /// `f(x) = m * x + b` (default).
    #[default]
    Linear,

    /// `f(x) = a * exp(alpha * x) + b`.
    Exponential,
}

impl FitType {
    /// Name used when parsing and displaying the fit type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
        }
    }

    /// Fraction of the sweep used as the default minimum window size.
    pub fn default_min_point_factor(self) -> f64 {
        match self {
            Self::Linear => 0.1,
            Self::Exponential => 0.2,
        }
    }

    /// Number of free parameters of the model.
    pub fn n_params(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Exponential => 3,
        }
    }

    /// Fit this model over paired samples.
    pub fn fit<T: OlsSolver>(self, x: &[T], y: &[T]) -> core::result::Result<FitFunction<T>, FitError> {
        Ok(match self {
            Self::Linear => FitFunction::Linear(Linear::fit(x, y)?),
            Self::Exponential => FitFunction::Exponential(ExponentialPlusOffset::fit(x, y)?),
        })
    }
}

impl FromStr for FitType {
    type Err = FloatingPotentialError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "exponential" => Ok(Self::Exponential),
            other => Err(FloatingPotentialError::InvalidFitType(other.to_string())),
        }
    }
}

impl Display for FitType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Model Trait
// ============================================================================

/// Operations shared by every fitted model.
pub trait FitModel<T: Float>: Sized {
    /// Fit the model over paired samples.
    fn fit(x: &[T], y: &[T]) -> core::result::Result<Self, FitError>;

    /// Evaluate the fitted model at `x`.
    fn evaluate(&self, x: T) -> T;

    /// The `x` at which the model is zero and its standard error.
    ///
    /// Both values are NaN when the model has no real root.
    fn root_solve(&self) -> (T, T);

    /// Coefficient of determination over the fitted window.
    fn rsq(&self) -> T;

    /// Fitted parameters.
    fn params(&self) -> &[T];

    /// Standard errors of the fitted parameters.
    fn param_errors(&self) -> &[T];

    /// Goodness-of-fit metrics over the fitted window.
    fn diagnostics(&self) -> &FitDiagnostics<T>;
}

// ============================================================================
// Linear
// ============================================================================

/// Fitted `f(x) = m * x + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear<T> {
    params: [T; 2],
    param_errors: [T; 2],
    diagnostics: FitDiagnostics<T>,
}

impl<T: Float> Linear<T> {
    /// Slope `m`.
    pub fn m(&self) -> T {
        self.params[0]
    }

    /// Intercept `b`.
    pub fn b(&self) -> T {
        self.params[1]
    }
}

impl<T: OlsSolver> FitModel<T> for Linear<T> {
    /// Ordinary least squares.
    ///
    /// The intercept error is reported as `m_err / sqrt(Sxx)`.
    fn fit(x: &[T], y: &[T]) -> core::result::Result<Self, FitError> {
        let reg = LinearRegression::fit(x, y)?;

        let intercept_err = reg.slope_err / reg.sxx.sqrt();
        let n_t = T::from(reg.n).unwrap_or(T::one());

        Ok(Self {
            params: [reg.slope, reg.intercept],
            param_errors: [reg.slope_err, intercept_err],
            diagnostics: FitDiagnostics {
                n: reg.n,
                ssr: reg.ssr,
                rmse: (reg.ssr / n_t).sqrt(),
                r_squared: reg.rsq,
            },
        })
    }

    #[inline]
    fn evaluate(&self, x: T) -> T {
        self.m() * x + self.b()
    }

    /// Root `-b / m`, error `|root| * sqrt((m_err / m)^2 + (b_err / b)^2)`.
    ///
    /// For `b == 0` the root is exactly 0 and the error reduces to `b_err / |m|`.
    fn root_solve(&self) -> (T, T) {
        let (m, b) = (self.m(), self.b());
        let (m_err, b_err) = (self.param_errors[0], self.param_errors[1]);

        if m == T::zero() {
            return (T::nan(), T::nan());
        }

        let root = -b / m;
        let err = if b == T::zero() {
            b_err / m.abs()
        } else {
            root.abs() * ((m_err / m).powi(2) + (b_err / b).powi(2)).sqrt()
        };

        (root, err)
    }

    #[inline]
    fn rsq(&self) -> T {
        self.diagnostics.r_squared
    }

    fn params(&self) -> &[T] {
        &self.params
    }

    fn param_errors(&self) -> &[T] {
        &self.param_errors
    }

    fn diagnostics(&self) -> &FitDiagnostics<T> {
        &self.diagnostics
    }
}

// ============================================================================
// Exponential Plus Offset
// ============================================================================

/// Fitted `f(x) = a * exp(alpha * x) + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialPlusOffset<T> {
    params: [T; 3],
    param_errors: [T; 3],
    diagnostics: FitDiagnostics<T>,
}

impl<T: Float> ExponentialPlusOffset<T> {
    /// Amplitude `a`.
    pub fn a(&self) -> T {
        self.params[0]
    }

    /// Rate `alpha`.
    pub fn alpha(&self) -> T {
        self.params[1]
    }

    /// Offset `b`.
    pub fn b(&self) -> T {
        self.params[2]
    }
}

impl<T: Float> FitModel<T> for ExponentialPlusOffset<T> {
    fn fit(x: &[T], y: &[T]) -> core::result::Result<Self, FitError> {
        let reg = ExponentialRegression::fit(x, y)?;
        let n = reg.n;

        Ok(Self {
            params: [reg.a, reg.alpha, reg.b],
            param_errors: reg.errors,
            diagnostics: FitDiagnostics::from_ssr(&y[..n], reg.ssr),
        })
    }

    #[inline]
    fn evaluate(&self, x: T) -> T {
        self.a() * (self.alpha() * x).exp() + self.b()
    }

    /// Root `ln(-b / a) / alpha` with first-order error propagation over all
    /// three parameters.
    fn root_solve(&self) -> (T, T) {
        let (a, alpha, b) = (self.a(), self.alpha(), self.b());
        let (a_err, alpha_err, b_err) = (
            self.param_errors[0],
            self.param_errors[1],
            self.param_errors[2],
        );

        let ratio = -b / a;
        if !(ratio > T::zero()) || alpha == T::zero() {
            return (T::nan(), T::nan());
        }

        let log_ratio = ratio.ln();
        let root = log_ratio / alpha;

        let a_term = a_err / (a * alpha);
        let b_term = b_err / (b * alpha);
        let alpha_term = alpha_err * log_ratio / (alpha * alpha);
        let err = (a_term.powi(2) + b_term.powi(2) + alpha_term.powi(2)).sqrt();

        (root, err)
    }

    #[inline]
    fn rsq(&self) -> T {
        self.diagnostics.r_squared
    }

    fn params(&self) -> &[T] {
        &self.params
    }

    fn param_errors(&self) -> &[T] {
        &self.param_errors
    }

    fn diagnostics(&self) -> &FitDiagnostics<T> {
        &self.diagnostics
    }
}

// ============================================================================
// Fit Function
// ============================================================================

/// A fitted model of one of the supported [`FitType`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitFunction<T> {
    /// Fitted linear model.
    Linear(Linear<T>),

    /// Fitted exponential-plus-offset model.
    Exponential(ExponentialPlusOffset<T>),
}

impl<T: OlsSolver> FitFunction<T> {
    /// The model's fit type.
    pub fn fit_type(&self) -> FitType {
        match self {
            Self::Linear(_) => FitType::Linear,
            Self::Exponential(_) => FitType::Exponential,
        }
    }

    /// Evaluate the fitted model at `x`.
    pub fn evaluate(&self, x: T) -> T {
        match self {
            Self::Linear(m) => m.evaluate(x),
            Self::Exponential(m) => m.evaluate(x),
        }
    }

    /// The `x` at which the model is zero and its standard error.
    pub fn root_solve(&self) -> (T, T) {
        match self {
            Self::Linear(m) => m.root_solve(),
            Self::Exponential(m) => m.root_solve(),
        }
    }

    /// Coefficient of determination over the fitted window.
    pub fn rsq(&self) -> T {
        match self {
            Self::Linear(m) => m.rsq(),
            Self::Exponential(m) => m.rsq(),
        }
    }

    /// Fitted parameters.
    pub fn params(&self) -> &[T] {
        match self {
            Self::Linear(m) => m.params(),
            Self::Exponential(m) => m.params(),
        }
    }

    /// Standard errors of the fitted parameters.
    pub fn param_errors(&self) -> &[T] {
        match self {
            Self::Linear(m) => m.param_errors(),
            Self::Exponential(m) => m.param_errors(),
        }
    }

    /// Goodness-of-fit metrics over the fitted window.
    pub fn diagnostics(&self) -> &FitDiagnostics<T> {
        match self {
            Self::Linear(m) => m.diagnostics(),
            Self::Exponential(m) => m.diagnostics(),
        }
    }
}

impl<T: Float + Display> Display for FitFunction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Linear(m) => write!(f, "f(x) = {:.6} x + {:.6}", m.m(), m.b()),
            Self::Exponential(m) => write!(
                f,
                "f(x) = {:.6} exp({:.6} x) + {:.6}",
                m.a(),
                m.alpha(),
                m.b()
            ),
        }
    }
}
