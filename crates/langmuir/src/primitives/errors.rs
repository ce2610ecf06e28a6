//! Error types for floating-potential estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can abort a floating-potential
//! search: malformed sweeps, invalid search parameters, and fits that cannot be
//! resolved from otherwise valid data.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Classified**: Every variant maps to an [`ErrorKind`] so callers can tell
//!   a wrongly-typed parameter from an out-of-range one or from a failed fit.
//! * **Deferred**: Builder misuse is recorded and reported from `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Data-quality warnings live in [`crate::primitives::warnings`]; they never abort a call.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Broad class of a [`FloatingPotentialError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter was given as a value of the wrong type (e.g., text where a
    /// number was expected).
    Type,

    /// A parameter or input array has the right type but an invalid value.
    Value,

    /// The regression over the fit window could not be resolved.
    Fit,
}

// ============================================================================
// Fit Error
// ============================================================================

/// Failure of a least-squares fit over a window of sweep samples.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// The window holds fewer samples than the model has free parameters.
    TooFewPoints {
        /// Number of samples in the window.
        got: usize,
        /// Minimum required by the model.
        min: usize,
    },

    /// All voltages in the window are identical, so the slope is undefined.
    DegenerateWindow,

    /// The normal equations are singular.
    Singular,

    /// Levenberg–Marquardt exhausted its iteration budget.
    NotConverged {
        /// Iterations performed before giving up.
        iterations: usize,
    },

    /// The fit produced NaN or infinite parameters.
    NonFinite,
}

impl Display for FitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TooFewPoints { got, min } => {
                write!(f, "fit window has {got} points, model needs at least {min}")
            }
            Self::DegenerateWindow => write!(f, "fit window has zero voltage spread"),
            Self::Singular => write!(f, "normal equations are singular"),
            Self::NotConverged { iterations } => {
                write!(f, "fit did not converge after {iterations} iterations")
            }
            Self::NonFinite => write!(f, "fit produced non-finite parameters"),
        }
    }
}

#[cfg(feature = "std")]
impl Error for FitError {}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for floating-potential estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatingPotentialError {
    /// Sweep arrays are empty.
    EmptyInput,

    /// `voltage` and `current` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the voltage array.
        voltage_len: usize,
        /// Number of elements in the current array.
        current_len: usize,
    },

    /// The sweep holds fewer points than the minimum.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Sweep data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Voltage decreases at `index` (compared to `index - 1`).
    NonMonotonicVoltage {
        /// First offending index.
        index: usize,
    },

    /// `fit_type` is not one of `"linear"` or `"exponential"`.
    InvalidFitType(String),

    /// `island_selection` names no known policy.
    InvalidIslandSelection(String),

    /// `min_points` is negative, non-finite, or a fraction outside (0, 1).
    InvalidMinPoints(f64),

    /// `min_points` could not be interpreted as a number.
    InvalidMinPointsType(String),

    /// `threshold` is negative.
    InvalidThreshold(i64),

    /// `threshold` is not an integer.
    InvalidThresholdType(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The fit over the selected window failed.
    Fit(FitError),
}

impl FloatingPotentialError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMinPointsType(_) | Self::InvalidThresholdType(_) => ErrorKind::Type,
            Self::Fit(_) => ErrorKind::Fit,
            _ => ErrorKind::Value,
        }
    }
}

impl From<FitError> for FloatingPotentialError {
    fn from(err: FitError) -> Self {
        Self::Fit(err)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FloatingPotentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                voltage_len,
                current_len,
            } => write!(
                f,
                "Length mismatch: voltage has {voltage_len} points, current has {current_len}"
            ),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NonMonotonicVoltage { index } => write!(
                f,
                "Voltage array is not monotonically increasing (decreases at index {index})"
            ),
            Self::InvalidFitType(name) => write!(
                f,
                "Invalid fit_type: '{name}' (expected 'linear' or 'exponential')"
            ),
            Self::InvalidIslandSelection(name) => write!(
                f,
                "Invalid island_selection: '{name}' (expected 'span', 'widest', 'first' or 'last')"
            ),
            Self::InvalidMinPoints(v) => write!(
                f,
                "Invalid min_points: {v} (must be >= 0, fractions must be in (0, 1))"
            ),
            Self::InvalidMinPointsType(s) => {
                write!(f, "Invalid min_points type: '{s}' is not a number")
            }
            Self::InvalidThreshold(v) => write!(f, "Invalid threshold: {v} (must be >= 0)"),
            Self::InvalidThresholdType(s) => {
                write!(f, "Invalid threshold type: '{s}' is not an integer")
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
            Self::Fit(err) => write!(f, "Fit failed: {err}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FloatingPotentialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fit(err) => Some(err),
            _ => None,
        }
    }
}
