//! Windowing policies: minimum fit points and island selection.
//!
//! ## Purpose
//!
//! This module defines how many samples a fit window must hold and which
//! island(s) the window is built around when more than one survives merging.
//!
//! ## Key concepts
//!
//! * **Fractions round up to even**: `ceil(f * n)`, bumped to the next even
//!   count. The default for each fit type is a fraction of the sweep.
//! * **Zero means everything**: an explicit count of 0 fits the whole sweep.
//! * **Clamping is the caller's job**: [`MinPoints::resolve`] may exceed the
//!   sweep length; the executor clamps and warns.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::evaluation::fit_function::FitType;
use crate::math::rounding::fraction_to_count;
use crate::primitives::errors::FloatingPotentialError;
use crate::primitives::window::{Island, Window};

// ============================================================================
// Minimum Points
// ============================================================================

/// Minimum number of samples in the fit window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MinPoints {
    /// Fraction of the sweep chosen by the fit type (0.1 linear, 0.2 exponential).
    #[default]
    Auto,

    /// Absolute sample count; 0 selects the whole sweep.
    Count(usize),

    /// Fraction of the sweep length, strictly between 0 and 1.
    Fraction(f64),
}

impl MinPoints {
    /// Interpret an untyped numeric value.
    ///
    /// * negative or non-finite → [`FloatingPotentialError::InvalidMinPoints`]
    /// * `0` → `Count(0)`
    /// * `(0, 1)` → `Fraction`
    /// * `>= 1` → `Count`, rounded to the nearest integer
    pub fn from_value(value: f64) -> core::result::Result<Self, FloatingPotentialError> {
        if !value.is_finite() || value < 0.0 {
            return Err(FloatingPotentialError::InvalidMinPoints(value));
        }
        if value == 0.0 {
            return Ok(Self::Count(0));
        }
        if value < 1.0 {
            return Ok(Self::Fraction(value));
        }

        Float::round(value)
            .to_usize()
            .map(Self::Count)
            .ok_or(FloatingPotentialError::InvalidMinPoints(value))
    }

    /// Check that the variant carries a usable value.
    pub fn validate(&self) -> core::result::Result<(), FloatingPotentialError> {
        match *self {
            Self::Fraction(f) if !(f > 0.0 && f < 1.0) => {
                Err(FloatingPotentialError::InvalidMinPoints(f))
            }
            _ => Ok(()),
        }
    }

    /// Resolve to a sample count for an `n`-sample sweep.
    pub fn resolve(&self, fit_type: FitType, n: usize) -> usize {
        match *self {
            Self::Auto => fraction_to_count(fit_type.default_min_point_factor(), n),
            Self::Count(0) => n,
            Self::Count(k) => k,
            Self::Fraction(f) => fraction_to_count(f, n),
        }
    }
}

impl FromStr for MinPoints {
    type Err = FloatingPotentialError;

    /// `"auto"`, `"none"` or an empty string select [`MinPoints::Auto`];
    /// anything else must parse as a number.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("auto")
            || trimmed.eq_ignore_ascii_case("none")
        {
            return Ok(Self::Auto);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| FloatingPotentialError::InvalidMinPointsType(trimmed.to_string()))?;
        Self::from_value(value)
    }
}

impl Display for MinPoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Count(k) => write!(f, "{k}"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

// ============================================================================
// Island Selection
// ============================================================================

/// Which island(s) the fit window is built around when several survive merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IslandSelection {
    /// Fit the span from the first island's start to the last island's stop,
    /// but only when that span fits inside `min_points`; otherwise the
    /// crossing is ambiguous and no fit is made (default).
    #[default]
    Span,

    /// Fit around the island with the most samples (earliest on ties).
    Widest,

    /// Fit around the first island.
    First,

    /// Fit around the last island.
    Last,
}

impl IslandSelection {
    /// Choose the base window for a non-empty island list.
    ///
    /// Returns `None` when the crossing is ambiguous under this policy.
    pub fn select(self, islands: &[Island], min_points: usize) -> Option<Window> {
        let (first, last) = (islands.first()?, islands.last()?);

        match self {
            Self::Span => {
                let span = Window::spanning(first, last);
                if islands.len() > 1 && span.len() > min_points {
                    None
                } else {
                    Some(span)
                }
            }
            Self::Widest => {
                let widest = islands
                    .iter()
                    .fold(first, |best, isl| if isl.len() > best.len() { isl } else { best });
                Some(Window::from(*widest))
            }
            Self::First => Some(Window::from(*first)),
            Self::Last => Some(Window::from(*last)),
        }
    }
}

impl FromStr for IslandSelection {
    type Err = FloatingPotentialError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "span" => Ok(Self::Span),
            "widest" => Ok(Self::Widest),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => Err(FloatingPotentialError::InvalidIslandSelection(other.to_string())),
        }
    }
}

// ============================================================================
// Threshold
// ============================================================================

/// Parse an island-merge threshold from text.
///
/// Non-numeric or non-integral text is a type error; negative integers are a
/// value error.
pub fn parse_threshold(s: &str) -> core::result::Result<usize, FloatingPotentialError> {
    let trimmed = s.trim();
    match trimmed.parse::<i64>() {
        Ok(v) if v < 0 => Err(FloatingPotentialError::InvalidThreshold(v)),
        Ok(v) => usize::try_from(v).map_err(|_| FloatingPotentialError::InvalidThreshold(v)),
        Err(_) => Err(FloatingPotentialError::InvalidThresholdType(trimmed.to_string())),
    }
}
