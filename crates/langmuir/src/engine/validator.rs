//! Input validation for sweep data and search configuration.
//!
//! ## Purpose
//!
//! This module checks probe sweeps and search parameters before any island
//! detection or fitting happens, and normalizes a valid sweep into owned
//! arrays of plain floats.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Typed vs. untyped**: Typed parameters are mostly guaranteed by the type
//!   system; the `*_value` checks cover configuration arriving as raw numbers.
//!
//! ## Invariants
//!
//! * A sweep that passes [`Validator::check_sweep`] has at least 2 points,
//!   equal-length arrays, only finite values, and non-decreasing voltage.
//!
//! ## Non-goals
//!
//! * This module does not sort or resample sweeps.
//! * This module does not detect crossings or fit anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::engine::policy::MinPoints;
use crate::primitives::errors::FloatingPotentialError;

/// Fewest samples a sweep may hold.
pub const MIN_SWEEP_POINTS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for probe sweeps and search configuration.
///
/// All methods are associated functions that fail fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sweep Validation
    // ========================================================================

    /// Validate a sweep and copy it into owned arrays.
    pub fn check_sweep<T: Float>(
        voltage: &[T],
        current: &[T],
    ) -> Result<(Vec<T>, Vec<T>), FloatingPotentialError> {
        Self::validate_sweep(voltage, current)?;
        Ok((voltage.to_vec(), current.to_vec()))
    }

    /// Validate a sweep without copying it.
    pub fn validate_sweep<T: Float>(voltage: &[T], current: &[T]) -> Result<(), FloatingPotentialError> {
        // Check 1: Non-empty arrays
        if voltage.is_empty() || current.is_empty() {
            return Err(FloatingPotentialError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = voltage.len();
        if n != current.len() {
            return Err(FloatingPotentialError::MismatchedInputs {
                voltage_len: n,
                current_len: current.len(),
            });
        }

        // Check 3: Enough points to bracket a crossing
        if n < MIN_SWEEP_POINTS {
            return Err(FloatingPotentialError::TooFewPoints {
                got: n,
                min: MIN_SWEEP_POINTS,
            });
        }

        // Check 4: All values finite
        for i in 0..n {
            if !voltage[i].is_finite() {
                return Err(Self::non_finite("voltage", i, voltage[i]));
            }
            if !current[i].is_finite() {
                return Err(Self::non_finite("current", i, current[i]));
            }
        }

        // Check 5: Voltage non-decreasing
        if let Some(i) = voltage.windows(2).position(|w| w[1] < w[0]) {
            return Err(FloatingPotentialError::NonMonotonicVoltage { index: i + 1 });
        }

        Ok(())
    }

    fn non_finite<T: Float>(name: &str, index: usize, value: T) -> FloatingPotentialError {
        FloatingPotentialError::InvalidNumericValue(format!(
            "{}[{}]={}",
            name,
            index,
            value.to_f64().unwrap_or(f64::NAN)
        ))
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a minimum-points setting.
    pub fn validate_min_points(min_points: &MinPoints) -> Result<(), FloatingPotentialError> {
        min_points.validate()
    }

    /// Validate a threshold given as a raw number and convert it to a count.
    ///
    /// NaN, infinite, or fractional values are a type error; negative
    /// integers are a value error.
    pub fn validate_threshold_value(threshold: f64) -> Result<usize, FloatingPotentialError> {
        if !threshold.is_finite() || Float::fract(threshold) != 0.0 {
            return Err(FloatingPotentialError::InvalidThresholdType(format!(
                "{threshold}"
            )));
        }
        if threshold < 0.0 {
            return Err(FloatingPotentialError::InvalidThreshold(threshold as i64));
        }
        threshold
            .to_usize()
            .ok_or_else(|| FloatingPotentialError::InvalidThresholdType(format!("{threshold}")))
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FloatingPotentialError> {
        if let Some(param) = duplicate_param {
            return Err(FloatingPotentialError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
