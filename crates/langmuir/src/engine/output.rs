//! Result record of a floating-potential search.
//!
//! ## Purpose
//!
//! This module defines [`FloatingPotentialResult`], which bundles the
//! estimated floating potential with its uncertainty, the fitted model, and
//! the index ranges that produced it.
//!
//! ## Design notes
//!
//! * **Absence is explicit**: Numeric fields hold NaN and optional fields hold
//!   `None` when no crossing could be resolved.
//! * **Warnings travel with the result**: every warning raised during the
//!   search is recorded, so callers need not install a logger to see them.
//!
//! ## Invariants
//!
//! * `func`, `rsq` and `indices` are either all present or all absent.
//! * When `indices` is present it contains every island in `islands` that
//!   the window was built around.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::fit_function::FitFunction;
use crate::primitives::warnings::FloatingPotentialWarning;
use crate::primitives::window::{Island, Window};

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of one floating-potential search.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingPotentialResult<T> {
    /// Estimated floating potential (NaN if not resolved).
    pub vf: T,

    /// Standard error of `vf` (NaN if not resolved).
    pub vf_err: T,

    /// Coefficient of determination of the fit.
    pub rsq: Option<T>,

    /// The fitted model.
    pub func: Option<FitFunction<T>>,

    /// Every crossing island detected in the sweep.
    pub islands: Option<Vec<Island>>,

    /// Window of samples the model was fitted to.
    pub indices: Option<Window>,

    /// Warnings raised during the search, in emission order.
    pub warnings: Vec<FloatingPotentialWarning>,
}

impl<T: Float> FloatingPotentialResult<T> {
    /// The result of a sweep with no resolvable crossing.
    pub fn null() -> Self {
        Self {
            vf: T::nan(),
            vf_err: T::nan(),
            rsq: None,
            func: None,
            islands: None,
            indices: None,
            warnings: Vec::new(),
        }
    }

    /// Check whether no floating potential was resolved.
    pub fn is_null(&self) -> bool {
        self.func.is_none() && self.vf.is_nan()
    }

    /// Check whether any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check whether the current crosses zero in more than one island.
    pub fn has_multiple_islands(&self) -> bool {
        self.islands.as_ref().is_some_and(|islands| islands.len() > 1)
    }
}

impl FloatingPotentialResult<f64> {
    /// Null result for `f64` sweeps.
    pub const NULL: Self = Self {
        vf: f64::NAN,
        vf_err: f64::NAN,
        rsq: None,
        func: None,
        islands: None,
        indices: None,
        warnings: Vec::new(),
    };
}

impl FloatingPotentialResult<f32> {
    /// Null result for `f32` sweeps.
    pub const NULL: Self = Self {
        vf: f32::NAN,
        vf_err: f32::NAN,
        rsq: None,
        func: None,
        islands: None,
        indices: None,
        warnings: Vec::new(),
    };
}

impl<T: Float> Default for FloatingPotentialResult<T> {
    fn default() -> Self {
        Self::null()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FloatingPotentialResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;

        if self.is_null() {
            writeln!(f, "  Floating potential: not resolved")?;
        } else {
            writeln!(f, "  Floating potential: {:.6} +/- {:.6}", self.vf, self.vf_err)?;
        }
        if let Some(rsq) = self.rsq {
            writeln!(f, "  R^2:                {:.6}", rsq)?;
        }
        if let Some(func) = &self.func {
            writeln!(f, "  Model:              {}", func)?;
        }
        if let Some(window) = &self.indices {
            writeln!(f, "  Fit window:         {} ({} points)", window, window.len())?;
        }

        match &self.islands {
            Some(islands) => {
                write!(f, "  Islands:           ")?;
                for island in islands {
                    write!(f, " {}", island)?;
                }
                writeln!(f)?;
            }
            None => writeln!(f, "  Islands:            none")?,
        }

        for warning in &self.warnings {
            writeln!(f, "  Warning: {}", warning)?;
        }

        Ok(())
    }
}
