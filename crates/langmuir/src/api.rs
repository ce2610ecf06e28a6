//! High-level API for floating-potential estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder that configures and validates a reusable finder, and a one-shot
//! [`find_floating_potential`] function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated once, when `.build()` is called.
//! * **Deferred errors**: Setting a parameter twice is reported by `.build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FloatingPotentialBuilder`] via `FloatingPotential::new()`.
//! 2. Chain configuration methods (`.fit_type()`, `.min_points()`, etc.).
//! 3. Call `.build()` to get a [`FloatingPotentialFinder`].
//! 4. Call `.find(&voltage, &current)` for each sweep.

// Internal dependencies
use crate::algorithms::regression::OlsSolver;
use crate::engine::executor::{FloatingPotentialExecutor, SweepCheckFn};

// Publicly re-exported types
pub use crate::engine::executor::{FloatingPotentialConfig, DEFAULT_THRESHOLD};
pub use crate::engine::output::FloatingPotentialResult;
pub use crate::engine::policy::{parse_threshold, IslandSelection, MinPoints};
pub use crate::engine::validator::Validator;
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::evaluation::fit_function::{ExponentialPlusOffset, FitFunction, FitModel, FitType, Linear};
pub use crate::primitives::errors::{ErrorKind, FitError, FloatingPotentialError};
pub use crate::primitives::warnings::FloatingPotentialWarning;
pub use crate::primitives::window::{Island, Window};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a floating-potential search.
#[derive(Debug, Clone)]
pub struct FloatingPotentialBuilder<T> {
    /// Model fitted around the crossing (default: linear).
    pub fit_type: Option<FitType>,

    /// Minimum number of samples in the fit window (default: auto).
    pub min_points: Option<MinPoints>,

    /// Largest candidate index gap merged into one island (default: 1).
    pub threshold: Option<usize>,

    /// Island selection when several survive merging (default: span).
    pub island_selection: Option<IslandSelection>,

    // ======================================
    // DEV
    // ======================================
    /// Custom sweep check.
    #[doc(hidden)]
    pub custom_sweep_check: Option<SweepCheckFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: OlsSolver> Default for FloatingPotentialBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: OlsSolver> FloatingPotentialBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fit_type: None,
            min_points: None,
            threshold: None,
            island_selection: None,
            custom_sweep_check: None,
            duplicate_param: None,
        }
    }

    /// Set the model fitted around the crossing.
    pub fn fit_type(mut self, fit_type: FitType) -> Self {
        if self.fit_type.is_some() {
            self.duplicate_param = Some("fit_type");
        }
        self.fit_type = Some(fit_type);
        self
    }

    /// Set the minimum number of samples in the fit window.
    pub fn min_points(mut self, min_points: MinPoints) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(min_points);
        self
    }

    /// Set the largest candidate index gap merged into one island.
    pub fn threshold(mut self, threshold: usize) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set how the fit window is placed when several islands survive.
    pub fn island_selection(mut self, selection: IslandSelection) -> Self {
        if self.island_selection.is_some() {
            self.duplicate_param = Some("island_selection");
        }
        self.island_selection = Some(selection);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom sweep check.
    #[doc(hidden)]
    pub fn custom_sweep_check(mut self, check: SweepCheckFn<T>) -> Self {
        self.custom_sweep_check = Some(check);
        self
    }

    /// Validate the configuration and build a finder.
    pub fn build(self) -> Result<FloatingPotentialFinder<T>, FloatingPotentialError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let min_points = self.min_points.unwrap_or_default();
        Validator::validate_min_points(&min_points)?;

        Ok(FloatingPotentialFinder {
            config: FloatingPotentialConfig {
                fit_type: self.fit_type.unwrap_or_default(),
                min_points,
                threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
                island_selection: self.island_selection.unwrap_or_default(),
                custom_sweep_check: self.custom_sweep_check,
            },
        })
    }
}

// ============================================================================
// Finder
// ============================================================================

/// A validated, reusable floating-potential search.
#[derive(Debug, Clone, Copy)]
pub struct FloatingPotentialFinder<T> {
    config: FloatingPotentialConfig<T>,
}

impl<T: OlsSolver> FloatingPotentialFinder<T> {
    /// Estimate the floating potential of one sweep.
    ///
    /// `voltage` must be non-decreasing; `current` is the probe current at
    /// each voltage. A sweep whose current never crosses zero yields the null
    /// result rather than an error.
    pub fn find(
        &self,
        voltage: &[T],
        current: &[T],
    ) -> Result<FloatingPotentialResult<T>, FloatingPotentialError> {
        FloatingPotentialExecutor::run_with_config(voltage, current, &self.config)
    }

    /// The validated configuration.
    pub fn config(&self) -> &FloatingPotentialConfig<T> {
        &self.config
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// Estimate the floating potential of one sweep in a single call.
///
/// Equivalent to building a finder with the given parameters and the default
/// [`IslandSelection`].
pub fn find_floating_potential<T: OlsSolver>(
    voltage: &[T],
    current: &[T],
    fit_type: FitType,
    min_points: MinPoints,
    threshold: usize,
) -> Result<FloatingPotentialResult<T>, FloatingPotentialError> {
    FloatingPotentialBuilder::new()
        .fit_type(fit_type)
        .min_points(min_points)
        .threshold(threshold)
        .build()?
        .find(voltage, current)
}
