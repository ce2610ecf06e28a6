//! Execution engine for floating-potential searches.
//!
//! ## Purpose
//!
//! This module runs one search end to end: it validates the sweep, detects
//! crossing islands, resolves the fit window, fits the configured model, and
//! assembles the [`FloatingPotentialResult`].
//!
//! ## Design notes
//!
//! * The sweep check runs exactly once per call and before anything else.
//! * A sweep without crossings is not an error; it yields the null result.
//! * Warnings are logged and recorded on the result in emission order.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The fit window lies inside `[0, n)` and holds at least the effective
//!   `min_points` samples.
//! * Islands are reported in increasing index order.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`
//!   when the finder is built).
//! * This module does not format results for display.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::crossing::detect_islands;
use crate::algorithms::regression::OlsSolver;
use crate::engine::output::FloatingPotentialResult;
use crate::engine::policy::{IslandSelection, MinPoints};
use crate::engine::validator::Validator;
use crate::evaluation::fit_function::FitType;
use crate::primitives::errors::FloatingPotentialError;
use crate::primitives::warnings::FloatingPotentialWarning;

/// Default island-merge threshold.
pub const DEFAULT_THRESHOLD: usize = 1;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom sweep check.
///
/// Receives the raw `(voltage, current)` arrays and returns the normalized
/// copies the search runs on.
#[doc(hidden)]
pub type SweepCheckFn<T> = fn(
    &[T], // voltage
    &[T], // current
) -> Result<(Vec<T>, Vec<T>), FloatingPotentialError>;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one floating-potential search.
#[derive(Debug, Clone, Copy)]
pub struct FloatingPotentialConfig<T> {
    /// Model fitted around the crossing.
    pub fit_type: FitType,

    /// Minimum number of samples in the fit window.
    pub min_points: MinPoints,

    /// Largest candidate index gap still merged into one island.
    pub threshold: usize,

    /// Which island(s) the window is built around.
    pub island_selection: IslandSelection,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom sweep check replacing [`Validator::check_sweep`].
    #[doc(hidden)]
    pub custom_sweep_check: Option<SweepCheckFn<T>>,
}

impl<T> Default for FloatingPotentialConfig<T> {
    fn default() -> Self {
        Self {
            fit_type: FitType::default(),
            min_points: MinPoints::default(),
            threshold: DEFAULT_THRESHOLD,
            island_selection: IslandSelection::default(),
            custom_sweep_check: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Executor for floating-potential searches.
pub struct FloatingPotentialExecutor;

impl FloatingPotentialExecutor {
    /// Run a search over one sweep.
    pub fn run_with_config<T: OlsSolver>(
        voltage: &[T],
        current: &[T],
        config: &FloatingPotentialConfig<T>,
    ) -> Result<FloatingPotentialResult<T>, FloatingPotentialError> {
        // Normalize once; everything below works on the owned copies
        let check: SweepCheckFn<T> = config.custom_sweep_check.unwrap_or(Validator::check_sweep);
        let (voltage, current) = check(voltage, current)?;
        let n = voltage.len();

        let requested = config.min_points.resolve(config.fit_type, n);
        let islands = detect_islands(&current, config.threshold);
        log::debug!(
            "sweep of {} points: {} crossing island(s), min_points {} resolved to {}",
            n,
            islands.len(),
            config.min_points,
            requested
        );

        let (Some(first), Some(last)) = (islands.first(), islands.last()) else {
            return Ok(FloatingPotentialResult::null());
        };

        let mut warnings = Vec::new();
        let min_points = requested.min(n);

        if islands.len() > 1 {
            FloatingPotentialWarning::MultipleIslands {
                count: islands.len(),
                span: last.stop - first.start,
                min_points,
            }
            .emit(&mut warnings);
        }

        let Some(base) = config.island_selection.select(&islands, min_points) else {
            log::debug!("crossing is ambiguous; no fit performed");
            return Ok(FloatingPotentialResult {
                islands: Some(islands),
                warnings,
                ..FloatingPotentialResult::null()
            });
        };

        // Only a window that is actually built reports the clamp
        if requested > n {
            FloatingPotentialWarning::MinPointsExceedsData {
                requested,
                available: n,
            }
            .emit(&mut warnings);
        }

        let window = base.expand(min_points, n);
        let range = window.range();
        let func = config
            .fit_type
            .fit(&voltage[range.clone()], &current[range])?;
        let (vf, vf_err) = func.root_solve();
        let rsq = func.rsq();

        log::debug!(
            "{} fit over {} ({} points): vf = {:?} +/- {:?}",
            config.fit_type,
            window,
            window.len(),
            vf.to_f64(),
            vf_err.to_f64()
        );

        Ok(FloatingPotentialResult {
            vf,
            vf_err,
            rsq: Some(rsq),
            func: Some(func),
            islands: Some(islands),
            indices: Some(window),
            warnings,
        })
    }
}
