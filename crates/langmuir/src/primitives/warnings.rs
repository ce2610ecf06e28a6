//! Non-fatal data-quality warnings.
//!
//! A warning never changes whether a call succeeds. Every warning raised
//! during a search is logged through the `log` facade and recorded on the
//! returned result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Data-quality condition detected during a floating-potential search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingPotentialWarning {
    /// The current crosses zero in more than one island.
    MultipleIslands {
        /// Number of islands found after merging.
        count: usize,
        /// Samples between the first island's start and the last island's stop.
        span: usize,
        /// Resolved minimum number of fit points.
        min_points: usize,
    },

    /// The requested number of fit points exceeds the sweep length.
    MinPointsExceedsData {
        /// Resolved request.
        requested: usize,
        /// Points actually available.
        available: usize,
    },
}

impl FloatingPotentialWarning {
    /// Log the warning and append it to `sink`.
    pub(crate) fn emit(self, sink: &mut Vec<Self>) {
        log::warn!("{}", self);
        sink.push(self);
    }
}

impl Display for FloatingPotentialWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MultipleIslands {
                count,
                span,
                min_points,
            } => write!(
                f,
                "Sweep has {count} crossing-islands spanning {span} points (min_points = {min_points}). \
                 Try adjusting 'threshold' and/or smoothing the current."
            ),
            Self::MinPointsExceedsData {
                requested,
                available,
            } => write!(
                f,
                "min_points ({requested}) exceeds the sweep size ({available}); fitting the whole sweep"
            ),
        }
    }
}
