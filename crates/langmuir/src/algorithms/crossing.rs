//! Zero-crossing island detection.
//!
//! ## Purpose
//!
//! This module scans a probe-current array for sign changes and groups the
//! bracketing indices into contiguous islands, each expected to contain a
//! zero-crossing of the current.
//!
//! ## Key concepts
//!
//! * **Candidates**: Indices whose current is exactly zero, plus both indices
//!   of every adjacent pair where one sample is negative and the other is
//!   non-negative. A zero next to a negative sample is a crossing.
//! * **Merging**: Sorted candidates separated by at most `threshold` indices
//!   belong to the same island.
//!
//! ## Invariants
//!
//! * Islands are returned in increasing index order and never overlap.
//! * Every island holds at least one sample.
//! * The first and last samples are never treated as neighbors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Island;

// ============================================================================
// Candidate Search
// ============================================================================

/// Indices bracketing a zero-crossing, sorted and unique.
pub fn crossing_candidates<T: Float>(current: &[T]) -> Vec<usize> {
    let n = current.len();
    let mut candidates = Vec::new();

    for i in 0..n {
        let here = current[i];
        let flagged = if here == T::zero() {
            true
        } else {
            let flips_from_prev = i > 0 && is_sign_flip(current[i - 1], here);
            let flips_to_next = i + 1 < n && is_sign_flip(here, current[i + 1]);
            flips_from_prev || flips_to_next
        };

        if flagged {
            candidates.push(i);
        }
    }

    candidates
}

// Negative on one side, non-negative on the other.
#[inline]
fn is_sign_flip<T: Float>(a: T, b: T) -> bool {
    (a < T::zero()) != (b < T::zero())
}

// ============================================================================
// Island Grouping
// ============================================================================

/// Group sorted candidate indices into islands.
///
/// A gap larger than `threshold` between consecutive candidates closes the
/// current island.
pub fn group_islands(candidates: &[usize], threshold: usize) -> Vec<Island> {
    let mut islands = Vec::new();
    let Some((&first, rest)) = candidates.split_first() else {
        return islands;
    };

    let mut start = first;
    let mut last = first;
    for &idx in rest {
        if idx - last > threshold {
            islands.push(Island::new(start, last + 1));
            start = idx;
        }
        last = idx;
    }
    islands.push(Island::new(start, last + 1));

    islands
}

/// Detect the crossing islands of `current`.
pub fn detect_islands<T: Float>(current: &[T], threshold: usize) -> Vec<Island> {
    let candidates = crossing_candidates(current);
    group_islands(&candidates, threshold)
}
