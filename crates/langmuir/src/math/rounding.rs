//! Rounding policies for converting sample-count fractions into counts.

// External dependencies
use num_traits::{Float, ToPrimitive};

// Slack absorbing representation error in `fraction * n` (e.g. 0.2 * 70).
const CEIL_EPSILON: f64 = 1e-5;

// Smallest even integer not below `x`, ignoring excess under `CEIL_EPSILON`.
#[inline]
pub fn ceil_to_even(x: f64) -> usize {
    if x.is_nan() || x <= 0.0 {
        return 0;
    }

    let ceiled = Float::ceil(x - CEIL_EPSILON).max(0.0);
    let count = ceiled.to_usize().unwrap_or(usize::MAX);
    count.saturating_add(count & 1)
}

// Convert a fraction of an `n`-sample sweep into an even sample count.
#[inline]
pub fn fraction_to_count(fraction: f64, n: usize) -> usize {
    ceil_to_even(fraction * n as f64)
}
