//! Index-range primitives for crossing islands and fit windows.
//!
//! Both types are half-open ranges `[start, stop)` into the sweep arrays.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::Range;

// ============================================================================
// Island
// ============================================================================

/// Contiguous index range flagged as containing a current zero-crossing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Island {
    /// First index of the island (inclusive).
    pub start: usize,

    /// One past the last index of the island (exclusive).
    pub stop: usize,
}

impl Island {
    /// Create an island spanning `[start, stop)`.
    #[inline]
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start < stop, "Island::new: island must not be empty");
        Self { start, stop }
    }

    /// Number of samples in the island.
    #[inline]
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    /// Check if the island is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The island as a slice range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

impl Display for Island {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

// ============================================================================
// Window
// ============================================================================

/// Range of samples used for one regression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// First index of the window (inclusive).
    pub start: usize,

    /// One past the last index of the window (exclusive).
    pub stop: usize,
}

impl Window {
    /// Create a window spanning `[start, stop)`.
    #[inline]
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop, "Window::new: start must not exceed stop");
        Self { start, stop }
    }

    /// Window covering the islands from `first.start` to `last.stop`.
    #[inline]
    pub fn spanning(first: &Island, last: &Island) -> Self {
        Self::new(first.start, last.stop)
    }

    /// Grow the window to hold at least `min_points` samples of an `n`-sample sweep.
    ///
    /// The deficit is split as `ceil(deficit / 2)` samples per side. Padding
    /// blocked by index 0 moves to the rear, padding blocked by `n` moves to
    /// the front, and the final range is clipped to `[0, n)`. Because both
    /// sides get the rounded-up half, an odd deficit yields one extra sample.
    pub fn expand(self, min_points: usize, n: usize) -> Self {
        debug_assert!(self.stop <= n, "expand: window exceeds sweep length");

        let len = self.len();
        if len >= min_points {
            return self;
        }

        let pad = (min_points - len).div_ceil(2);
        let mut pad_front = pad;
        let mut pad_back = pad;

        // Shift front overflow to the rear
        if pad_front > self.start {
            pad_back += pad_front - self.start;
            pad_front = self.start;
        }

        // Shift rear overflow back to the front
        let room_back = n - self.stop;
        if pad_back > room_back {
            pad_front += pad_back - room_back;
            pad_back = room_back;
        }

        Self {
            start: self.start.saturating_sub(pad_front),
            stop: self.stop + pad_back,
        }
    }

    /// Check whether `island` lies entirely inside the window.
    #[inline]
    pub fn contains(&self, island: &Island) -> bool {
        self.start <= island.start && island.stop <= self.stop
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    /// The window as a slice range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

impl From<Island> for Window {
    fn from(island: Island) -> Self {
        Self::new(island.start, island.stop)
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}
