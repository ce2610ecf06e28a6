//! Tests for island and fit-window index ranges.
//!
//! These tests verify the window expansion used to give every fit at least
//! `min_points` samples:
//! - Symmetric padding around the base span
//! - Moving blocked padding to the other side at the sweep edges
//! - Clipping to the sweep
//!
//! ## Test Organization
//!
//! 1. **Basics** - Lengths, ranges, display
//! 2. **Expansion** - Interior, edges, odd deficits

use langmuir::prelude::*;

// ============================================================================
// Basic Tests
// ============================================================================

/// Test island and window lengths and ranges.
#[test]
fn test_lengths_and_ranges() {
    let island = Island::new(29, 31);
    assert_eq!(island.len(), 2);
    assert!(!island.is_empty());
    assert_eq!(island.range(), 29..31);

    let window = Window::from(island);
    assert_eq!(window, Window::new(29, 31));
    assert!(window.contains(&island));
    assert!(Window::new(3, 3).is_empty());
}

/// Test the spanning window of two islands.
#[test]
fn test_spanning() {
    let window = Window::spanning(&Island::new(27, 29), &Island::new(39, 41));
    assert_eq!(window, Window::new(27, 41));
    assert_eq!(window.len(), 14);
}

/// Test ranges display as half-open intervals.
#[test]
fn test_display() {
    assert_eq!(Island::new(27, 29).to_string(), "[27, 29)");
    assert_eq!(Window::new(0, 70).to_string(), "[0, 70)");
}

// ============================================================================
// Expansion Tests
// ============================================================================

/// Test a window already holding `min_points` samples is unchanged.
#[test]
fn test_expand_noop() {
    let window = Window::new(29, 31);
    assert_eq!(window.expand(1, 70), window);
    assert_eq!(window.expand(2, 70), window);
}

/// Test interior expansion pads both sides by half the deficit, rounded up.
#[test]
fn test_expand_interior() {
    let window = Window::new(29, 31);
    assert_eq!(window.expand(8, 70), Window::new(26, 34));
    assert_eq!(window.expand(10, 70), Window::new(25, 35));
    assert_eq!(window.expand(16, 70), Window::new(22, 38));
}

/// Test an odd deficit yields one extra sample.
#[test]
fn test_expand_odd_deficit() {
    let expanded = Window::new(29, 31).expand(15, 70);
    assert_eq!(expanded, Window::new(22, 38));
    assert_eq!(expanded.len(), 16);
}

/// Test padding blocked at the start moves to the rear.
#[test]
fn test_expand_front_overflow() {
    assert_eq!(Window::new(1, 3).expand(10, 70), Window::new(0, 10));
    assert_eq!(Window::new(0, 2).expand(8, 70), Window::new(0, 8));
}

/// Test padding blocked at the end moves to the front.
#[test]
fn test_expand_rear_overflow() {
    assert_eq!(Window::new(67, 69).expand(10, 70), Window::new(60, 70));
    assert_eq!(Window::new(68, 70).expand(8, 70), Window::new(62, 70));
}

/// Test expansion to the whole sweep clips to `[0, n)`.
#[test]
fn test_expand_whole_sweep() {
    assert_eq!(Window::new(27, 41).expand(70, 70), Window::new(0, 70));
    assert_eq!(Window::new(29, 31).expand(70, 70), Window::new(0, 70));
}
