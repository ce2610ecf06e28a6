//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures shared by every other
//! layer: index ranges, error types and warnings. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Island and fit-window index ranges.
pub mod window;

/// Shared error types.
pub mod errors;

/// Non-fatal data-quality warnings.
pub mod warnings;
