//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical helpers used by the fitting layers:
//! - Ceiling-to-even rounding of sample-count fractions
//! - Dense solves and inverses for small normal-equation systems
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fraction-to-count rounding policies.
pub mod rounding;

/// Small dense linear solves.
pub mod linalg;
