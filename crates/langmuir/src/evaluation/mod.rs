//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns raw regression output into fitted models the engine can
//! query:
//! - The closed set of fit models and their root/uncertainty logic
//! - Goodness-of-fit metrics for a fitted window
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit models (linear, exponential plus offset).
pub mod fit_function;

/// Goodness-of-fit metrics.
pub mod diagnostics;
