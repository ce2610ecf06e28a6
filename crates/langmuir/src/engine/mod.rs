//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a floating-potential search by coordinating
//! between primitives (windows, errors, warnings), algorithms (crossing
//! detection, regression) and evaluation (fit models). It owns sweep
//! validation, the windowing policies and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Search execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Minimum-points and island-selection policies.
pub mod policy;

/// Output types for floating-potential searches.
pub mod output;
