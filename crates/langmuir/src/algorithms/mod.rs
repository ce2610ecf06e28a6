//! Layer 3: Algorithms
//!
//! This layer implements the core numerical logic: zero-crossing island
//! detection and the least-squares fits (linear and exponential-plus-offset)
//! run over a fit window. It is orchestrated by the engine layer.

// Zero-crossing candidate search and island grouping.
pub mod crossing;

// Ordinary least squares for the linear model.
pub mod regression;

// Levenberg–Marquardt fit for the exponential-plus-offset model.
pub mod exponential;
