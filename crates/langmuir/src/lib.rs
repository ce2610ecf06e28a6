//! # langmuir — Floating-potential estimation for swept Langmuir probes
//!
//! Estimate the floating potential `V_f` of a swept Langmuir probe: the
//! probe bias at which the collected current is zero.
//!
//! ## How it works
//!
//! 1. The sweep is validated (equal lengths, finite values, non-decreasing
//!    voltage).
//! 2. Every index where the current is zero or changes sign is flagged, and
//!    flagged indices closer than `threshold` are merged into **islands**.
//! 3. A fit **window** is built around the island(s) and padded until it holds
//!    at least `min_points` samples.
//! 4. A linear or exponential-plus-offset model is fitted over the window and
//!    its root is reported as `vf`, with a propagated standard error.
//!
//! ## Quick Start
//!
//! ```rust
//! use langmuir::prelude::*;
//!
//! let voltage: Vec<f64> = (-5..=5).map(f64::from).collect();
//! let current: Vec<f64> = voltage.iter().map(|v| 0.5 * v + 1.0).collect();
//!
//! let finder = FloatingPotential::new()
//!     .fit_type(Linear)
//!     .threshold(1)
//!     .build()?;
//!
//! let result = finder.find(&voltage, &current)?;
//!
//! assert!((result.vf + 2.0).abs() < 1e-9);
//! assert_eq!(result.indices, Some(Window::new(2, 4)));
//! println!("{}", result);
//! # Result::<(), FloatingPotentialError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Floating potential: -2.000000 +/- 0.000000
//!   R^2:                1.000000
//!   Model:              f(x) = 0.500000 x + 1.000000
//!   Fit window:         [2, 4) (2 points)
//!   Islands:            [2, 4)
//! ```
//!
//! ### One-shot call
//!
//! ```rust
//! use langmuir::prelude::*;
//!
//! let voltage: [f64; 6] = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
//! let current: [f64; 6] = [-3.0, -2.0, -1.0, 1.0, 2.0, 3.0];
//!
//! let result = find_floating_potential(&voltage, &current, Linear, MinPoints::Count(2), 1)?;
//!
//! assert_eq!(result.islands, Some(vec![Island::new(2, 4)]));
//! assert!((result.vf - 0.5).abs() < 1e-12);
//! # Result::<(), FloatingPotentialError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `find` returns a `Result<FloatingPotentialResult<T>, FloatingPotentialError>`.
//!
//! - **`Ok(result)`**: Always returned for a valid sweep. A sweep whose
//!   current never crosses zero yields [`FloatingPotentialResult::null`](prelude::FloatingPotentialResult::null).
//!   An ambiguous sweep (several islands spread wider than `min_points`
//!   under [`IslandSelection::Span`](prelude::IslandSelection::Span)) is not
//!   fitted at all: `vf` and `vf_err` are NaN, `func`, `rsq` and `indices`
//!   are `None` (no unfitted model placeholder), and `islands` lists every
//!   island so the caller can retry with a larger `threshold` or another
//!   selection policy.
//! - **`Err(e)`**: Invalid input or configuration, or a fit that could not
//!   be resolved. [`FloatingPotentialError::kind`](prelude::FloatingPotentialError::kind)
//!   tells a wrongly-typed parameter from an invalid value or a failed fit.
//!
//! Data-quality problems that do not stop the search (several crossing
//! islands, `min_points` larger than the sweep) are logged through the `log`
//! facade and recorded in `result.warnings`:
//!
//! ```rust
//! use langmuir::prelude::*;
//!
//! let voltage: Vec<f64> = (0..10).map(f64::from).collect();
//! let current: [f64; 10] = [-1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//!
//! let result = FloatingPotential::new()
//!     .min_points(MinPoints::Count(20))
//!     .build()?
//!     .find(&voltage, &current)?;
//!
//! assert_eq!(result.indices, Some(Window::new(0, 10)));
//! assert!(matches!(
//!     result.warnings[..],
//!     [FloatingPotentialWarning::MinPointsExceedsData { requested: 20, available: 10 }]
//! ));
//! # Result::<(), FloatingPotentialError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! langmuir = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - Hutchinson, I. H. (2002). *Principles of Plasma Diagnostics*, 2nd ed., ch. 3.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - index ranges, errors and warnings.
mod primitives;

// Layer 2: Math - rounding and small dense linear algebra.
mod math;

// Layer 3: Algorithms - crossing detection and least-squares fits.
mod algorithms;

// Layer 4: Evaluation - fit models and goodness of fit.
mod evaluation;

// Layer 5: Engine - validation, windowing policies and execution.
mod engine;

// High-level fluent API for floating-potential searches.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        find_floating_potential, parse_threshold, ErrorKind, ExponentialPlusOffset, FitDiagnostics,
        FitError, FitFunction, FitModel, FitType, FitType::Exponential, FitType::Linear,
        Linear as LinearFit,
        FloatingPotentialBuilder as FloatingPotential, FloatingPotentialConfig,
        FloatingPotentialError, FloatingPotentialFinder, FloatingPotentialResult,
        FloatingPotentialWarning, Island, IslandSelection, MinPoints, Validator, Window,
        DEFAULT_THRESHOLD,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
