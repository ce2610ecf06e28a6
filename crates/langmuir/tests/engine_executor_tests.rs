#![cfg(feature = "dev")]
//! Tests for the floating-potential execution engine.
//!
//! These tests verify:
//! - The sweep check runs exactly once, before any analysis
//! - Configuration defaults
//! - Result assembly and warnings emitted by the executor
//!
//! ## Test Organization
//!
//! 1. **Sweep Check** - Call count and error propagation through the dev hook
//! 2. **Config Tests** - Defaults
//! 3. **Execution** - Direct runs with explicit configurations

use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;

use langmuir::internals::api::FloatingPotentialBuilder;
use langmuir::internals::engine::executor::{
    FloatingPotentialConfig, FloatingPotentialExecutor, DEFAULT_THRESHOLD,
};
use langmuir::internals::engine::policy::{IslandSelection, MinPoints};
use langmuir::internals::engine::validator::Validator;
use langmuir::internals::evaluation::fit_function::FitType;
use langmuir::internals::primitives::errors::FloatingPotentialError;
use langmuir::internals::primitives::warnings::FloatingPotentialWarning;
use langmuir::internals::primitives::window::{Island, Window};

// ============================================================================
// Sweep Check Tests
// ============================================================================

static CHECK_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counting_check(
    voltage: &[f64],
    current: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), FloatingPotentialError> {
    CHECK_CALLS.fetch_add(1, Ordering::SeqCst);
    Validator::check_sweep(voltage, current)
}

fn rejecting_check(
    _voltage: &[f64],
    _current: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), FloatingPotentialError> {
    Err(FloatingPotentialError::InvalidNumericValue("rejected".to_string()))
}

/// Test the sweep check is invoked exactly once per search.
#[test]
fn test_sweep_check_called_once() {
    let voltage = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let current = [-2.0, -1.0, 0.5, 1.0, 2.0];

    let finder = FloatingPotentialBuilder::<f64>::new()
        .custom_sweep_check(counting_check)
        .build()
        .unwrap();

    let before = CHECK_CALLS.load(Ordering::SeqCst);
    let result = finder.find(&voltage, &current).unwrap();
    let after = CHECK_CALLS.load(Ordering::SeqCst);

    assert_eq!(after - before, 1);
    assert!(result.vf.is_finite());
}

/// Test errors from the sweep check propagate unchanged.
#[test]
fn test_sweep_check_error_propagates() {
    let finder = FloatingPotentialBuilder::<f64>::new()
        .custom_sweep_check(rejecting_check)
        .build()
        .unwrap();

    let err = finder.find(&[0.0, 1.0], &[-1.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        FloatingPotentialError::InvalidNumericValue("rejected".to_string())
    );
}

// ============================================================================
// Config Tests
// ============================================================================

/// Test the configuration defaults.
#[test]
fn test_config_defaults() {
    let config = FloatingPotentialConfig::<f64>::default();

    assert_eq!(config.fit_type, FitType::Linear);
    assert_eq!(config.min_points, MinPoints::Auto);
    assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    assert_eq!(config.island_selection, IslandSelection::Span);
    assert!(config.custom_sweep_check.is_none());
}

/// Test the builder produces the same defaults.
#[test]
fn test_builder_defaults() {
    let finder = FloatingPotentialBuilder::<f64>::new().build().unwrap();
    let config = finder.config();

    assert_eq!(config.fit_type, FitType::Linear);
    assert_eq!(config.threshold, 1);
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test a run over a sweep with one exact zero.
#[test]
fn test_run_exact_zero() {
    let voltage: Vec<f64> = (0..9).map(f64::from).collect();
    let current: Vec<f64> = voltage.iter().map(|v| v - 4.0).collect();
    let config = FloatingPotentialConfig {
        min_points: MinPoints::Count(4),
        ..Default::default()
    };

    let result = FloatingPotentialExecutor::run_with_config(&voltage, &current, &config).unwrap();

    assert_eq!(result.islands, Some(vec![Island::new(3, 5)]));
    assert_eq!(result.indices, Some(Window::new(2, 6)));
    assert_relative_eq!(result.vf, 4.0, epsilon = 1e-12);
    assert!(result.warnings.is_empty());
}

/// Test warnings appear in emission order when both are raised.
#[test]
fn test_run_warning_order() {
    let voltage: Vec<f64> = (0..12).map(f64::from).collect();
    let current = [-1.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, -1.0, -2.0, -3.0, -4.0];
    let config = FloatingPotentialConfig {
        min_points: MinPoints::Count(40),
        ..Default::default()
    };

    let result = FloatingPotentialExecutor::run_with_config(&voltage, &current, &config).unwrap();

    assert_eq!(
        result.warnings,
        vec![
            FloatingPotentialWarning::MultipleIslands {
                count: 2,
                span: 9,
                min_points: 12,
            },
            FloatingPotentialWarning::MinPointsExceedsData {
                requested: 40,
                available: 12,
            },
        ]
    );
    assert_eq!(result.indices, Some(Window::new(0, 12)));
}

/// Test an exponential window with too few points is a fit error.
#[test]
fn test_run_exponential_too_few_points() {
    let voltage = [0.0, 1.0];
    let current = [-1.0, 1.0];
    let config = FloatingPotentialConfig {
        fit_type: FitType::Exponential,
        ..Default::default()
    };

    let err = FloatingPotentialExecutor::run_with_config(&voltage, &current, &config).unwrap_err();

    assert!(matches!(err, FloatingPotentialError::Fit(_)));
}
