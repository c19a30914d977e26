//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_file_decimals_resolve_one_nanometer() {
    assert_eq!(10_i64.pow(LENGTH_FILE_DECIMALS), NANOMETERS_PER_MILLIMETER);
}

#[test]
fn test_unit_factors_are_consistent() {
    assert_eq!(NANOMETERS_PER_MICROMETER * 1000, NANOMETERS_PER_MILLIMETER);
    assert_eq!(NANOMETERS_PER_MIL * 1000, NANOMETERS_PER_INCH);
    // 1 inch = 25.4 mm exactly
    assert_eq!(NANOMETERS_PER_INCH * 10, 254 * NANOMETERS_PER_MILLIMETER);
}

#[test]
fn test_ratio_decimals_match_denominator() {
    assert_eq!(10_i64.pow(RATIO_FILE_DECIMALS), RATIO_DENOMINATOR);
}

// =============================================================================
// DESIGN RULE DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_bounds_are_ordered() {
    // Every min <= max pair must hold for the factory defaults
    assert!(DEFAULT_STOPMASK_CLEARANCE_MIN <= DEFAULT_STOPMASK_CLEARANCE_MAX);
    assert!(DEFAULT_SOLDERPASTE_CLEARANCE_MIN <= DEFAULT_SOLDERPASTE_CLEARANCE_MAX);
    assert!(DEFAULT_PAD_ANNULAR_RING_MIN <= DEFAULT_PAD_ANNULAR_RING_MAX);
    assert!(DEFAULT_VIA_ANNULAR_RING_MIN <= DEFAULT_VIA_ANNULAR_RING_MAX);
}

#[test]
fn test_default_values_are_non_negative() {
    for value in [
        DEFAULT_STOPMASK_CLEARANCE_RATIO,
        DEFAULT_STOPMASK_CLEARANCE_MIN,
        DEFAULT_STOPMASK_MAX_VIA_DRILL_DIAMETER,
        DEFAULT_SOLDERPASTE_CLEARANCE_RATIO,
        DEFAULT_SOLDERPASTE_CLEARANCE_MIN,
        DEFAULT_PAD_ANNULAR_RING_RATIO,
        DEFAULT_PAD_ANNULAR_RING_MIN,
        DEFAULT_VIA_ANNULAR_RING_RATIO,
        DEFAULT_VIA_ANNULAR_RING_MIN,
    ] {
        assert!(value >= 0, "default {value} must be non-negative");
    }
}

#[test]
fn test_default_raw_values() {
    assert_eq!(DEFAULT_SOLDERPASTE_CLEARANCE_RATIO, 10_000);
    assert_eq!(DEFAULT_PAD_ANNULAR_RING_RATIO, 25_000);
    assert_eq!(DEFAULT_STOPMASK_CLEARANCE_MIN, 100_000);
    assert_eq!(DEFAULT_STOPMASK_MAX_VIA_DRILL_DIAMETER, 500_000);
    assert_eq!(DEFAULT_SOLDERPASTE_CLEARANCE_MAX, NANOMETERS_PER_MILLIMETER);
    assert_eq!(DEFAULT_VIA_ANNULAR_RING_MIN, 200_000);
    assert_eq!(DEFAULT_GRID_INTERVAL, 635_000);
}

// =============================================================================
// EDITING TESTS
// =============================================================================

#[test]
fn test_edit_bounds_are_positive_and_ordered() {
    assert!(DEFAULT_EDIT_MIN > 0, "positive edits need a positive minimum");
    assert!(DEFAULT_EDIT_MIN < DEFAULT_EDIT_MAX);
}

#[test]
fn test_default_grid_interval_is_positive() {
    assert!(DEFAULT_GRID_INTERVAL > 0);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_micrometers() {
    assert_eq!(micrometers(0), 0);
    assert_eq!(micrometers(1000), NANOMETERS_PER_MILLIMETER);
    assert_eq!(micrometers(-5), -5_000);
}

#[test]
fn test_percent() {
    assert_eq!(percent(0), 0);
    assert_eq!(percent(1), 1_000);
    assert_eq!(percent(100), RATIO_DENOMINATOR);
}

#[test]
fn test_limits_are_sane() {
    assert!(MAX_NESTING_DEPTH >= 16);
    assert!(MAX_INPUT_BYTES >= 1024 * 1024);
    assert_eq!(SERIALIZER_INDENT, " ");
}
