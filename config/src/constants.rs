//! # Configuration Constants
//!
//! Centralized constants for the board data pipeline. Unit factors,
//! fixed-point scales, design-rule factory defaults and parser limits
//! are defined here.
//!
//! ## Categories
//!
//! - **Units**: Base-unit factors for every supported length unit
//! - **Fixed-Point**: Ratio denominator and file decimal places
//! - **Design Rules**: Factory defaults for board design rules
//! - **Editing**: Default bounds for bounded numeric edits
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Base units (nanometers) per millimeter.
///
/// Lengths are stored as `i64` nanometers. Files store millimeters, so this
/// is also the factor between a file value and its base-unit integer.
///
/// # Example
///
/// ```rust
/// use config::constants::NANOMETERS_PER_MILLIMETER;
///
/// assert_eq!(2 * NANOMETERS_PER_MILLIMETER, 2_000_000);
/// ```
pub const NANOMETERS_PER_MILLIMETER: i64 = 1_000_000;

/// Base units per micrometer.
pub const NANOMETERS_PER_MICROMETER: i64 = 1_000;

/// Base units per inch (exactly 25.4 mm).
pub const NANOMETERS_PER_INCH: i64 = 25_400_000;

/// Base units per mil (thousandth of an inch).
///
/// # Example
///
/// ```rust
/// use config::constants::{NANOMETERS_PER_INCH, NANOMETERS_PER_MIL};
///
/// assert_eq!(NANOMETERS_PER_MIL * 1000, NANOMETERS_PER_INCH);
/// ```
pub const NANOMETERS_PER_MIL: i64 = 25_400;

/// Decimal places of a millimeter value in the file format.
///
/// Six places resolve exactly one nanometer.
pub const LENGTH_FILE_DECIMALS: u32 = 6;

// =============================================================================
// FIXED-POINT CONSTANTS
// =============================================================================

/// Denominator of the ratio fixed-point representation.
///
/// A ratio value `v` represents the fraction `v / RATIO_DENOMINATOR`, so
/// `100_000` is 1 (100 %) and `10_000` is 0.1 (10 %).
///
/// # Example
///
/// ```rust
/// use config::constants::RATIO_DENOMINATOR;
///
/// let ten_percent = RATIO_DENOMINATOR / 10;
/// assert_eq!(ten_percent, 10_000);
/// ```
pub const RATIO_DENOMINATOR: i64 = 100_000;

/// Decimal places of a ratio value in the file format.
pub const RATIO_FILE_DECIMALS: u32 = 5;

// =============================================================================
// DESIGN RULE DEFAULTS
// =============================================================================

/// Default stop mask clearance ratio (0 %).
pub const DEFAULT_STOPMASK_CLEARANCE_RATIO: i64 = 0;

/// Default minimum stop mask clearance (0.1 mm).
pub const DEFAULT_STOPMASK_CLEARANCE_MIN: i64 = micrometers(100);

/// Default maximum stop mask clearance (0.1 mm).
pub const DEFAULT_STOPMASK_CLEARANCE_MAX: i64 = micrometers(100);

/// Default largest via drill which still gets covered by stop mask (0.5 mm).
pub const DEFAULT_STOPMASK_MAX_VIA_DRILL_DIAMETER: i64 = micrometers(500);

/// Default solder paste clearance ratio (10 %).
pub const DEFAULT_SOLDERPASTE_CLEARANCE_RATIO: i64 = percent(10);

/// Default minimum solder paste clearance (0.0 mm).
pub const DEFAULT_SOLDERPASTE_CLEARANCE_MIN: i64 = 0;

/// Default maximum solder paste clearance (1.0 mm).
pub const DEFAULT_SOLDERPASTE_CLEARANCE_MAX: i64 = micrometers(1_000);

/// Default pad annular ring ratio (25 %).
pub const DEFAULT_PAD_ANNULAR_RING_RATIO: i64 = percent(25);

/// Default minimum pad annular ring (0.25 mm).
pub const DEFAULT_PAD_ANNULAR_RING_MIN: i64 = micrometers(250);

/// Default maximum pad annular ring (2.0 mm).
pub const DEFAULT_PAD_ANNULAR_RING_MAX: i64 = micrometers(2_000);

/// Default via annular ring ratio (25 %).
pub const DEFAULT_VIA_ANNULAR_RING_RATIO: i64 = percent(25);

/// Default minimum via annular ring (0.2 mm).
pub const DEFAULT_VIA_ANNULAR_RING_MIN: i64 = micrometers(200);

/// Default maximum via annular ring (2.0 mm).
pub const DEFAULT_VIA_ANNULAR_RING_MAX: i64 = micrometers(2_000);

// =============================================================================
// EDITING CONSTANTS
// =============================================================================

/// Default lower bound of a bounded length edit (1 nm).
pub const DEFAULT_EDIT_MIN: i64 = 1;

/// Default upper bound of a bounded length edit (2000 mm).
///
/// Large enough for any board; values loaded from files beyond it widen
/// the bound instead of being clipped.
pub const DEFAULT_EDIT_MAX: i64 = 2_000_000_000;

/// Default grid interval (0.635 mm, a quarter of 2.54 mm).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_GRID_INTERVAL, NANOMETERS_PER_MIL};
///
/// assert_eq!(DEFAULT_GRID_INTERVAL, 25 * NANOMETERS_PER_MIL);
/// ```
pub const DEFAULT_GRID_INTERVAL: i64 = micrometers(635);

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum list nesting depth accepted by the parser.
///
/// Real documents nest a handful of levels; deeper input is rejected rather
/// than risking unbounded recursion. The `stacker` crate additionally grows
/// the stack while descending.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximum input size accepted by the parser (64 MiB).
pub const MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a new segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Indentation emitted per nesting level by the canonical writer.
///
/// Part of the canonical text contract: changing it changes every file.
pub const SERIALIZER_INDENT: &str = " ";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Convert whole micrometers to base units.
///
/// Handy for writing defaults and test values readably.
///
/// # Example
///
/// ```rust
/// use config::constants::micrometers;
///
/// assert_eq!(micrometers(250), 250_000);
/// ```
pub const fn micrometers(value: i64) -> i64 {
    value * NANOMETERS_PER_MICROMETER
}

/// Convert a percentage to the ratio fixed-point representation.
///
/// # Example
///
/// ```rust
/// use config::constants::{percent, RATIO_DENOMINATOR};
///
/// assert_eq!(percent(100), RATIO_DENOMINATOR);
/// assert_eq!(percent(25), 25_000);
/// ```
pub const fn percent(value: i64) -> i64 {
    value * (RATIO_DENOMINATOR / 100)
}
