//! # Error Types
//!
//! Errors raised when constructing constrained values.
//!
//! ## Error Policy
//!
//! - Constructors never clamp or default; an invalid value is an error
//! - Decimal text is parsed exactly, so its errors are separate from range
//!   violations

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A numeric value violates the invariant of its type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Value must be zero or greater.
    #[error("{type_name} must not be negative, got {value}")]
    Negative {
        /// Name of the constrained type.
        type_name: &'static str,
        /// Rejected raw value.
        value: i64,
    },

    /// Value must be strictly greater than zero.
    #[error("{type_name} must be greater than zero, got {value}")]
    NotPositive {
        /// Name of the constrained type.
        type_name: &'static str,
        /// Rejected raw value.
        value: i64,
    },

    /// A converted value does not fit the base-unit integer.
    #[error("{type_name} value is out of range")]
    Overflow {
        /// Name of the target type.
        type_name: &'static str,
    },

    /// A bounds pair with `min > max`.
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        /// Requested minimum (raw value).
        min: i64,
        /// Requested maximum (raw value).
        max: i64,
    },
}

/// Decimal text cannot be converted to a fixed-point integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// No digits at all.
    #[error("empty number")]
    Empty,

    /// A character that is not a sign, digit or single decimal point.
    #[error("invalid character '{character}' in number '{text}'")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Whole input.
        text: String,
    },

    /// The value does not fit into 64 bits after scaling.
    #[error("number '{text}' is out of range")]
    Overflow {
        /// Whole input.
        text: String,
    },
}

/// Text does not name a known length unit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown length unit '{0}'")]
pub struct UnknownUnitError(pub String);

/// Parsing decimal text into a constrained type failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    /// The text is not a number.
    #[error(transparent)]
    Decimal(#[from] DecimalError),

    /// The number violates the type's invariant.
    #[error(transparent)]
    Range(#[from] RangeError),
}

// =============================================================================
// TESTS
// =============================================================================
