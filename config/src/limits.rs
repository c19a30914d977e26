//! Validated parser limits shared by every consumer of the tree format.
//!
//! The constants in [`crate::constants`] provide the defaults; callers that
//! need tighter limits (for example when loading untrusted clipboard data)
//! build their own snapshot through [`ParserLimits::new`].

use std::fmt;

use crate::constants::{MAX_INPUT_BYTES, MAX_NESTING_DEPTH};

/// Immutable snapshot of the limits applied while parsing tree-format text.
///
/// # Examples
/// ```
/// use config::limits::ParserLimits;
/// let limits = ParserLimits::default();
/// assert!(limits.max_depth >= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Deepest list nesting accepted; the root list is depth 1.
    pub max_depth: usize,
    /// Largest input accepted, in bytes.
    pub max_input_bytes: usize,
}

impl ParserLimits {
    /// Builds a limits snapshot, rejecting values that could never accept a
    /// document.
    ///
    /// # Examples
    /// ```
    /// use config::limits::ParserLimits;
    /// let limits = ParserLimits::new(8, 4096).expect("valid limits");
    /// assert_eq!(limits.max_depth, 8);
    /// ```
    pub fn new(max_depth: usize, max_input_bytes: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::InvalidDepth(max_depth));
        }
        // "()" is the shortest input that can hold a list at all.
        if max_input_bytes < 2 {
            return Err(ConfigError::InvalidInputSize(max_input_bytes));
        }
        Ok(Self {
            max_depth,
            max_input_bytes,
        })
    }
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            max_input_bytes: MAX_INPUT_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the nesting depth is zero.
    InvalidDepth(usize),
    /// Raised when the input size limit is too small for any document.
    InvalidInputSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(value) => {
                write!(f, "max_depth must be >= 1: {value}")
            }
            ConfigError::InvalidInputSize(value) => {
                write!(f, "max_input_bytes must be >= 2: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
