//! # Source Span
//!
//! Positions and ranges in tree-format text, used for error locations.
//! Positions are tracked 0-indexed while scanning and converted to the
//! 1-indexed [`Location`] humans read in diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use pcb_sexpr::{Position, Span};
//!
//! let span = Span::new(Position::new(0, 0, 0), Position::new(4, 0, 4));
//! assert_eq!(span.len(), 4);
//! assert_eq!(span.location().line, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A point in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the text.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }

    /// Human-readable location of this position.
    pub const fn location(&self) -> Location {
        Location {
            line: self.line + 1,
            column: self.column + 1,
        }
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A range in source text (start inclusive, end exclusive).
///
/// Nodes built in memory carry the default (empty) span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span from two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// Returns true if the span covers no text.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Location of the first character of the span.
    pub const fn location(&self) -> Location {
        self.start.location()
    }
}

/// Trait for values that know where they came from.
pub trait Spanned {
    /// Source span of this value.
    fn span(&self) -> Span;
}

// =============================================================================
// LOCATION
// =============================================================================

/// 1-indexed line and column, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Location {
    /// Create a location from 1-indexed line and column.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

// =============================================================================
// TESTS
// =============================================================================
