//! # Format Errors
//!
//! Error type for malformed or structurally invalid tree-format text.
//! Every error carries the location of the offending construct when the
//! node came from parsed text.
//!
//! ## Example
//!
//! ```rust
//! use pcb_sexpr::{parse, FormatErrorKind};
//!
//! let error = parse("(design_rules (ratio 0.1)").unwrap_err();
//! assert_eq!(error.kind, FormatErrorKind::UnterminatedList);
//! assert_eq!(error.location.map(|l| l.line), Some(1));
//! ```

use crate::span::{Location, Span};
use std::fmt;
use thiserror::Error;

// =============================================================================
// FORMAT ERROR
// =============================================================================

/// A format error with location information.
///
/// `location` is `None` only for nodes that were built in memory and
/// therefore have no source text to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Where the problem was found.
    pub location: Option<Location>,
    /// What went wrong.
    pub kind: FormatErrorKind,
}

impl FormatError {
    /// Create a new error without a location.
    pub const fn new(kind: FormatErrorKind) -> Self {
        Self {
            location: None,
            kind,
        }
    }

    /// Create an error located at the start of `span`.
    ///
    /// Empty spans at the origin belong to in-memory nodes and yield no
    /// location.
    pub fn at(kind: FormatErrorKind, span: Span) -> Self {
        let location = (span != Span::default()).then(|| span.location());
        Self { location, kind }
    }

    /// Attach an explicit location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Human-readable message without the location suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Line of the error (1-indexed), if known.
    pub fn line(&self) -> Option<usize> {
        self.location.map(|l| l.line)
    }

    /// Column of the error (1-indexed), if known.
    pub fn column(&self) -> Option<usize> {
        self.location.map(|l| l.column)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} at {}", self.kind, location),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for FormatError {}

// =============================================================================
// FORMAT ERROR KIND
// =============================================================================

/// Kinds of format errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// Input ended where more was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// A character that cannot start any construct here.
    #[error("unexpected character '{found}', expected {expected}")]
    UnexpectedChar {
        /// Character that was found.
        found: char,
        /// Description of what was expected.
        expected: String,
    },

    /// A token that is not allowed here.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// A `)` without a matching `(`.
    #[error("unexpected ')' without matching '('")]
    UnexpectedCloseParen,

    /// A list that is never closed. Located at its `(`.
    #[error("unterminated list, missing ')'")]
    UnterminatedList,

    /// A quoted string that is never closed. Located at its opening quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Unsupported backslash escape in a quoted string.
    #[error("invalid escape sequence '\\{sequence}'")]
    InvalidEscape {
        /// The character following the backslash.
        sequence: String,
    },

    /// A list without a leading keyword token.
    #[error("list requires a keyword")]
    MissingKeyword,

    /// Content after the root list.
    #[error("unexpected content after the root list")]
    TrailingContent,

    /// Lists nested deeper than the configured limit.
    #[error("lists nested deeper than {limit} levels")]
    NestingTooDeep {
        /// Configured depth limit.
        limit: usize,
    },

    /// Input larger than the configured limit.
    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Input size in bytes.
        size: usize,
        /// Configured size limit in bytes.
        limit: usize,
    },

    /// Text that cannot be written as an unquoted token.
    #[error("invalid token '{text}'")]
    InvalidToken {
        /// The rejected text.
        text: String,
    },

    /// A required child list is absent.
    #[error("missing child '{keyword}'")]
    MissingChild {
        /// Keyword that was looked up.
        keyword: String,
    },

    /// A child list that must be unique appears several times.
    #[error("child '{keyword}' appears {count} times, expected exactly once")]
    DuplicateChild {
        /// Keyword that was looked up.
        keyword: String,
        /// Number of occurrences.
        count: usize,
    },

    /// A value list does not hold exactly one atom.
    #[error("'{keyword}' must hold exactly one value, found {found}")]
    ValueCount {
        /// Keyword of the list.
        keyword: String,
        /// Number of children found.
        found: usize,
    },

    /// A value that cannot be read as the requested type.
    #[error("invalid value '{value}' for '{keyword}': {reason}")]
    InvalidValue {
        /// Keyword of the list holding the value.
        keyword: String,
        /// Raw value text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================
