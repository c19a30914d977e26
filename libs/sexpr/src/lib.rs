//! # Board S-Expression Format
//!
//! Parser and canonical writer for the tree-structured text format every
//! board file is stored in.
//!
//! ## Architecture
//!
//! ```text
//! Text → Lexer → Tokens → Parser → List tree → typed lookups
//! List tree → Writer → canonical Text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pcb_sexpr::{parse, serialize};
//!
//! let text = "(grid\n (interval 0.635)\n (unit millimeters)\n)\n";
//! let list = parse(text).unwrap();
//! assert_eq!(list.value_of::<String>("unit").unwrap(), "millimeters");
//!
//! // Canonical text round-trips byte for byte
//! assert_eq!(serialize(&list), text);
//! ```
//!
//! ## Guarantees
//!
//! - `serialize` is deterministic: equal trees give identical bytes
//! - `parse(serialize(t)) == t` for every tree, including trees rebuilt
//!   through serde, since every constructor validates its tokens
//! - `serialize(parse(s)) == s` for canonical text `s`
//! - parsing and writing are pure functions without I/O or shared state

pub mod error;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod span;
pub mod value;
pub mod writer;

// Re-export public API
pub use error::{FormatError, FormatErrorKind};
pub use node::{Atom, AtomKind, List, Node};
pub use span::{Location, Position, Span, Spanned};
pub use value::{token_text, AtomError, FromAtom, ToAtom};
pub use writer::serialize;

use config::limits::ParserLimits;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse tree-format text into its root list using the default limits.
///
/// ## Errors
///
/// Returns a located [`FormatError`] for any malformed input; no partial
/// tree is produced.
pub fn parse(text: &str) -> Result<List, FormatError> {
    parse_with_limits(text, ParserLimits::default())
}

/// Parse tree-format text with explicit limits.
///
/// ## Example
///
/// ```rust
/// use config::limits::ParserLimits;
/// use pcb_sexpr::{parse_with_limits, FormatErrorKind};
///
/// let limits = ParserLimits::new(1, 1024).unwrap();
/// let error = parse_with_limits("(a (b))", limits).unwrap_err();
/// assert_eq!(error.kind, FormatErrorKind::NestingTooDeep { limit: 1 });
/// ```
pub fn parse_with_limits(text: &str, limits: ParserLimits) -> Result<List, FormatError> {
    if text.len() > limits.max_input_bytes {
        return Err(FormatError::new(FormatErrorKind::InputTooLarge {
            size: text.len(),
            limit: limits.max_input_bytes,
        }));
    }

    let result = lexer::Lexer::new(text)
        .tokenize()
        .and_then(|tokens| parser::Parser::new(tokens, limits).parse_document());

    match &result {
        Ok(list) => tracing::trace!(bytes = text.len(), keyword = list.keyword(), "parsed document"),
        Err(error) => tracing::debug!(%error, "failed to parse document"),
    }
    result
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize() {
        let list = parse("(a   (b 1)\n\n\"c\")").unwrap();
        assert_eq!(serialize(&list), "(a\n (b 1) \"c\"\n)\n");
    }

    #[test]
    fn test_input_too_large() {
        let limits = ParserLimits::new(4, 4).unwrap();
        let error = parse_with_limits("(abcdef)", limits).unwrap_err();
        assert_eq!(
            error.kind,
            FormatErrorKind::InputTooLarge { size: 8, limit: 4 }
        );
        assert!(error.location.is_none());
    }
}
