//! # Tokens
//!
//! Token types for the tree-format lexer.
//!
//! ## Example
//!
//! ```rust
//! use pcb_sexpr::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(unit mm)").tokenize().unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Atom);
//! assert_eq!(tokens[1].text, "unit");
//! ```

use crate::span::{Span, Spanned};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span, including quotes for strings.
    pub span: Span,
    /// Token text. For strings this is the unescaped content.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Unquoted atom like `design_rules`, `0.1` or `-2.5`
    Atom,
    /// Quoted string like `"Top Layer"`
    String,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Atom => "token",
            Self::String => "string",
            Self::Eof => "end of input",
        }
    }
}

/// Returns true if `c` may appear in an unquoted atom.
///
/// Whitespace, parentheses, quotes, backslashes and control characters
/// delimit or require quoting.
pub fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !matches!(c, '(' | ')' | '"' | '\\')
}

/// Returns true if `text` can be written as an unquoted atom.
pub fn is_valid_token(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_token_char)
}

// =============================================================================
// TESTS
// =============================================================================
