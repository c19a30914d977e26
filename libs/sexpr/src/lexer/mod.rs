//! # Tree-Format Lexer
//!
//! Tokenizes tree-format text into parentheses, atoms and strings.
//! Whitespace (including newlines) only separates tokens.
//!
//! ## Example
//!
//! ```rust
//! use pcb_sexpr::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(ratio 0.1)").tokenize().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::LParen, TokenKind::Atom, TokenKind::Atom, TokenKind::RParen, TokenKind::Eof]
//! );
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{is_token_char, is_valid_token, Token, TokenKind};

use crate::error::{FormatError, FormatErrorKind};
use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// Tree-format lexer.
///
/// Converts source text into a stream of tokens terminated by an EOF token.
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Errors
    ///
    /// Fails on unterminated strings, invalid escapes and characters that
    /// cannot start a token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, FormatError> {
        loop {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(eof, eof), String::new()));
        Ok(self.tokens)
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), FormatError> {
        let start = self.cursor.position();
        let Some(c) = self.cursor.peek() else {
            return Ok(());
        };

        match c {
            '(' | ')' => {
                self.cursor.advance();
                let kind = if c == '(' {
                    TokenKind::LParen
                } else {
                    TokenKind::RParen
                };
                self.push(kind, start, c.to_string());
                Ok(())
            }
            '"' => self.scan_string(start),
            c if is_token_char(c) => {
                self.cursor.advance_while(is_token_char);
                let text = self.cursor.slice_from(start).to_string();
                self.push(TokenKind::Atom, start, text);
                Ok(())
            }
            found => Err(FormatError::new(FormatErrorKind::UnexpectedChar {
                found,
                expected: "'(', ')', a token or a string".to_string(),
            })
            .with_location(start.location())),
        }
    }

    /// Scan a quoted string, unescaping its content.
    fn scan_string(&mut self, start: Position) -> Result<(), FormatError> {
        self.cursor.advance(); // Opening quote
        let mut value = String::new();

        loop {
            let escape_start = self.cursor.position();
            match self.cursor.advance() {
                None => {
                    return Err(FormatError::new(FormatErrorKind::UnterminatedString)
                        .with_location(start.location()));
                }
                Some('"') => break,
                Some('\\') => match self.cursor.advance() {
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some(other) => {
                        return Err(FormatError::new(FormatErrorKind::InvalidEscape {
                            sequence: other.to_string(),
                        })
                        .with_location(escape_start.location()));
                    }
                    None => {
                        return Err(FormatError::new(FormatErrorKind::UnterminatedString)
                            .with_location(start.location()));
                    }
                },
                Some(c) => value.push(c),
            }
        }

        self.push(TokenKind::String, start, value);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, start: Position, text: String) {
        let end = self.cursor.position();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

// =============================================================================
// TESTS
// =============================================================================
