//! # Tree-Format Parser
//!
//! Recursive descent parser turning tokens into a [`List`] tree.
//! Unlike a recovering source-code parser, the first error aborts: a
//! document is either loaded completely or not at all.
//!
//! ## Example
//!
//! ```rust
//! use config::limits::ParserLimits;
//! use pcb_sexpr::lexer::Lexer;
//! use pcb_sexpr::parser::Parser;
//!
//! let tokens = Lexer::new("(unit millimeters)").tokenize().unwrap();
//! let list = Parser::new(tokens, ParserLimits::default()).parse_document().unwrap();
//! assert_eq!(list.keyword(), "unit");
//! ```

use crate::error::{FormatError, FormatErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::node::{Atom, List};
use crate::span::{Position, Span};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use config::limits::ParserLimits;
use std::iter::Peekable;
use std::vec::IntoIter;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for the tree format.
#[derive(Debug)]
pub struct Parser {
    /// Token stream.
    tokens: Peekable<IntoIter<Token>>,
    /// Position reported once the stream is exhausted.
    end: Position,
    /// Depth limit and friends.
    limits: ParserLimits,
}

impl Parser {
    /// Create a new parser over lexer output.
    pub fn new(tokens: Vec<Token>, limits: ParserLimits) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
        Self {
            tokens: tokens.into_iter().peekable(),
            end,
            limits,
        }
    }

    /// Parse exactly one root list followed by end of input.
    ///
    /// ## Errors
    ///
    /// Any structural problem: missing or unbalanced parentheses, a list
    /// without keyword, nesting beyond the limit, or content after the root.
    pub fn parse_document(&mut self) -> Result<List, FormatError> {
        let open = self.advance();
        let root = match open.kind {
            TokenKind::LParen => self.parse_list(open.span, 1)?,
            TokenKind::RParen => {
                return Err(error_at(FormatErrorKind::UnexpectedCloseParen, open.span));
            }
            TokenKind::Eof => {
                return Err(error_at(
                    FormatErrorKind::UnexpectedEof {
                        expected: TokenKind::LParen.display().to_string(),
                    },
                    open.span,
                ));
            }
            TokenKind::Atom | TokenKind::String => {
                return Err(error_at(
                    FormatErrorKind::UnexpectedToken {
                        found: describe(&open),
                        expected: TokenKind::LParen.display().to_string(),
                    },
                    open.span,
                ));
            }
        };

        let trailing = self.advance();
        match trailing.kind {
            TokenKind::Eof => Ok(root),
            TokenKind::RParen => Err(error_at(
                FormatErrorKind::UnexpectedCloseParen,
                trailing.span,
            )),
            _ => Err(error_at(FormatErrorKind::TrailingContent, trailing.span)),
        }
    }

    /// Parse a list whose `(` was already consumed at `open`.
    fn parse_list(&mut self, open: Span, depth: usize) -> Result<List, FormatError> {
        if depth > self.limits.max_depth {
            return Err(error_at(
                FormatErrorKind::NestingTooDeep {
                    limit: self.limits.max_depth,
                },
                open,
            ));
        }

        let keyword = self.advance();
        let mut list = match keyword.kind {
            TokenKind::Atom => List::new(keyword.text),
            TokenKind::Eof => return Err(error_at(FormatErrorKind::UnterminatedList, open)),
            TokenKind::RParen => return Err(error_at(FormatErrorKind::MissingKeyword, open)),
            TokenKind::LParen | TokenKind::String => {
                return Err(error_at(FormatErrorKind::MissingKeyword, keyword.span));
            }
        };

        loop {
            let token = self.advance();
            let span = token.span;
            match token.kind {
                TokenKind::LParen => {
                    let child = stacker::maybe_grow(
                        STACKER_RED_ZONE_BYTES,
                        STACKER_STACK_SIZE_BYTES,
                        || self.parse_list(span, depth + 1),
                    )?;
                    list.push(child);
                }
                TokenKind::Atom => list.push(Atom::token(token.text).with_span(span)),
                TokenKind::String => list.push(Atom::string(token.text).with_span(span)),
                TokenKind::RParen => {
                    return Ok(list.with_span(Span::new(open.start, span.end)));
                }
                // Point at the innermost list still open.
                TokenKind::Eof => return Err(error_at(FormatErrorKind::UnterminatedList, open)),
            }
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Consume the next token, yielding EOF forever once exhausted.
    fn advance(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| {
            Token::new(TokenKind::Eof, Span::new(self.end, self.end), String::new())
        })
    }
}

/// Error located at the start of `span`, even at the very first character.
fn error_at(kind: FormatErrorKind, span: Span) -> FormatError {
    FormatError::new(kind).with_location(span.start.location())
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Atom => format!("token '{}'", token.text),
        TokenKind::String => format!("string {:?}", token.text),
        other => other.display().to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
