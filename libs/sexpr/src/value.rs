//! # Typed Values
//!
//! Conversions between atoms and scalar Rust types. Downstream crates
//! implement [`FromAtom`] and [`ToAtom`] for their own value types
//! (lengths, ratios, units) so lookups like
//! [`List::value_of`](crate::List::value_of) return them directly.

use crate::node::{Atom, AtomKind};
use std::fmt;
use thiserror::Error;

/// Why an atom could not be converted. Wrapped into a located
/// `InvalidValue` format error by the lookup that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AtomError {
    reason: String,
}

impl AtomError {
    /// Create an error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Wrap any displayable error.
    pub fn from_display(error: impl fmt::Display) -> Self {
        Self::new(error.to_string())
    }

    fn expected_token(atom: &Atom) -> Self {
        Self::new(format!("expected an unquoted token, found string {:?}", atom.text()))
    }
}

/// Read a value from an atom.
pub trait FromAtom: Sized {
    /// Convert the atom.
    ///
    /// ## Errors
    ///
    /// Returns an [`AtomError`] describing why the text is not a valid `Self`.
    fn from_atom(atom: &Atom) -> Result<Self, AtomError>;
}

/// Write a value as an atom.
pub trait ToAtom {
    /// Convert to an atom. Always succeeds.
    fn to_atom(&self) -> Atom;
}

/// Text of an unquoted token, rejecting quoted strings.
///
/// Numbers, booleans and enumerants are always written as tokens.
pub fn token_text(atom: &Atom) -> Result<&str, AtomError> {
    match atom.kind() {
        AtomKind::Token => Ok(atom.text()),
        AtomKind::String => Err(AtomError::expected_token(atom)),
    }
}

// =============================================================================
// STRINGS
// =============================================================================

impl FromAtom for String {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        Ok(atom.text().to_string())
    }
}

impl ToAtom for String {
    fn to_atom(&self) -> Atom {
        Atom::string(self.as_str())
    }
}

impl ToAtom for str {
    fn to_atom(&self) -> Atom {
        Atom::string(self)
    }
}

// =============================================================================
// BOOLEANS
// =============================================================================

impl FromAtom for bool {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        match token_text(atom)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(AtomError::new(format!(
                "expected 'true' or 'false', found '{other}'"
            ))),
        }
    }
}

impl ToAtom for bool {
    fn to_atom(&self) -> Atom {
        Atom::token(if *self { "true" } else { "false" })
    }
}

// =============================================================================
// INTEGERS
// =============================================================================

macro_rules! impl_integer_atom {
    ($($ty:ty),*) => {
        $(
            impl FromAtom for $ty {
                fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
                    token_text(atom)?
                        .parse::<$ty>()
                        .map_err(|e| AtomError::new(format!(
                            "not a valid {}: {e}", stringify!($ty)
                        )))
                }
            }

            impl ToAtom for $ty {
                fn to_atom(&self) -> Atom {
                    Atom::token(self.to_string())
                }
            }
        )*
    };
}

impl_integer_atom!(i64, i32, u32, usize);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accepts_both_atom_kinds() {
        assert_eq!(String::from_atom(&Atom::token("abc")).unwrap(), "abc");
        assert_eq!(String::from_atom(&Atom::string("a b")).unwrap(), "a b");
        assert_eq!(String::from("x").to_atom(), Atom::string("x"));
    }

    #[test]
    fn test_bool() {
        assert!(bool::from_atom(&Atom::token("true")).unwrap());
        assert!(!bool::from_atom(&Atom::token("false")).unwrap());
        assert!(bool::from_atom(&Atom::token("yes")).is_err());
        assert!(bool::from_atom(&Atom::string("true")).is_err());
        assert_eq!(true.to_atom(), Atom::token("true"));
    }

    #[test]
    fn test_integers() {
        assert_eq!(i64::from_atom(&Atom::token("-42")).unwrap(), -42);
        assert_eq!(u32::from_atom(&Atom::token("7")).unwrap(), 7);
        assert!(u32::from_atom(&Atom::token("-1")).is_err());
        assert!(i64::from_atom(&Atom::token("1.5")).is_err());
        assert_eq!(123_usize.to_atom(), Atom::token("123"));
    }

    #[test]
    fn test_quoted_number_is_rejected() {
        let error = i64::from_atom(&Atom::string("5")).unwrap_err();
        assert!(error.to_string().contains("unquoted token"));
    }
}
