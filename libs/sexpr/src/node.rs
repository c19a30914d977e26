//! # Tree Nodes
//!
//! The node model of the tree format: an atom (token or quoted string) or a
//! keyword-tagged list of child nodes. A tree is a pure value; spans are kept
//! for error locations only and are ignored by equality.
//!
//! ## Example
//!
//! ```rust
//! use pcb_sexpr::{parse, List};
//!
//! let list = parse("(grid (interval 0.635) (unit millimeters))").unwrap();
//! assert_eq!(list.keyword(), "grid");
//! assert_eq!(list.value_of::<String>("unit").unwrap(), "millimeters");
//!
//! let built = List::new("grid")
//!     .with_value("interval", &635_000_i64)
//!     .with_value("name", "main");
//! assert_eq!(
//!     built.to_canonical_string(),
//!     "(grid\n (interval 635000)\n (name \"main\")\n)"
//! );
//! ```

use crate::error::{FormatError, FormatErrorKind};
use crate::lexer::is_valid_token;
use crate::span::{Span, Spanned};
use crate::value::{FromAtom, ToAtom};
use crate::writer;
use serde::{Deserialize, Serialize};

// =============================================================================
// NODE
// =============================================================================

/// A node in the tree: an atom or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// A token or quoted string.
    Atom(Atom),
    /// A keyword-tagged list.
    List(List),
}

impl Node {
    /// The atom, if this node is one.
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(atom) => Some(atom),
            Self::List(_) => None,
        }
    }

    /// The list, if this node is one.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            Self::Atom(_) => None,
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Self::Atom(atom) => atom.span,
            Self::List(list) => list.span,
        }
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Self::Atom(atom)
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

// =============================================================================
// ATOM
// =============================================================================

/// How an atom is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomKind {
    /// Unquoted, e.g. `0.1` or `millimeters`.
    Token,
    /// Quoted, e.g. `"Top Layer"`.
    String,
}

/// A leaf value. Numbers stay in their exact source text until a typed
/// lookup converts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawAtom")]
pub struct Atom {
    kind: AtomKind,
    text: String,
    #[serde(skip)]
    span: Span,
}

impl Atom {
    /// Create an unquoted token from trusted text such as a keyword or a
    /// formatted number. Use [`Atom::try_token`] for anything else.
    ///
    /// ## Panics
    ///
    /// Panics if `text` does not satisfy [`is_valid_token`], since such an
    /// atom would not read back as itself.
    pub fn token(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(is_valid_token(&text), "invalid token {text:?}");
        Self::unchecked_token(text)
    }

    /// Create an unquoted token, validating its text.
    ///
    /// ## Errors
    ///
    /// Fails with `InvalidToken` if the text is empty or contains
    /// whitespace, parentheses, quotes or backslashes.
    pub fn try_token(text: impl Into<String>) -> Result<Self, FormatError> {
        let text = text.into();
        if !is_valid_token(&text) {
            return Err(FormatError::new(FormatErrorKind::InvalidToken { text }));
        }
        Ok(Self::unchecked_token(text))
    }

    fn unchecked_token(text: String) -> Self {
        Self {
            kind: AtomKind::Token,
            text,
            span: Span::default(),
        }
    }

    /// Create a quoted string. Any text is allowed.
    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: AtomKind::String,
            text: text.into(),
            span: Span::default(),
        }
    }

    pub(crate) fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// How the atom is written.
    pub fn kind(&self) -> AtomKind {
        self.kind
    }

    /// Raw text (unescaped for strings).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true for unquoted tokens.
    pub fn is_token(&self) -> bool {
        self.kind == AtomKind::Token
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Atom {}

/// Deserialized atom before its token text is checked.
#[derive(Deserialize)]
struct RawAtom {
    kind: AtomKind,
    text: String,
}

impl TryFrom<RawAtom> for Atom {
    type Error = FormatError;

    fn try_from(raw: RawAtom) -> Result<Self, FormatError> {
        match raw.kind {
            AtomKind::Token => Self::try_token(raw.text),
            AtomKind::String => Ok(Self::string(raw.text)),
        }
    }
}

impl Spanned for Atom {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// LIST
// =============================================================================

/// A list `(keyword child*)`.
///
/// Lookups by keyword are strict: a required child that is missing or
/// present more than once is an error, never a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawList")]
pub struct List {
    keyword: String,
    children: Vec<Node>,
    #[serde(skip)]
    span: Span,
}

impl List {
    /// Create an empty list with a trusted keyword. Use [`List::try_new`]
    /// for untrusted text.
    ///
    /// ## Panics
    ///
    /// Panics if `keyword` does not satisfy [`is_valid_token`]. The same
    /// applies to the keywords passed to [`List::push_value`] and
    /// [`List::with_value`].
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        assert!(is_valid_token(&keyword), "invalid keyword {keyword:?}");
        Self::unchecked(keyword)
    }

    /// Create an empty list, validating the keyword.
    ///
    /// ## Errors
    ///
    /// `InvalidToken` if the keyword is empty or needs quoting.
    pub fn try_new(keyword: impl Into<String>) -> Result<Self, FormatError> {
        let keyword = keyword.into();
        if !is_valid_token(&keyword) {
            return Err(FormatError::new(FormatErrorKind::InvalidToken { text: keyword }));
        }
        Ok(Self::unchecked(keyword))
    }

    fn unchecked(keyword: String) -> Self {
        Self {
            keyword,
            children: Vec::new(),
            span: Span::default(),
        }
    }

    pub(crate) fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The leading keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// All children after the keyword, in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    // =========================================================================
    // BUILDING
    // =========================================================================

    /// Append a child node.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append `(keyword value)`.
    pub fn push_value<T: ToAtom + ?Sized>(&mut self, keyword: &str, value: &T) {
        let mut child = List::new(keyword);
        child.push(value.to_atom());
        self.push(child);
    }

    /// Builder form of [`List::push`].
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Builder form of [`List::push_value`].
    pub fn with_value<T: ToAtom + ?Sized>(mut self, keyword: &str, value: &T) -> Self {
        self.push_value(keyword, value);
        self
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    /// All child lists.
    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.children.iter().filter_map(Node::as_list)
    }

    /// All child atoms.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.children.iter().filter_map(Node::as_atom)
    }

    /// All child lists tagged with `keyword`.
    pub fn find_all<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a List> + 'a {
        self.lists().filter(move |list| list.keyword == keyword)
    }

    /// The unique child list tagged with `keyword`.
    ///
    /// ## Errors
    ///
    /// `MissingChild` (located at this list) if absent, `DuplicateChild`
    /// (located at the second occurrence) if present more than once.
    pub fn child(&self, keyword: &str) -> Result<&List, FormatError> {
        self.try_child(keyword)?.ok_or_else(|| {
            FormatError::at(
                FormatErrorKind::MissingChild {
                    keyword: keyword.to_string(),
                },
                self.span,
            )
        })
    }

    /// The child list tagged with `keyword`, if present.
    ///
    /// ## Errors
    ///
    /// `DuplicateChild` if present more than once.
    pub fn try_child(&self, keyword: &str) -> Result<Option<&List>, FormatError> {
        let mut matches = self.lists().filter(|list| list.keyword == keyword);
        let first = matches.next();
        if let Some(second) = matches.next() {
            let count = 2 + matches.count();
            return Err(FormatError::at(
                FormatErrorKind::DuplicateChild {
                    keyword: keyword.to_string(),
                    count,
                },
                second.span,
            ));
        }
        Ok(first)
    }

    /// The atom at child position `index`.
    ///
    /// ## Errors
    ///
    /// `ValueCount` if there are too few children, `InvalidValue` if the
    /// child is a list.
    pub fn atom(&self, index: usize) -> Result<&Atom, FormatError> {
        match self.children.get(index) {
            Some(Node::Atom(atom)) => Ok(atom),
            Some(Node::List(list)) => Err(FormatError::at(
                FormatErrorKind::InvalidValue {
                    keyword: self.keyword.clone(),
                    value: format!("({} ...)", list.keyword),
                    reason: "expected a value, found a list".to_string(),
                },
                list.span,
            )),
            None => Err(self.value_count_error()),
        }
    }

    /// The single value of this list, converted to `T`.
    ///
    /// ## Errors
    ///
    /// `ValueCount` unless the list holds exactly one child, `InvalidValue`
    /// if that child cannot be read as `T`.
    pub fn value<T: FromAtom>(&self) -> Result<T, FormatError> {
        if self.children.len() != 1 {
            return Err(self.value_count_error());
        }
        let atom = self.atom(0)?;
        T::from_atom(atom).map_err(|error| {
            FormatError::at(
                FormatErrorKind::InvalidValue {
                    keyword: self.keyword.clone(),
                    value: atom.text.clone(),
                    reason: error.to_string(),
                },
                atom.span,
            )
        })
    }

    /// The single value of the unique child list tagged with `keyword`.
    pub fn value_of<T: FromAtom>(&self, keyword: &str) -> Result<T, FormatError> {
        self.child(keyword)?.value()
    }

    /// Canonical text of this list, without a trailing newline.
    pub fn to_canonical_string(&self) -> String {
        writer::write_list(self)
    }

    fn value_count_error(&self) -> FormatError {
        FormatError::at(
            FormatErrorKind::ValueCount {
                keyword: self.keyword.clone(),
                found: self.children.len(),
            },
            self.span,
        )
    }
}

/// Deserialized list before its keyword is checked. Children validate
/// themselves.
#[derive(Deserialize)]
struct RawList {
    keyword: String,
    children: Vec<Node>,
}

impl TryFrom<RawList> for List {
    type Error = FormatError;

    fn try_from(raw: RawList) -> Result<Self, FormatError> {
        let mut list = Self::try_new(raw.keyword)?;
        list.children = raw.children;
        Ok(list)
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.keyword == other.keyword && self.children == other.children
    }
}

impl Eq for List {}

impl Spanned for List {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TESTS
// =============================================================================
