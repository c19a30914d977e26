//! # Canonical Writer
//!
//! Serializes trees into canonical text. The layout is a pure function of
//! the tree structure, so equal trees always produce identical bytes and
//! re-serializing parsed canonical text reproduces it exactly.
//!
//! ## Layout
//!
//! - `(` and the keyword, then each atom child after a single space
//! - each list child on its own line, indented one level deeper
//! - `)` on its own line at the list's indent if the list has list children
//!
//! ```text
//! (design_rules
//!  (stopmask_clearance_ratio 0.1)
//!  (stopmask_clearance_min 1.1)
//! )
//! ```

use crate::node::{Atom, AtomKind, List, Node};
use config::constants::SERIALIZER_INDENT;

/// Serialize a root list as a document, terminated by a newline.
pub fn serialize(list: &List) -> String {
    let mut out = write_list(list);
    out.push('\n');
    out
}

/// Serialize a list without a trailing newline.
pub fn write_list(list: &List) -> String {
    let mut out = String::new();
    push_list(&mut out, list, 0);
    out
}

fn push_list(out: &mut String, list: &List, depth: usize) {
    out.push('(');
    out.push_str(list.keyword());

    let mut broke_line = false;
    for child in list.children() {
        match child {
            Node::Atom(atom) => {
                out.push(' ');
                push_atom(out, atom);
            }
            Node::List(inner) => {
                push_line_break(out, depth + 1);
                push_list(out, inner, depth + 1);
                broke_line = true;
            }
        }
    }

    if broke_line {
        push_line_break(out, depth);
    }
    out.push(')');
}

fn push_line_break(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(SERIALIZER_INDENT);
    }
}

fn push_atom(out: &mut String, atom: &Atom) {
    match atom.kind() {
        AtomKind::Token => out.push_str(atom.text()),
        AtomKind::String => {
            out.push('"');
            for c in atom.text().chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    c => out.push(c),
                }
            }
            out.push('"');
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
