//! # Board Edit
//!
//! Editing policy for constrained numeric values, independent of any
//! widget toolkit.
//!
//! ## Policy
//!
//! - A value handed to [`BoundedEdit::set_value`] (e.g. loaded from a file)
//!   is never modified; the bounds widen to include it
//! - A value entered by the user is clamped into the bounds with integer
//!   comparison
//! - Conversions that should never fail are reported to a
//!   [`DiagnosticSink`] instead of the user
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pcb_edit::{BoundedEdit, CollectingSink};
//! use pcb_units::{LengthUnit, PositiveLength};
//!
//! let sink = Arc::new(CollectingSink::new());
//! let mut edit = BoundedEdit::positive_length(sink.clone());
//! edit.set_unit(LengthUnit::Nanometers);
//!
//! edit.set_value(PositiveLength::new(5_000_000_000).unwrap());
//! assert_eq!(edit.max().to_nm(), 5_000_000_000);
//!
//! edit.apply_user_edit(6_000_000_000.0);
//! assert_eq!(edit.value().to_nm(), 5_000_000_000);
//! assert!(sink.is_empty());
//! ```

pub mod bounded;
pub mod context;
pub mod diagnostics;

// Re-export public API
pub use bounded::{BoundedEdit, Quantity};
pub use context::ToolContext;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
