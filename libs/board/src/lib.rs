//! # Board Data
//!
//! Board-level settings loaded from and written to the tree format.
//!
//! ## Loading Policy
//!
//! Loading is all-or-nothing: a missing, duplicated or unreadable field
//! fails the whole object with a located [`pcb_sexpr::FormatError`].
//! Factory defaults are only used by `Default`, never to fill gaps in a
//! file.
//!
//! ## Example
//!
//! ```rust
//! use pcb_board::BoardDesignRules;
//! use pcb_units::UnsignedLength;
//!
//! let rules = BoardDesignRules::default();
//! let list = rules.serialize();
//! let loaded = BoardDesignRules::from_list(&list).unwrap();
//! assert_eq!(loaded, rules);
//!
//! let drill = UnsignedLength::new(600_000).unwrap();
//! assert!(rules.does_via_require_stop_mask(drill));
//! ```

pub mod design_rules;
pub mod grid;

// Re-export public API
pub use design_rules::{BoardDesignRules, LengthBounds, RatioRule};
pub use grid::{GridProperties, GridType};
