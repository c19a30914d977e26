//! # Board Units
//!
//! Constrained fixed-point value types shared by every board data
//! structure.
//!
//! ## Types
//!
//! - [`Length`], [`UnsignedLength`], [`PositiveLength`]: integer nanometers
//! - [`Ratio`], [`UnsignedRatio`]: integer over 100 000
//! - [`LengthUnit`]: display units
//!
//! Constrained types validate in their constructors and never clamp:
//!
//! ```rust
//! use pcb_units::{RangeError, UnsignedLength};
//!
//! let error = UnsignedLength::new(-1).unwrap_err();
//! assert!(matches!(error, RangeError::Negative { value: -1, .. }));
//! ```
//!
//! Every type converts to and from tree-format atoms with
//! [`pcb_sexpr::FromAtom`] and [`pcb_sexpr::ToAtom`], using exact decimal
//! arithmetic:
//!
//! ```rust
//! use pcb_sexpr::parse;
//! use pcb_units::{UnsignedLength, UnsignedRatio};
//!
//! let list = parse("(rule (ratio 0.1) (min 1.1))").unwrap();
//! let ratio: UnsignedRatio = list.value_of("ratio").unwrap();
//! let min: UnsignedLength = list.value_of("min").unwrap();
//! assert_eq!(ratio.to_raw(), 10_000);
//! assert_eq!(min.to_nm(), 1_100_000);
//! ```

pub mod error;
pub mod fixed;
pub mod length;
pub mod ratio;
pub mod unit;

// Re-export public API
pub use error::{DecimalError, ParseValueError, RangeError, UnknownUnitError};
pub use length::{Length, PositiveLength, UnsignedLength};
pub use ratio::{Ratio, UnsignedRatio};
pub use unit::LengthUnit;
