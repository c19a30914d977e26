//! # Config Crate
//!
//! Centralized configuration constants for the board data pipeline.
//! Base-unit factors, fixed-point denominators, factory defaults and parser
//! limits are defined here so every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{NANOMETERS_PER_MILLIMETER, RATIO_DENOMINATOR};
//!
//! // 1.1 mm in base units
//! let length = 11 * NANOMETERS_PER_MILLIMETER / 10;
//! assert_eq!(length, 1_100_000);
//!
//! // 10 % as a fixed-point ratio
//! let ratio = RATIO_DENOMINATOR / 10;
//! assert_eq!(ratio, 10_000);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Integer Only**: Every physical quantity is expressed in integer base units
//! - **No Dependencies**: Pure constants and a validated limits snapshot

pub mod constants;
pub mod limits;

#[cfg(test)]
mod tests;
