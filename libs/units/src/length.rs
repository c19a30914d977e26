//! # Lengths
//!
//! Integer lengths in nanometers. [`Length`] has no invariant,
//! [`UnsignedLength`] is never negative and [`PositiveLength`] is always
//! greater than zero. Widening conversions are `From`, narrowing
//! conversions are `TryFrom` and re-validate.
//!
//! ## Example
//!
//! ```rust
//! use pcb_units::{Length, PositiveLength, UnsignedLength};
//!
//! let width = PositiveLength::new(250_000).unwrap();
//! let plain: Length = width.into();
//! assert_eq!(plain.to_mm_string(), "0.25");
//!
//! assert!(UnsignedLength::new(-1).is_err());
//! assert!(PositiveLength::try_from(Length::ZERO).is_err());
//! ```
//!
//! In files lengths are written as decimal millimeters with up to six
//! fractional digits, which is exactly one nanometer.

use crate::error::{DecimalError, ParseValueError, RangeError};
use crate::fixed::{format_fixed, mul_div_round, parse_fixed};
use crate::ratio::UnsignedRatio;
use config::constants::{LENGTH_FILE_DECIMALS, NANOMETERS_PER_MILLIMETER, RATIO_DENOMINATOR};
use pcb_sexpr::{token_text, Atom, AtomError, FromAtom, ToAtom};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

// =============================================================================
// LENGTH
// =============================================================================

/// A signed length in nanometers.
///
/// Arithmetic saturates at the `i64` range (±9 223 km) instead of
/// overflowing, so every operation is total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Length(i64);

impl Length {
    /// Zero length.
    pub const ZERO: Self = Self(0);

    /// Create a length from nanometers.
    pub const fn new(nanometers: i64) -> Self {
        Self(nanometers)
    }

    /// Raw value in nanometers.
    pub const fn to_nm(self) -> i64 {
        self.0
    }

    /// Parse decimal millimeters exactly, e.g. `"1.1"` → 1 100 000 nm.
    ///
    /// ## Errors
    ///
    /// Fails if the text is not a plain decimal or does not fit.
    pub fn from_mm_str(text: &str) -> Result<Self, DecimalError> {
        parse_fixed(text, LENGTH_FILE_DECIMALS).map(Self)
    }

    /// Decimal millimeters as written to files, e.g. `"1.1"` or `"0.0"`.
    pub fn to_mm_string(self) -> String {
        format_fixed(self.0, LENGTH_FILE_DECIMALS)
    }

    /// Millimeters as float, for display only.
    pub fn to_mm(self) -> f64 {
        self.0 as f64 / NANOMETERS_PER_MILLIMETER as f64
    }

    /// Absolute value.
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Multiply by a ratio, rounding half away from zero to whole nanometers.
    ///
    /// ```rust
    /// use pcb_units::{Length, UnsignedRatio};
    ///
    /// let quarter = UnsignedRatio::new(25_000).unwrap();
    /// assert_eq!(Length::new(300_000).scaled(quarter), Length::new(75_000));
    /// ```
    pub fn scaled(self, ratio: UnsignedRatio) -> Self {
        Self(mul_div_round(self.0, ratio.to_raw(), RATIO_DENOMINATOR))
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Length {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<Length> for i64 {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.to_mm_string())
    }
}

impl FromStr for Length {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mm_str(s)
    }
}

impl FromAtom for Length {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        Self::from_mm_str(token_text(atom)?).map_err(AtomError::from_display)
    }
}

impl ToAtom for Length {
    fn to_atom(&self) -> Atom {
        Atom::token(self.to_mm_string())
    }
}

// =============================================================================
// UNSIGNED LENGTH
// =============================================================================

/// A length that is zero or greater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct UnsignedLength(Length);

impl UnsignedLength {
    /// Zero length.
    pub const ZERO: Self = Self(Length::ZERO);

    /// Create from nanometers.
    ///
    /// ## Errors
    ///
    /// [`RangeError::Negative`] if `nanometers < 0`.
    pub const fn new(nanometers: i64) -> Result<Self, RangeError> {
        if nanometers < 0 {
            return Err(RangeError::Negative {
                type_name: "UnsignedLength",
                value: nanometers,
            });
        }
        Ok(Self(Length(nanometers)))
    }

    /// The unconstrained length.
    pub const fn get(self) -> Length {
        self.0
    }

    /// Raw value in nanometers.
    pub const fn to_nm(self) -> i64 {
        self.0 .0
    }

    /// Subtract, failing instead of going negative.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, RangeError> {
        Self::try_from(self.0 - rhs.0)
    }

    /// Multiply by a non-negative ratio; the result stays non-negative.
    pub fn scaled(self, ratio: UnsignedRatio) -> Self {
        Self(self.0.scaled(ratio))
    }

    /// Parse decimal millimeters.
    pub fn from_mm_str(text: &str) -> Result<Self, ParseValueError> {
        Ok(Self::try_from(Length::from_mm_str(text)?)?)
    }

    /// Decimal millimeters as written to files.
    pub fn to_mm_string(self) -> String {
        self.0.to_mm_string()
    }
}

impl TryFrom<Length> for UnsignedLength {
    type Error = RangeError;

    fn try_from(length: Length) -> Result<Self, RangeError> {
        Self::new(length.0)
    }
}

impl TryFrom<i64> for UnsignedLength {
    type Error = RangeError;

    fn try_from(nanometers: i64) -> Result<Self, RangeError> {
        Self::new(nanometers)
    }
}

impl From<UnsignedLength> for Length {
    fn from(length: UnsignedLength) -> Self {
        length.0
    }
}

impl From<UnsignedLength> for i64 {
    fn from(length: UnsignedLength) -> Self {
        length.to_nm()
    }
}

impl Add for UnsignedLength {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Saturating sum of two non-negative values stays non-negative.
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for UnsignedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UnsignedLength {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mm_str(s)
    }
}

impl FromAtom for UnsignedLength {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        Self::from_mm_str(token_text(atom)?).map_err(AtomError::from_display)
    }
}

impl ToAtom for UnsignedLength {
    fn to_atom(&self) -> Atom {
        self.0.to_atom()
    }
}

// =============================================================================
// POSITIVE LENGTH
// =============================================================================

/// A length strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PositiveLength(Length);

impl PositiveLength {
    /// Create from nanometers.
    ///
    /// ## Errors
    ///
    /// [`RangeError::NotPositive`] if `nanometers <= 0`.
    pub const fn new(nanometers: i64) -> Result<Self, RangeError> {
        if nanometers <= 0 {
            return Err(RangeError::NotPositive {
                type_name: "PositiveLength",
                value: nanometers,
            });
        }
        Ok(Self(Length(nanometers)))
    }

    /// The unconstrained length.
    pub const fn get(self) -> Length {
        self.0
    }

    /// Raw value in nanometers.
    pub const fn to_nm(self) -> i64 {
        self.0 .0
    }

    /// Subtract, failing instead of reaching zero or below.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, RangeError> {
        Self::try_from(self.0 - rhs.0)
    }

    /// Parse decimal millimeters.
    pub fn from_mm_str(text: &str) -> Result<Self, ParseValueError> {
        Ok(Self::try_from(Length::from_mm_str(text)?)?)
    }

    /// Decimal millimeters as written to files.
    pub fn to_mm_string(self) -> String {
        self.0.to_mm_string()
    }
}

impl TryFrom<Length> for PositiveLength {
    type Error = RangeError;

    fn try_from(length: Length) -> Result<Self, RangeError> {
        Self::new(length.0)
    }
}

impl TryFrom<UnsignedLength> for PositiveLength {
    type Error = RangeError;

    fn try_from(length: UnsignedLength) -> Result<Self, RangeError> {
        Self::new(length.to_nm())
    }
}

impl TryFrom<i64> for PositiveLength {
    type Error = RangeError;

    fn try_from(nanometers: i64) -> Result<Self, RangeError> {
        Self::new(nanometers)
    }
}

impl From<PositiveLength> for Length {
    fn from(length: PositiveLength) -> Self {
        length.0
    }
}

impl From<PositiveLength> for UnsignedLength {
    fn from(length: PositiveLength) -> Self {
        Self(length.0)
    }
}

impl From<PositiveLength> for i64 {
    fn from(length: PositiveLength) -> Self {
        length.to_nm()
    }
}

impl Add for PositiveLength {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for PositiveLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PositiveLength {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mm_str(s)
    }
}

impl FromAtom for PositiveLength {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        Self::from_mm_str(token_text(atom)?).map_err(AtomError::from_display)
    }
}

impl ToAtom for PositiveLength {
    fn to_atom(&self) -> Atom {
        self.0.to_atom()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_always_constructs() {
        assert_eq!(Length::new(-5).to_nm(), -5);
        assert_eq!(Length::default(), Length::ZERO);
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        assert_eq!(UnsignedLength::new(0).unwrap(), UnsignedLength::ZERO);
        assert_eq!(
            UnsignedLength::new(-1),
            Err(RangeError::Negative {
                type_name: "UnsignedLength",
                value: -1
            })
        );
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert!(matches!(
            PositiveLength::new(0),
            Err(RangeError::NotPositive { value: 0, .. })
        ));
        assert!(matches!(
            PositiveLength::new(-5),
            Err(RangeError::NotPositive { value: -5, .. })
        ));
        assert_eq!(PositiveLength::new(1).unwrap().to_nm(), 1);
    }

    #[test]
    fn test_widening_and_narrowing() {
        let positive = PositiveLength::new(42).unwrap();
        let unsigned: UnsignedLength = positive.into();
        let plain: Length = unsigned.into();
        assert_eq!(plain, Length::new(42));

        assert!(UnsignedLength::try_from(Length::new(-1)).is_err());
        assert!(PositiveLength::try_from(UnsignedLength::ZERO).is_err());
        assert_eq!(PositiveLength::try_from(plain).unwrap(), positive);
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = Length::new(1_500_000);
        let b = Length::new(500_000);
        assert_eq!(a + b, Length::new(2_000_000));
        assert_eq!(b - a, Length::new(-1_000_000));
        assert_eq!(-a, Length::new(-1_500_000));
        assert_eq!((b - a).abs(), Length::new(1_000_000));
        assert!(b < a);

        let mut c = a;
        c += b;
        c -= Length::new(1);
        assert_eq!(c, Length::new(1_999_999));
        assert_eq!(Length::new(i64::MAX) + Length::new(1), Length::new(i64::MAX));
    }

    #[test]
    fn test_constrained_subtraction_fails_instead_of_clamping() {
        let small = UnsignedLength::new(1).unwrap();
        let large = UnsignedLength::new(2).unwrap();
        assert_eq!(large.checked_sub(small), Ok(small));
        assert!(small.checked_sub(large).is_err());

        let one = PositiveLength::new(1).unwrap();
        assert!(one.checked_sub(one).is_err());
        assert_eq!((one + one).to_nm(), 2);
        assert_eq!((small + large).to_nm(), 3);
    }

    #[test]
    fn test_mm_strings() {
        assert_eq!(Length::from_mm_str("1.1"), Ok(Length::new(1_100_000)));
        assert_eq!(Length::new(2_100_000).to_mm_string(), "2.1");
        assert_eq!(Length::new(22).to_mm_string(), "0.000022");
        assert_eq!(Length::new(-7_000_000).to_string(), "-7.0mm");
        assert!(matches!(
            UnsignedLength::from_mm_str("-0.1"),
            Err(ParseValueError::Range(_))
        ));
        assert!(matches!(
            PositiveLength::from_mm_str("abc"),
            Err(ParseValueError::Decimal(_))
        ));
        assert_eq!("0.2".parse::<UnsignedLength>().unwrap().to_nm(), 200_000);
    }

    #[test]
    fn test_scaled_rounds_half_away_from_zero() {
        let half = UnsignedRatio::new(50_000).unwrap();
        assert_eq!(Length::new(3).scaled(half), Length::new(2));
        assert_eq!(Length::new(-3).scaled(half), Length::new(-2));
        assert_eq!(Length::new(1_000_000).scaled(UnsignedRatio::ZERO), Length::ZERO);

        let pad = UnsignedLength::new(1_000_000).unwrap();
        assert_eq!(pad.scaled(UnsignedRatio::PERCENT_100), pad);
    }

    #[test]
    fn test_atoms() {
        let atom = UnsignedLength::new(1_100_000).unwrap().to_atom();
        assert_eq!(atom, Atom::token("1.1"));
        assert_eq!(UnsignedLength::from_atom(&atom).unwrap().to_nm(), 1_100_000);

        let negative = Atom::token("-1.0");
        assert_eq!(Length::from_atom(&negative).unwrap().to_nm(), -1_000_000);
        let error = UnsignedLength::from_atom(&negative).unwrap_err();
        assert!(error.to_string().contains("must not be negative"));
        assert!(Length::from_atom(&Atom::string("1.0")).is_err());
    }
}
