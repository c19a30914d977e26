//! # Ratios
//!
//! Dimensionless fractions stored as an integer over a fixed denominator
//! of 100 000, so `0.1` is exactly `10_000` on every platform.
//!
//! Files carry the normalized decimal (`0.25`), while `Display` shows a
//! percentage (`25.0%`).

use crate::error::{DecimalError, ParseValueError, RangeError};
use crate::fixed::{format_fixed, parse_fixed};
use config::constants::{RATIO_DENOMINATOR, RATIO_FILE_DECIMALS};
use pcb_sexpr::{token_text, Atom, AtomError, FromAtom, ToAtom};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Percent has three decimals at a denominator of 100 000.
const PERCENT_DECIMALS: u32 = RATIO_FILE_DECIMALS - 2;

// =============================================================================
// RATIO
// =============================================================================

/// A signed fixed-point ratio.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ratio(i64);

impl Ratio {
    /// 0 %.
    pub const ZERO: Self = Self(0);

    /// 100 %, i.e. a normalized value of `1`.
    pub const PERCENT_100: Self = Self(RATIO_DENOMINATOR);

    /// Create from the raw numerator over 100 000.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Whole percent, e.g. `from_percent(25)` is `0.25`.
    pub const fn from_percent(percent: i64) -> Self {
        Self(percent.saturating_mul(RATIO_DENOMINATOR / 100))
    }

    /// Raw numerator over 100 000.
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    /// Parse the normalized decimal exactly, e.g. `"0.1"`.
    ///
    /// ```rust
    /// use pcb_units::Ratio;
    ///
    /// assert_eq!(Ratio::from_normalized_str("0.1").unwrap().to_raw(), 10_000);
    /// assert_eq!(Ratio::from_normalized_str("0.000005").unwrap().to_raw(), 1);
    /// ```
    pub fn from_normalized_str(text: &str) -> Result<Self, DecimalError> {
        parse_fixed(text, RATIO_FILE_DECIMALS).map(Self)
    }

    /// Normalized decimal as written to files, e.g. `"0.25"`.
    pub fn to_normalized_string(self) -> String {
        format_fixed(self.0, RATIO_FILE_DECIMALS)
    }

    /// Normalized float, for display only.
    pub fn to_normalized(self) -> f64 {
        self.0 as f64 / RATIO_DENOMINATOR as f64
    }

    /// Percent float, for display only.
    pub fn to_percent(self) -> f64 {
        self.to_normalized() * 100.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_fixed(self.0, PERCENT_DECIMALS))
    }
}

impl FromStr for Ratio {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized_str(s)
    }
}

impl FromAtom for Ratio {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        Self::from_normalized_str(token_text(atom)?).map_err(AtomError::from_display)
    }
}

impl ToAtom for Ratio {
    fn to_atom(&self) -> Atom {
        Atom::token(self.to_normalized_string())
    }
}

// =============================================================================
// UNSIGNED RATIO
// =============================================================================

/// A ratio that is zero or greater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct UnsignedRatio(Ratio);

impl UnsignedRatio {
    /// 0 %.
    pub const ZERO: Self = Self(Ratio::ZERO);

    /// 100 %.
    pub const PERCENT_100: Self = Self(Ratio::PERCENT_100);

    /// Create from the raw numerator over 100 000.
    ///
    /// ## Errors
    ///
    /// [`RangeError::Negative`] if `raw < 0`.
    pub const fn new(raw: i64) -> Result<Self, RangeError> {
        if raw < 0 {
            return Err(RangeError::Negative {
                type_name: "UnsignedRatio",
                value: raw,
            });
        }
        Ok(Self(Ratio(raw)))
    }

    /// The unconstrained ratio.
    pub const fn get(self) -> Ratio {
        self.0
    }

    /// Raw numerator over 100 000.
    pub const fn to_raw(self) -> i64 {
        self.0 .0
    }

    /// Parse the normalized decimal.
    pub fn from_normalized_str(text: &str) -> Result<Self, ParseValueError> {
        Ok(Self::try_from(Ratio::from_normalized_str(text)?)?)
    }

    /// Normalized decimal as written to files.
    pub fn to_normalized_string(self) -> String {
        self.0.to_normalized_string()
    }

    /// Normalized float, for display only.
    pub fn to_normalized(self) -> f64 {
        self.0.to_normalized()
    }

    /// Percent float, for display only.
    pub fn to_percent(self) -> f64 {
        self.0.to_percent()
    }
}

impl TryFrom<Ratio> for UnsignedRatio {
    type Error = RangeError;

    fn try_from(ratio: Ratio) -> Result<Self, RangeError> {
        Self::new(ratio.0)
    }
}

impl TryFrom<i64> for UnsignedRatio {
    type Error = RangeError;

    fn try_from(raw: i64) -> Result<Self, RangeError> {
        Self::new(raw)
    }
}

impl From<UnsignedRatio> for Ratio {
    fn from(ratio: UnsignedRatio) -> Self {
        ratio.0
    }
}

impl From<UnsignedRatio> for i64 {
    fn from(ratio: UnsignedRatio) -> Self {
        ratio.to_raw()
    }
}

impl From<Ratio> for i64 {
    fn from(ratio: Ratio) -> Self {
        ratio.0
    }
}

impl fmt::Display for UnsignedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UnsignedRatio {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized_str(s)
    }
}

impl FromAtom for UnsignedRatio {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        Self::from_normalized_str(token_text(atom)?).map_err(AtomError::from_display)
    }
}

impl ToAtom for UnsignedRatio {
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
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        assert_eq!(Ratio::PERCENT_100.to_raw(), 100_000);
        assert_eq!(Ratio::from_percent(25).to_raw(), 25_000);
        assert_eq!(UnsignedRatio::ZERO.to_raw(), 0);
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        assert!(UnsignedRatio::new(0).is_ok());
        assert!(matches!(
            UnsignedRatio::new(-1),
            Err(RangeError::Negative { value: -1, .. })
        ));
        assert!(UnsignedRatio::try_from(Ratio::new(-5)).is_err());
        assert!(matches!(
            UnsignedRatio::from_normalized_str("-0.1"),
            Err(ParseValueError::Range(_))
        ));
    }

    #[test]
    fn test_normalized_strings() {
        assert_eq!(Ratio::from_normalized_str("0.1"), Ok(Ratio::new(10_000)));
        assert_eq!(Ratio::from_normalized_str("1"), Ok(Ratio::PERCENT_100));
        assert_eq!(Ratio::new(25_000).to_normalized_string(), "0.25");
        assert_eq!(Ratio::ZERO.to_normalized_string(), "0.0");
        assert_eq!(Ratio::new(-1).to_normalized_string(), "-0.00001");
    }

    #[test]
    fn test_display_as_percent() {
        assert_eq!(Ratio::new(10_000).to_string(), "10.0%");
        assert_eq!(Ratio::new(12_345).to_string(), "12.345%");
        assert_eq!(UnsignedRatio::PERCENT_100.to_string(), "100.0%");
    }

    #[test]
    fn test_float_views() {
        assert_relative_eq!(Ratio::new(25_000).to_normalized(), 0.25);
        assert_relative_eq!(Ratio::new(25_000).to_percent(), 25.0);
    }

    #[test]
    fn test_atoms() {
        let ratio = UnsignedRatio::from_atom(&Atom::token("0.1")).unwrap();
        assert_eq!(ratio.to_raw(), 10_000);
        assert_eq!(ratio.to_atom(), Atom::token("0.1"));
        assert!(UnsignedRatio::from_atom(&Atom::token("-0.1")).is_err());
        assert!(Ratio::from_atom(&Atom::token("ten")).is_err());
    }
}
