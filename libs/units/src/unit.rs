//! # Length Units
//!
//! The units a length can be shown in. Values are always stored in
//! nanometers; a unit only affects display and user input.

use crate::error::{RangeError, UnknownUnitError};
use crate::length::Length;
use config::constants::{
    NANOMETERS_PER_INCH, NANOMETERS_PER_MICROMETER, NANOMETERS_PER_MIL,
    NANOMETERS_PER_MILLIMETER,
};
use pcb_sexpr::{token_text, Atom, AtomError, FromAtom, ToAtom};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A display unit for lengths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters, the default.
    #[default]
    Millimeters,
    /// Micrometers.
    Micrometers,
    /// Nanometers, the base unit.
    Nanometers,
    /// Inches.
    Inches,
    /// Mils (thousandths of an inch).
    Mils,
}

impl LengthUnit {
    /// Every unit, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Millimeters,
        Self::Micrometers,
        Self::Nanometers,
        Self::Inches,
        Self::Mils,
    ];

    /// Nanometers per unit as `(numerator, denominator)`.
    pub const fn factor(self) -> (i64, i64) {
        match self {
            Self::Millimeters => (NANOMETERS_PER_MILLIMETER, 1),
            Self::Micrometers => (NANOMETERS_PER_MICROMETER, 1),
            Self::Nanometers => (1, 1),
            Self::Inches => (NANOMETERS_PER_INCH, 1),
            Self::Mils => (NANOMETERS_PER_MIL, 1),
        }
    }

    /// Symbol shown next to numbers.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Micrometers => "μm",
            Self::Nanometers => "nm",
            Self::Inches => "″",
            Self::Mils => "mils",
        }
    }

    /// Token used in files, e.g. `millimeters`.
    pub const fn file_token(self) -> &'static str {
        match self {
            Self::Millimeters => "millimeters",
            Self::Micrometers => "micrometers",
            Self::Nanometers => "nanometers",
            Self::Inches => "inches",
            Self::Mils => "mils",
        }
    }

    /// Length expressed in this unit.
    pub fn to_unit(self, length: Length) -> f64 {
        let (numerator, denominator) = self.factor();
        length.to_nm() as f64 * denominator as f64 / numerator as f64
    }

    /// Length from a value in this unit, rounded to whole nanometers
    /// (ties away from zero).
    ///
    /// ## Errors
    ///
    /// [`RangeError::Overflow`] for non-finite values or values outside the
    /// nanometer range.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use pcb_units::{Length, LengthUnit};
    ///
    /// assert_eq!(LengthUnit::Mils.from_unit(10.0).unwrap(), Length::new(254_000));
    /// assert!(LengthUnit::Millimeters.from_unit(f64::NAN).is_err());
    /// ```
    pub fn from_unit(self, value: f64) -> Result<Length, RangeError> {
        let (numerator, denominator) = self.factor();
        let nanometers = (value * numerator as f64 / denominator as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
        if !nanometers.is_finite() || nanometers < i64::MIN as f64 || nanometers >= i64::MAX as f64 {
            return Err(RangeError::Overflow { type_name: "Length" });
        }
        Ok(Length::new(nanometers as i64))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for LengthUnit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.file_token().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownUnitError(s.to_string()))
    }
}

impl FromAtom for LengthUnit {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        token_text(atom)?.parse().map_err(AtomError::from_display)
    }
}

impl ToAtom for LengthUnit {
    fn to_atom(&self) -> Atom {
        Atom::token(self.file_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_millimeters() {
        assert_eq!(LengthUnit::default(), LengthUnit::Millimeters);
    }

    #[test]
    fn test_to_unit() {
        let length = Length::new(25_400_000);
        assert_relative_eq!(LengthUnit::Millimeters.to_unit(length), 25.4);
        assert_relative_eq!(LengthUnit::Inches.to_unit(length), 1.0);
        assert_relative_eq!(LengthUnit::Mils.to_unit(length), 1000.0);
        assert_relative_eq!(LengthUnit::Micrometers.to_unit(length), 25_400.0);
        assert_relative_eq!(LengthUnit::Nanometers.to_unit(length), 25_400_000.0);
    }

    #[test]
    fn test_from_unit_rounds_half_away_from_zero() {
        let nm = LengthUnit::Nanometers;
        assert_eq!(nm.from_unit(2.5).unwrap(), Length::new(3));
        assert_eq!(nm.from_unit(-2.5).unwrap(), Length::new(-3));
        assert_eq!(nm.from_unit(2.4).unwrap(), Length::new(2));
        assert_eq!(
            LengthUnit::Millimeters.from_unit(1.1).unwrap(),
            Length::new(1_100_000)
        );
    }

    #[test]
    fn test_from_unit_overflow() {
        let mm = LengthUnit::Millimeters;
        assert!(matches!(mm.from_unit(f64::INFINITY), Err(RangeError::Overflow { .. })));
        assert!(mm.from_unit(1e20).is_err());
        assert!(mm.from_unit(-1e20).is_err());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("millimeters".parse::<LengthUnit>(), Ok(LengthUnit::Millimeters));
        assert_eq!("MILS".parse::<LengthUnit>(), Ok(LengthUnit::Mils));
        assert_eq!(
            "mm".parse::<LengthUnit>(),
            Err(UnknownUnitError("mm".to_string()))
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(LengthUnit::Micrometers.to_string(), "μm");
        assert_eq!(LengthUnit::Inches.file_token(), "inches");
        for unit in LengthUnit::ALL {
            assert_eq!(LengthUnit::from_atom(&unit.to_atom()), Ok(unit));
        }
    }
}
