//! Property tests for decimal text and unit conversion.

use pcb_units::{Length, LengthUnit, Ratio};
use proptest::prelude::*;

proptest! {
    #[test]
    fn mm_text_is_exact(nm in any::<i64>()) {
        let length = Length::new(nm);
        prop_assert_eq!(Length::from_mm_str(&length.to_mm_string()), Ok(length));
    }

    #[test]
    fn normalized_ratio_text_is_exact(raw in any::<i64>()) {
        let ratio = Ratio::new(raw);
        prop_assert_eq!(Ratio::from_normalized_str(&ratio.to_normalized_string()), Ok(ratio));
    }

    #[test]
    fn nanometer_display_is_lossless(nm in -1_000_000_000_000_i64..1_000_000_000_000) {
        let length = Length::new(nm);
        let unit = LengthUnit::Nanometers;
        prop_assert_eq!(unit.from_unit(unit.to_unit(length)), Ok(length));
    }

    #[test]
    fn display_round_trip_stays_within_one_nanometer(
        nm in -1_000_000_000_000_i64..1_000_000_000_000,
        index in 0..LengthUnit::ALL.len(),
    ) {
        let unit = LengthUnit::ALL[index];
        let length = Length::new(nm);
        let back = unit.from_unit(unit.to_unit(length)).unwrap();
        prop_assert!((back - length).abs() <= Length::new(1));
    }

    #[test]
    fn whole_unit_multiples_convert_exactly(
        count in -1_000_000_i64..=1_000_000,
        index in 0..LengthUnit::ALL.len(),
    ) {
        let unit = LengthUnit::ALL[index];
        let (numerator, denominator) = unit.factor();
        prop_assert_eq!(denominator, 1);
        let length = Length::new(count * numerator);
        prop_assert_eq!(unit.to_unit(length), count as f64);
        prop_assert_eq!(unit.from_unit(unit.to_unit(length)), Ok(length));
    }

    #[test]
    fn mm_text_keeps_a_fraction_digit(nm in any::<i64>()) {
        let text = Length::new(nm).to_mm_string();
        let (_, fraction) = text.split_once('.').unwrap();
        prop_assert!(!fraction.is_empty());
        prop_assert!(fraction.len() == 1 || !fraction.ends_with('0'));
    }
}
