//! Property-based tests for the string primitive.

use super::JsString;
use proptest::prelude::*;

// Arbitrary code units, including unpaired surrogates
fn units_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Surrogate round-trip through from_code_point/code_point_at
    #[test]
    fn code_point_round_trip(code_point in 0x10000u32..=0x10FFFF) {
        let s = JsString::from_code_point(&[code_point]).unwrap();
        prop_assert_eq!(s.length(), 2);
        prop_assert_eq!(s.code_point_at(0), code_point);
    }

    // Every value at or past the code point limit is a range error
    #[test]
    fn code_point_out_of_range(value in 0x110000u32..) {
        let err = JsString::from_code_point(&[value]).unwrap_err();
        prop_assert!(err.is_range_error());
    }

    // Out-of-range accessors never panic and return defaults
    #[test]
    fn accessors_past_end(units in units_strategy(), extra in 0usize..1000) {
        let s = JsString::from_code_units(units);
        let index = s.length() + extra;
        prop_assert_eq!(s.char_code_at(index), 0);
        prop_assert!(s.char_at(index).is_empty());
        prop_assert_eq!(s.code_point_at(index), 0);
    }

    // substring is symmetric in its bounds, slice is not
    #[test]
    fn substring_swaps_slice_does_not(units in units_strategy(), a in 0isize..80, b in 0isize..80) {
        let s = JsString::from_code_units(units);
        prop_assert_eq!(s.substring(a, Some(b)), s.substring(b, Some(a)));
        if a > b {
            prop_assert!(s.slice(a, Some(b)).is_empty());
        }
    }

    // Splitting on a separator and joining back restores the input
    #[test]
    fn split_then_join(text in "[a-c,]{0,30}") {
        let s = JsString::from(text.as_str());
        let parts = s.split(",", None);
        let mut joined = JsString::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                joined += ",";
            }
            joined += part;
        }
        prop_assert_eq!(joined, s);
    }

    // A split limit caps the number of entries
    #[test]
    fn split_respects_limit(text in "[a-c ]{0,30}", limit in 0usize..6) {
        let s = JsString::from(text.as_str());
        prop_assert!(s.split(" ", Some(limit)).len() <= limit);
    }

    // Casing only ever touches ASCII letters
    #[test]
    fn casing_touches_ascii_letters_only(units in units_strategy()) {
        let s = JsString::from_code_units(units);
        for (before, after) in s.code_units().iter().zip(s.to_upper_case().code_units()) {
            if (0x61..=0x7A).contains(before) {
                prop_assert_eq!(*after, before - 32);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    // UTF-8 round trip for well-formed text
    #[test]
    fn utf8_round_trip(text in "\\PC{0,40}") {
        let s = JsString::from(text.as_str());
        prop_assert_eq!(s.to_utf8().unwrap(), text);
    }
}
