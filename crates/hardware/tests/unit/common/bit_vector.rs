//! Bit Vector Tests.
//!
//! Construction, slicing, extension, arithmetic and parsing of `BitVector`.

use mipsim_core::common::{BitVector, SimError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn bv(digits: &str) -> BitVector {
    digits.parse().unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn new_vector_is_all_zero() {
    let v = BitVector::new(32);
    assert_eq!(v.len(), 32);
    assert!(v.is_zero());
    assert_eq!(v.to_integer(), 0);
}

#[rstest]
#[case(3, 7, "111")]
#[case(8, 5, "00000101")]
#[case(4, -1, "1111")]
#[case(8, -2, "11111110")]
#[case(3, 9, "001")]
fn from_value_encodes(#[case] len: usize, #[case] value: i64, #[case] expected: &str) {
    assert_eq!(BitVector::from_value(len, value).to_string(), expected);
}

#[test]
fn from_value_sign_fills_past_64_digits() {
    let v = BitVector::from_value(70, -1);
    assert_eq!(v.len(), 70);
    assert!(v.bits().iter().all(|b| *b));
}

#[test]
fn assign_keeps_width() {
    let mut v = BitVector::from_value(16, 1234);
    v.assign(-1);
    assert_eq!(v.len(), 16);
    assert_eq!(v.to_signed(), -1);
    v.assign(0);
    assert!(v.is_zero());
}

#[test]
fn assign_bits_rejects_wrong_width_without_changing() {
    let mut v = BitVector::from_value(4, 5);
    let err = v.assign_bits("101").unwrap_err();
    assert!(matches!(err, SimError::MalformedBitPattern { .. }));
    assert_eq!(v.to_string(), "0101");

    v.assign_bits("1 0 1 0").unwrap();
    assert_eq!(v.to_string(), "1010");
}

#[test]
fn bit_accessor_is_most_significant_first() {
    let v = bv("100");
    assert_eq!(v.bit(0), Some(true));
    assert_eq!(v.bit(2), Some(false));
    assert_eq!(v.bit(3), None);
}

// ══════════════════════════════════════════════════════════
// 2. Slicing
// ══════════════════════════════════════════════════════════

#[test]
fn slice_extracts_inclusive_range() {
    let v = bv("00000000 00000000 00000001 10001100");
    assert_eq!(v.slice(21, 24).to_string(), "0011");
}

#[test]
fn slice_of_twelve() {
    let twelve = BitVector::from_value(32, 12);
    assert_eq!(twelve.slice(21, 24).to_string(), "0000");
    assert_eq!(twelve.slice(26, 29).to_string(), "0011");
    assert_eq!(twelve.slice(28, 31).to_integer(), 12);
}

#[rstest]
#[case(5, 2)]
#[case(0, 32)]
#[case(31, 40)]
fn slice_invalid_range_yields_empty(#[case] start: usize, #[case] end: usize) {
    let v = BitVector::from_value(32, -1);
    assert!(v.slice(start, end).is_empty());
    assert_eq!(
        v.try_slice(start, end).unwrap_err(),
        SimError::InvalidRange { start, end, len: 32 }
    );
}

#[test]
fn slice_leaves_source_untouched() {
    let v = BitVector::from_value(8, 0b1010_0101);
    let _ = v.slice(0, 3);
    assert_eq!(v.to_string(), "10100101");
}

// ══════════════════════════════════════════════════════════
// 3. Extension
// ══════════════════════════════════════════════════════════

#[test]
fn pad_zero_fills_on_the_left() {
    assert_eq!(bv("110").pad(8).to_string(), "00000110");
}

#[test]
fn sign_extend_replicates_leading_digit() {
    assert_eq!(bv("1010").sign_extend(8).to_string(), "11111010");
    assert_eq!(bv("0110").sign_extend(8).to_string(), "00000110");
}

#[rstest]
#[case(4)]
#[case(2)]
#[case(0)]
fn extension_to_shorter_or_equal_is_noop(#[case] target: usize) {
    let v = bv("1010");
    assert_eq!(v.sign_extend(target).to_string(), "1010");
    assert_eq!(v.pad(target).to_string(), "1010");
}

#[test]
fn fit_truncates_to_low_digits() {
    assert_eq!(bv("110101").fit(4).to_string(), "0101");
    assert_eq!(bv("11").fit(4).to_string(), "0011");
}

// ══════════════════════════════════════════════════════════
// 4. Logic and arithmetic
// ══════════════════════════════════════════════════════════

#[test]
fn invert_complements_every_digit() {
    assert_eq!(bv("1100").invert().to_string(), "0011");
}

#[test]
fn and_pads_shorter_operand() {
    let result = bv("1111").and(&bv("11"));
    assert_eq!(result.len(), 4);
    assert_eq!(result.to_string(), "0011");
}

#[test]
fn add_wraps_on_unsigned_overflow() {
    let all_ones = BitVector::from_value(32, 0xFFFF_FFFF);
    let two = BitVector::from_value(32, 2);
    let sum = all_ones.add(&two);
    assert_eq!(sum.len(), 32);
    assert_eq!(sum.to_integer(), 1);
}

#[test]
fn add_wraps_on_signed_overflow() {
    let max = BitVector::from_value(32, i64::from(i32::MAX));
    let sum = max.add(&max);
    assert_eq!(sum.to_signed(), -2);
}

#[test]
fn add_sign_extends_narrow_operand() {
    let ten = BitVector::from_value(32, 10);
    let minus_three = BitVector::from_value(16, -3);
    assert_eq!(ten.add(&minus_three).to_integer(), 7);
}

// ══════════════════════════════════════════════════════════
// 5. Interpretation and equality
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("1111", 15, -1)]
#[case("0111", 7, 7)]
#[case("1000", 8, -8)]
fn unsigned_and_signed_readings(#[case] digits: &str, #[case] unsigned: u64, #[case] signed: i64) {
    let v = bv(digits);
    assert_eq!(v.to_integer(), unsigned);
    assert_eq!(v.to_signed(), signed);
}

#[rstest]
#[case(63, -1)]
#[case(63, i64::MIN >> 1)]
#[case(62, -(1i64 << 61))]
#[case(1, -1)]
fn signed_reading_near_64_digits(#[case] len: usize, #[case] value: i64) {
    assert_eq!(BitVector::from_value(len, value).to_signed(), value);
}

#[test]
fn sign_extension_to_63_digits_reads_back() {
    let extended = BitVector::from_value(16, -1).sign_extend(63);
    assert_eq!(extended.len(), 63);
    assert_eq!(extended.to_signed(), -1);
}

#[test]
fn equality_ignores_leading_zeros() {
    assert_eq!(BitVector::from_value(8, 5), BitVector::from_value(32, 5));
    assert_ne!(BitVector::from_value(8, 5), BitVector::from_value(8, 4));
    assert_eq!(BitVector::new(3), BitVector::empty());
}

// ══════════════════════════════════════════════════════════
// 6. Parsing and formatting
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("")]
#[case("   ")]
#[case("0102")]
#[case("abc")]
fn parse_rejects_malformed(#[case] text: &str) {
    assert!(matches!(
        text.parse::<BitVector>(),
        Err(SimError::MalformedBitPattern { .. })
    ));
}

#[test]
fn alternate_display_groups_bytes() {
    let v = BitVector::from_value(16, 0x0102);
    assert_eq!(format!("{v:#}"), "00000001  00000010");
    assert_eq!(format!("{v}"), "0000000100000010");
}

// ══════════════════════════════════════════════════════════
// 7. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_value_round_trips(len in 1usize..=63, raw in any::<u64>()) {
        let value = raw & ((1u64 << len) - 1);
        let v = BitVector::from_value(len, value as i64);
        prop_assert_eq!(v.len(), len);
        prop_assert_eq!(v.to_integer(), value);
    }

    #[test]
    fn prop_signed_round_trips(value in any::<i32>()) {
        let v = BitVector::from_value(32, i64::from(value));
        prop_assert_eq!(v.to_signed(), i64::from(value));
    }

    #[test]
    fn prop_sign_extension_preserves_value(value in any::<i16>(), target in 16usize..=64) {
        let v = BitVector::from_value(16, i64::from(value));
        let extended = v.sign_extend(target);
        prop_assert_eq!(extended.len(), target);
        prop_assert_eq!(extended.to_signed(), i64::from(value));
    }

    #[test]
    fn prop_add_matches_wrapping_add(a in any::<i32>(), b in any::<i32>()) {
        let sum = BitVector::from_value(32, i64::from(a)).add(&BitVector::from_value(32, i64::from(b)));
        prop_assert_eq!(sum.to_signed(), i64::from(a.wrapping_add(b)));
    }

    #[test]
    fn prop_display_parses_back(value in any::<u32>()) {
        let v = BitVector::from_value(32, i64::from(value));
        let parsed: BitVector = v.to_string().parse().unwrap();
        prop_assert_eq!(parsed.len(), 32);
        prop_assert_eq!(parsed.to_integer(), u64::from(value));
    }
}
