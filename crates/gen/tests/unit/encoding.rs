//! Binary16 encoding tests.
//!
//! These tests verify the bit-level behavior of `Fp16`: field assembly,
//! sign manipulation, and magnitude extraction.

use fmagen_core::Fp16;

#[test]
fn test_from_fields_assembles_exponent_and_fraction() {
    // exponent 15 (bias), fraction 0 → 1.0 encoding
    assert_eq!(Fp16::from_fields(15, 0), Fp16::ONE);
    // exponent 15, fraction 0x200 → 1.5 encoding
    assert_eq!(Fp16::from_fields(15, 0x200).to_bits(), 0x3E00);
    // exponent 0 keeps the fraction as a denormal encoding
    assert_eq!(Fp16::from_fields(0, 0x300).to_bits(), 0x0300);
    // maximum exponent field lands in the NaN range with a payload
    assert_eq!(Fp16::from_fields(31, 0x399).to_bits(), 0x7F99);
}

#[test]
fn test_negated_flips_only_the_sign_bit() {
    let value = Fp16::from_bits(0x3E00);
    let negated = value.negated();
    assert_eq!(negated.to_bits(), 0xBE00);
    assert_eq!(negated.negated(), value, "double negation must round-trip");
}

#[test]
fn test_with_sign_flipped_is_conditional() {
    let value = Fp16::from_bits(0x1234);
    assert_eq!(value.with_sign_flipped(false), value);
    assert_eq!(value.with_sign_flipped(true).to_bits(), 0x9234);
}

#[test]
fn test_magnitude_clears_the_sign_bit() {
    assert_eq!(Fp16::from_bits(0xBC00).magnitude(), Fp16::ONE);
    assert_eq!(Fp16::from_bits(0x3C00).magnitude(), Fp16::ONE);
    assert_eq!(Fp16::from_bits(0x8000).magnitude(), Fp16::POS_ZERO);
}

#[test]
fn test_is_negative_tracks_bit_15() {
    assert!(Fp16::from_bits(0x8000).is_negative());
    assert!(Fp16::from_bits(0xFE00).is_negative());
    assert!(!Fp16::POS_ZERO.is_negative());
    assert!(!Fp16::MAX_FINITE.is_negative());
}

#[test]
fn test_landmark_constants() {
    assert_eq!(Fp16::POS_ZERO.to_bits(), 0x0000);
    assert_eq!(Fp16::ONE.to_bits(), 0x3C00);
    assert_eq!(Fp16::MIN_NORMAL.to_bits(), 0x0400);
    assert_eq!(Fp16::INFINITY.to_bits(), 0x7C00);
    assert_eq!(Fp16::MAX_FINITE.to_bits(), 0x7BFF);
}
