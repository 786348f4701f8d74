//! Tests for literal classification through the public entry point

use numlit_classifier::{classify, LiteralKind};
use pretty_assertions::assert_eq;

fn check(cases: &[(&str, LiteralKind)]) {
    for (literal, expected) in cases {
        assert_eq!(classify(literal), *expected, "literal {literal:?}");
    }
}

#[test]
fn test_signed_integers() {
    check(&[
        ("120i8", LiteralKind::Int8),
        ("1_20i8", LiteralKind::Int8),
        ("1_2_0_i8", LiteralKind::Int8),
        ("120i16", LiteralKind::Int16),
        ("12_0i16", LiteralKind::Int16),
        ("32765i16", LiteralKind::Int16),
        ("10_000i32", LiteralKind::Int32),
        ("10_i32", LiteralKind::Int32),
        ("10_000i64", LiteralKind::Int64),
    ]);
}

#[test]
fn test_default_int32() {
    check(&[
        ("1", LiteralKind::Int32),
        ("+1", LiteralKind::Int32),
        ("-1", LiteralKind::Int32),
        ("2147483643", LiteralKind::Int32),
        ("-2147483648", LiteralKind::Int32),
        ("10_000", LiteralKind::Int32),
        ("0x123", LiteralKind::Int32),
        ("0X123", LiteralKind::Int32),
        ("0x1_23", LiteralKind::Int32),
    ]);
}

#[test]
fn test_unsigned_integers() {
    check(&[
        ("1_20_u8", LiteralKind::Uint8),
        ("1_2_0_u8", LiteralKind::Uint8),
        ("254_u8", LiteralKind::Uint8),
        ("1_2_0_u16", LiteralKind::Uint16),
        ("65534u16", LiteralKind::Uint16),
        ("10_000_000u32", LiteralKind::Uint32),
        ("429496_7293u32", LiteralKind::Uint32),
        ("10_0u64", LiteralKind::Uint64),
        ("0x123_456u64", LiteralKind::Uint64),
        ("0xa123_456u64", LiteralKind::Uint64),
        ("0xA123_456u64", LiteralKind::Uint64),
        ("0x429496_7293u64", LiteralKind::Uint64),
    ]);
}

#[test]
fn test_floats() {
    check(&[
        ("4.5f32", LiteralKind::Float32),
        (".14", LiteralKind::Float32),
        ("._14", LiteralKind::Float32),
        ("0._14", LiteralKind::Float32),
        ("60_1.45", LiteralKind::Float32),
        ("3.14f64", LiteralKind::Float64),
    ]);
}

#[test]
fn test_malformed_literals() {
    check(&[
        ("binalyze", LiteralKind::Invalid),
        ("-_10_", LiteralKind::Invalid),
        ("10_", LiteralKind::Invalid),
        ("10i_32", LiteralKind::Invalid),
        ("_1", LiteralKind::Invalid),
        ("1_u64_", LiteralKind::Invalid),
        ("1_2__0_i8", LiteralKind::Invalid),
        ("0xs123_456u64", LiteralKind::Invalid),
        ("0x123_", LiteralKind::Invalid),
        ("0x1_23_", LiteralKind::Invalid),
        ("_0x1_23_", LiteralKind::Invalid),
        ("0x_1_23_", LiteralKind::Invalid),
        ("_3.14f64", LiteralKind::Invalid),
        ("_.14", LiteralKind::Invalid),
        ("1.2.3", LiteralKind::Invalid),
        ("0x1.5", LiteralKind::Invalid),
        ("", LiteralKind::Invalid),
        ("x", LiteralKind::Invalid),
        (".", LiteralKind::Invalid),
        ("_", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_overflow() {
    check(&[
        ("129i8", LiteralKind::Invalid),
        ("128i8", LiteralKind::Invalid),
        ("32768i16", LiteralKind::Invalid),
        ("257_u8", LiteralKind::Invalid),
        ("65536u16", LiteralKind::Invalid),
        ("2147483648", LiteralKind::Invalid),
        ("2147483647123123", LiteralKind::Invalid),
        ("4294967296u32", LiteralKind::Invalid),
        ("0x429496_7293u32", LiteralKind::Invalid),
        ("9223372036854775808i64", LiteralKind::Invalid),
        ("18446744073709551616u64", LiteralKind::Invalid),
        ("0x1_0000_0000_0000_0000u64", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_widest_widths_accept_their_maximum() {
    check(&[
        ("9223372036854775807i64", LiteralKind::Int64),
        ("18446744073709551615u64", LiteralKind::Uint64),
        ("0xffff_ffff_ffff_ffffu64", LiteralKind::Uint64),
    ]);
}

#[test]
fn test_float64_overflow_is_not_infinity() {
    let literal = format!("1.{}f64", "9".repeat(400));
    assert_eq!(classify(&literal), LiteralKind::Invalid);
}

#[test]
fn test_unknown_width_tokens() {
    check(&[
        ("1u128", LiteralKind::Invalid),
        ("1i0", LiteralKind::Invalid),
        ("1i128", LiteralKind::Invalid),
        ("0x1u16", LiteralKind::Invalid),
        ("0x1u8", LiteralKind::Invalid),
        ("1.5f16", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_bare_sign_has_no_digits() {
    check(&[
        ("-", LiteralKind::Invalid),
        ("+i8", LiteralKind::Invalid),
        ("-i64", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_signs_on_unsigned_and_hex() {
    check(&[
        ("-1_20_u8", LiteralKind::Invalid),
        ("+1u8", LiteralKind::Invalid),
        ("-3.14f64", LiteralKind::Invalid),
        ("-0x123_456u64", LiteralKind::Invalid),
        ("-0x429496_7293u64", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_suffix_letters_are_case_sensitive() {
    check(&[
        ("10_I32", LiteralKind::Invalid),
        ("10U8", LiteralKind::Invalid),
        ("3.14F64", LiteralKind::Invalid),
        ("0x12U32", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_non_ascii_digits_are_rejected() {
    check(&[
        ("١٢٣", LiteralKind::Invalid),
        ("１２i8", LiteralKind::Invalid),
        ("1.２", LiteralKind::Invalid),
    ]);
}

#[test]
fn test_classification_is_repeatable() {
    for literal in ["120i8", "0x1_23", "10_", "4.5f32", "binalyze"] {
        assert_eq!(classify(literal), classify(literal));
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let literals = ["120i8", "0x123_456u64", "257_u8", ".14", "3.14f64", "-1"];
    let expected: Vec<_> = literals.iter().map(|l| classify(l)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || literals.iter().map(|l| classify(l)).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
