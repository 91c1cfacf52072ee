use largeint::{Category, ErrorCode, LargeInteger};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter::repeat_with;

fn int(s: &str) -> LargeInteger {
    s.parse().unwrap()
}

fn test_parse_err(input: &str, radix: u32, code: ErrorCode, column: usize) {
    let err = LargeInteger::from_str_radix(input, radix).unwrap_err();
    assert_eq!(*err.code(), code, "{:?}", input);
    assert_eq!(err.column(), column, "{:?}", input);
    assert_eq!(err.classify(), Category::Syntax);
}

#[test]
fn test_decimal_round_trip() {
    for s in &[
        "0",
        "1",
        "-1",
        "9223372036854775807",
        "-9223372036854775808",
        "18446744073709551616",
        "123456789012345678901234567890",
        "-1000000000000000000000000000000000000",
    ] {
        assert_eq!(int(s).to_string(), *s);
    }
    assert_eq!(int("+42").to_string(), "42");
    assert_eq!(int("-0").to_string(), "0");
    assert_eq!(int("000123").to_string(), "123");
}

#[test]
fn test_long_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for &len in &[50, 1000, 4000, 20000] {
        let mut s: String = repeat_with(|| char::from(b'0' + rng.random_range(0..10u8)))
            .take(len)
            .collect();
        s.replace_range(..1, "7");
        let x = int(&s);
        assert_eq!(x.to_string(), s);
        assert_eq!(x.digit_length(), len);
        assert_eq!(x.to_string(), s.parse::<BigInt>().unwrap().to_string());
    }
}

#[test]
fn test_radix_round_trip() {
    let mut rng = StdRng::seed_from_u64(8);
    for radix in 2..=36 {
        for &len in &[1, 7, 90] {
            let mut bytes = vec![0u8];
            bytes.extend(repeat_with(|| rng.random::<u8>()).take(len * 8));
            let x = LargeInteger::from_signed_bytes_be(&bytes).opposite();
            let text = x.to_string_radix(radix);
            let big = BigInt::from_signed_bytes_be(&x.to_signed_bytes_be());
            assert_eq!(text, big.to_str_radix(radix), "radix {}", radix);
            assert_eq!(LargeInteger::from_str_radix(&text, radix).unwrap(), x);
            let upper = text.to_uppercase();
            assert_eq!(LargeInteger::from_str_radix(&upper, radix).unwrap(), x);
        }
    }
}

#[test]
fn test_radix() {
    assert_eq!(LargeInteger::from_str_radix("-ff", 16).unwrap(), int("-255"));
    assert_eq!(LargeInteger::from_str_radix("z", 36).unwrap(), int("35"));
    assert_eq!(int("36").to_string_radix(36), "10");
    assert_eq!(int("-255").to_string_radix(2), "-11111111");
    assert_eq!(LargeInteger::zero().to_string_radix(7), "0");
    assert_eq!(
        int("18446744073709551616").to_string_radix(16),
        "10000000000000000",
    );
}

#[test]
#[should_panic(expected = "radix 1 is not in range 2..=36")]
fn test_format_bad_radix() {
    int("5").to_string_radix(1);
}

#[test]
fn test_parse_errors() {
    test_parse_err("", 10, ErrorCode::EmptyNumber, 1);
    test_parse_err("-", 10, ErrorCode::EmptyNumber, 2);
    test_parse_err("12a", 10, ErrorCode::InvalidDigit, 3);
    test_parse_err("-1 2", 10, ErrorCode::InvalidDigit, 3);
    test_parse_err("102", 2, ErrorCode::InvalidDigit, 3);
    test_parse_err("1", 37, ErrorCode::InvalidRadix(37), 0);
    test_parse_err("1", 1, ErrorCode::InvalidRadix(1), 0);
    test_parse_err("--1", 10, ErrorCode::InvalidDigit, 2);
    test_parse_err("1é", 10, ErrorCode::InvalidDigit, 2);
}

#[test]
fn test_error_display() {
    let err = LargeInteger::from_str_radix("12a", 10).unwrap_err();
    assert_eq!(err.to_string(), "invalid digit at column 3");
    assert_eq!(format!("{:?}", err), "Error(\"invalid digit\", column: 3)");

    let err = int("1").divide(&LargeInteger::zero()).unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
    assert_eq!(format!("{:?}", err), "Error(\"division by zero\", column: 0)");
}

#[test]
fn test_formatter_flags() {
    assert_eq!(format!("{:x}", int("255")), "ff");
    assert_eq!(format!("{:#x}", int("255")), "0xff");
    assert_eq!(format!("{:X}", int("-255")), "-FF");
    assert_eq!(format!("{:b}", int("5")), "101");
    assert_eq!(format!("{:#o}", int("8")), "0o10");
    assert_eq!(format!("{:>6}", int("-42")), "   -42");
    assert_eq!(format!("{:<6}|", int("42")), "42    |");
    assert_eq!(format!("{:+}", int("42")), "+42");
    assert_eq!(format!("{:08}", int("-42")), "-0000042");
    assert_eq!(format!("{:?}", int("-3")), "LargeInteger(-3)");
}
