use largeint::{ErrorCode, LargeInteger};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter::repeat_with;

fn int(s: &str) -> LargeInteger {
    s.parse().unwrap()
}

fn to_bigint(x: &LargeInteger) -> BigInt {
    BigInt::from_signed_bytes_be(&x.to_signed_bytes_be())
}

fn random(rng: &mut StdRng, limbs: usize) -> LargeInteger {
    let mut bytes = vec![0u8];
    bytes.extend(repeat_with(|| rng.random::<u8>()).take(limbs * 8));
    let x = LargeInteger::from_signed_bytes_be(&bytes);
    if rng.random() {
        x.opposite()
    } else {
        x
    }
}

#[test]
fn test_signs() {
    let cases = [
        ("100", "7", "14", "2"),
        ("-100", "7", "-14", "-2"),
        ("100", "-7", "-14", "2"),
        ("-100", "-7", "14", "-2"),
        ("6", "7", "0", "6"),
        ("-6", "7", "0", "-6"),
        ("0", "-7", "0", "0"),
    ];
    for &(a, b, q, r) in &cases {
        let quotient = int(a).divide(&int(b)).unwrap();
        assert_eq!(quotient, int(q), "{} / {}", a, b);
        assert_eq!(quotient.remainder(), Some(&int(r)), "{} % {}", a, b);
        assert_eq!(int(a).div_rem(&int(b)).unwrap(), (int(q), int(r)));
    }
}

#[test]
fn test_division_by_zero() {
    let err = int("1").divide(&LargeInteger::zero()).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionByZero);
    assert!(err.is_arithmetic());
    assert!(int("1").div_rem(&LargeInteger::zero()).is_err());
    assert!(int("1").divide_word(0).is_err());
    assert!(LargeInteger::zero().inverse_scaled(10).is_err());
}

#[test]
fn test_divide_word() {
    let q = int("-100").divide_word(7).unwrap();
    assert_eq!(q, int("-14"));
    assert_eq!(q.remainder(), Some(&int("-2")));

    // 3 * 2^63 + 5
    let x = int("27670116110564327429");
    let q = x.divide_word(i64::MIN).unwrap();
    assert_eq!(q, int("-3"));
    assert_eq!(q.remainder(), Some(&int("5")));

    let min = LargeInteger::from(i64::MIN);
    let q = min.divide_word(i64::MIN).unwrap();
    assert_eq!(q, LargeInteger::one());
    assert_eq!(q.remainder(), Some(&LargeInteger::zero()));
}

#[test]
fn test_multi_limb() {
    let a = int("340282366920938463463374607431768211457");
    let b = int("18446744073709551617");
    let q = a.divide(&b).unwrap();
    assert_eq!(q, int("18446744073709551615"));
    assert_eq!(q.remainder(), Some(&int("2")));
}

#[test]
fn test_identity_random() {
    let mut rng = StdRng::seed_from_u64(0);
    let sizes = [(1, 1), (2, 1), (3, 2), (10, 2), (40, 7), (80, 40), (150, 60), (300, 100)];
    for &(a_len, b_len) in &sizes {
        for _ in 0..4 {
            let a = random(&mut rng, a_len);
            let b = random(&mut rng, b_len);
            if b.is_zero() {
                continue;
            }
            let q = a.divide(&b).unwrap();
            let r = q.remainder().unwrap().clone();
            assert_eq!(r.plus(&b.times(&q)), a);
            assert!(b.is_larger_than(&r));
            assert!(r.is_zero() || r.signum() == a.signum());

            let (big_a, big_b) = (to_bigint(&a), to_bigint(&b));
            assert_eq!(to_bigint(&q), &big_a / &big_b);
            assert_eq!(to_bigint(&r), &big_a % &big_b);
        }
    }
}

#[test]
fn test_exact_multiples() {
    let mut rng = StdRng::seed_from_u64(1);
    for &(q_len, b_len) in &[(1, 2), (5, 5), (33, 20), (70, 90)] {
        let q = random(&mut rng, q_len).abs();
        let b = random(&mut rng, b_len).abs();
        let a = q.times(&b);
        let (quotient, rem) = a.div_rem(&b).unwrap();
        assert_eq!(quotient, q);
        assert!(rem.is_zero());

        let below = a.minus(&LargeInteger::one());
        let (quotient, rem) = below.div_rem(&b).unwrap();
        assert_eq!(quotient, q.minus(&LargeInteger::one()));
        assert_eq!(rem, b.minus(&LargeInteger::one()));
    }
}

#[test]
fn test_inverse_scaled() {
    // 2^(2 + 10) / 3
    assert_eq!(int("3").inverse_scaled(10).unwrap(), int("1365"));
    assert_eq!(int("-3").inverse_scaled(10).unwrap(), int("-1365"));
    assert_eq!(int("4").inverse_scaled(5).unwrap(), int("64"));

    let mut rng = StdRng::seed_from_u64(2);
    for &(len, precision) in &[(1, 100), (3, 64), (8, 1000), (20, 3000)] {
        let b = random(&mut rng, len).abs();
        if b.is_zero() {
            continue;
        }
        let x = b.inverse_scaled(precision).unwrap();
        let scale = LargeInteger::one()
            .shift_left(b.bit_length() + precision)
            .unwrap();
        assert!(x.times(&b) <= scale);
        assert!(x.plus(&LargeInteger::one()).times(&b) > scale);
        assert!(x.bit_length() > precision);
    }
}
