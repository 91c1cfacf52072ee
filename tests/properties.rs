use largeint::LargeInteger;
use num_bigint::{BigInt, Sign};
use proptest::prelude::*;

fn pair(bytes: &[u8], negative: bool) -> (LargeInteger, BigInt) {
    let mut signed = vec![0u8];
    signed.extend_from_slice(bytes);
    let x = LargeInteger::from_signed_bytes_be(&signed);
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    let big = BigInt::from_bytes_be(sign, bytes);
    if negative {
        (x.opposite(), big)
    } else {
        (x, big)
    }
}

fn to_bigint(x: &LargeInteger) -> BigInt {
    BigInt::from_signed_bytes_be(&x.to_signed_bytes_be())
}

fn operand() -> impl Strategy<Value = (Vec<u8>, bool)> {
    (prop::collection::vec(any::<u8>(), 0..=200), any::<bool>())
}

proptest! {
    #[test]
    fn prop_add_sub((a, an) in operand(), (b, bn) in operand()) {
        let (x, xb) = pair(&a, an);
        let (y, yb) = pair(&b, bn);
        prop_assert_eq!(to_bigint(&x.plus(&y)), &xb + &yb);
        prop_assert_eq!(to_bigint(&x.minus(&y)), &xb - &yb);
        prop_assert_eq!(x.plus(&x.opposite()), LargeInteger::zero());
        prop_assert_eq!(x.plus(&LargeInteger::zero()), x.clone());
    }

    #[test]
    fn prop_mul((a, an) in operand(), (b, bn) in operand()) {
        let (x, xb) = pair(&a, an);
        let (y, yb) = pair(&b, bn);
        prop_assert_eq!(to_bigint(&x.times(&y)), &xb * &yb);
    }

    #[test]
    fn prop_div_rem((a, an) in operand(), (b, bn) in operand()) {
        let (x, xb) = pair(&a, an);
        let (y, yb) = pair(&b, bn);
        prop_assume!(!y.is_zero());
        let q = x.divide(&y).unwrap();
        let r = q.remainder().unwrap().clone();
        prop_assert_eq!(to_bigint(&q), &xb / &yb);
        prop_assert_eq!(to_bigint(&r), &xb % &yb);
        prop_assert_eq!(r.plus(&y.times(&q)), x);
        prop_assert!(y.is_larger_than(&r));
    }

    #[test]
    fn prop_modulo((a, an) in operand(), b in prop::collection::vec(any::<u8>(), 1..=100)) {
        let (x, _) = pair(&a, an);
        let (m, _) = pair(&b, false);
        prop_assume!(m.is_positive());
        let r = x.modulo(&m).unwrap();
        prop_assert!(!r.is_negative());
        prop_assert!(r < m);
        prop_assert!(x.minus(&r).modulo(&m).unwrap().is_zero());
    }

    #[test]
    fn prop_shift_right((a, an) in operand(), n in 0usize..1700) {
        let (x, xb) = pair(&a, an);
        let power = BigInt::from(1) << n;
        let mut expected = &xb / &power;
        if xb.sign() == Sign::Minus && &expected * &power != xb {
            expected -= 1;
        }
        prop_assert_eq!(to_bigint(&x.shift_right(n)), expected);
        prop_assert_eq!(x.shift_left(n).unwrap().shift_right(n), x);
    }

    #[test]
    fn prop_text((a, an) in operand(), radix in 2u32..=36) {
        let (x, xb) = pair(&a, an);
        let text = x.to_string();
        prop_assert_eq!(&text, &xb.to_string());
        prop_assert_eq!(text.parse::<LargeInteger>().unwrap(), x.clone());
        let text = x.to_string_radix(radix);
        prop_assert_eq!(&text, &xb.to_str_radix(radix));
        prop_assert_eq!(LargeInteger::from_str_radix(&text, radix).unwrap(), x);
    }

    #[test]
    fn prop_bytes((a, an) in operand()) {
        let (x, xb) = pair(&a, an);
        let bytes = x.to_signed_bytes_be();
        prop_assert_eq!(BigInt::from_signed_bytes_be(&bytes), xb);
        prop_assert_eq!(LargeInteger::from_signed_bytes_be(&bytes), x);
    }

    #[test]
    fn prop_sqrt(a in prop::collection::vec(any::<u8>(), 0..=200)) {
        let (x, _) = pair(&a, false);
        let r = x.sqrt().unwrap();
        let next = r.plus(&LargeInteger::one());
        prop_assert!(r.times(&r) <= x);
        prop_assert!(next.times(&next) > x);
    }

    #[test]
    fn prop_gcd((a, an) in operand(), (b, bn) in operand()) {
        let (x, _) = pair(&a, an);
        let (y, _) = pair(&b, bn);
        let g = x.gcd(&y);
        prop_assert!(!g.is_negative());
        if g.is_zero() {
            prop_assert!(x.is_zero() && y.is_zero());
        } else {
            prop_assert!(x.div_rem(&g).unwrap().1.is_zero());
            prop_assert!(y.div_rem(&g).unwrap().1.is_zero());
        }
    }

    #[test]
    fn prop_native((a, an) in (prop::collection::vec(any::<u8>(), 0..=16), any::<bool>())) {
        let (x, xb) = pair(&a, an);
        let expected = i128::try_from(&xb).ok();
        prop_assert_eq!(x.as_i128(), expected);
        if let Some(n) = expected {
            prop_assert_eq!(LargeInteger::from(n), x.clone());
        }
        let f = x.to_f64();
        let expected = xb.to_string().parse::<f64>().unwrap();
        prop_assert_eq!(f, expected);
    }
}
