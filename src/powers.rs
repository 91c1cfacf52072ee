//! Precalculated small powers, and exponentiation of magnitudes.

use crate::math::*;
use crate::multiply::KARATSUBA_CUTOFF;

/// Powers of 5 that fit in a single limb, `5^0` through `5^27`.
pub(crate) const POW5: [Limb; 28] = [
    1,
    5,
    25,
    125,
    625,
    3125,
    15625,
    78125,
    390625,
    1953125,
    9765625,
    48828125,
    244140625,
    1220703125,
    6103515625,
    30517578125,
    152587890625,
    762939453125,
    3814697265625,
    19073486328125,
    95367431640625,
    476837158203125,
    2384185791015625,
    11920928955078125,
    59604644775390625,
    298023223876953125,
    1490116119384765625,
    7450580596923828125,
];

/// Exponentiation by squaring of a magnitude.
pub(crate) fn pow(x: &[Limb], mut n: u32) -> Vec<Limb> {
    let mut result = vec![1];
    let mut base = trim(x).to_vec();
    while n != 0 {
        if n & 1 == 1 {
            result = magnitude::mul(&result, &base);
        }
        n >>= 1;
        if n != 0 {
            base = magnitude::mul(&base, &base);
        }
    }
    result
}

/// Approximate number of limbs in `5^n`, rounded up.
#[inline]
fn pow5_len(n: u32) -> usize {
    // log2(5) < 2.3220
    n as usize * 23220 / (LIMB_BITS * 10000) + 1
}

/// MulAssign by a power of 5.
///
/// Multiplying by the largest small power until the exponent is used up
/// scales as `O(n*m)`, which wins while the operands are short. Once the
/// product would reach Karatsuba territory, raise 5 to the full power by
/// squaring and do a single large multiplication instead.
pub(crate) fn imul_pow5(x: &mut Vec<Limb>, n: u32) {
    if n == 0 || x.is_empty() {
        return;
    }

    if x.len() + pow5_len(n) < 2 * KARATSUBA_CUTOFF {
        // Multiply by the largest small power until n < step.
        let step = POW5.len() - 1;
        let power = POW5[step];
        let mut n = n as usize;
        while n >= step {
            small::imul(x, power);
            n -= step;
        }

        // Multiply by the remainder.
        small::imul(x, POW5[n]);
    } else {
        *x = magnitude::mul(x, &pow(&[5], n));
    }
}

/// MulAssign by a power of 10, as `5^n * 2^n`.
pub(crate) fn imul_pow10(x: &mut Vec<Limb>, n: u32) {
    imul_pow5(x, n);
    *x = magnitude::shl(x, n as usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow5_table_test() {
        for (i, pair) in POW5.windows(2).enumerate() {
            assert_eq!(pair[0] * 5, pair[1], "5^{}", i + 1);
        }
    }

    #[test]
    fn pow_test() {
        assert_eq!(pow(&[2], 0), [1]);
        assert_eq!(pow(&[2], 64), [0, 1]);
        assert_eq!(pow(&[3], 5), [243]);
        assert!(pow(&[], 3).is_empty());
        assert!(pow5_len(27) >= 1 && pow5_len(28) >= 2);
    }

    #[test]
    fn imul_pow10_test() {
        let mut x = vec![7];
        imul_pow10(&mut x, 19);
        // 7 * 10^19
        let expected = 7u128 * 10u128.pow(19);
        assert_eq!(x, [expected as u64, (expected >> 64) as u64]);

        // Both paths agree.
        let mut iterative = vec![3; 4];
        imul_pow5(&mut iterative, 40);
        let squared = magnitude::mul(&[3; 4], &pow(&[5], 40));
        assert_eq!(iterative, squared);

        let mut big = vec![u64::MAX; 70];
        let mut expected = big.clone();
        imul_pow5(&mut big, 100);
        for _ in 0..100 {
            small::imul(&mut expected, 5);
        }
        assert_eq!(big, expected);
    }
}
