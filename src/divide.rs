//! Division by a single limb and by Newton scaled reciprocals.
//!
//! Multi-limb divisors never go through schoolbook long division. Instead a
//! fixed-point reciprocal `floor(2^e / b)` is grown by Newton's iteration
//! from a native-width seed, the quotient is read off the high half of
//! `a * reciprocal`, and a final `±1` correction makes it exact. The work is
//! a handful of multiplications, so large divisions profit from Karatsuba.

use crate::error::{Error, ErrorCode, Result};
use crate::integer::LargeInteger;
use crate::math::*;
use core::cmp::Ordering;

/// Reciprocals of at most this many bits are computed with one native
/// 128-bit division.
const NATIVE_BITS: usize = 62;

/// Divide magnitude `a` by magnitude `b`, returning `(quotient, remainder)`.
///
/// `b` must not be zero.
pub(crate) fn div_rem(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let a = trim(a);
    let b = trim(b);
    debug_assert!(!b.is_empty());
    if large::less(a, b) {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (quotient, rem) = div_word(a, b[0]);
        let rem = if rem == 0 { Vec::new() } else { vec![rem] };
        return (quotient, rem);
    }
    reciprocal_div(a, b)
}

/// Divide magnitude `a` by a single non-zero limb.
pub(crate) fn div_word(a: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    let mut quotient = alloc(a.len());
    let rem = small::div(a, d, &mut quotient);
    normalize(&mut quotient);
    (quotient, rem)
}

/// Division through the scaled reciprocal of `b`.
///
/// With `s = bits(a) + 1` and `R = floor(2^s / b)`, the estimate
/// `(a * R) >> s` is never above `floor(a / b)` and at most one below it.
fn reciprocal_div(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let _scope = tracing::trace_span!(
        "Reciprocal division",
        a_len = a.len(),
        b_len = b.len(),
    )
    .entered();

    let shift = small::bit_length(a) + 1;
    let r = reciprocal(b, shift);
    let mut quotient = magnitude::shr(&magnitude::mul(a, &r), shift);

    // Correct the estimate so that 0 <= a - q*b < b.
    let product = magnitude::mul(&quotient, b);
    let mut rem = match large::compare(&product, a) {
        Ordering::Greater => {
            let excess = magnitude::sub(&product, a);
            let mut rem = magnitude::sub(b, &excess);
            let len = large::isub(&mut quotient, &[1]);
            quotient.truncate(len);
            normalize(&mut rem);
            rem
        }
        _ => magnitude::sub(a, &product),
    };
    if large::greater_equal(&rem, b) {
        let len = large::isub(&mut rem, b);
        rem.truncate(len);
        small::iadd(&mut quotient, 1);
    }
    assert!(
        large::less(&rem, b),
        "reciprocal division left a remainder outside [0, divisor)",
    );
    (quotient, rem)
}

/// Exact `floor(2^e / b)` for a normalized, non-zero `b` with
/// `e + 1 >= bits(b)`.
///
/// Each level doubles the precision of the level below with one Newton step
/// `x = 2y - y^2 * b / 2^e`, then settles the result on the exact floor.
pub(crate) fn reciprocal(b: &[Limb], e: usize) -> Vec<Limb> {
    let k = small::bit_length(b);
    debug_assert!(k > 0 && e + 1 >= k);
    let t = e + 1 - k;

    let estimate = if t <= NATIVE_BITS {
        native_reciprocal(b, k, e)
    } else {
        let th = t / 2 + 3;
        let eh = th + k - 1;
        let x0 = reciprocal(b, eh);
        let doubled = magnitude::shl(&x0, e - eh + 1);
        let square = magnitude::mul(&x0, &x0);
        let correction = magnitude::shr(&magnitude::mul(&square, b), 2 * eh - e);
        magnitude::sub(&doubled, &correction)
    };
    settle_reciprocal(estimate, b, e)
}

/// Seed reciprocal for at most `NATIVE_BITS` bits of result.
///
/// Long divisors are cut down to their top 64 bits first, which may leave
/// the estimate one above the exact floor.
fn native_reciprocal(b: &[Limb], k: usize, e: usize) -> Vec<Limb> {
    let (divisor, e) = if k <= LIMB_BITS {
        (b[0], e)
    } else {
        (hi64(b).0, e - (k - LIMB_BITS))
    };
    let x = (1u128 << e) / divisor as u128;
    let mut words = vec![x as Limb, (x >> LIMB_BITS) as Limb];
    normalize(&mut words);
    words
}

/// Move an estimate of `floor(2^e / b)` onto the exact value.
fn settle_reciprocal(mut x: Vec<Limb>, b: &[Limb], e: usize) -> Vec<Limb> {
    let power = magnitude::power_of_two(e);
    let mut product = magnitude::mul(&x, b);
    while large::greater(&product, &power) {
        let len = large::isub(&mut x, &[1]);
        x.truncate(len);
        let len = large::isub(&mut product, b);
        product.truncate(len);
    }
    let mut rem = magnitude::sub(&power, &product);
    while large::greater_equal(&rem, b) {
        let len = large::isub(&mut rem, b);
        rem.truncate(len);
        small::iadd(&mut x, 1);
    }
    x
}

impl LargeInteger {
    /// Returns `self / that`, truncated toward zero, with the remainder
    /// attached.
    ///
    /// The remainder takes the sign of the dividend and is available from
    /// [`remainder`](LargeInteger::remainder).
    ///
    /// ```
    /// use largeint::LargeInteger;
    ///
    /// let q = LargeInteger::from(-100).divide(&LargeInteger::from(7)).unwrap();
    /// assert_eq!(q, LargeInteger::from(-14));
    /// assert_eq!(q.remainder(), Some(&LargeInteger::from(-2)));
    /// ```
    pub fn divide(&self, that: &LargeInteger) -> Result<LargeInteger> {
        let (quotient, remainder) = self.div_rem(that)?;
        Ok(quotient.with_remainder(remainder))
    }

    /// Returns the truncated quotient and the remainder of `self / that`.
    pub fn div_rem(&self, that: &LargeInteger) -> Result<(LargeInteger, LargeInteger)> {
        if that.words.is_empty() {
            return Err(Error::arithmetic(ErrorCode::DivisionByZero));
        }
        let (quotient, remainder) = div_rem(&self.words, &that.words);
        Ok((
            LargeInteger::from_words(self.negative != that.negative, quotient),
            LargeInteger::from_words(self.negative, remainder),
        ))
    }

    /// Returns `self / divisor` for a native divisor, with the remainder
    /// attached.
    pub fn divide_word(&self, divisor: i64) -> Result<LargeInteger> {
        if divisor == 0 {
            return Err(Error::arithmetic(ErrorCode::DivisionByZero));
        }
        // unsigned_abs keeps i64::MIN as 2^63 instead of overflowing.
        let (quotient, rem) = div_word(&self.words, divisor.unsigned_abs());
        let remainder = LargeInteger::from_words(self.negative, vec![rem]);
        Ok(LargeInteger::from_words(self.negative != (divisor < 0), quotient)
            .with_remainder(remainder))
    }

    /// The remainder of the division that produced this value, if any.
    #[inline]
    pub fn remainder(&self) -> Option<&LargeInteger> {
        self.remainder.as_deref()
    }

    /// Returns the scaled reciprocal `2^(bit_length + precision) / self`,
    /// truncated toward zero.
    ///
    /// The result carries at least `precision + 1` significant bits and the
    /// sign of `self`.
    pub fn inverse_scaled(&self, precision: usize) -> Result<LargeInteger> {
        if self.words.is_empty() {
            return Err(Error::arithmetic(ErrorCode::DivisionByZero));
        }
        if precision / LIMB_BITS >= MAX_WORDS {
            return Err(Error::arithmetic(ErrorCode::CapacityExceeded));
        }
        let e = small::bit_length(&self.words) + precision;
        Ok(LargeInteger::from_words(
            self.negative,
            reciprocal(&self.words, e),
        ))
    }
}
