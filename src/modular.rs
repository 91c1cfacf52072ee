//! Modular arithmetic and greatest common divisors.
//!
//! The modulus is always an explicit argument; there is no ambient modulus
//! that silently changes what `plus` or `times` mean.

use crate::divide;
use crate::error::{Error, ErrorCode, Result};
use crate::integer::LargeInteger;
use crate::math::*;
use core::cmp::Ordering;
use core::mem;

impl LargeInteger {
    /// Returns `self mod m`, always in `[0, m)`.
    ///
    /// Unlike the remainder of a division, the result does not take the sign
    /// of `self`. Fails with `NonPositiveModulus` unless `m > 0`.
    ///
    /// ```
    /// use largeint::LargeInteger;
    ///
    /// let m = LargeInteger::from(-100).modulo(&LargeInteger::from(7)).unwrap();
    /// assert_eq!(m, LargeInteger::from(5));
    /// ```
    pub fn modulo(&self, m: &LargeInteger) -> Result<LargeInteger> {
        check_modulus(m)?;
        Ok(self.reduce(m))
    }

    /// Returns the inverse of `self` modulo `m`, the value `x` in `[0, m)`
    /// with `self * x mod m == 1`.
    ///
    /// Fails with `NotInvertible` if `self` and `m` are not coprime.
    pub fn mod_inverse(&self, m: &LargeInteger) -> Result<LargeInteger> {
        check_modulus(m)?;

        // Extended Euclid, tracking only the coefficient of `self`.
        let mut old_r = self.reduce(m);
        let mut r = m.clone_value();
        let mut old_s = LargeInteger::one();
        let mut s = LargeInteger::zero();
        while !r.is_zero() {
            let (quotient, rem) = old_r.div_rem(&r)?;
            old_r = mem::replace(&mut r, rem);
            let next = old_s.minus(&quotient.times(&s));
            old_s = mem::replace(&mut s, next);
        }
        if !old_r.is_one() {
            return Err(Error::arithmetic(ErrorCode::NotInvertible));
        }
        Ok(old_s.reduce(m))
    }

    /// Returns `self^exp mod m`, in `[0, m)`.
    ///
    /// A negative exponent raises the modular inverse of `self` to `-exp`,
    /// and fails with `NotInvertible` when that inverse does not exist.
    ///
    /// ```
    /// use largeint::LargeInteger;
    ///
    /// let x = LargeInteger::from(7)
    ///     .mod_pow(&LargeInteger::from(560), &LargeInteger::from(561))
    ///     .unwrap();
    /// assert!(x.is_one());
    /// ```
    pub fn mod_pow(&self, exp: &LargeInteger, m: &LargeInteger) -> Result<LargeInteger> {
        check_modulus(m)?;
        if m.is_one() {
            return Ok(LargeInteger::zero());
        }
        let base = if exp.is_negative() {
            self.mod_inverse(m)?
        } else {
            self.reduce(m)
        };

        // Left-to-right square and multiply over the bits of |exp|.
        let mut result = LargeInteger::one();
        for i in (0..small::bit_length(&exp.words)).rev() {
            result = result.times(&result).reduce(m);
            if (exp.words[i / LIMB_BITS] >> (i % LIMB_BITS)) & 1 == 1 {
                result = result.times(&base).reduce(m);
            }
        }
        Ok(result)
    }

    /// Returns the greatest common divisor of `self` and `that`.
    ///
    /// The result is never negative, `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`.
    pub fn gcd(&self, that: &LargeInteger) -> LargeInteger {
        let (mut a, mut b) = match large::compare(&self.words, &that.words) {
            Ordering::Less => (that.words.clone(), self.words.clone()),
            _ => (self.words.clone(), that.words.clone()),
        };

        if euclid_steps(&mut a, &mut b) > 0 {
            tracing::trace!(a_len = a.len(), b_len = b.len(), "switching to binary gcd");
        }
        LargeInteger::from_words(false, binary_gcd(a, b))
    }

    /// `self mod m` for a modulus already known to be positive.
    pub(crate) fn reduce(&self, m: &LargeInteger) -> LargeInteger {
        if !self.negative && large::less(&self.words, &m.words) {
            return self.clone_value();
        }
        let (_, rem) = divide::div_rem(&self.words, &m.words);
        if self.negative && !rem.is_empty() {
            LargeInteger::from_words(false, magnitude::sub(&m.words, &rem))
        } else {
            LargeInteger::from_words(false, rem)
        }
    }
}

fn check_modulus(m: &LargeInteger) -> Result<()> {
    if m.is_positive() {
        Ok(())
    } else {
        Err(Error::arithmetic(ErrorCode::NonPositiveModulus))
    }
}

/// Euclid steps while the sizes are far apart, where one division removes at
/// least a whole limb. Requires `a >= b` and returns the number of steps.
fn euclid_steps(a: &mut Vec<Limb>, b: &mut Vec<Limb>) -> usize {
    let mut steps = 0;
    while !b.is_empty() && a.len() > b.len() + 1 {
        let (_, rem) = divide::div_rem(a, b);
        *a = mem::replace(b, rem);
        steps += 1;
    }
    steps
}

/// Stein's algorithm on two magnitudes, either of which may be zero.
fn binary_gcd(mut u: Vec<Limb>, mut v: Vec<Limb>) -> Vec<Limb> {
    if u.is_empty() {
        return v;
    }
    if v.is_empty() {
        return u;
    }

    // Common power of 2.
    let u_zeros = small::trailing_zeros(&u);
    let v_zeros = small::trailing_zeros(&v);
    let common_shift = u_zeros.min(v_zeros);
    small::ishr(&mut u, u_zeros);
    small::ishr(&mut v, v_zeros);

    loop {
        // u and v are both odd here.
        if large::less(&u, &v) {
            mem::swap(&mut u, &mut v);
        }
        let len = large::isub(&mut u, &v);
        u.truncate(len);
        if u.is_empty() {
            return magnitude::shl(&v, common_shift);
        }
        let zeros = small::trailing_zeros(&u);
        small::ishr(&mut u, zeros);
    }
}
