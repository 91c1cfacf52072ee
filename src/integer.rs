//! The arbitrary-precision integer value type.

use crate::divide;
use crate::error::{Error, ErrorCode, Result};
use crate::math::*;
use crate::multiply::Multiplier;
use crate::powers;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// An immutable signed integer of arbitrary size.
///
/// The magnitude is held as 64-bit limbs, least significant first, with no
/// leading zero limbs; zero has no limbs at all and is never negative.
/// Every operation returns a new value and leaves its operands untouched.
///
/// ```
/// use largeint::LargeInteger;
///
/// let a: LargeInteger = "123456789012345678901234567890".parse().unwrap();
/// let b = a.times(&LargeInteger::from(-2));
/// assert_eq!(b.to_string(), "-246913578024691357802469135780");
/// ```
#[derive(Clone)]
pub struct LargeInteger {
    /// Magnitude, in little-endian limb order.
    pub(crate) words: Vec<Limb>,
    pub(crate) negative: bool,
    /// Remainder of the division that produced this value. Not part of the
    /// value itself.
    pub(crate) remainder: Option<Box<LargeInteger>>,
}

impl LargeInteger {
    /// Build a value from a sign and an unnormalized magnitude.
    #[inline]
    pub(crate) fn from_words(negative: bool, mut words: Vec<Limb>) -> Self {
        normalize(&mut words);
        let negative = negative && !words.is_empty();
        LargeInteger {
            words,
            negative,
            remainder: None,
        }
    }

    #[inline]
    pub(crate) fn with_remainder(mut self, remainder: LargeInteger) -> Self {
        self.remainder = Some(Box::new(remainder));
        self
    }

    /// The integer `0`.
    #[inline]
    pub fn zero() -> Self {
        LargeInteger::from_words(false, Vec::new())
    }

    /// The integer `1`.
    #[inline]
    pub fn one() -> Self {
        LargeInteger::from_words(false, vec![1])
    }

    /// Returns the integer for a native value.
    #[inline]
    pub fn value_of(value: i64) -> Self {
        LargeInteger::from(value)
    }

    /// Limbs of the magnitude, least significant first.
    ///
    /// The most significant limb is never zero; zero has no limbs.
    #[inline]
    pub fn limbs(&self) -> &[u64] {
        &self.words
    }

    /// Number of significant limbs in the magnitude.
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    // PREDICATES

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        !self.negative && self.words == [1]
    }

    /// Returns true if this integer is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.words.is_empty()
    }

    /// Returns true if this integer is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.words.first().map_or(true, |&w| w & 1 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns true if this integer is a positive power of two.
    pub fn is_power_of_two(&self) -> bool {
        match self.words.split_last() {
            Some((&hi, rest)) => {
                !self.negative && hi.is_power_of_two() && rest.iter().all(|&w| w == 0)
            }
            None => false,
        }
    }

    /// Returns `-1`, `0` or `1` according to the sign of this integer.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.words.is_empty() {
            0
        } else {
            1
        }
    }

    // SIGN

    /// Returns the absolute value of this integer.
    pub fn abs(&self) -> LargeInteger {
        LargeInteger::from_words(false, self.words.clone())
    }

    /// Returns `-self`. The opposite of zero is zero.
    pub fn opposite(&self) -> LargeInteger {
        LargeInteger::from_words(!self.negative, self.words.clone())
    }

    // ADDITION

    /// Returns `self + that`.
    pub fn plus(&self, that: &LargeInteger) -> LargeInteger {
        self.add_signed(that.negative, &that.words)
    }

    /// Returns `self - that`.
    pub fn minus(&self, that: &LargeInteger) -> LargeInteger {
        self.add_signed(!that.negative, &that.words)
    }

    /// Add a signed magnitude, always subtracting the smaller magnitude from
    /// the larger one when the signs differ.
    fn add_signed(&self, negative: bool, words: &[Limb]) -> LargeInteger {
        if words.is_empty() {
            return LargeInteger::from_words(self.negative, self.words.clone());
        }
        if self.negative == negative {
            return LargeInteger::from_words(negative, magnitude::add(&self.words, words));
        }
        match large::compare(&self.words, words) {
            Ordering::Equal => LargeInteger::zero(),
            Ordering::Greater => {
                LargeInteger::from_words(self.negative, magnitude::sub(&self.words, words))
            }
            Ordering::Less => LargeInteger::from_words(negative, magnitude::sub(words, &self.words)),
        }
    }

    // MULTIPLICATION

    /// Returns `self * that`.
    #[inline]
    pub fn times(&self, that: &LargeInteger) -> LargeInteger {
        self.times_with(that, &Multiplier::default())
    }

    /// Returns `self * that`, choosing the algorithm with the thresholds of
    /// `multiplier`.
    pub fn times_with(&self, that: &LargeInteger, multiplier: &Multiplier) -> LargeInteger {
        let words = multiplier.multiply(&self.words, &that.words);
        LargeInteger::from_words(self.negative != that.negative, words)
    }

    /// Returns `self * multiplier` for a native multiplier.
    pub fn times_word(&self, multiplier: i64) -> LargeInteger {
        let mut words = alloc(self.words.len() + 1);
        let len = small::mul(&self.words, multiplier.unsigned_abs(), &mut words);
        words.truncate(len);
        LargeInteger::from_words(self.negative != (multiplier < 0), words)
    }

    /// Returns `self` raised to the power `exp`.
    ///
    /// `0^0` is `1`. Fails with `CapacityExceeded` if the result would not
    /// fit the largest supported size.
    pub fn pow(&self, exp: u32) -> Result<LargeInteger> {
        let bits = small::bit_length(&self.words) as u128 * exp as u128;
        if bits > (MAX_WORDS * LIMB_BITS) as u128 {
            return Err(Error::arithmetic(ErrorCode::CapacityExceeded));
        }
        let negative = self.negative && exp & 1 == 1;
        Ok(LargeInteger::from_words(
            negative,
            powers::pow(&self.words, exp),
        ))
    }

    /// Returns the integer square root, the largest `r` with `r * r <= self`.
    ///
    /// Computed with Newton's iteration `r = (r + self / r) / 2`, starting
    /// from a power of two no smaller than the root.
    pub fn sqrt(&self) -> Result<LargeInteger> {
        if self.negative {
            return Err(Error::arithmetic(ErrorCode::NegativeSquareRoot));
        }
        if self.words.is_empty() {
            return Ok(LargeInteger::zero());
        }
        let bits = small::bit_length(&self.words);
        let mut root = magnitude::power_of_two((bits + 1) / 2);
        loop {
            let (quotient, _) = divide::div_rem(&self.words, &root);
            let next = magnitude::shr(&magnitude::add(&root, &quotient), 1);
            if large::greater_equal(&next, &root) {
                return Ok(LargeInteger::from_words(false, root));
            }
            root = next;
        }
    }

    // SHIFTS

    /// Returns `self * 2^n`.
    pub fn shift_left(&self, n: usize) -> Result<LargeInteger> {
        if self.words.is_empty() {
            return Ok(LargeInteger::zero());
        }
        if n / LIMB_BITS + self.words.len() >= MAX_WORDS {
            return Err(Error::arithmetic(ErrorCode::CapacityExceeded));
        }
        Ok(LargeInteger::from_words(
            self.negative,
            magnitude::shl(&self.words, n),
        ))
    }

    /// Returns `self >> n` with sign extension, that is `floor(self / 2^n)`.
    ///
    /// Negative values round toward negative infinity, like a right shift of
    /// a two's-complement primitive.
    pub fn shift_right(&self, n: usize) -> LargeInteger {
        let mut words = magnitude::shr(&self.words, n);
        if self.negative && large::shifted_out(n / LIMB_BITS, n % LIMB_BITS, &self.words) {
            small::iadd(&mut words, 1);
        }
        LargeInteger::from_words(self.negative, words)
    }

    /// Returns `self * 2^n`; a negative `n` shifts right with sign extension.
    pub fn times_2pow(&self, n: i32) -> Result<LargeInteger> {
        if n >= 0 {
            self.shift_left(n as usize)
        } else {
            Ok(self.shift_right(n.unsigned_abs() as usize))
        }
    }

    /// Returns `self * 10^n`; a negative `n` divides by `10^-n`, truncating
    /// toward zero.
    ///
    /// Powers of ten are applied as `5^n` followed by a binary shift of `n`.
    pub fn times_10pow(&self, n: i32) -> Result<LargeInteger> {
        if self.words.is_empty() || n == 0 {
            return Ok(self.clone_value());
        }
        let exp = n.unsigned_abs();
        if n > 0 {
            // log2(10) < 3.3220
            let growth = exp as usize * 33220 / (LIMB_BITS * 10000) + 1;
            if self.words.len() + growth >= MAX_WORDS {
                return Err(Error::arithmetic(ErrorCode::CapacityExceeded));
            }
            let mut words = self.words.clone();
            powers::imul_pow10(&mut words, exp);
            Ok(LargeInteger::from_words(self.negative, words))
        } else {
            // self < 2^bits <= 2^(3 * exp) < 10^exp
            if exp as u64 * 3 >= small::bit_length(&self.words) as u64 {
                return Ok(LargeInteger::zero());
            }
            let divisor = powers::pow(&[10], exp);
            let (quotient, _) = divide::div_rem(&self.words, &divisor);
            Ok(LargeInteger::from_words(self.negative, quotient))
        }
    }

    // BITS

    /// Number of bits in the minimal two's-complement representation,
    /// excluding the sign bit.
    ///
    /// For non-negative values this is the position of the highest set bit
    /// plus one; `-1` has a bit length of 0 and `-128` of 7.
    pub fn bit_length(&self) -> usize {
        let bits = small::bit_length(&self.words);
        if self.negative && self.magnitude_is_power_of_two() {
            bits - 1
        } else {
            bits
        }
    }

    /// Number of set bits in the magnitude.
    pub fn bit_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Index of the lowest set bit, or `None` for zero.
    ///
    /// This is the same for the magnitude and the two's-complement
    /// representation.
    pub fn lowest_set_bit(&self) -> Option<usize> {
        if self.words.is_empty() {
            None
        } else {
            Some(small::trailing_zeros(&self.words))
        }
    }

    /// Returns the bit at index `n` of the two's-complement representation.
    ///
    /// Negative values have infinitely many leading one bits.
    pub fn test_bit(&self, n: usize) -> bool {
        let bit = self
            .words
            .get(n / LIMB_BITS)
            .map_or(false, |&w| (w >> (n % LIMB_BITS)) & 1 == 1);
        if !self.negative {
            return bit;
        }
        // -m == !(m - 1): bits below the lowest set bit of m stay clear, the
        // lowest set bit stays set, and every bit above it is flipped.
        let lowest = small::trailing_zeros(&self.words);
        match n.cmp(&lowest) {
            Ordering::Less => false,
            Ordering::Equal => true,
            Ordering::Greater => !bit,
        }
    }

    /// Number of decimal digits of the magnitude. Zero has one digit.
    pub fn digit_length(&self) -> usize {
        match self.words.len() {
            0 => 1,
            1 => self.words[0].ilog10() as usize + 1,
            _ => {
                // The value lies in [2^(bits-1), 2^bits), so the estimate
                // from log10(2) is at most one digit short, give or take
                // floating point error.
                let bits = small::bit_length(&self.words);
                let estimate = ((bits - 1) as f64 * core::f64::consts::LOG10_2) as usize + 1;
                let mut digits = estimate.saturating_sub(1).max(1);
                let mut power = powers::pow(&[10], digits as u32);
                while large::greater_equal(&self.words, &power) {
                    digits += 1;
                    small::imul(&mut power, 10);
                }
                digits
            }
        }
    }

    fn magnitude_is_power_of_two(&self) -> bool {
        match self.words.split_last() {
            Some((&hi, rest)) => hi.is_power_of_two() && rest.iter().all(|&w| w == 0),
            None => false,
        }
    }

    // COMPARISON

    /// Returns true if the magnitude of `self` is larger than the magnitude
    /// of `that`.
    pub fn is_larger_than(&self, that: &LargeInteger) -> bool {
        large::compare(&self.words, &that.words) == Ordering::Greater
    }

    /// This value without any attached remainder.
    #[inline]
    pub(crate) fn clone_value(&self) -> LargeInteger {
        LargeInteger {
            words: self.words.clone(),
            negative: self.negative,
            remainder: None,
        }
    }
}

impl Default for LargeInteger {
    fn default() -> Self {
        LargeInteger::zero()
    }
}

impl PartialEq for LargeInteger {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.words == other.words
    }
}

impl Eq for LargeInteger {}

impl PartialOrd for LargeInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LargeInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => large::compare(&self.words, &other.words),
            (true, true) => large::compare(&other.words, &self.words),
        }
    }
}

impl Hash for LargeInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.words.hash(state);
    }
}
