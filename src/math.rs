//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! The kernels in `small` and `large` do not allocate. Callers hand in an
//! output buffer sized for the worst case and get back the number of
//! significant limbs that were written. Inputs do not need to be normalized.

use core::cmp;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 64-bit
//  numbers instead. Products and two-limb dividends are computed in the
//  double-width type, which every target supported by Rust provides, either
//  natively or through compiler intrinsics.
pub(crate) type Limb = u64;

type Wide = u128;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: usize = 64;

/// Largest number of limbs a value may grow to through a caller-supplied
/// count (shift distance, exponent). This is 2^32 bits, or 512MiB of limbs.
pub(crate) const MAX_WORDS: usize = 1 << 26;

/// Capacity classes buffers are rounded up to, so that freed buffers are
/// likely to fit the next request of a similar size.
const CAPACITY_TIERS: [usize; 10] = [4, 6, 10, 18, 34, 66, 130, 258, 514, 1026];

/// Round a limb count up to its capacity tier.
#[inline]
pub(crate) fn capacity_for(len: usize) -> usize {
    for &tier in CAPACITY_TIERS.iter() {
        if len <= tier {
            return tier;
        }
    }
    len
}

/// Allocate a zero-filled buffer of `len` limbs with tiered capacity.
#[inline]
pub(crate) fn alloc(len: usize) -> Vec<Limb> {
    let mut buf = Vec::with_capacity(capacity_for(len));
    buf.resize(len, 0);
    buf
}

/// Number of significant limbs, ignoring leading zeros.
#[inline]
pub(crate) fn normalized_len(x: &[Limb]) -> usize {
    let mut len = x.len();
    while len > 0 && x[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// Normalize the container by popping any leading zeros.
#[inline]
pub(crate) fn normalize(x: &mut Vec<Limb>) {
    let len = normalized_len(x);
    x.truncate(len);
}

/// Slice of `x` without its leading zero limbs.
#[inline]
pub(crate) fn trim(x: &[Limb]) -> &[Limb] {
    &x[..normalized_len(x)]
}

// HI64
// ----

/// Shift 64-bit integer to high 64-bits.
#[inline]
fn u64_to_hi64_1(r0: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    (r0 << ls, false)
}

/// Shift 2 64-bit integers to high 64-bits.
#[inline]
fn u64_to_hi64_2(r0: u64, r1: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    let rs = 64 - ls;
    let v = match ls {
        0 => r0,
        _ => (r0 << ls) | (r1 >> rs),
    };
    let n = r1 << ls != 0;
    (v, n)
}

/// Get the high 64 bits of a normalized buffer, and whether any of the
/// truncated bits below them are non-zero.
#[inline]
pub(crate) fn hi64(x: &[Limb]) -> (u64, bool) {
    match x.len() {
        0 => (0, false),
        1 => u64_to_hi64_1(x[0]),
        len => {
            let (v, n) = u64_to_hi64_2(x[len - 1], x[len - 2]);
            (v, n || x[..len - 2].iter().any(|&xi| xi != 0))
        }
    }
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and an incoming carry, returning the sum and the
    /// outgoing carry.
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: bool) -> (Limb, bool) {
        let (v, c1) = x.overflowing_add(y);
        let (v, c2) = v.overflowing_add(carry as Limb);
        (v, c1 | c2)
    }

    // SUBTRACTION

    /// Subtract two limbs and an incoming borrow, returning the difference
    /// and the outgoing borrow.
    #[inline]
    pub fn sub(x: Limb, y: Limb, borrow: bool) -> (Limb, bool) {
        let (v, b1) = x.overflowing_sub(y);
        let (v, b2) = v.overflowing_sub(borrow as Limb);
        (v, b1 | b2)
    }

    // MULTIPLICATION

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow, as long as wide is 2x as wide. This is because
        // the following is always true:
        // `Wide::max_value() - (Narrow::max_value() * Narrow::max_value()) >= Narrow::max_value()`
        let z = x as Wide * y as Wide + carry as Wide;
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    /// Compute `x * y + z + carry`, returning the (low, high) components.
    ///
    /// `(2^64 - 1)^2 + 2 * (2^64 - 1)` is exactly `2^128 - 1`, so this never
    /// overflows the wide type.
    #[inline]
    pub fn mul_add(x: Limb, y: Limb, z: Limb, carry: Limb) -> (Limb, Limb) {
        let w = x as Wide * y as Wide + z as Wide + carry as Wide;
        (w as Limb, (w >> LIMB_BITS) as Limb)
    }

    // DIVISION

    /// Divide the two-limb value `hi:lo` by `d`, returning (quotient, remainder).
    ///
    /// Requires `hi < d`, so that the quotient fits in a single limb.
    #[inline]
    pub fn div(hi: Limb, lo: Limb, d: Limb) -> (Limb, Limb) {
        debug_assert!(hi < d);
        let n = ((hi as Wide) << LIMB_BITS) | lo as Wide;
        ((n / d as Wide) as Limb, (n % d as Wide) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        let mut carry = y;
        for xi in x.iter_mut() {
            if carry == 0 {
                return;
            }
            let (v, c) = xi.overflowing_add(carry);
            *xi = v;
            carry = c as Limb;
        }
        // If we overflowed the buffer entirely, need to add the carry to
        // the end of the buffer.
        if carry != 0 {
            x.push(carry);
        }
    }

    // MULTIPLICATION

    /// Multiply `x` by a single limb into `out`.
    ///
    /// `out` must hold at least `x.len() + 1` limbs.
    pub fn mul(x: &[Limb], y: Limb, out: &mut [Limb]) -> usize {
        debug_assert!(out.len() > x.len());
        let mut carry: Limb = 0;
        for (xi, oi) in x.iter().zip(out.iter_mut()) {
            let (lo, hi) = scalar::mul(*xi, y, carry);
            *oi = lo;
            carry = hi;
        }
        out[x.len()] = carry;
        normalized_len(&out[..x.len() + 1])
    }

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let (lo, hi) = scalar::mul(*xi, y, carry);
            *xi = lo;
            carry = hi;
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
        normalize(x);
    }

    /// Accumulate `x * y` into `z`, starting at limb `start`.
    ///
    /// `z` must be wide enough to absorb the final carry, which holds
    /// whenever the accumulated total fits in `z`.
    #[inline]
    pub fn mul_add_at(z: &mut [Limb], x: &[Limb], y: Limb, start: usize) {
        let mut carry: Limb = 0;
        for (zi, &xi) in z[start..].iter_mut().zip(x.iter()) {
            let (lo, hi) = scalar::mul_add(xi, y, *zi, carry);
            *zi = lo;
            carry = hi;
        }
        let mut index = start + x.len();
        while carry != 0 {
            let (v, c) = z[index].overflowing_add(carry);
            z[index] = v;
            carry = c as Limb;
            index += 1;
        }
    }

    // DIVISION

    /// Divide `x` by a single non-zero limb, writing the quotient to `out`
    /// and returning the remainder.
    ///
    /// `out` must hold at least `x.len()` limbs. Divisors that fit in 32 bits
    /// take a path using only native 64-bit division, which is the common
    /// case when splitting off groups of digits for formatting.
    pub fn div(x: &[Limb], d: Limb, out: &mut [Limb]) -> Limb {
        debug_assert!(d != 0 && out.len() >= x.len());
        let mut rem: Limb = 0;
        if d >> 32 == 0 {
            for i in (0..x.len()).rev() {
                let hi = (rem << 32) | (x[i] >> 32);
                let qhi = hi / d;
                rem = hi % d;
                let lo = (rem << 32) | (x[i] & 0xFFFF_FFFF);
                let qlo = lo / d;
                rem = lo % d;
                out[i] = (qhi << 32) | qlo;
            }
        } else {
            for i in (0..x.len()).rev() {
                let (q, r) = scalar::div(rem, x[i], d);
                out[i] = q;
                rem = r;
            }
        }
        rem
    }

    /// DivAssign by a single non-zero limb, returning the remainder.
    #[inline]
    pub fn idiv(x: &mut Vec<Limb>, d: Limb) -> Limb {
        debug_assert!(d != 0);
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let (q, r) = scalar::div(rem, *xi, d);
            *xi = q;
            rem = r;
        }
        normalize(x);
        rem
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            None => 0,
            Some(&hi) => hi.leading_zeros() as usize,
        }
    }

    /// Calculate the bit-length of a normalized big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x);
        LIMB_BITS
            .checked_mul(x.len())
            .map(|v| v - nlz)
            .unwrap_or(usize::MAX)
    }

    /// Number of trailing zero bits. Zero has none.
    #[inline]
    pub fn trailing_zeros(x: &[Limb]) -> usize {
        for (i, &xi) in x.iter().enumerate() {
            if xi != 0 {
                return i * LIMB_BITS + xi.trailing_zeros() as usize;
            }
        }
        0
    }

    // SHR

    /// Shift-right `n` bits in place, dropping the shifted-out bits.
    pub fn ishr(x: &mut Vec<Limb>, n: usize) {
        let div = n / LIMB_BITS;
        let rem = n % LIMB_BITS;
        if div >= x.len() {
            x.clear();
            return;
        }
        if div != 0 {
            x.drain(..div);
        }
        if rem != 0 {
            let len = x.len();
            for i in 0..len {
                let hi = if i + 1 < len { x[i + 1] << (LIMB_BITS - rem) } else { 0 };
                x[i] = (x[i] >> rem) | hi;
            }
        }
        normalize(x);
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both buffers must be normalized.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            // Equal case.
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than y.
    #[inline]
    pub fn greater(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Greater
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Add `y` to `x` into `out`.
    ///
    /// Requires `x.len() >= y.len()` and room for `x.len() + 1` limbs in `out`.
    pub fn add(x: &[Limb], y: &[Limb], out: &mut [Limb]) -> usize {
        debug_assert!(x.len() >= y.len() && out.len() > x.len());
        let mut carry = false;
        for i in 0..y.len() {
            let (v, c) = scalar::add(x[i], y[i], carry);
            out[i] = v;
            carry = c;
        }
        for i in y.len()..x.len() {
            let (v, c) = scalar::add(x[i], 0, carry);
            out[i] = v;
            carry = c;
        }
        out[x.len()] = carry as Limb;
        normalized_len(&out[..x.len() + 1])
    }

    /// AddAssign `y` into `x`, starting at limb `start` of `x`.
    ///
    /// `x` must be wide enough to absorb the final carry.
    pub fn iadd_at(x: &mut [Limb], y: &[Limb], start: usize) {
        let mut carry = false;
        for (xi, &yi) in x[start..].iter_mut().zip(y.iter()) {
            let (v, c) = scalar::add(*xi, yi, carry);
            *xi = v;
            carry = c;
        }
        let mut index = start + y.len();
        while carry {
            let (v, c) = scalar::add(x[index], 0, true);
            x[index] = v;
            carry = c;
            index += 1;
        }
    }

    // SUBTRACTION

    /// Subtract `y` from `x` into `out`.
    ///
    /// Requires `x >= y` as magnitudes and room for `x.len()` limbs in `out`.
    pub fn sub(x: &[Limb], y: &[Limb], out: &mut [Limb]) -> usize {
        debug_assert!(greater_equal(trim(x), trim(y)) && out.len() >= x.len());
        let y = trim(y);
        let mut borrow = false;
        for i in 0..y.len() {
            let (v, b) = scalar::sub(x[i], y[i], borrow);
            out[i] = v;
            borrow = b;
        }
        for i in y.len()..x.len() {
            let (v, b) = scalar::sub(x[i], 0, borrow);
            out[i] = v;
            borrow = b;
        }
        debug_assert!(!borrow);
        normalized_len(&out[..x.len()])
    }

    /// SubAssign `y` from `x`, returning the normalized length of `x`.
    ///
    /// Requires `x >= y` as magnitudes.
    pub fn isub(x: &mut [Limb], y: &[Limb]) -> usize {
        let y = trim(y);
        debug_assert!(greater_equal(trim(x), y));
        let mut borrow = false;
        for (xi, &yi) in x.iter_mut().zip(y.iter()) {
            let (v, b) = scalar::sub(*xi, yi, borrow);
            *xi = v;
            borrow = b;
        }
        let mut index = y.len();
        while borrow {
            let (v, b) = scalar::sub(x[index], 0, true);
            x[index] = v;
            borrow = b;
            index += 1;
        }
        normalized_len(x)
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Accumulates `x * y[i]` into `out` at limb offset `i` for every limb of
    /// `y`. `out` must hold at least `x.len() + y.len()` limbs; it is cleared
    /// first.
    pub fn mul(x: &[Limb], y: &[Limb], out: &mut [Limb]) -> usize {
        let len = x.len() + y.len();
        debug_assert!(out.len() >= len);
        for oi in out[..len].iter_mut() {
            *oi = 0;
        }
        for (i, &yi) in y.iter().enumerate() {
            if yi != 0 {
                small::mul_add_at(out, x, yi, i);
            }
        }
        normalized_len(&out[..len])
    }

    // SHIFTS

    /// Shift `x` left by `word_shift` limbs and `bit_shift` bits into `out`.
    ///
    /// Requires `bit_shift < LIMB_BITS` and room for
    /// `x.len() + word_shift + 1` limbs in `out`.
    pub fn shl(word_shift: usize, bit_shift: usize, x: &[Limb], out: &mut [Limb]) -> usize {
        debug_assert!(bit_shift < LIMB_BITS);
        let len = x.len() + word_shift + 1;
        debug_assert!(out.len() >= len);
        for oi in out[..word_shift].iter_mut() {
            *oi = 0;
        }
        if bit_shift == 0 {
            out[word_shift..word_shift + x.len()].copy_from_slice(x);
            out[len - 1] = 0;
        } else {
            // Internally, for each item, we shift left by n, and add the
            // previous right shifted limb-bits.
            let rshift = LIMB_BITS - bit_shift;
            let mut prev: Limb = 0;
            for (i, &xi) in x.iter().enumerate() {
                out[word_shift + i] = (xi << bit_shift) | (prev >> rshift);
                prev = xi;
            }
            out[len - 1] = prev >> rshift;
        }
        normalized_len(&out[..len])
    }

    /// Shift `x` right by `word_shift` limbs and `bit_shift` bits into `out`.
    ///
    /// Requires `bit_shift < LIMB_BITS` and room for
    /// `x.len() - word_shift` limbs in `out`.
    pub fn shr(word_shift: usize, bit_shift: usize, x: &[Limb], out: &mut [Limb]) -> usize {
        debug_assert!(bit_shift < LIMB_BITS);
        if word_shift >= x.len() {
            return 0;
        }
        let len = x.len() - word_shift;
        debug_assert!(out.len() >= len);
        if bit_shift == 0 {
            out[..len].copy_from_slice(&x[word_shift..]);
        } else {
            let lshift = LIMB_BITS - bit_shift;
            for i in 0..len {
                let lo = x[word_shift + i] >> bit_shift;
                let hi = match x.get(word_shift + i + 1) {
                    Some(&next) => next << lshift,
                    None => 0,
                };
                out[i] = lo | hi;
            }
        }
        normalized_len(&out[..len])
    }

    /// Check whether a right shift by `word_shift` limbs and `bit_shift`
    /// bits would discard any set bit.
    pub fn shifted_out(word_shift: usize, bit_shift: usize, x: &[Limb]) -> bool {
        let whole = word_shift.min(x.len());
        if x[..whole].iter().any(|&xi| xi != 0) {
            return true;
        }
        match x.get(word_shift) {
            Some(&xi) if bit_shift != 0 => xi & ((1 << bit_shift) - 1) != 0,
            _ => false,
        }
    }
}

// MAGNITUDE
// ---------

// Allocating wrappers around the kernels, for algorithms that build new
// magnitudes out of old ones.

pub(crate) mod magnitude {
    use super::*;
    use crate::multiply::Multiplier;

    /// Add two magnitudes.
    pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let (x, y) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut z = alloc(x.len() + 1);
        let len = large::add(x, y, &mut z);
        z.truncate(len);
        z
    }

    /// Subtract `y` from `x`. Requires `x >= y`.
    pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = alloc(x.len());
        let len = large::sub(x, y, &mut z);
        z.truncate(len);
        z
    }

    /// Multiply two magnitudes with the default strategy thresholds.
    #[inline]
    pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        Multiplier::default().multiply(x, y)
    }

    /// Shift-left by `n` bits.
    pub fn shl(x: &[Limb], n: usize) -> Vec<Limb> {
        if x.is_empty() {
            return Vec::new();
        }
        let mut z = alloc(x.len() + n / LIMB_BITS + 1);
        let len = large::shl(n / LIMB_BITS, n % LIMB_BITS, x, &mut z);
        z.truncate(len);
        z
    }

    /// Shift-right by `n` bits, dropping the shifted-out bits.
    pub fn shr(x: &[Limb], n: usize) -> Vec<Limb> {
        let word_shift = n / LIMB_BITS;
        if word_shift >= x.len() {
            return Vec::new();
        }
        let mut z = alloc(x.len() - word_shift);
        let len = large::shr(word_shift, n % LIMB_BITS, x, &mut z);
        z.truncate(len);
        z
    }

    /// The magnitude `2^n`.
    pub fn power_of_two(n: usize) -> Vec<Limb> {
        let mut z = alloc(n / LIMB_BITS + 1);
        z[n / LIMB_BITS] = 1 << (n % LIMB_BITS);
        z
    }
}

// TESTS
// -----
