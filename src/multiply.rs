//! Multiplication strategy selection.
//!
//! Products are computed by one of four algorithms picked from the limb
//! counts of the operands alone: a single-limb scalar pass, grade-school
//! long multiplication, Karatsuba, or Karatsuba whose three half-size
//! products run as fork-join tasks. The choice only affects speed; every
//! strategy produces the same limbs.

use crate::math::*;

/// Number of limbs below which Karatsuba bottoms out to long multiplication.
///
/// Karatsuba tends to out-perform long-multiplication at ~1-2k bits on
/// 64-bit limbs.
pub const KARATSUBA_CUTOFF: usize = 32;

/// Number of limbs above which the three Karatsuba sub-products are forked
/// onto separate tasks.
pub const CONCURRENT_CUTOFF: usize = 128;

/// Algorithm used for a single multiplication.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One operand is a single limb.
    Scalar,
    /// Grade-school `O(n*m)` multiplication.
    Conventional,
    /// Karatsuba recursion on the calling thread.
    Karatsuba,
    /// Karatsuba recursion with the three sub-products forked and joined.
    ConcurrentKaratsuba,
}

/// Thresholds driving the choice of multiplication algorithm.
///
/// ```
/// use largeint::{LargeInteger, Multiplier, Strategy};
///
/// let conventional = Multiplier::new(usize::MAX, usize::MAX);
/// assert_eq!(conventional.strategy(500, 500), Strategy::Conventional);
///
/// let a = LargeInteger::from(u64::MAX).pow(40).unwrap();
/// assert_eq!(a.times_with(&a, &conventional), a.times(&a));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Multiplier {
    karatsuba_cutoff: usize,
    concurrent_cutoff: usize,
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier {
            karatsuba_cutoff: KARATSUBA_CUTOFF,
            concurrent_cutoff: CONCURRENT_CUTOFF,
        }
    }
}

impl Multiplier {
    /// Create a multiplier with custom cutoffs, in limbs.
    ///
    /// Operands whose smaller side has fewer limbs than `karatsuba_cutoff`
    /// use long multiplication; above `concurrent_cutoff` the Karatsuba
    /// sub-products are forked. A Karatsuba cutoff below 4 is raised to 4,
    /// since the half-sums of shorter operands are not shorter than the
    /// operands themselves.
    pub fn new(karatsuba_cutoff: usize, concurrent_cutoff: usize) -> Self {
        Multiplier {
            karatsuba_cutoff: karatsuba_cutoff.max(4),
            concurrent_cutoff,
        }
    }

    /// The limb count at which Karatsuba takes over from long multiplication.
    pub fn karatsuba_cutoff(&self) -> usize {
        self.karatsuba_cutoff
    }

    /// The limb count above which Karatsuba sub-products run concurrently.
    pub fn concurrent_cutoff(&self) -> usize {
        self.concurrent_cutoff
    }

    /// The strategy used for operands of `x_len` and `y_len` limbs.
    pub fn strategy(&self, x_len: usize, y_len: usize) -> Strategy {
        let small = x_len.min(y_len);
        if small <= 1 {
            Strategy::Scalar
        } else if small < self.karatsuba_cutoff {
            Strategy::Conventional
        } else if small <= self.concurrent_cutoff {
            Strategy::Karatsuba
        } else {
            Strategy::ConcurrentKaratsuba
        }
    }

    /// Multiply two magnitudes, returning the normalized product.
    pub(crate) fn multiply(&self, x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let x = trim(x);
        let y = trim(y);
        // Always multiply the shorter operand onto the longer one.
        let (x, y) = if x.len() <= y.len() { (x, y) } else { (y, x) };
        match self.strategy(x.len(), y.len()) {
            Strategy::Scalar => scalar_mul(x, y),
            Strategy::Conventional => long_mul(x, y),
            Strategy::Karatsuba => self.karatsuba_mul(x, y, false),
            Strategy::ConcurrentKaratsuba => {
                let _scope = tracing::debug_span!(
                    "Concurrent Karatsuba",
                    x_len = x.len(),
                    y_len = y.len(),
                )
                .entered();
                self.karatsuba_mul(x, y, true)
            }
        }
    }

    /// Karatsuba multiplication algorithm.
    ///
    /// Assumes `y.len() >= x.len()` and both operands normalized.
    fn karatsuba_mul(&self, x: &[Limb], y: &[Limb], concurrent: bool) -> Vec<Limb> {
        if x.is_empty() {
            return Vec::new();
        }
        if x.len() < self.karatsuba_cutoff {
            // Bottom-out to long multiplication for small cases.
            return if x.len() == 1 {
                scalar_mul(x, y)
            } else {
                long_mul(x, y)
            };
        }
        if x.len() < y.len() / 2 {
            return self.karatsuba_uneven_mul(x, y, concurrent);
        }

        let squaring = x == y;
        let m = y.len() / 2;
        let (xl, xh) = karatsuba_split(x, m);
        let (yl, yh) = karatsuba_split(y, m);
        let sumx = magnitude::add(xl, xh);
        let sumy = if squaring { Vec::new() } else { magnitude::add(yl, yh) };
        let sumy = if squaring { &sumx } else { &sumy };

        // Do our 3 multiplications.
        let fork = concurrent && x.len() > self.concurrent_cutoff;
        let (z0, mut z1, z2) = join3(
            fork,
            || self.karatsuba_fwd(xl, yl, concurrent),
            || self.karatsuba_fwd(&sumx, sumy, concurrent),
            || self.karatsuba_fwd(xh, yh, concurrent),
        );

        // Properly scale z1, which is `z1 - z2 - z0`.
        let len = large::isub(&mut z1, &z2);
        z1.truncate(len);
        let len = large::isub(&mut z1, &z0);
        z1.truncate(len);

        // Create our result, which is equal to, in little-endian order:
        // [z0, z1 - z2 - z0, z2]
        //  z1 must be shifted m limbs (2^(64m)) over.
        //  z2 must be shifted 2*m limbs (2^(128m)) over.
        let mut result = alloc(x.len() + y.len());
        result[..z0.len()].copy_from_slice(&z0);
        large::iadd_at(&mut result, &z1, m);
        large::iadd_at(&mut result, &z2, 2 * m);
        normalize(&mut result);
        result
    }

    /// Karatsuba multiplication algorithm where y is substantially larger than x.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_uneven_mul(&self, x: &[Limb], mut y: &[Limb], concurrent: bool) -> Vec<Limb> {
        let mut result = alloc(x.len() + y.len());

        // This effectively is like grade-school multiplication between
        // two numbers, except we're using splits on `y`, and the intermediate
        // step is a Karatsuba multiplication.
        let mut start = 0;
        while !y.is_empty() {
            let m = x.len().min(y.len());
            let (yl, yh) = karatsuba_split(y, m);
            let prod = self.karatsuba_fwd(x, yl, concurrent);
            large::iadd_at(&mut result, &prod, start);
            y = yh;
            start += m;
        }
        normalize(&mut result);

        result
    }

    /// Forwarder to the Karatsuba algorithm with the shorter operand first.
    #[inline]
    fn karatsuba_fwd(&self, x: &[Limb], y: &[Limb], concurrent: bool) -> Vec<Limb> {
        let x = trim(x);
        let y = trim(y);
        if x.len() <= y.len() {
            self.karatsuba_mul(x, y, concurrent)
        } else {
            self.karatsuba_mul(y, x, concurrent)
        }
    }
}

/// Split a buffer at limb `m`, into (lo, hi).
#[inline]
fn karatsuba_split(z: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
    let m = m.min(z.len());
    (&z[..m], &z[m..])
}

/// Multiply by a single limb. Assumes `x.len() <= 1`.
fn scalar_mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    match x.first() {
        None => Vec::new(),
        Some(&xi) => {
            let mut z = alloc(y.len() + 1);
            let len = small::mul(y, xi, &mut z);
            z.truncate(len);
            z
        }
    }
}

/// Grade-school multiplication into a fresh buffer.
fn long_mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z = alloc(x.len() + y.len());
    let len = large::mul(x, y, &mut z);
    z.truncate(len);
    z
}

/// Run three independent computations and wait for all of them.
#[cfg(feature = "parallel")]
fn join3<A, B, C, RA, RB, RC>(fork: bool, a: A, b: B, c: C) -> (RA, RB, RC)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    C: FnOnce() -> RC + Send,
    RA: Send,
    RB: Send,
    RC: Send,
{
    if fork {
        let (ra, (rb, rc)) = rayon::join(a, || rayon::join(b, c));
        (ra, rb, rc)
    } else {
        (a(), b(), c())
    }
}

/// Run three independent computations and wait for all of them.
#[cfg(not(feature = "parallel"))]
fn join3<A, B, C, RA, RB, RC>(_fork: bool, a: A, b: B, c: C) -> (RA, RB, RC)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
    C: FnOnce() -> RC,
{
    (a(), b(), c())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limbs(seed: u64, len: usize) -> Vec<Limb> {
        // xorshift, so the tests do not depend on an RNG crate.
        let mut state = seed | 1;
        let mut v: Vec<Limb> = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state
            })
            .collect();
        if let Some(last) = v.last_mut() {
            *last |= 1;
        }
        v
    }

    #[test]
    fn strategy_test() {
        let m = Multiplier::default();
        assert_eq!(m.strategy(0, 100), Strategy::Scalar);
        assert_eq!(m.strategy(1, 100), Strategy::Scalar);
        assert_eq!(m.strategy(2, 100), Strategy::Conventional);
        assert_eq!(m.strategy(KARATSUBA_CUTOFF, 100), Strategy::Karatsuba);
        assert_eq!(m.strategy(CONCURRENT_CUTOFF, 500), Strategy::Karatsuba);
        assert_eq!(
            m.strategy(CONCURRENT_CUTOFF + 1, 500),
            Strategy::ConcurrentKaratsuba
        );
        assert_eq!(Multiplier::new(0, 0).karatsuba_cutoff(), 4);
    }

    #[test]
    fn strategies_agree_test() {
        let conventional = Multiplier::new(usize::MAX, usize::MAX);
        let sequential = Multiplier::new(4, usize::MAX);
        let concurrent = Multiplier::new(4, 8);
        for &(xl, yl) in &[(2, 2), (5, 9), (16, 16), (17, 40), (33, 33), (3, 70), (64, 65)] {
            let x = limbs(xl as u64 * 31 + 7, xl);
            let y = limbs(yl as u64 * 17 + 3, yl);
            let expected = conventional.multiply(&x, &y);
            assert_eq!(sequential.multiply(&x, &y), expected, "{}x{}", xl, yl);
            assert_eq!(concurrent.multiply(&x, &y), expected, "{}x{}", xl, yl);
            assert_eq!(concurrent.multiply(&y, &x), expected, "{}x{}", yl, xl);
        }
    }

    #[test]
    fn squaring_test() {
        let conventional = Multiplier::new(usize::MAX, usize::MAX);
        let concurrent = Multiplier::new(4, 8);
        let x = vec![u64::MAX; 50];
        assert_eq!(concurrent.multiply(&x, &x), conventional.multiply(&x, &x));
    }

    #[test]
    fn zero_operand_test() {
        let m = Multiplier::new(4, 4);
        assert!(m.multiply(&[], &[1, 2, 3]).is_empty());
        assert!(m.multiply(&[0, 0], &[1, 2, 3]).is_empty());
    }
}
