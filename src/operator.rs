//! Operator overloads, so that `LargeInteger` reads like a primitive integer.
//!
//! Every binary operator is implemented for all four combinations of owned
//! and borrowed operands, and for a native `i64` on the right. Division,
//! remainder and left shift panic on the conditions where their checked
//! counterparts (`divide`, `div_rem`, `shift_left`) return an error, the same
//! way primitive integers panic on division by zero.
//!
//! ```
//! use largeint::LargeInteger;
//!
//! let a: LargeInteger = "123456789012345678901234567890".parse().unwrap();
//! let b = &a * -2 + 1;
//! assert_eq!(b.to_string(), "-246913578024691357802469135779");
//! assert_eq!(&b / &a, LargeInteger::from(-1));
//! assert_eq!(-&b % 7, LargeInteger::from(6));
//! ```

use crate::integer::LargeInteger;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

fn quotient(a: &LargeInteger, b: &LargeInteger) -> LargeInteger {
    match a.div_rem(b) {
        Ok((q, _)) => q,
        Err(err) => panic!("attempt to divide: {}", err),
    }
}

fn remainder(a: &LargeInteger, b: &LargeInteger) -> LargeInteger {
    match a.div_rem(b) {
        Ok((_, r)) => r,
        Err(err) => panic!("attempt to calculate the remainder: {}", err),
    }
}

macro_rules! binary_op {
    ($imp:ident $method:ident, $assign:ident $assign_method:ident, $f:expr) => {
        impl<'a, 'b> $imp<&'b LargeInteger> for &'a LargeInteger {
            type Output = LargeInteger;

            #[inline]
            fn $method(self, other: &'b LargeInteger) -> LargeInteger {
                let f: fn(&LargeInteger, &LargeInteger) -> LargeInteger = $f;
                f(self, other)
            }
        }

        impl<'a> $imp<LargeInteger> for &'a LargeInteger {
            type Output = LargeInteger;

            #[inline]
            fn $method(self, other: LargeInteger) -> LargeInteger {
                $imp::$method(self, &other)
            }
        }

        impl<'b> $imp<&'b LargeInteger> for LargeInteger {
            type Output = LargeInteger;

            #[inline]
            fn $method(self, other: &'b LargeInteger) -> LargeInteger {
                $imp::$method(&self, other)
            }
        }

        impl $imp<LargeInteger> for LargeInteger {
            type Output = LargeInteger;

            #[inline]
            fn $method(self, other: LargeInteger) -> LargeInteger {
                $imp::$method(&self, &other)
            }
        }

        impl<'a> $imp<i64> for &'a LargeInteger {
            type Output = LargeInteger;

            #[inline]
            fn $method(self, other: i64) -> LargeInteger {
                $imp::$method(self, &LargeInteger::from(other))
            }
        }

        impl $imp<i64> for LargeInteger {
            type Output = LargeInteger;

            #[inline]
            fn $method(self, other: i64) -> LargeInteger {
                $imp::$method(&self, &LargeInteger::from(other))
            }
        }

        impl<'b> $assign<&'b LargeInteger> for LargeInteger {
            #[inline]
            fn $assign_method(&mut self, other: &'b LargeInteger) {
                *self = $imp::$method(&*self, other);
            }
        }

        impl $assign<LargeInteger> for LargeInteger {
            #[inline]
            fn $assign_method(&mut self, other: LargeInteger) {
                *self = $imp::$method(&*self, &other);
            }
        }

        impl $assign<i64> for LargeInteger {
            #[inline]
            fn $assign_method(&mut self, other: i64) {
                *self = $imp::$method(&*self, other);
            }
        }
    };
}

binary_op!(Add add, AddAssign add_assign, |a, b| a.plus(b));
binary_op!(Sub sub, SubAssign sub_assign, |a, b| a.minus(b));
binary_op!(Mul mul, MulAssign mul_assign, |a, b| a.times(b));
binary_op!(Div div, DivAssign div_assign, quotient);
binary_op!(Rem rem, RemAssign rem_assign, remainder);

impl Neg for LargeInteger {
    type Output = LargeInteger;

    #[inline]
    fn neg(self) -> LargeInteger {
        self.opposite()
    }
}

impl<'a> Neg for &'a LargeInteger {
    type Output = LargeInteger;

    #[inline]
    fn neg(self) -> LargeInteger {
        self.opposite()
    }
}

/// Shift left by `n` bits.
///
/// # Panics
///
/// Panics if the result would exceed the largest supported size.
impl<'a> Shl<usize> for &'a LargeInteger {
    type Output = LargeInteger;

    fn shl(self, n: usize) -> LargeInteger {
        match self.shift_left(n) {
            Ok(value) => value,
            Err(err) => panic!("attempt to shift left: {}", err),
        }
    }
}

impl Shl<usize> for LargeInteger {
    type Output = LargeInteger;

    #[inline]
    fn shl(self, n: usize) -> LargeInteger {
        &self << n
    }
}

/// Arithmetic shift right by `n` bits, rounding toward negative infinity.
///
/// ```
/// use largeint::LargeInteger;
///
/// assert_eq!(LargeInteger::from(-5) >> 1, LargeInteger::from(-3));
/// ```
impl<'a> Shr<usize> for &'a LargeInteger {
    type Output = LargeInteger;

    #[inline]
    fn shr(self, n: usize) -> LargeInteger {
        self.shift_right(n)
    }
}

impl Shr<usize> for LargeInteger {
    type Output = LargeInteger;

    #[inline]
    fn shr(self, n: usize) -> LargeInteger {
        self.shift_right(n)
    }
}

impl ShlAssign<usize> for LargeInteger {
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        *self = &*self << n;
    }
}

impl ShrAssign<usize> for LargeInteger {
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        *self = self.shift_right(n);
    }
}

impl Sum for LargeInteger {
    fn sum<I: Iterator<Item = LargeInteger>>(iter: I) -> Self {
        iter.fold(LargeInteger::zero(), |acc, x| acc.plus(&x))
    }
}

impl<'a> Sum<&'a LargeInteger> for LargeInteger {
    fn sum<I: Iterator<Item = &'a LargeInteger>>(iter: I) -> Self {
        iter.fold(LargeInteger::zero(), |acc, x| acc.plus(x))
    }
}

impl Product for LargeInteger {
    fn product<I: Iterator<Item = LargeInteger>>(iter: I) -> Self {
        iter.fold(LargeInteger::one(), |acc, x| acc.times(&x))
    }
}

impl<'a> Product<&'a LargeInteger> for LargeInteger {
    fn product<I: Iterator<Item = &'a LargeInteger>>(iter: I) -> Self {
        iter.fold(LargeInteger::one(), |acc, x| acc.times(x))
    }
}
