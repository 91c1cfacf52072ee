//! Conversions between `LargeInteger` and native numbers.

use crate::error::{Error, ErrorCode, Result};
use crate::integer::LargeInteger;
use crate::math::*;
use core::convert::TryFrom;

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for LargeInteger {
                #[inline]
                fn from(n: $ty) -> Self {
                    LargeInteger::from_u128(false, n as u128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for LargeInteger {
                #[inline]
                fn from(n: $ty) -> Self {
                    LargeInteger::from_u128(n < 0, n.unsigned_abs() as u128)
                }
            }
        )*
    };
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}
from_signed! {
    i8 i16 i32 i64 i128 isize
}

impl LargeInteger {
    #[inline]
    fn from_u128(negative: bool, n: u128) -> Self {
        LargeInteger::from_words(negative, vec![n as Limb, (n >> LIMB_BITS) as Limb])
    }

    /// Magnitude as a `u128`, if it fits.
    fn magnitude_u128(&self) -> Option<u128> {
        match self.words.len() {
            0 => Some(0),
            1 => Some(self.words[0] as u128),
            2 => Some(((self.words[1] as u128) << LIMB_BITS) | self.words[0] as u128),
            _ => None,
        }
    }

    /// If the integer fits in an i64, returns it. Returns None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    /// If the integer fits in a u64, returns it. Returns None otherwise.
    pub fn as_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    /// If the integer fits in an i128, returns it. Returns None otherwise.
    pub fn as_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    /// If the integer fits in a u128, returns it. Returns None otherwise.
    pub fn as_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    /// Returns the nearest `f64`, or an infinity when the magnitude is too
    /// large for a finite `f64`.
    ///
    /// The top 64 bits are rounded to a 53-bit mantissa, with every bit
    /// below them folded into the last bit so ties round correctly.
    ///
    /// ```
    /// use largeint::LargeInteger;
    ///
    /// let x = LargeInteger::from(1u64 << 53) + LargeInteger::from(1);
    /// assert_eq!(x.to_f64(), 9007199254740992.0);
    /// ```
    pub fn to_f64(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let (hi, truncated) = hi64(&self.words);
        let exp = small::bit_length(&self.words) as i64 - 64;
        let value = if exp > 1023 {
            f64::INFINITY
        } else {
            let mantissa = (hi | truncated as u64) as f64;
            mantissa * f64::from_bits(((exp + 1023) as u64) << 52)
        };
        if self.negative {
            -value
        } else {
            value
        }
    }
}

#[cold]
fn out_of_range() -> Error {
    Error::arithmetic(ErrorCode::NumberOutOfRange)
}

macro_rules! try_into_unsigned {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<&LargeInteger> for $ty {
                type Error = Error;

                fn try_from(value: &LargeInteger) -> Result<$ty> {
                    match value.magnitude_u128() {
                        Some(n) if !value.negative && n <= <$ty>::MAX as u128 => Ok(n as $ty),
                        _ => Err(out_of_range()),
                    }
                }
            }

            impl TryFrom<LargeInteger> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: LargeInteger) -> Result<$ty> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

macro_rules! try_into_signed {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<&LargeInteger> for $ty {
                type Error = Error;

                fn try_from(value: &LargeInteger) -> Result<$ty> {
                    let n = value.magnitude_u128().ok_or_else(out_of_range)?;
                    if value.negative {
                        if n <= <$ty>::MIN.unsigned_abs() as u128 {
                            Ok((n as $ty).wrapping_neg())
                        } else {
                            Err(out_of_range())
                        }
                    } else if n <= <$ty>::MAX as u128 {
                        Ok(n as $ty)
                    } else {
                        Err(out_of_range())
                    }
                }
            }

            impl TryFrom<LargeInteger> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: LargeInteger) -> Result<$ty> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

try_into_unsigned! {
    u8 u16 u32 u64 u128 usize
}
try_into_signed! {
    i8 i16 i32 i64 i128 isize
}

#[cfg(feature = "num-bigint")]
mod bigint {
    use crate::integer::LargeInteger;
    use num_bigint::BigInt;

    impl From<&BigInt> for LargeInteger {
        fn from(n: &BigInt) -> Self {
            LargeInteger::from_signed_bytes_be(&n.to_signed_bytes_be())
        }
    }

    impl From<BigInt> for LargeInteger {
        #[inline]
        fn from(n: BigInt) -> Self {
            LargeInteger::from(&n)
        }
    }

    impl From<&LargeInteger> for BigInt {
        fn from(n: &LargeInteger) -> Self {
            BigInt::from_signed_bytes_be(&n.to_signed_bytes_be())
        }
    }

    impl From<LargeInteger> for BigInt {
        #[inline]
        fn from(n: LargeInteger) -> Self {
            BigInt::from(&n)
        }
    }
}
