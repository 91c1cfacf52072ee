//! Two's-complement big-endian byte representation.

use crate::integer::LargeInteger;
use crate::math::*;

impl LargeInteger {
    /// Returns the minimal big-endian two's-complement bytes of this integer.
    ///
    /// The length is `bit_length() / 8 + 1`, so there is always room for the
    /// sign bit and zero is a single `0x00`.
    ///
    /// ```
    /// use largeint::LargeInteger;
    ///
    /// assert_eq!(LargeInteger::from(-128).to_signed_bytes_be(), [0x80]);
    /// assert_eq!(LargeInteger::from(128).to_signed_bytes_be(), [0x00, 0x80]);
    /// ```
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        let len = self.bit_length() / 8 + 1;
        let mut bytes = vec![0u8; len];
        for (i, byte) in bytes.iter_mut().rev().enumerate() {
            if let Some(&word) = self.words.get(i / 8) {
                *byte = (word >> (8 * (i % 8))) as u8;
            }
        }
        if self.negative {
            negate(&mut bytes);
        }
        bytes
    }

    /// Build an integer from big-endian two's-complement bytes.
    ///
    /// The top bit of the first byte is the sign; an empty slice is zero.
    /// Use a sub-slice to read from an offset within a larger buffer.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> LargeInteger {
        let negative = bytes.first().map_or(false, |&b| b & 0x80 != 0);
        let mut magnitude = bytes.to_vec();
        if negative {
            negate(&mut magnitude);
        }

        let mut words = alloc((magnitude.len() + 7) / 8);
        for (i, &byte) in magnitude.iter().rev().enumerate() {
            words[i / 8] |= (byte as Limb) << (8 * (i % 8));
        }
        LargeInteger::from_words(negative, words)
    }
}

/// Two's-complement negation of a big-endian byte string, in place.
fn negate(bytes: &mut [u8]) {
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        let (v, c) = (!*byte).overflowing_add(carry as u8);
        *byte = v;
        carry = c;
    }
}
