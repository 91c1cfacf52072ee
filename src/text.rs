//! Parsing and formatting in any radix from 2 to 36.
//!
//! Digits are handled in groups that fit a native integer: the largest power
//! of the radix below `2^64` when parsing, and below `2^32` when formatting
//! so that splitting groups off takes the 32-bit path of word division. Long
//! numbers are split in halves around a power of the radix first, which
//! turns the quadratic group loop into a few large multiplications or
//! divisions.

use crate::divide;
use crate::error::{Error, ErrorCode, Result};
use crate::integer::LargeInteger;
use crate::math::*;
use crate::powers;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

/// Number of digit groups above which parsing and formatting divide and
/// conquer.
const GROUPS_CUTOFF: usize = 64;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest `(count, radix^count)` with `radix^count <= max`.
fn group(radix: u32, max: u64) -> (usize, u64) {
    let radix = radix as u64;
    let mut count = 1;
    let mut base = radix;
    while let Some(next) = base.checked_mul(radix) {
        if next > max {
            break;
        }
        base = next;
        count += 1;
    }
    (count, base)
}

/// MulAssign by `radix^n`.
fn scale(x: &mut Vec<Limb>, radix: u32, n: usize) {
    if radix == 10 {
        powers::imul_pow10(x, n as u32);
    } else if radix.is_power_of_two() {
        *x = magnitude::shl(x, n * radix.trailing_zeros() as usize);
    } else {
        *x = magnitude::mul(x, &powers::pow(&[radix as Limb], n as u32));
    }
}

// PARSE
// -----

impl LargeInteger {
    /// Parse an integer written in `radix`, with an optional leading `+` or
    /// `-`.
    ///
    /// Digits above 9 are letters of either case. Errors report the
    /// one-based column of the offending character.
    ///
    /// ```
    /// use largeint::LargeInteger;
    ///
    /// let x = LargeInteger::from_str_radix("-ff", 16).unwrap();
    /// assert_eq!(x, LargeInteger::from(-255));
    ///
    /// let err = LargeInteger::from_str_radix("12z4", 10).unwrap_err();
    /// assert_eq!(err.column(), 3);
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<LargeInteger> {
        if !(2..=36).contains(&radix) {
            return Err(Error::syntax(ErrorCode::InvalidRadix(radix), 0));
        }
        let (negative, text) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let offset = s.len() - text.len();
        if text.is_empty() {
            return Err(Error::syntax(ErrorCode::EmptyNumber, offset + 1));
        }

        let mut digits = Vec::with_capacity(text.len());
        for (i, c) in text.chars().enumerate() {
            match c.to_digit(radix) {
                Some(d) => digits.push(d as u8),
                None => return Err(Error::syntax(ErrorCode::InvalidDigit, offset + i + 1)),
            }
        }
        Ok(LargeInteger::from_words(
            negative,
            parse_digits(&digits, radix),
        ))
    }
}

/// Convert validated digit values, most significant first, to a magnitude.
fn parse_digits(digits: &[u8], radix: u32) -> Vec<Limb> {
    let (count, base) = group(radix, u64::MAX);
    if digits.len() <= GROUPS_CUTOFF * count {
        return parse_groups(digits, radix, count, base);
    }
    let low_len = digits.len() / 2;
    let (high, low) = digits.split_at(digits.len() - low_len);
    let mut words = parse_digits(high, radix);
    scale(&mut words, radix, low_len);
    magnitude::add(&words, &parse_digits(low, radix))
}

fn parse_groups(digits: &[u8], radix: u32, count: usize, base: u64) -> Vec<Limb> {
    let mut words = Vec::with_capacity(capacity_for(digits.len() / count + 1));
    let first = match digits.len() % count {
        0 => count.min(digits.len()),
        n => n,
    };
    let (head, tail) = digits.split_at(first);
    small::iadd(&mut words, accumulate(head, radix));
    for chunk in tail.chunks(count) {
        small::imul(&mut words, base);
        small::iadd(&mut words, accumulate(chunk, radix));
    }
    normalize(&mut words);
    words
}

#[inline]
fn accumulate(chunk: &[u8], radix: u32) -> u64 {
    chunk
        .iter()
        .fold(0, |acc, &d| acc * radix as u64 + d as u64)
}

impl FromStr for LargeInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LargeInteger::from_str_radix(s, 10)
    }
}

// FORMAT
// ------

impl LargeInteger {
    /// Format the integer in `radix`, with lowercase letters above 9 and a
    /// leading `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> String {
        assert!(
            (2..=36).contains(&radix),
            "radix {} is not in range 2..=36",
            radix,
        );
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        write_magnitude(&self.words, radix, &mut out);
        out
    }
}

/// Append the digits of a magnitude; zero is written as `0`.
fn write_magnitude(words: &[Limb], radix: u32, out: &mut String) {
    if words.is_empty() {
        out.push('0');
    } else {
        write_digits(words, radix, 0, out);
    }
}

/// Append the digits of `words`, zero-padded on the left to `width`.
fn write_digits(words: &[Limb], radix: u32, width: usize, out: &mut String) {
    let (count, base) = group(radix, u32::MAX as u64);
    if words.len() * LIMB_BITS <= GROUPS_CUTOFF * count * 2 {
        return write_groups(words, radix, count, base, width, out);
    }

    // Split off the low half of the digits with one division.
    let bits_per_digit = (radix as f64).log2();
    let low_digits = ((small::bit_length(words) / 2) as f64 / bits_per_digit) as usize;
    let power = powers::pow(&[radix as Limb], low_digits as u32);
    let (high, low) = divide::div_rem(words, &power);
    write_digits(&high, radix, width.saturating_sub(low_digits), out);
    write_digits(&low, radix, low_digits, out);
}

fn write_groups(
    words: &[Limb],
    radix: u32,
    count: usize,
    base: u64,
    width: usize,
    out: &mut String,
) {
    // Least significant group first.
    let mut groups = Vec::new();
    let mut rest = trim(words).to_vec();
    while !rest.is_empty() {
        groups.push(small::idiv(&mut rest, base));
    }

    let mut digits = String::with_capacity(groups.len() * count);
    let mut buf = itoa::Buffer::new();
    for (i, &g) in groups.iter().rev().enumerate() {
        let len = digits.len();
        if radix == 10 {
            digits.push_str(buf.format(g));
        } else {
            push_group(g, radix, &mut digits);
        }
        if i != 0 {
            let written = digits.len() - len;
            insert_zeros(&mut digits, len, count - written);
        }
    }
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(&digits);
}

fn push_group(mut g: u64, radix: u32, out: &mut String) {
    let mut buf = [0u8; 64];
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(g % radix as u64) as usize];
        g /= radix as u64;
        if g == 0 {
            break;
        }
    }
    for &b in &buf[pos..] {
        out.push(b as char);
    }
}

#[inline]
fn insert_zeros(s: &mut String, at: usize, n: usize) {
    for _ in 0..n {
        s.insert(at, '0');
    }
}

/// Format with `pad_integral`, so width, fill and `+` flags work like they
/// do for primitive integers.
fn fmt_radix(
    value: &LargeInteger,
    f: &mut fmt::Formatter,
    radix: u32,
    prefix: &str,
    upper: bool,
) -> fmt::Result {
    let mut digits = String::new();
    write_magnitude(&value.words, radix, &mut digits);
    if upper {
        digits.make_ascii_uppercase();
    }
    f.pad_integral(!value.negative, prefix, &digits)
}

impl Display for LargeInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 10, "", false)
    }
}

impl Debug for LargeInteger {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "LargeInteger({})", self)
    }
}

impl fmt::LowerHex for LargeInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 16, "0x", false)
    }
}

impl fmt::UpperHex for LargeInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 16, "0x", true)
    }
}

impl fmt::Octal for LargeInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 8, "0o", false)
    }
}

impl fmt::Binary for LargeInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 2, "0b", false)
    }
}
