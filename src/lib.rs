//! Immutable arbitrary-precision integers
//!
//! # What is a LargeInteger?
//!
//! A [`LargeInteger`] is a signed integer of any size. Its magnitude is an
//! array of 64-bit limbs that grows as needed, and every operation returns a
//! fresh value instead of modifying its operands, so values can be shared
//! freely between threads.
//!
//! ```
//! use largeint::LargeInteger;
//!
//! let two = LargeInteger::from(2);
//! let big = two.pow(64).unwrap();
//! assert_eq!(big.to_string(), "18446744073709551616");
//!
//! let q = LargeInteger::from(100).divide(&LargeInteger::from(7)).unwrap();
//! assert_eq!(q, LargeInteger::from(14));
//! assert_eq!(q.remainder(), Some(&LargeInteger::from(2)));
//! ```
//!
//! # Algorithms
//!
//! Multiplication picks one of four strategies from the operand sizes:
//! scalar, grade-school, Karatsuba, or Karatsuba whose three sub-products run
//! as fork-join tasks on the `rayon` pool (see [`Multiplier`]). Division by
//! more than one limb multiplies by a Newton-iterated scaled reciprocal of the
//! divisor and corrects the quotient by at most one, so it inherits the speed
//! of multiplication. The greatest common divisor runs Euclid steps while the
//! operands differ in size and binary GCD once they are comparable.
//!
//! # Errors
//!
//! Operations that can fail return [`Result`]. The [`Error`] can be
//! classified as an arithmetic error (division by zero, square root of a
//! negative number, bad modulus, missing inverse), a range error (native
//! conversion or capacity overflow) or a syntax error from parsing text. The
//! operator overloads panic where their checked counterparts return an
//! error.
//!
//! # Features
//!
//! - `parallel` (default) forks large Karatsuba products onto `rayon`.
//! - `num-bigint` adds conversions to and from `num_bigint::BigInt`.
//!
//! Spans and events are emitted through `tracing` for concurrent
//! multiplication, reciprocal division and the GCD switch-over; the crate
//! never installs a subscriber.

#![doc(html_root_url = "https://docs.rs/largeint/0.1.0")]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::needless_range_loop,
    clippy::should_implement_trait,
)]

extern crate serde_core as serde;

pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::integer::LargeInteger;
pub use crate::multiply::{Multiplier, Strategy};

pub mod error;
pub mod multiply;

mod bytes;
mod convert;
mod de;
mod divide;
mod integer;
mod math;
mod modular;
mod operator;
mod powers;
mod ser;
mod text;
