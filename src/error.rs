//! When an arithmetic operation, conversion or parse goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

/// This type represents all possible errors that can occur when operating on
/// a `LargeInteger`.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type would be slower to move through every fallible
    /// arithmetic method.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `largeint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the character that failed to parse.
    ///
    /// Errors that do not come from parsing text report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Arithmetic` - an operation undefined for its operands
    /// - `Category::Range` - a result too large for the requested representation
    /// - `Category::Syntax` - text that is not a valid integer
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero
            | ErrorCode::NegativeSquareRoot
            | ErrorCode::NonPositiveModulus
            | ErrorCode::NotInvertible => Category::Arithmetic,
            ErrorCode::NumberOutOfRange | ErrorCode::CapacityExceeded => Category::Range,
            ErrorCode::EmptyNumber | ErrorCode::InvalidDigit | ErrorCode::InvalidRadix(_) => {
                Category::Syntax
            }
        }
    }

    /// Returns true if this error was caused by an operation that is not
    /// defined for its operands, such as division by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value that does not fit
    /// the requested representation.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if this error was caused by text that is not a valid
    /// integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }
}

/// Categorizes the cause of a `largeint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The operation is undefined for its operands.
    Arithmetic,

    /// The result does not fit the requested representation.
    Range,

    /// The input text is not a valid integer.
    Syntax,
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describe all possible errors that can occur when operating on
/// a `LargeInteger`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Division or remainder by zero.
    DivisionByZero,

    /// Square root of a negative value.
    NegativeSquareRoot,

    /// A modular operation was given a zero or negative modulus.
    NonPositiveModulus,

    /// Modular inverse of a value that is not coprime with the modulus.
    NotInvertible,

    /// Value does not fit the native type it is converted to.
    NumberOutOfRange,

    /// Result would exceed the largest supported number of limbs.
    CapacityExceeded,

    /// Text contains no digits.
    EmptyNumber,

    /// Character is not a digit of the radix.
    InvalidDigit,

    /// Radix outside of `2..=36`.
    InvalidRadix(u32),
}

impl Error {
    #[cold]
    pub(crate) fn arithmetic(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column: 0 }),
        }
    }

    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::NegativeSquareRoot => f.write_str("square root of a negative number"),
            ErrorCode::NonPositiveModulus => f.write_str("modulus is not positive"),
            ErrorCode::NotInvertible => f.write_str("value is not invertible for this modulus"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
            ErrorCode::CapacityExceeded => f.write_str("number exceeds maximum capacity"),
            ErrorCode::EmptyNumber => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit"),
            ErrorCode::InvalidRadix(radix) => {
                f.write_fmt(format_args!("radix {} is not in range 2..=36", radix))
            }
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}
