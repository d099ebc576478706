//! Errors reported when building a [`Color`](crate::Color).

use std::fmt;

use crate::Component;

/// The ways in which building a color can fail.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The string held no hexadecimal digits.
    Empty,
    /// The string held a character that is not a hexadecimal digit.
    InvalidDigit(char),
    /// The number of hexadecimal digits is not accepted by the grammar.
    InvalidLength(usize),
    /// An HSV component was outside of its valid range.
    OutOfRange {
        /// Name of the offending component.
        component: &'static str,
        /// The value that was passed.
        value: Component,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("empty color string"),
            Error::InvalidDigit(c) => write!(f, "invalid hexadecimal digit {c:?}"),
            Error::InvalidLength(len) => write!(f, "invalid number of hexadecimal digits ({len})"),
            Error::OutOfRange { component, value } => {
                write!(f, "{component} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}
