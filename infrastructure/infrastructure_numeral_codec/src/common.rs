//! Common Codec Error Types
//!
//! Shared error enums for both directions of the numeral words codec.
//! Encoding and decoding fail immediately and completely; no partial
//! result is ever returned, and a repeated call with the same input fails
//! identically.

use entities_vocabulary::MAX_DIGITS;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The input digit string was empty
    EmptyInput,
    /// The input contained a character that is not an ASCII digit
    InvalidDigit(char),
    /// The input exceeded the supported digit count (carries the actual count)
    MagnitudeExceeded(usize),
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EncodeError::EmptyInput => {
                write!(f, "Input digit string is empty")
            }
            EncodeError::InvalidDigit(c) => {
                write!(f, "Invalid digit character '{}'", c)
            }
            EncodeError::MagnitudeExceeded(digits) => {
                write!(
                    f,
                    "Input number is too large: at most {} digits are supported but {} were given",
                    MAX_DIGITS, digits
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input text contained no tokens
    EmptyInput,
    /// A token could not be classified (carries the offending token, lowercased)
    UnknownToken(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodeError::EmptyInput => {
                write!(f, "Input text contains no number words")
            }
            DecodeError::UnknownToken(token) => {
                write!(f, "Unrecognized number word '{}'", token)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
