//! Error types for `Uint256` construction and decoding.

use thiserror::Error;

use crate::limits::{MAX_BITS, MAX_BYTES};

/// Taxonomy kind of a [`Uint256Error`], independent of the concrete variant.
///
/// Context wrappers ([`Uint256Error::JsonString`] and
/// [`Uint256Error::JsonNumber`]) report the kind of the wrapped error, so
/// out-of-range input stays distinguishable from malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Magnitude is negative or exceeds 256 bits.
    InvalidMagnitude,
    /// Byte decode given a zero-length buffer.
    EmptySource,
    /// Byte decode given a buffer longer than 32 bytes.
    LengthExceeded,
    /// Hex decode input lacks the 0x/0X prefix.
    MissingPrefix,
    /// Hex decode input is exactly the prefix with no digits.
    EmptyHex,
    /// Hex decode input contains a non-hex character.
    InvalidHexDigits,
    /// Decimal decode given a malformed base-10 literal.
    InvalidDecimal,
    /// JSON decode given an empty token buffer.
    EmptyInput,
    /// JSON decode given the `null` literal.
    NullValue,
    /// JSON number token has a fractional part or exponent.
    NotAnInteger,
    /// JSON string token is not valid JSON.
    MalformedString,
}

/// Error produced by `Uint256` constructors and decoders.
///
/// The display messages are part of the contract: callers and tests key on
/// their substrings, so they stay stable and descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Uint256Error {
    #[error("invalid magnitude: negative")]
    NegativeMagnitude,

    #[error("invalid magnitude: exceeds {MAX_BITS} bits")]
    MagnitudeOverflow,

    #[error("invalid byte source: empty")]
    EmptyBytes,

    #[error("invalid byte source: {len} bytes exceeds {MAX_BYTES}")]
    BytesOverflow { len: usize },

    #[error("invalid hex string: missing 0x/0X prefix")]
    MissingHexPrefix,

    #[error("invalid hex string: no digits after prefix")]
    EmptyHexDigits,

    #[error("invalid hex string: invalid digit {found:?}")]
    InvalidHexDigit { found: char },

    #[error("invalid decimal string: {text:?}")]
    InvalidDecimal { text: String },

    #[error("invalid json value: empty")]
    EmptyJson,

    #[error("invalid json value: null")]
    NullJson,

    #[error("invalid json number: not an integer")]
    NotAnInteger,

    #[error("invalid json string: {0}")]
    MalformedJsonString(String),

    #[error("invalid json string: {source}")]
    JsonString {
        #[source]
        source: Box<Uint256Error>,
    },

    #[error("invalid json number: {source}")]
    JsonNumber {
        #[source]
        source: Box<Uint256Error>,
    },
}

impl Uint256Error {
    /// Returns the taxonomy kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Uint256Error::NegativeMagnitude | Uint256Error::MagnitudeOverflow => {
                ErrorKind::InvalidMagnitude
            }
            Uint256Error::EmptyBytes => ErrorKind::EmptySource,
            Uint256Error::BytesOverflow { .. } => ErrorKind::LengthExceeded,
            Uint256Error::MissingHexPrefix => ErrorKind::MissingPrefix,
            Uint256Error::EmptyHexDigits => ErrorKind::EmptyHex,
            Uint256Error::InvalidHexDigit { .. } => ErrorKind::InvalidHexDigits,
            Uint256Error::InvalidDecimal { .. } => ErrorKind::InvalidDecimal,
            Uint256Error::EmptyJson => ErrorKind::EmptyInput,
            Uint256Error::NullJson => ErrorKind::NullValue,
            Uint256Error::NotAnInteger => ErrorKind::NotAnInteger,
            Uint256Error::MalformedJsonString(_) => ErrorKind::MalformedString,
            Uint256Error::JsonString { source } | Uint256Error::JsonNumber { source } => {
                source.kind()
            }
        }
    }
}
