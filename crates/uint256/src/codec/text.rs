//! Decimal parsing and the dual-format text codec.
//!
//! Decimal is an input-only convenience; canonical text output is always the
//! hex form. The dual-format rule (hex when `0x`/`0X`-prefixed, decimal
//! otherwise) is implemented once here and reused by [`std::str::FromStr`]
//! and the JSON string branch.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::Uint256Error;
use crate::Uint256;

impl Uint256 {
    /// Parses a base-10 integer literal.
    ///
    /// A malformed literal (empty, non-digit characters, inner whitespace)
    /// fails as invalid decimal. A well-formed but negative or over-wide
    /// literal fails the magnitude check instead, so `"-5"` reports
    /// "negative" rather than "malformed".
    pub fn from_decimal(s: &str) -> Result<Self, Uint256Error> {
        let parsed = BigInt::from_str(s).map_err(|_| Uint256Error::InvalidDecimal {
            text: s.to_string(),
        })?;
        Self::from_bigint(&parsed)
    }

    /// Decodes text that is either hex or decimal.
    ///
    /// Surrounding whitespace is trimmed, then the decode strategy is chosen
    /// by prefix sniffing: `0x`/`0X` means hex, anything else decimal.
    pub fn from_text(s: &str) -> Result<Self, Uint256Error> {
        let s = s.trim();
        if s.starts_with("0x") || s.starts_with("0X") {
            Self::from_hex(s)
        } else {
            Self::from_decimal(s)
        }
    }
}

/// The generic text-unmarshal seam: `"...".parse::<Uint256>()` applies the
/// dual-format rule.
impl FromStr for Uint256 {
    type Err = Uint256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
