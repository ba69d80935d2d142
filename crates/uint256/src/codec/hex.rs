//! Hex text codec.
//!
//! Output is canonical: `0x` prefix, lowercase digits, no leading zeros,
//! zero as `"0x0"`. Input is lenient about case (prefix and digits) and
//! about leading zero digits, strict about everything else.

use std::fmt;

use num_bigint::BigUint;

use crate::error::Uint256Error;
use crate::limits::MAX_HEX_DIGITS;
use crate::Uint256;

impl Uint256 {
    /// Encodes the value as `0x`-prefixed lowercase hex with no leading
    /// zero digits. Zero renders as `"0x0"`.
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    /// Decodes a `0x`/`0X`-prefixed hex string.
    ///
    /// Any number of leading zero digits is accepted; digits may be either
    /// case. Fails when the prefix is missing, no digits follow the prefix,
    /// a non-hex character is present, or the value exceeds 256 bits.
    pub fn from_hex(s: &str) -> Result<Self, Uint256Error> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(Uint256Error::MissingHexPrefix)?;
        if digits.is_empty() {
            return Err(Uint256Error::EmptyHexDigits);
        }

        // A magnitude that is all zeros strips down to the empty string;
        // keep a single 0 digit so it parses as zero rather than failing.
        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Uint256Error::InvalidHexDigit { found });
        }
        // Leading zeros are gone, so the digit count bounds the bit length.
        if digits.len() > MAX_HEX_DIGITS {
            return Err(Uint256Error::MagnitudeOverflow);
        }

        // Every digit was validated above, so the radix-16 parse cannot fail.
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16).unwrap();
        Ok(Uint256(magnitude))
    }

    /// Like [`Uint256::from_hex`], but panics on invalid input.
    ///
    /// Intended only for statically known-valid literals.
    pub fn must_from_hex(s: &str) -> Self {
        match Self::from_hex(s) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Canonical text form: the hex encoding.
impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({self})")
    }
}
