//! Big-endian byte codec for binary and database storage.
//!
//! Encoding is minimal-length (no leading zero bytes) with one exception:
//! zero encodes as a single `0x00` byte, never an empty buffer. An empty
//! buffer is reserved for "absent" and rejected on decode.

use num_bigint::BigUint;

use crate::error::Uint256Error;
use crate::limits::MAX_BYTES;
use crate::Uint256;

impl Uint256 {
    /// Encodes the value as minimal big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        // Zero must encode as exactly one zero byte, never an empty buffer.
        let bytes = self.0.to_bytes_be();
        if bytes.is_empty() {
            vec![0x00]
        } else {
            bytes
        }
    }

    /// Decodes a big-endian byte buffer of 1 to 32 bytes.
    ///
    /// The length is checked before the bytes are interpreted, so an
    /// over-length buffer fails even when its leading bytes are zero.
    /// Leading zero bytes within the 32-byte limit are permitted.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, Uint256Error> {
        if bytes.is_empty() {
            return Err(Uint256Error::EmptyBytes);
        }
        if bytes.len() > MAX_BYTES {
            return Err(Uint256Error::BytesOverflow { len: bytes.len() });
        }

        // 32 bytes cannot exceed 256 bits, so no magnitude check is needed.
        Ok(Uint256(BigUint::from_bytes_be(bytes)))
    }
}

/// The generic "value/scan" binding seam for storage layers.
impl TryFrom<&[u8]> for Uint256 {
    type Error = Uint256Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Uint256::from_be_bytes(bytes)
    }
}
