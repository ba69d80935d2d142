//! Limits enforced by the `Uint256` constructors and decoders.

/// Maximum bit length of a magnitude.
pub const MAX_BITS: u64 = 256;

/// Maximum byte length accepted by the big-endian byte decoder.
pub const MAX_BYTES: usize = 32;

/// Maximum hex digit count after leading zeros are stripped.
///
/// Four bits per digit, so 64 digits is exactly [`MAX_BITS`].
pub const MAX_HEX_DIGITS: usize = 64;
