//! Constrained 256-bit unsigned integers with strict, round-trip-safe codecs.
//!
//! This crate provides [`Uint256`], an immutable value type holding a
//! non-negative integer of at most 256 bits, together with validating
//! decoders and canonical encoders for its external representations.
//!
//! # Representations
//!
//! | Representation | Encode | Decode |
//! |---|---|---|
//! | Big-endian bytes | minimal length, zero is `[0x00]` | 1-32 bytes, leading zeros allowed |
//! | Hex text | `0x` + lowercase, zero is `"0x0"` | `0x`/`0X` prefix, leading zeros allowed |
//! | Decimal text | (not produced) | base-10 literal |
//! | JSON | quoted hex string | quoted string (hex or decimal) or bare integer |
//!
//! # Quick Start
//!
//! ```rust
//! use uint256::Uint256;
//!
//! let value = Uint256::from_hex("0x00ff").unwrap();
//! assert_eq!(value, Uint256::from(255u64));
//!
//! // Canonical encodings are minimal.
//! assert_eq!(value.to_hex(), "0xff");
//! assert_eq!(value.to_be_bytes(), vec![0xff]);
//!
//! // JSON accepts strings and bare integers, and always emits hex strings.
//! let decoded: Uint256 = serde_json::from_str("\"255\"").unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(serde_json::to_string(&value).unwrap(), "\"0xff\"");
//! ```
//!
//! # Modules
//!
//! - [`uint256`]: the value type, construction, and validation
//! - [`codec`]: byte, hex, text, and JSON codecs
//! - [`error`]: the error taxonomy
//! - [`limits`]: decode limits
//!
//! # Errors
//!
//! Every decoder is strict: malformed or out-of-range input is rejected with
//! a descriptive [`Uint256Error`]; nothing is recovered or defaulted
//! internally. The `must_*` constructors panic instead, for statically
//! known-valid literals only.

pub mod codec;
pub mod error;
pub mod limits;
pub mod uint256;

pub use error::{ErrorKind, Uint256Error};
pub use uint256::Uint256;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
