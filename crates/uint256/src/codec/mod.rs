//! Codecs between `Uint256` and its external representations.
//!
//! Each submodule implements one representation:
//! - [`bytes`]: minimal big-endian bytes (binary/database storage)
//! - [`hex`]: `0x`-prefixed lowercase hex text (canonical text output)
//! - [`text`]: decimal parsing and hex/decimal dual-format dispatch
//! - [`json`]: JSON tokens (quoted string or bare integer) plus serde

pub mod bytes;
pub mod hex;
pub mod json;
pub mod text;
