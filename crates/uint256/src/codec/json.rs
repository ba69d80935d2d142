//! JSON codec.
//!
//! Encoding always emits the hex form as a JSON string, never a bare number,
//! so consumers that parse JSON numbers as floats cannot lose precision.
//! Decoding accepts a quoted string (hex or decimal, same dual-format rule
//! as the text codec) or a bare integer literal with no fractional part or
//! exponent.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::Uint256Error;
use crate::Uint256;

impl Uint256 {
    /// Encodes the value as a JSON token: the quoted hex string.
    pub fn to_json(&self) -> String {
        // Hex output is plain ASCII, so no JSON escaping is ever needed.
        format!("\"{}\"", self.to_hex())
    }

    /// Decodes a single raw JSON token.
    ///
    /// String tokens are unquoted and decoded per the dual-format text rule;
    /// any other token is treated as a number literal and must be a plain
    /// integer. Nested decode failures are wrapped so string-content errors,
    /// number errors, and range errors stay distinguishable.
    pub fn from_json(token: &[u8]) -> Result<Self, Uint256Error> {
        let token = token.trim_ascii();
        if token.is_empty() {
            return Err(Uint256Error::EmptyJson);
        }
        if token == b"null".as_slice() {
            return Err(Uint256Error::NullJson);
        }

        if token.len() >= 2 && token[0] == b'"' && token[token.len() - 1] == b'"' {
            let inner: String = serde_json::from_slice(token)
                .map_err(|err| Uint256Error::MalformedJsonString(err.to_string()))?;
            return Self::from_text(&inner).map_err(|source| Uint256Error::JsonString {
                source: Box::new(source),
            });
        }

        // Number token: only a plain integer literal is accepted.
        if token.iter().any(|b| matches!(b, b'.' | b'e' | b'E')) {
            return Err(Uint256Error::NotAnInteger);
        }
        let literal = String::from_utf8_lossy(token);
        Self::from_decimal(&literal).map_err(|source| Uint256Error::JsonNumber {
            source: Box::new(source),
        })
    }
}

impl Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    /// Deserializes from the raw source token, so bare integers wider than
    /// `u64` decode exactly instead of being routed through `f64`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<RawValue> = Box::<RawValue>::deserialize(deserializer)?;
        Uint256::from_json(raw.get().as_bytes()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    const MAX_DECIMAL: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    #[test]
    fn test_encode_is_quoted_hex() {
        assert_eq!(Uint256::from(255u64).to_json(), "\"0xff\"");
        assert_eq!(Uint256::default().to_json(), "\"0x0\"");
        assert_eq!(
            serde_json::to_string(&Uint256::from(255u64)).unwrap(),
            "\"0xff\""
        );
    }

    #[test]
    fn test_decode_empty_and_null() {
        assert_eq!(Uint256::from_json(b""), Err(Uint256Error::EmptyJson));
        assert_eq!(Uint256::from_json(b"null"), Err(Uint256Error::NullJson));
    }

    #[test]
    fn test_decode_string_hex_and_decimal() {
        assert_eq!(
            Uint256::from_json(b"\"0xff\"").unwrap(),
            Uint256::from(255u64)
        );
        assert_eq!(
            Uint256::from_json(b"\"255\"").unwrap(),
            Uint256::from(255u64)
        );
    }

    #[test]
    fn test_decode_string_max_decimal() {
        let token = format!("\"{MAX_DECIMAL}\"");
        assert_eq!(
            Uint256::from_json(token.as_bytes()).unwrap(),
            Uint256::max()
        );
    }

    #[test]
    fn test_decode_bare_number() {
        assert_eq!(Uint256::from_json(b"123").unwrap(), Uint256::from(123u64));
        // Bare integers wider than u64 decode exactly.
        assert_eq!(
            Uint256::from_json(MAX_DECIMAL.as_bytes()).unwrap(),
            Uint256::max()
        );
    }

    #[test]
    fn test_decode_rejects_fraction_and_exponent() {
        assert_eq!(Uint256::from_json(b"0.0"), Err(Uint256Error::NotAnInteger));
        assert_eq!(Uint256::from_json(b"1.5"), Err(Uint256Error::NotAnInteger));
        assert_eq!(Uint256::from_json(b"1e3"), Err(Uint256Error::NotAnInteger));
        assert_eq!(Uint256::from_json(b"1E3"), Err(Uint256Error::NotAnInteger));
    }

    #[test]
    fn test_decode_negative_number_is_range_error() {
        let err = Uint256::from_json(b"-1").unwrap_err();
        assert!(matches!(err, Uint256Error::JsonNumber { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidMagnitude);
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_decode_bad_string_content_keeps_context() {
        let err = Uint256::from_json(b"\"0xzz\"").unwrap_err();
        assert!(matches!(err, Uint256Error::JsonString { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidHexDigits);
        assert!(err.to_string().starts_with("invalid json string"));
    }

    #[test]
    fn test_decode_malformed_string_token() {
        // Unterminated escape makes the token invalid JSON.
        let err = Uint256::from_json(b"\"\\\"").unwrap_err();
        assert!(matches!(err, Uint256Error::MalformedJsonString(_)));
    }

    #[test]
    fn test_serde_decode_paths() {
        let from_string: Uint256 = serde_json::from_str("\"0xff\"").unwrap();
        let from_decimal_string: Uint256 = serde_json::from_str("\"255\"").unwrap();
        let from_number: Uint256 = serde_json::from_str("255").unwrap();
        assert_eq!(from_string, Uint256::from(255u64));
        assert_eq!(from_decimal_string, from_string);
        assert_eq!(from_number, from_string);

        assert!(serde_json::from_str::<Uint256>("null").is_err());
        assert!(serde_json::from_str::<Uint256>("0.0").is_err());
    }

    #[test]
    fn test_serde_bare_number_wider_than_u64() {
        let value: Uint256 = serde_json::from_str(MAX_DECIMAL).unwrap();
        assert_eq!(value, Uint256::max());
    }

    #[test]
    fn test_zero_roundtrips_canonically() {
        let encoded = serde_json::to_string(&Uint256::default()).unwrap();
        assert_eq!(encoded, "\"0x0\"");
        let decoded: Uint256 = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Uint256::default());
    }

    proptest! {
        #[test]
        fn test_json_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 1..=32)) {
            let value = Uint256::from_be_bytes(&bytes).unwrap();
            let encoded = serde_json::to_string(&value).unwrap();
            let decoded: Uint256 = serde_json::from_str(&encoded).unwrap();
            prop_assert_eq!(decoded, value);
        }
    }
}
