//! The `Uint256` value type: construction, validation, and magnitude access.

use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::Uint256Error;
use crate::limits::MAX_BITS;

lazy_static! {
    static ref MAX_MAGNITUDE: BigUint = (BigUint::one() << MAX_BITS as usize) - BigUint::one();
}

/// An unsigned integer constrained to at most 256 bits.
///
/// The value is immutable after construction. Every constructor validates the
/// range invariant (value in `[0, 2^256 - 1]`), and every accessor returns an
/// independent copy of the magnitude, so no caller-held handle can alias the
/// stored value.
///
/// `Uint256::default()` is zero and behaves identically to
/// `Uint256::from(0u64)` in every codec.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint256(pub(crate) BigUint);

impl Uint256 {
    /// Creates a `Uint256` from a signed arbitrary-precision integer.
    ///
    /// The input is copied; mutating it afterwards does not affect the
    /// constructed value. Fails when the input is negative or wider than
    /// 256 bits.
    pub fn from_bigint(x: &BigInt) -> Result<Self, Uint256Error> {
        if x.sign() == Sign::Minus {
            return Err(Uint256Error::NegativeMagnitude);
        }
        Self::from_biguint(x.magnitude().clone())
    }

    /// Creates a `Uint256` from an unsigned arbitrary-precision integer.
    ///
    /// Fails when the magnitude is wider than 256 bits.
    pub fn from_biguint(magnitude: BigUint) -> Result<Self, Uint256Error> {
        if magnitude.bits() > MAX_BITS {
            return Err(Uint256Error::MagnitudeOverflow);
        }
        Ok(Uint256(magnitude))
    }

    /// Like [`Uint256::from_bigint`], but panics on invalid input.
    ///
    /// Intended only for statically known-valid values such as constants.
    pub fn must_from_bigint(x: &BigInt) -> Self {
        match Self::from_bigint(x) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns an independent copy of the magnitude.
    ///
    /// Mutating the returned value never alters this `Uint256`.
    pub fn magnitude(&self) -> BigUint {
        self.0.clone()
    }

    /// Returns the maximum representable value, `2^256 - 1`.
    pub fn max() -> Self {
        Uint256(MAX_MAGNITUDE.clone())
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Uint256 {
            fn from(value: $t) -> Self {
                Uint256(BigUint::from(value))
            }
        }
    )*};
}

// Total conversions: every unsigned primitive fits in 256 bits.
impl_from_unsigned!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn bigint(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn test_default_is_zero() {
        let zero = Uint256::default();
        assert!(zero.is_zero());
        assert_eq!(zero, Uint256::from(0u64));
        assert_eq!(zero.magnitude(), BigUint::zero());
    }

    #[test]
    fn test_range_boundary() {
        let max = BigInt::from(Uint256::max().magnitude());
        assert_eq!(Uint256::from_bigint(&max).unwrap(), Uint256::max());

        let over = max + 1;
        assert_eq!(
            Uint256::from_bigint(&over),
            Err(Uint256Error::MagnitudeOverflow)
        );

        assert_eq!(
            Uint256::from_bigint(&bigint("-1")),
            Err(Uint256Error::NegativeMagnitude)
        );
    }

    #[test]
    fn test_max_is_256_ones() {
        assert_eq!(Uint256::max().magnitude().bits(), 256);
        assert_eq!(Uint256::max().to_hex(), format!("0x{}", "f".repeat(64)));
    }

    #[test]
    fn test_from_biguint_overflow() {
        let wide = BigUint::one() << 256usize;
        assert_eq!(
            Uint256::from_biguint(wide),
            Err(Uint256Error::MagnitudeOverflow)
        );
    }

    #[test]
    fn test_construction_copies_input() {
        let mut x = bigint("12345");
        let value = Uint256::from_bigint(&x).unwrap();
        x += 1;
        assert_eq!(value.magnitude(), BigUint::from(12345u64));
    }

    #[test]
    fn test_magnitude_is_independent_copy() {
        let value = Uint256::from(7u64);
        let mut magnitude = value.magnitude();
        magnitude += 1u64;
        assert_eq!(value.magnitude(), BigUint::from(7u64));
    }

    #[test]
    fn test_from_unsigned_primitives() {
        assert_eq!(Uint256::from(0xffu8), Uint256::from(255u64));
        assert_eq!(
            Uint256::from(u128::MAX).magnitude(),
            BigUint::from(u128::MAX)
        );
    }

    #[test]
    fn test_must_from_bigint_valid() {
        assert_eq!(Uint256::must_from_bigint(&bigint("42")), Uint256::from(42u64));
    }

    #[test]
    #[should_panic(expected = "invalid magnitude: negative")]
    fn test_must_from_bigint_panics_on_negative() {
        Uint256::must_from_bigint(&bigint("-1"));
    }

    #[test]
    fn test_ordering() {
        assert!(Uint256::from(1u64) < Uint256::from(2u64));
        assert!(Uint256::max() > Uint256::default());
    }
}
