//! Base-N decoding of share value strings
//!
//! Share records carry each y value as a digit string in an arbitrary radix.
//! Decoding produces an exact [`BigInt`] regardless of string length. Digit
//! values 10 and above use letters (`a`/`A` = 10), which bounds the supported
//! radix at 36.

use num_bigint::BigInt;
use num_traits::Num;

use crate::error::RecoveryError;

/// Smallest radix a share value can be encoded in
pub const MIN_BASE: u32 = 2;

/// Largest radix the `0-9a-z` digit alphabet can express
pub const MAX_BASE: u32 = 36;

/// Parses a record's base field into a supported radix
///
/// # Errors
/// Returns [`RecoveryError::InvalidBase`] if the field is not an integer or
/// lies outside `2..=36`
///
/// # Examples
///
/// ```rust
/// use unshard::codec::parse_base;
///
/// assert_eq!(parse_base("16").unwrap(), 16);
/// assert!(parse_base("1").is_err());
/// assert!(parse_base("ten").is_err());
/// ```
pub fn parse_base(field: &str) -> Result<u32, RecoveryError> {
    let invalid = || RecoveryError::InvalidBase {
        base: field.to_string(),
    };
    let base: u32 = field.trim().parse().map_err(|_| invalid())?;
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(invalid());
    }
    Ok(base)
}

/// Decodes a digit string in the given base into an exact integer
///
/// Letters are accepted in either case (`"ff"` and `"FF"` both decode to 255
/// in base 16). The result is non-negative; signs are not part of the digit
/// alphabet and are rejected.
///
/// # Errors
/// Returns [`RecoveryError::Parse`] if the string is empty or contains a
/// character that is not a valid digit for `base`, and
/// [`RecoveryError::InvalidBase`] if `base` itself is unsupported
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use unshard::codec::decode_value;
///
/// assert_eq!(decode_value("111", 2).unwrap(), BigInt::from(7));
/// assert_eq!(decode_value("ff", 16).unwrap(), BigInt::from(255));
/// assert!(decode_value("Z12", 10).is_err());
/// ```
pub fn decode_value(value: &str, base: u32) -> Result<BigInt, RecoveryError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RecoveryError::InvalidBase {
            base: base.to_string(),
        });
    }
    let invalid = || RecoveryError::Parse {
        value: value.to_string(),
        base,
    };
    if value.is_empty() || !value.chars().all(|c| c.to_digit(base).is_some()) {
        return Err(invalid());
    }
    BigInt::from_str_radix(value, base).map_err(|_| invalid())
}
