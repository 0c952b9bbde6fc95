use num_bigint::BigInt;

use crate::bignumber::Numeric;
use crate::Error;

pub fn is_zero_prefixed(value: &str) -> bool {
    value.starts_with("0x")
}

pub fn strip_zero(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

pub fn is_negative(value: &str) -> bool {
    value.starts_with('-')
}

/// Strict hex recognizer: optional `0x` prefix, then lower-case hex digits
/// only. Uppercase digits are rejected.
pub fn is_hex(value: &str) -> bool {
    let bare = strip_zero(value);
    !bare.is_empty() && bare.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Hex representation of a numeric input, without the `0x` prefix. A string
/// input must already be hex and is passed through with its prefix stripped.
pub fn to_hex<N: Into<Numeric>>(value: N) -> Result<String, Error> {
    const FUNCTION: &str = "to_hex";
    match value.into() {
        Numeric::Big(int) => Ok(int.to_str_radix(16)),
        Numeric::Int(int) => Ok(BigInt::from(int).to_str_radix(16)),
        Numeric::Text(text) => {
            if is_hex(&text) {
                Ok(strip_zero(&text).to_string())
            } else {
                Err(Error::UnsupportedValue { function: FUNCTION })
            }
        }
    }
}

pub fn to_hex_prefixed<N: Into<Numeric>>(value: N) -> Result<String, Error> {
    Ok(format!("0x{}", to_hex(value)?))
}

/// Decodes a hex string into raw bytes. An odd number of nibbles is
/// left-padded with one zero nibble.
pub fn hex_to_bin(value: &str) -> Result<Vec<u8>, Error> {
    let bare = strip_zero(value);
    if bare.len() % 2 == 1 {
        Ok(hex::decode(format!("0{}", bare))?)
    } else {
        Ok(hex::decode(bare)?)
    }
}

pub fn hex_to_number(value: &str) -> Result<u64, Error> {
    const FUNCTION: &str = "hex_to_number";
    let bare = strip_zero(value);
    u64::from_str_radix(bare, 16).map_err(|_| Error::InvalidNumber { function: FUNCTION })
}
