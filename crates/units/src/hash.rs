use tiny_keccak::{Hasher, Keccak};

use crate::hexutil::{hex_to_bin, is_hex, is_zero_prefixed, strip_zero};
use crate::Error;

pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    let mut hasher = Keccak::v256();
    hasher.update(bytes);
    hasher.finalize(&mut output);
    output
}

/// keccak-256 digest of the empty input; `sha3` reports it as `None`.
const SHA3_NULL_HASH: &str = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Hashes a string the way the client library does: `0x`-prefixed hex input
/// is hashed as the bytes it encodes, everything else as UTF-8.
pub fn sha3(value: &str) -> Result<Option<String>, Error> {
    let digest = if is_zero_prefixed(value) && is_hex(value) {
        keccak256(&hex_to_bin(value)?)
    } else {
        keccak256(value.as_bytes())
    };

    let digest = hex::encode(digest);
    if digest == SHA3_NULL_HASH {
        Ok(None)
    } else {
        Ok(Some(format!("0x{}", digest)))
    }
}

fn hash_nibble(digest: &[u8; 32], index: usize) -> u8 {
    let byte = digest[index / 2];
    if index % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}

fn bare_address(value: &str) -> Option<&str> {
    let bare = strip_zero(value);
    (bare.len() == 40 && bare.bytes().all(|b| b.is_ascii_hexdigit())).then_some(bare)
}

/// EIP-55 mixed-case checksum form of an address. Every alphabetic hex digit
/// whose same-position nibble in `keccak256(lowercase_address)` is >= 8 is
/// upper-cased.
pub fn to_checksum_address(value: &str) -> Result<String, Error> {
    let bare = bare_address(value).ok_or_else(|| Error::InvalidAddress(value.to_string()))?;
    let lower = bare.to_lowercase();
    let digest = keccak256(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (index, character) in lower.chars().enumerate() {
        if character.is_ascii_alphabetic() && hash_nibble(&digest, index) >= 8 {
            checksummed.push(character.to_ascii_uppercase());
        } else {
            checksummed.push(character);
        }
    }
    Ok(checksummed)
}

/// Validates a mixed-case address against the checksum computed from its
/// lower-cased form.
pub fn is_address_checksum(value: &str) -> bool {
    let bare = match bare_address(value) {
        Some(bare) => bare,
        None => return false,
    };
    let lower = bare.to_lowercase();
    let digest = keccak256(lower.as_bytes());

    bare.chars().zip(lower.chars()).enumerate().all(|(index, (actual, lower_char))| {
        if lower_char.is_ascii_alphabetic() && hash_nibble(&digest, index) >= 8 {
            actual == lower_char.to_ascii_uppercase()
        } else {
            actual == lower_char
        }
    })
}

/// Address shape check: optional `0x`, 40 hex digits. Uniform-case addresses
/// are accepted as unchecksummed; mixed case must pass EIP-55.
pub fn is_address(value: &str) -> bool {
    let bare = match bare_address(value) {
        Some(bare) => bare,
        None => return false,
    };
    let all_lower = !bare.bytes().any(|b| b.is_ascii_uppercase());
    let all_upper = !bare.bytes().any(|b| b.is_ascii_lowercase());
    if all_lower || all_upper {
        return true;
    }
    is_address_checksum(value)
}
