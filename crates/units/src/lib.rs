extern crate hex;
extern crate tiny_keccak;
#[macro_use]
extern crate thiserror;

pub extern crate num_bigint;

pub use bignumber::{to_bn, BigNumber, Numeric};
pub use error::Error;
pub use hash::{is_address, is_address_checksum, keccak256, sha3, to_checksum_address};
pub use hexutil::{
    hex_to_bin, hex_to_number, is_hex, is_negative, is_zero_prefixed, strip_zero, to_hex,
    to_hex_prefixed,
};
pub use wei::{from_wei, to_ether, to_wei, UNITS};

mod bignumber;
mod error;
mod hash;
mod hexutil;
mod wei;
