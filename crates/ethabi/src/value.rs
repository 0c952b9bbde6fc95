use num_bigint::{BigInt, BigUint};

use crate::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Address(String),
    Boolean(bool),
    Int(BigInt),
    UInt(BigUint),
    Bytes(Vec<u8>),
    String(String),
    Array(Vec<Value>),
    Tuple(Vec<Value>),
}

impl Value {
    /// Builds an address value from its string form: optional `0x` prefix,
    /// 40 hex digits. Mixed-case input must carry a valid EIP-55 checksum.
    /// The bare lower-case form is stored.
    pub fn address(address: &str) -> Result<Value, Error> {
        if !units::is_address(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        Ok(Value::Address(units::strip_zero(address).to_lowercase()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Address(_) => "address",
            Value::Boolean(_) => "boolean",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Tuple(_) => "tuple",
        }
    }

    pub fn as_address(&self) -> Result<&str, Error> {
        match self {
            Value::Address(address) => Ok(address),
            other => Err(other.mismatch("address")),
        }
    }

    pub fn as_boolean(&self) -> Result<&bool, Error> {
        match self {
            Value::Boolean(boolean) => Ok(boolean),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn as_int(&self) -> Result<&BigInt, Error> {
        match self {
            Value::Int(int) => Ok(int),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn as_uint(&self) -> Result<&BigUint, Error> {
        match self {
            Value::UInt(uint) => Ok(uint),
            other => Err(other.mismatch("uint")),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], Error> {
        match self {
            Value::Bytes(bytes) => Ok(bytes),
            other => Err(other.mismatch("bytes")),
        }
    }

    pub fn as_string(&self) -> Result<&str, Error> {
        match self {
            Value::String(string) => Ok(string),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], Error> {
        match self {
            Value::Array(array) => Ok(array),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_tuple(&self) -> Result<&[Value], Error> {
        match self {
            Value::Tuple(tuple) => Ok(tuple),
            other => Err(other.mismatch("tuple")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}
