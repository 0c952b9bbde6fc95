use crate::codec::frame::{take_payload, take_word};
use crate::codec::sealed;
use crate::codec::{Encoder, UIntCodec};
use crate::{Error, Value};

pub struct FixedBytesCodec {
    size: usize,
    name: String,
}

impl FixedBytesCodec {
    pub fn new(size: usize) -> Self {
        let name = format!("bytes{}", size);
        Self { size, name }
    }
}

impl sealed::AbiType for FixedBytesCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dynamic(&self) -> bool {
        false
    }
}

impl sealed::Encoder for FixedBytesCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let bytes = value.as_bytes()?;
        if bytes.len() != self.size {
            return Err(Error::LengthMismatch {
                name: self.name.clone(),
                expected: self.size,
                actual: bytes.len(),
            });
        }

        let mut bytes = bytes.to_vec();
        bytes.resize(32, 0);
        Ok(bytes)
    }
}

impl sealed::Decoder for FixedBytesCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let word = take_word(bytes, offset)?;
        Ok(Value::Bytes(word[..self.size].to_vec()))
    }
}

pub struct DynamicBytesCodec;

impl sealed::AbiType for DynamicBytesCodec {
    fn name(&self) -> &str {
        "bytes"
    }

    fn is_dynamic(&self) -> bool {
        true
    }
}

impl sealed::Encoder for DynamicBytesCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let bytes = value.as_bytes()?;
        let padded = 32 * ((bytes.len() + 31) / 32);

        let mut buff = Vec::with_capacity(32 + padded);
        buff.extend(UIntCodec::new(256).encode(&Value::UInt(bytes.len().into()))?);
        buff.extend_from_slice(bytes);
        buff.resize(32 + padded, 0);
        Ok(buff)
    }
}

impl sealed::Decoder for DynamicBytesCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        Ok(Value::Bytes(take_payload(bytes, offset)?.to_vec()))
    }
}
