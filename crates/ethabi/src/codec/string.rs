use crate::codec::frame::take_payload;
use crate::codec::sealed;
use crate::codec::{Encoder, UIntCodec};
use crate::{Error, Value};

pub struct StringCodec;

impl sealed::AbiType for StringCodec {
    fn name(&self) -> &str {
        "string"
    }

    fn is_dynamic(&self) -> bool {
        true
    }
}

impl sealed::Encoder for StringCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let string = value.as_string()?;
        let padded = 32 * ((string.len() + 31) / 32);

        let mut buff = Vec::with_capacity(32 + padded);
        buff.extend(UIntCodec::new(256).encode(&Value::UInt(string.len().into()))?);
        buff.extend_from_slice(string.as_bytes());
        buff.resize(32 + padded, 0);
        Ok(buff)
    }
}

impl sealed::Decoder for StringCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let payload = take_payload(bytes, offset)?;
        Ok(Value::String(String::from_utf8_lossy(payload).to_string()))
    }
}
