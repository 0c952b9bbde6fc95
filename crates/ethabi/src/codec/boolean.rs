use crate::codec::frame::take_word;
use crate::codec::sealed;
use crate::{Error, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BooleanCodec;

impl sealed::AbiType for BooleanCodec {
    fn name(&self) -> &str {
        "bool"
    }

    fn is_dynamic(&self) -> bool {
        false
    }
}

impl sealed::Encoder for BooleanCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let boolean = value.as_boolean()?;
        let mut bytes = Vec::with_capacity(32);
        bytes.extend_from_slice(&[0u8; 31]);
        bytes.push(*boolean as u8);
        Ok(bytes)
    }
}

impl sealed::Decoder for BooleanCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let word = take_word(bytes, offset)?;
        Ok(Value::Boolean(word.iter().any(|&x| x != 0)))
    }
}
