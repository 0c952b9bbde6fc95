use crate::codec::frame::take_word;
use crate::codec::sealed;
use crate::{Error, Value};

pub struct AddressCodec;

impl sealed::AbiType for AddressCodec {
    fn name(&self) -> &str {
        "address"
    }

    fn is_dynamic(&self) -> bool {
        false
    }
}

impl sealed::Encoder for AddressCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let address = value.as_address()?;
        if address.len() != 40 {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let mut bytes = Vec::with_capacity(32);
        bytes.extend_from_slice(&[0u8; 12]);
        bytes.extend(hex::decode(address)?);
        Ok(bytes)
    }
}

impl sealed::Decoder for AddressCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let word = take_word(bytes, offset)?;
        Ok(Value::Address(hex::encode(&word[12..])))
    }
}
