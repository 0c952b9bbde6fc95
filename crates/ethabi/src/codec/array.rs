use num_traits::ToPrimitive;

use crate::codec::frame;
use crate::codec::sealed::{self, AbiType as _, Decoder as _};
use crate::codec::{Codec, Encoder, UIntCodec};
use crate::{Error, Value};

pub struct FixedArrayCodec {
    name: String,
    size: usize,
    codec: Box<dyn Codec>,
}

impl FixedArrayCodec {
    pub fn new(size: usize, codec: Box<dyn Codec>) -> Self {
        let name = format!("{}[{}]", codec.name(), size);
        Self { name, size, codec }
    }
}

impl sealed::AbiType for FixedArrayCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dynamic(&self) -> bool {
        self.codec.is_dynamic()
    }

    fn head_size(&self) -> usize {
        if self.is_dynamic() {
            32
        } else {
            self.size * self.codec.head_size()
        }
    }
}

impl sealed::Encoder for FixedArrayCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let values = value.as_array()?;
        if values.len() != self.size {
            return Err(Error::CountMismatch {
                name: self.name.clone(),
                expected: self.size,
                actual: values.len(),
            });
        }

        let items: Vec<(&dyn Codec, &Value)> =
            values.iter().map(|value| (self.codec.as_ref(), value)).collect();
        frame::encode_frames(&items)
    }
}

impl sealed::Decoder for FixedArrayCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame_bytes = bytes.get(offset..).ok_or(Error::UnexpectedEnd(offset))?;
        let codecs: Vec<&dyn Codec> = vec![self.codec.as_ref(); self.size];
        Ok(Value::Array(frame::decode_frames(&codecs, frame_bytes)?))
    }
}

pub struct DynamicArrayCodec {
    name: String,
    codec: Box<dyn Codec>,
}

impl DynamicArrayCodec {
    pub fn new(codec: Box<dyn Codec>) -> Self {
        let name = format!("{}[]", codec.name());
        Self { name, codec }
    }
}

impl sealed::AbiType for DynamicArrayCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dynamic(&self) -> bool {
        true
    }
}

impl sealed::Encoder for DynamicArrayCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let values = value.as_array()?;

        let mut buff = UIntCodec::new(256).encode(&Value::UInt(values.len().into()))?;
        let items: Vec<(&dyn Codec, &Value)> =
            values.iter().map(|value| (self.codec.as_ref(), value)).collect();
        buff.extend(frame::encode_frames(&items)?);
        Ok(buff)
    }
}

impl sealed::Decoder for DynamicArrayCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let length = UIntCodec::new(256)
            .decode_frame(bytes, offset)?
            .as_uint()?
            .to_usize()
            .ok_or(Error::UnexpectedEnd(offset))?;

        let start = offset.checked_add(32).ok_or(Error::UnexpectedEnd(offset))?;
        let frame_bytes = bytes.get(start..).ok_or(Error::UnexpectedEnd(start))?;

        // every element needs at least a head word; reject lying lengths early
        if frame_bytes.len() / 32 < length {
            return Err(Error::UnexpectedEnd(start));
        }

        let codecs: Vec<&dyn Codec> = vec![self.codec.as_ref(); length];
        Ok(Value::Array(frame::decode_frames(&codecs, frame_bytes)?))
    }
}
