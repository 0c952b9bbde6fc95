use crate::codec::frame;
use crate::codec::sealed::{self, AbiType as _};
use crate::codec::Codec;
use crate::{Error, Value};

pub struct TupleCodec {
    name: String,
    codecs: Vec<Box<dyn Codec>>,
}

impl TupleCodec {
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        let names = codecs.iter().map(|codec| codec.name()).collect::<Vec<_>>();
        let name = format!("({})", names.join(","));
        Self { name, codecs }
    }
}

impl sealed::AbiType for TupleCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dynamic(&self) -> bool {
        self.codecs.iter().any(|codec| codec.is_dynamic())
    }

    fn head_size(&self) -> usize {
        if self.is_dynamic() {
            32
        } else {
            self.codecs.iter().map(|codec| codec.head_size()).sum()
        }
    }
}

impl sealed::Encoder for TupleCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let values = value.as_tuple()?;
        if values.len() != self.codecs.len() {
            return Err(Error::CountMismatch {
                name: self.name.clone(),
                expected: self.codecs.len(),
                actual: values.len(),
            });
        }

        let items: Vec<(&dyn Codec, &Value)> = self
            .codecs
            .iter()
            .zip(values.iter())
            .map(|(codec, value)| (codec.as_ref(), value))
            .collect();
        frame::encode_frames(&items)
    }
}

impl sealed::Decoder for TupleCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame_bytes = bytes.get(offset..).ok_or(Error::UnexpectedEnd(offset))?;
        let codecs: Vec<&dyn Codec> = self.codecs.iter().map(|codec| codec.as_ref()).collect();
        Ok(Value::Tuple(frame::decode_frames(&codecs, frame_bytes)?))
    }
}
