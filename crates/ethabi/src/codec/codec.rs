use crate::{Error, Value};

pub(crate) mod sealed {
    use super::{Error, Value};

    pub trait AbiType {
        /// Canonical type name, e.g. `uint256[3]` or `(bool,string)`.
        fn name(&self) -> &str;

        fn is_dynamic(&self) -> bool;

        /// Bytes a value of this type occupies inline in a head region:
        /// 32 for every dynamic type (the offset word), the full encoded
        /// width for static types.
        fn head_size(&self) -> usize {
            32
        }
    }

    pub trait Encoder: AbiType {
        fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error>;
    }

    pub trait Decoder: AbiType {
        fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error>;
    }
}

pub trait Encoder: sealed::Encoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, Error> {
        self.encode_frame(value)
    }
}

pub trait Decoder: sealed::Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<Value, Error> {
        self.decode_frame(bytes, 0)
    }
}

pub trait Codec: Encoder + Decoder {
    /// Canonical type name, e.g. `uint256[3]` or `(bool,string)`.
    fn type_name(&self) -> &str {
        self.name()
    }
}

impl<T: sealed::Encoder> Encoder for T {}
impl<T: sealed::Decoder> Decoder for T {}
impl<T: Encoder + Decoder> Codec for T {}
