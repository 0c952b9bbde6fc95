use num_bigint::{BigInt, BigUint, Sign};

use crate::codec::frame::take_word;
use crate::codec::sealed;
use crate::{Error, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntCodec {
    size: usize,
    name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UIntCodec {
    size: usize,
    name: String,
}

impl IntCodec {
    pub fn new(size: usize) -> Self {
        let name = format!("int{}", size);
        Self { size, name }
    }
}

impl UIntCodec {
    pub fn new(size: usize) -> Self {
        let name = format!("uint{}", size);
        Self { size, name }
    }
}

impl sealed::AbiType for IntCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dynamic(&self) -> bool {
        false
    }
}

impl sealed::AbiType for UIntCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dynamic(&self) -> bool {
        false
    }
}

impl sealed::Encoder for IntCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let value = value.as_int()?;

        let bound = BigInt::from(1) << (self.size - 1);
        if *value >= bound || *value < -&bound {
            return Err(Error::OutOfRange {
                name: self.name.clone(),
                value: value.to_string(),
            });
        }

        let bytes = value.to_signed_bytes_be();
        let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
        Ok(std::iter::repeat(fill).take(32 - bytes.len()).chain(bytes).collect())
    }
}

impl sealed::Encoder for UIntCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let value = value.as_uint()?;

        if value.bits() > self.size as u64 {
            return Err(Error::OutOfRange {
                name: self.name.clone(),
                value: value.to_string(),
            });
        }

        let bytes = value.to_bytes_be();
        Ok(std::iter::repeat(0).take(32 - bytes.len()).chain(bytes).collect())
    }
}

impl sealed::Decoder for IntCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let word = take_word(bytes, offset)?;
        let begin = 32 - self.size / 8;
        Ok(Value::Int(BigInt::from_signed_bytes_be(&word[begin..])))
    }
}

impl sealed::Decoder for UIntCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let word = take_word(bytes, offset)?;
        let begin = 32 - self.size / 8;
        Ok(Value::UInt(BigUint::from_bytes_be(&word[begin..])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder};

    #[test]
    fn test_uint_decoder() {
        let bytes = hex::decode("deadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0defeedface").unwrap();
        assert_eq!(UIntCodec::new(8).decode(&bytes).unwrap(), Value::UInt(0xce_u8.into()));

        let bytes = hex::decode("deadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0de0000face").unwrap();
        assert_eq!(UIntCodec::new(16).decode(&bytes).unwrap(), Value::UInt(0xface_u16.into()));

        let bytes = hex::decode("deadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0defeedface").unwrap();
        assert_eq!(UIntCodec::new(32).decode(&bytes).unwrap(), Value::UInt(0xfeedface_u32.into()));

        let bytes = hex::decode("deadc0dedeadc0dedeadc0dedeadc0dedeadc0dedeadc0defeedfacefeedface").unwrap();
        assert_eq!(
            UIntCodec::new(64).decode(&bytes).unwrap(),
            Value::UInt(0xfeedfacefeedface_u64.into()),
        );

        let bytes = hex::decode("deadc0dedeadc0dedeadc0dedeadc0defeedfacefeedfacefeedfacefeedface").unwrap();
        assert_eq!(
            UIntCodec::new(128).decode(&bytes).unwrap(),
            Value::UInt(0xfeedfacefeedfacefeedfacefeedface_u128.into()),
        );
    }

    #[test]
    fn test_int_decoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000000000ff").unwrap();
        assert_eq!(IntCodec::new(8).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("000000000000000000000000000000000000000000000000000000000000ffff").unwrap();
        assert_eq!(IntCodec::new(16).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000ffffffff").unwrap();
        assert_eq!(IntCodec::new(32).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("000000000000000000000000000000000000000000000000ffffffffffffffff").unwrap();
        assert_eq!(IntCodec::new(64).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("00000000000000000000000000000000ffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(IntCodec::new(128).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));
    }

    #[test]
    fn test_uint_encoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000feedface").unwrap();
        assert_eq!(
            UIntCodec::new(256).encode(&Value::UInt(0xfeedface_u32.into())).unwrap(),
            bytes,
        );
    }

    #[test]
    fn test_int_encoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000feedface").unwrap();
        assert_eq!(
            IntCodec::new(256).encode(&Value::Int(0xfeedface_u32.into())).unwrap(),
            bytes,
        );
    }

    #[test]
    fn test_int_encoder_negative() {
        let bytes = hex::decode("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(IntCodec::new(256).encode(&Value::Int(BigInt::from(-1))).unwrap(), bytes);

        let bytes = hex::decode("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff80").unwrap();
        assert_eq!(IntCodec::new(8).encode(&Value::Int(BigInt::from(-128))).unwrap(), bytes);
    }

    #[test]
    fn test_uint_encoder_out_of_range() {
        let error = UIntCodec::new(8).encode(&Value::UInt(256_u32.into())).unwrap_err();
        assert_eq!(error.to_string(), "256 is out of range for uint8");
        assert!(UIntCodec::new(8).encode(&Value::UInt(255_u32.into())).is_ok());
    }

    #[test]
    fn test_int_encoder_out_of_range() {
        assert!(IntCodec::new(8).encode(&Value::Int(BigInt::from(127))).is_ok());
        assert!(IntCodec::new(8).encode(&Value::Int(BigInt::from(-128))).is_ok());
        assert!(IntCodec::new(8).encode(&Value::Int(BigInt::from(128))).is_err());
        assert!(IntCodec::new(8).encode(&Value::Int(BigInt::from(-129))).is_err());
    }

    #[test]
    fn test_uint_round_trip() {
        let codec = UIntCodec::new(256);
        let value = Value::UInt(0xfeedfacefeedface_u64.into());
        let encoded = codec.encode(&value).unwrap();
        assert_eq!(encoded.len(), 32);
        assert_eq!(codec.decode(&encoded).unwrap(), value);
    }

    #[test]
    fn test_int_round_trip() {
        let codec = IntCodec::new(64);
        for value in [-1_i64, -1234567890, 0, 1234567890] {
            let value = Value::Int(BigInt::from(value));
            let encoded = codec.encode(&value).unwrap();
            assert_eq!(codec.decode(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_decoder_rejects_truncated_input() {
        let bytes = hex::decode("feedface").unwrap();
        assert_eq!(
            UIntCodec::new(256).decode(&bytes).unwrap_err(),
            Error::UnexpectedEnd(0),
        );
    }
}
