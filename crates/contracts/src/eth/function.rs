use ethabi::{Codec, Decoder, Encoder, Value};
use units::hex_to_bin;

use crate::eth::signature::encode_4bytes;
use crate::Error;

pub struct EthereumFunction {
    pub name: String,
    selector: [u8; 4],
    arg_codec: Box<dyn Codec>,
    ret_codec: Box<dyn Codec>,
}

impl EthereumFunction {
    /// Builds a function descriptor from its name and the argument/return
    /// type lists. The selector is derived from the canonical signature, so
    /// aliases like `uint` hash as `uint256`.
    pub fn new(name: &str, args: &[&str], returns: &[&str]) -> Result<Self, Error> {
        let arg_codec = ethabi::parse(args)?;
        let ret_codec = ethabi::parse(returns)?;

        let signature = format!("{}{}", name, arg_codec.type_name());
        let selector = encode_4bytes(&signature);

        Ok(Self {
            name: name.to_string(),
            selector,
            arg_codec,
            ret_codec,
        })
    }

    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    /// Selector followed by the head/tail encoding of the argument tuple.
    pub fn encode(&self, values: Vec<Value>) -> Result<Vec<u8>, Error> {
        let tuple = Value::Tuple(values);
        let encoded = self.arg_codec.encode(&tuple)?;
        Ok([self.selector.as_slice(), encoded.as_slice()].concat())
    }

    /// `0x`-prefixed call-data hex string, the transport-facing form.
    pub fn call_data(&self, values: Vec<Value>) -> Result<String, Error> {
        Ok(format!("0x{}", hex::encode(self.encode(values)?)))
    }

    /// Walks raw return bytes back into the typed return values.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Value>, Error> {
        match self.ret_codec.decode(bytes)? {
            Value::Tuple(values) => Ok(values),
            _ => unreachable!("tuple codec must decode to a tuple"),
        }
    }

    /// Accepts the `0x`-prefixed hex form of return data.
    pub fn decode_hex(&self, data: &str) -> Result<Vec<Value>, Error> {
        let bytes = hex_to_bin(data)?;
        self.decode(&bytes)
    }
}
