use pest::Parser;

use crate::codec::{
    AddressCodec, BooleanCodec, DynamicArrayCodec, DynamicBytesCodec, FixedArrayCodec,
    FixedBytesCodec, IntCodec, StringCodec, TupleCodec, UIntCodec,
};
use crate::grammar::{EthAbi, Rule};
use crate::Codec;
use crate::Error;

struct EthAbiParser<'v> {
    visitor: &'v mut Visitor,
}

impl<'v> EthAbiParser<'v> {
    fn new(visitor: &'v mut Visitor) -> Self {
        Self { visitor }
    }

    fn accept_type(&self, pair: pest::iterators::Pair<Rule>) -> Result<Box<dyn Codec>, Error> {
        let rule = pair.as_rule();
        let inner = pair
            .into_inner()
            .next()
            .expect("Rule::Type should have an inner: Rule::TupleType or Rule::BasicType");

        match inner.as_rule() {
            Rule::TupleType => self.accept_tuple_type(inner),
            Rule::BasicType => self.accept_basic_type(inner),
            _ => unreachable!("Rule::Type can not expand to {:?}", rule),
        }
    }

    fn accept_tuple_type(&self, pair: pest::iterators::Pair<Rule>) -> Result<Box<dyn Codec>, Error> {
        let rule = pair.as_rule();
        let mut inner = pair.into_inner();

        let tuple_type = inner
            .next()
            .expect("Rule::TupleType should have an inner: Rule::ZeroTuple or Rule::NonZeroTuple");

        let tuple_codec = match tuple_type.as_rule() {
            Rule::ZeroTuple => self.visitor.visit_zero_tuple(),
            Rule::NonZeroTuple => {
                let codecs = tuple_type
                    .into_inner()
                    .map(|pair| self.accept_type(pair))
                    .collect::<Result<Vec<_>, Error>>()?;
                self.visitor.visit_non_zero_tuple(codecs)
            }
            _ => unreachable!("Rule::TupleType can not expand to {:?}", rule),
        };

        match inner.next() {
            None => Ok(tuple_codec),
            Some(array) => self.accept_array(array, tuple_codec),
        }
    }

    /// Array suffixes nest left to right: `uint256[2][]` is a dynamic array
    /// of `uint256[2]`.
    fn accept_array(
        &self,
        pair: pest::iterators::Pair<Rule>,
        codec: Box<dyn Codec>,
    ) -> Result<Box<dyn Codec>, Error> {
        let rule = pair.as_rule();

        let mut codec = codec;
        for pair in pair.into_inner() {
            let array_codec: Box<dyn Codec> = match pair.as_rule() {
                Rule::DynamicArray => Box::new(DynamicArrayCodec::new(codec)),
                Rule::ConstArray => {
                    let digits = pair
                        .into_inner()
                        .next()
                        .expect("Rule::ConstArray should have an inner: Rule::Digits");
                    let size = parse_digits(&digits)?;
                    Box::new(FixedArrayCodec::new(size, codec))
                }
                _ => unreachable!("Rule::Array can not expand to {:?}", rule),
            };

            codec = array_codec;
        }
        Ok(codec)
    }

    fn accept_basic_type(&self, pair: pest::iterators::Pair<Rule>) -> Result<Box<dyn Codec>, Error> {
        let mut inner = pair.into_inner();

        let base = inner
            .next()
            .expect("Rule::BasicType should have an inner: Rule::BaseType");
        let (sub, array) = if let Some(sub_or_array) = inner.next() {
            let rule = sub_or_array.as_rule();
            match rule {
                Rule::Sub => (Some(sub_or_array), inner.next()),
                Rule::Array => (None, Some(sub_or_array)),
                _ => unreachable!("Rule::BasicType can not expand to {:?}", rule),
            }
        } else {
            (None, None)
        };

        let size = match &sub {
            Some(digits) => Some(parse_digits(digits)?),
            None => None,
        };

        let base_name = base.as_str();
        let base_codec: Box<dyn Codec> = match base_name {
            "address" => Box::new(AddressCodec),
            "bool" => Box::new(BooleanCodec),
            "bytes" => match size {
                Some(size) if (1..=32).contains(&size) => Box::new(FixedBytesCodec::new(size)),
                Some(size) => return Err(Error::UnknownType(format!("bytes{}", size))),
                None => Box::new(DynamicBytesCodec),
            },
            "int" => {
                let size = size.unwrap_or(256);
                if size == 0 || size > 256 || size % 8 != 0 {
                    return Err(Error::UnknownType(format!("int{}", size)));
                }
                Box::new(IntCodec::new(size))
            }
            "uint" => {
                let size = size.unwrap_or(256);
                if size == 0 || size > 256 || size % 8 != 0 {
                    return Err(Error::UnknownType(format!("uint{}", size)));
                }
                Box::new(UIntCodec::new(size))
            }
            "string" => Box::new(StringCodec),
            _ => return Err(Error::UnknownType(base_name.to_string())),
        };

        match array {
            None => Ok(base_codec),
            Some(array) => self.accept_array(array, base_codec),
        }
    }

    fn parse(&self, abi: &str) -> Result<Box<dyn Codec>, Error> {
        let mut pairs = EthAbi::parse(Rule::Abi, abi)
            .map_err(|_| Error::InvalidTypeString(abi.to_string()))?;
        let pair = pairs.next().ok_or_else(|| Error::InvalidTypeString(abi.to_string()))?;
        self.accept_type(pair)
    }
}

fn parse_digits(digits: &pest::iterators::Pair<Rule>) -> Result<usize, Error> {
    digits
        .as_str()
        .parse::<usize>()
        .map_err(|_| Error::InvalidTypeString(digits.as_str().to_string()))
}

struct Visitor;

impl Visitor {
    fn visit_zero_tuple(&self) -> Box<dyn Codec> {
        Box::new(TupleCodec::new(Vec::with_capacity(0)))
    }

    fn visit_non_zero_tuple(&self, codecs: Vec<Box<dyn Codec>>) -> Box<dyn Codec> {
        Box::new(TupleCodec::new(codecs))
    }
}

/// Builds the codec for an ordered parameter list; the list is treated as a
/// top-level tuple.
pub fn parse(types: &[&str]) -> Result<Box<dyn Codec>, Error> {
    let mut visitor = Visitor;
    let context = EthAbiParser::new(&mut visitor);

    let codecs = types
        .iter()
        .map(|t| context.parse(t))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(Box::new(TupleCodec::new(codecs)))
}
