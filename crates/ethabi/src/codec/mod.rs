pub(crate) use codec::sealed;

pub use codec::{Codec, Decoder, Encoder};
pub(crate) use address::AddressCodec;
pub(crate) use array::{DynamicArrayCodec, FixedArrayCodec};
pub(crate) use boolean::BooleanCodec;
pub(crate) use bytes::{DynamicBytesCodec, FixedBytesCodec};
pub(crate) use integer::{IntCodec, UIntCodec};
pub(crate) use string::StringCodec;
pub(crate) use tuple::TupleCodec;

mod codec;
mod frame;

mod address;
mod array;
mod boolean;
mod bytes;
mod integer;
mod string;
mod tuple;
