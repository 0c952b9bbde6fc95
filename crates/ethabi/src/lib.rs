extern crate hex;
extern crate num_traits;
extern crate pest;
extern crate units;
#[macro_use]
extern crate pest_derive;
#[macro_use]
extern crate thiserror;

pub extern crate num_bigint;

pub use codec::{Codec, Decoder, Encoder};
pub use error::Error;
pub use parser::parse;
pub use value::Value;

mod codec;
mod error;
mod grammar;
mod parser;
mod value;
