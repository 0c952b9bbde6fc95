extern crate ethabi;
extern crate hex;
extern crate units;
#[macro_use]
extern crate thiserror;

pub use error::Error;

pub mod eth;
mod error;
