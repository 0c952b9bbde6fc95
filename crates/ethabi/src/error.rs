#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{name} expects {expected} elements, got {actual}")]
    CountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("{name} expects {expected} bytes, got {actual}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("{value} is out of range for {name}")]
    OutOfRange { name: String, value: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("unknown abi type: {0}")]
    UnknownType(String),

    #[error("invalid abi type string: {0}")]
    InvalidTypeString(String),

    #[error("unexpected end of abi data at offset {0}")]
    UnexpectedEnd(usize),

    #[error("hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}
