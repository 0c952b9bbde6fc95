#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{function} number must be a valid hex string")]
    InvalidNumber { function: &'static str },

    #[error("{function} number must be an integer")]
    NotAnInteger { function: &'static str },

    #[error("{function} doesn't support {unit} unit")]
    UnsupportedUnit { function: &'static str, unit: String },

    #[error("{function} fraction part is out of limit")]
    FractionOutOfLimit { function: &'static str },

    #[error("the value to {function} function is not supported")]
    UnsupportedValue { function: &'static str },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}
