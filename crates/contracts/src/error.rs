#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("abi error: {0}")]
    AbiError(#[from] ethabi::Error),

    #[error("units error: {0}")]
    UnitsError(#[from] units::Error),
}
