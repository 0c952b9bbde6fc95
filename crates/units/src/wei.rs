use num_bigint::BigInt;

use crate::bignumber::{to_bn, BigNumber, Numeric};
use crate::Error;

/// Ethereum denomination table: unit name to its decimal exponent relative
/// to wei. Read-only, shared by every conversion.
pub const UNITS: &[(&str, u32)] = &[
    ("wei", 0),
    ("kwei", 3),
    ("mwei", 6),
    ("gwei", 9),
    ("szabo", 12),
    ("finney", 15),
    ("ether", 18),
    ("kether", 21),
    ("mether", 24),
    ("gether", 27),
    ("tether", 30),
];

fn unit_exponent(function: &'static str, unit: &str) -> Result<u32, Error> {
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, exponent)| *exponent)
        .ok_or_else(|| Error::UnsupportedUnit {
            function,
            unit: unit.to_string(),
        })
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10).pow(exponent)
}

/// Scales an amount expressed in `unit` down to wei. Fractional amounts are
/// accepted as long as the fraction fits the unit's exponent.
pub fn to_wei<N: Into<Numeric>>(number: N, unit: &str) -> Result<BigInt, Error> {
    const FUNCTION: &str = "to_wei";
    let exponent = unit_exponent(FUNCTION, unit)?;

    match to_bn(number)? {
        BigNumber::Int(int) => Ok(int * pow10(exponent)),
        BigNumber::Fraction {
            whole,
            fraction,
            fraction_length,
            negative,
        } => {
            if fraction_length as u32 > exponent {
                return Err(Error::FractionOutOfLimit { function: FUNCTION });
            }
            let scaled = whole * pow10(exponent) + fraction * pow10(exponent - fraction_length as u32);
            Ok(if negative { -scaled } else { scaled })
        }
    }
}

/// Divides a wei amount by the unit's scale; returns the exact
/// `(quotient, remainder)` pair, no rounding.
pub fn from_wei<N: Into<Numeric>>(number: N, unit: &str) -> Result<(BigInt, BigInt), Error> {
    const FUNCTION: &str = "from_wei";
    let exponent = unit_exponent(FUNCTION, unit)?;
    let wei = to_bn(number)?.into_int(FUNCTION)?;

    let scale = pow10(exponent);
    Ok((&wei / &scale, &wei % &scale))
}

/// Converts an amount expressed in `unit` to `(ether, wei remainder)`.
pub fn to_ether<N: Into<Numeric>>(number: N, unit: &str) -> Result<(BigInt, BigInt), Error> {
    let wei = to_wei(number, unit)?;
    from_wei(wei, "ether")
}
