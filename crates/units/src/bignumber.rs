use num_bigint::BigInt;

use crate::hexutil::is_hex;
use crate::Error;

/// Outcome of parsing a number: either a plain integer, or the split form of
/// a decimal-point string. Unit conversion reconstructs the scaled value from
/// the four fraction fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BigNumber {
    Int(BigInt),
    Fraction {
        whole: BigInt,
        fraction: BigInt,
        fraction_length: usize,
        negative: bool,
    },
}

impl BigNumber {
    pub(crate) fn into_int(self, function: &'static str) -> Result<BigInt, Error> {
        match self {
            BigNumber::Int(int) => Ok(int),
            BigNumber::Fraction { .. } => Err(Error::NotAnInteger { function }),
        }
    }
}

/// The kinds of input the numeric entry points accept.
#[derive(Clone, Debug)]
pub enum Numeric {
    Big(BigInt),
    Int(i64),
    Text(String),
}

impl From<BigInt> for Numeric {
    fn from(int: BigInt) -> Self {
        Numeric::Big(int)
    }
}

impl From<i64> for Numeric {
    fn from(int: i64) -> Self {
        Numeric::Int(int)
    }
}

impl From<&str> for Numeric {
    fn from(text: &str) -> Self {
        Numeric::Text(text.to_string())
    }
}

impl From<String> for Numeric {
    fn from(text: String) -> Self {
        Numeric::Text(text)
    }
}

pub fn to_bn<N: Into<Numeric>>(number: N) -> Result<BigNumber, Error> {
    match number.into() {
        Numeric::Big(int) => Ok(BigNumber::Int(int)),
        Numeric::Int(int) => Ok(BigNumber::Int(int.into())),
        Numeric::Text(text) => parse_text(&text),
    }
}

fn parse_text(number: &str) -> Result<BigNumber, Error> {
    const FUNCTION: &str = "to_bn";
    let fault = || Error::InvalidNumber { function: FUNCTION };

    if number.is_empty() {
        return Ok(BigNumber::Int(BigInt::from(0)));
    }

    let (negative, bare) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };
    if bare.is_empty() {
        return Err(fault());
    }

    if let Some((whole, fraction)) = bare.split_once('.') {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fault());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fault());
        }
        let whole = if whole.is_empty() {
            BigInt::from(0)
        } else {
            parse_radix(whole, 10).ok_or_else(fault)?
        };
        return Ok(BigNumber::Fraction {
            whole,
            fraction: parse_radix(fraction, 10).ok_or_else(fault)?,
            fraction_length: fraction.len(),
            negative,
        });
    }

    let int = if let Some(digits) = bare.strip_prefix("0x") {
        parse_radix(digits, 16).ok_or_else(fault)?
    } else if bare.bytes().all(|b| b.is_ascii_digit()) {
        parse_radix(bare, 10).ok_or_else(fault)?
    } else if is_hex(bare) {
        parse_radix(bare, 16).ok_or_else(fault)?
    } else {
        return Err(fault());
    };

    Ok(BigNumber::Int(if negative { -int } else { int }))
}

fn parse_radix(digits: &str, radix: u32) -> Option<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bn_decimal() {
        assert_eq!(to_bn("4660"), Ok(BigNumber::Int(BigInt::from(4660))));
        assert_eq!(to_bn(-16_i64), Ok(BigNumber::Int(BigInt::from(-16))));
    }

    #[test]
    fn test_to_bn_zero_prefixed_hex() {
        assert_eq!(to_bn("0x1234"), Ok(BigNumber::Int(BigInt::from(4660))));
        assert_eq!(to_bn("0xff"), Ok(BigNumber::Int(BigInt::from(255))));
    }

    #[test]
    fn test_to_bn_negative_hex() {
        assert_eq!(to_bn("-0x10"), Ok(BigNumber::Int(BigInt::from(-16))));
    }

    #[test]
    fn test_to_bn_bare_hex() {
        assert_eq!(to_bn("abcdef"), Ok(BigNumber::Int(BigInt::from(0xabcdef))));
    }

    #[test]
    fn test_to_bn_empty_string() {
        assert_eq!(to_bn(""), Ok(BigNumber::Int(BigInt::from(0))));
    }

    #[test]
    fn test_to_bn_fraction() {
        assert_eq!(
            to_bn("123.456"),
            Ok(BigNumber::Fraction {
                whole: BigInt::from(123),
                fraction: BigInt::from(456),
                fraction_length: 3,
                negative: false,
            })
        );
    }

    #[test]
    fn test_to_bn_negative_fraction() {
        assert_eq!(
            to_bn("-123.456"),
            Ok(BigNumber::Fraction {
                whole: BigInt::from(123),
                fraction: BigInt::from(456),
                fraction_length: 3,
                negative: true,
            })
        );
    }

    #[test]
    fn test_to_bn_invalid_input() {
        let fault = Err(Error::InvalidNumber { function: "to_bn" });
        assert_eq!(to_bn("1.2.3"), fault);
        assert_eq!(to_bn("xyz"), fault);
        assert_eq!(to_bn("-"), fault);
        assert_eq!(to_bn("12."), fault);
    }

    #[test]
    fn test_to_bn_big_int_passthrough() {
        let int = BigInt::parse_bytes(b"1000000000000000000", 10).unwrap();
        assert_eq!(to_bn(int.clone()), Ok(BigNumber::Int(int)));
    }
}
