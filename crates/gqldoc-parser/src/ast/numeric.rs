//! Exact numeric interpretations of Int and Float literals.
//!
//! The parser keeps numeric literals as text. [`IntNumber`] and
//! [`FloatNumber`] are computed from that text the first time a caller asks
//! for them (see [`IntValue::number()`](crate::ast::IntValue::number) and
//! [`FloatValue::number()`](crate::ast::FloatValue::number)).

use std::fmt;

/// The narrowest exact representation of an Int literal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum IntNumber {
    I32(i32),
    I64(i64),
    I128(i128),
    /// Too wide for `i128`. Holds the literal's exact decimal text
    /// (optional `-`, no leading zeros).
    Big(Box<str>),
}

impl IntNumber {
    /// Classifies a valid Int literal.
    pub fn parse(literal: &str) -> Self {
        if let Ok(value) = literal.parse::<i32>() {
            Self::I32(value)
        } else if let Ok(value) = literal.parse::<i64>() {
            Self::I64(value)
        } else if let Ok(value) = literal.parse::<i128>() {
            Self::I128(value)
        } else {
            Self::Big(literal.into())
        }
    }

    /// Returns the value as an `i64` if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I32(value) => Some(i64::from(*value)),
            Self::I64(value) => Some(*value),
            Self::I128(_) | Self::Big(_) => None,
        }
    }

    /// Returns the value as an `i128` if it fits.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::I32(value) => Some(i128::from(*value)),
            Self::I64(value) => Some(i128::from(*value)),
            Self::I128(value) => Some(*value),
            Self::Big(_) => None,
        }
    }
}

impl fmt::Display for IntNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(value) => write!(f, "{value}"),
            Self::I64(value) => write!(f, "{value}"),
            Self::I128(value) => write!(f, "{value}"),
            Self::Big(text) => f.write_str(text),
        }
    }
}

/// The exact interpretation of a Float literal.
#[derive(Clone, Debug, PartialEq)]
pub enum FloatNumber {
    /// The literal is exactly the shortest round-trip representation of
    /// this `f64` (e.g. `1.5`, `4e2`, `0.1`).
    F64(f64),
    /// The literal has more precision or range than an `f64` keeps.
    Decimal(Decimal),
}

impl FloatNumber {
    /// Classifies a valid Float literal.
    pub fn parse(literal: &str) -> Self {
        let exact = Decimal::parse(literal);
        if let Ok(value) = literal.parse::<f64>()
            && value.is_finite()
            && Decimal::parse(&format!("{value:e}")) == exact
        {
            return Self::F64(value);
        }
        Self::Decimal(exact)
    }

    /// The nearest `f64`. Lossy for [`Decimal`](Self::Decimal) values.
    pub fn to_f64_lossy(&self) -> f64 {
        match self {
            Self::F64(value) => *value,
            Self::Decimal(decimal) => decimal.to_f64_lossy(),
        }
    }
}

/// An exact decimal number `±digits × 10^exponent`, normalized so that
/// `digits` has no leading or trailing zeros (zero is `"0"` with exponent 0).
///
/// Two literals that denote the same number (`1.50`, `15e-1`, `0.15E1`)
/// normalize to equal `Decimal`s.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Decimal {
    pub negative: bool,
    pub digits: Box<str>,
    pub exponent: i64,
}

impl Decimal {
    /// Normalizes a numeric literal (`-?int(.frac)?([eE][+-]?exp)?`).
    ///
    /// Exponents beyond the `i64` range saturate.
    pub fn parse(literal: &str) -> Self {
        let (negative, unsigned) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal),
        };
        let (mantissa, exponent_text) = match unsigned.find(['e', 'E']) {
            Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
            None => (unsigned, None),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let mut exponent = exponent_text.map_or(0, parse_exponent);
        exponent = exponent.saturating_sub(frac_part.len() as i64);

        let mut digits: String = int_part.chars().chain(frac_part.chars()).collect();
        let trailing_zeros = digits.len() - digits.trim_end_matches('0').len();
        digits.truncate(digits.len() - trailing_zeros);
        exponent = exponent.saturating_add(trailing_zeros as i64);
        let digits = digits.trim_start_matches('0');

        if digits.is_empty() {
            return Self {
                negative,
                digits: "0".into(),
                exponent: 0,
            };
        }
        Self {
            negative,
            digits: digits.into(),
            exponent,
        }
    }

    pub fn is_zero(&self) -> bool {
        &*self.digits == "0"
    }

    pub fn to_f64_lossy(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

fn parse_exponent(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}e{}", self.digits, self.exponent)
    }
}
