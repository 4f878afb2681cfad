//! Arbitrary-precision numbers.
//!
//! KDL numerals are never squeezed into machine types while parsing: integers
//! keep their full [`BigInt`] value together with the [`Radix`] they were
//! written in, and decimals keep every written digit as a [`Decimal`]
//! (unscaled integer plus a power-of-ten scale).
//!
//! ## Examples
//!
//! ```rust
//! use kdl_doc::{Number, Radix};
//!
//! let doc = kdl_doc::parse("node 0xFF 1.50 #nan").unwrap();
//! let args = doc.nodes()[0].arguments();
//!
//! let hex = args[0].as_number().unwrap();
//! assert_eq!(hex.as_i64(), Some(255));
//! assert_eq!(hex.radix(), Some(Radix::Hexadecimal));
//!
//! assert_eq!(args[1].as_number().unwrap().to_string(), "1.50");
//! assert_eq!(args[2].as_number(), Some(&Number::NaN));
//! ```

use num_bigint::{BigInt, Sign};
use serde::{Serialize, Serializer};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::{Error, Result};

/// The base an integer literal was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// The numeric base: 2, 8, 10 or 16.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// The literal prefix, empty for base 10.
    #[inline]
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }

    #[must_use]
    pub const fn from_value(value: u32) -> Option<Radix> {
        match value {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }
}

/// An arbitrary-precision decimal: `unscaled × 10^-scale`.
///
/// Two decimals are equal when they denote the same quantity, so `1.50`
/// equals `1.5` and `1E0` equals `1.0`; the written precision is still kept
/// and printed back.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::Decimal;
///
/// let d: Decimal = "12.5e-3".parse().unwrap();
/// assert_eq!(d.scale(), 4);
/// assert_eq!(d.to_string(), "0.0125");
/// assert_eq!(d, "0.01250".parse().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Decimal {
            unscaled: unscaled.into(),
            scale,
        }
    }

    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[must_use]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Nearest `f64`; may round or overflow to infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    // Drops trailing zeros of the unscaled value. The scale is widened so
    // stripping zeros below `i64::MIN` cannot overflow.
    fn normalized(&self) -> (BigInt, i128) {
        let ten = BigInt::from(10u8);
        let zero = BigInt::from(0u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = i128::from(self.scale);
        if unscaled == zero {
            return (unscaled, 0);
        }
        while &unscaled % &ten == zero {
            unscaled /= &ten;
            scale -= 1;
        }
        (unscaled, scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Decimal {}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]`, ignoring underscores.
///
/// Errors are reported as parse errors against `s` itself. An exponent whose
/// resulting scale does not fit in an `i64` is rejected as out of range.
impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::parse(1, 1, "invalid decimal literal", s);
        let exponent_start = s.find(|c| c == 'e' || c == 'E').map_or(1, |i| i + 2);
        let out_of_range = || Error::parse(1, exponent_start, "exponent out of range", s);
        let cleaned: String = s.chars().filter(|&c| c != '_').collect();

        let (mantissa, exponent) = match cleaned.find(|c| c == 'e' || c == 'E') {
            Some(i) => (&cleaned[..i], Some(&cleaned[i + 1..])),
            None => (cleaned.as_str(), None),
        };
        let exponent: i128 = match exponent {
            Some(e) => e.parse().map_err(|err: ParseIntError| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
                _ => invalid(),
            })?,
            None => 0,
        };

        let (negative, body) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (int_part, frac_part) = match body.find('.') {
            Some(i) => (&body[..i], &body[i + 1..]),
            None => (body, ""),
        };
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };
        let scale = i128::try_from(frac_part.len())
            .ok()
            .and_then(|len| len.checked_sub(exponent))
            .and_then(|scale| i64::try_from(scale).ok())
            .ok_or_else(out_of_range)?;

        Ok(Decimal { unscaled, scale })
    }
}

/// Plain notation while the scale is non-negative and the number is not too
/// small, scientific notation (`1.5E+10`) otherwise.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = self.unscaled.magnitude().to_string();
        let sign = if self.unscaled.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        let scale = i128::from(self.scale);
        let adjusted = coefficient.len() as i128 - 1 - scale;

        if self.scale == 0 {
            // keep a fraction so the text still reads back as a decimal
            return write!(f, "{}{}.0", sign, coefficient);
        }

        if scale > 0 && adjusted >= -6 {
            // bounded by the coefficient length here
            let scale = scale as usize;
            if coefficient.len() > scale {
                let (int, frac) = coefficient.split_at(coefficient.len() - scale);
                write!(f, "{}{}.{}", sign, int, frac)
            } else {
                let zeros = "0".repeat(scale - coefficient.len());
                write!(f, "{}0.{}{}", sign, zeros, coefficient)
            }
        } else {
            let (first, rest) = coefficient.split_at(1);
            write!(f, "{}{}", sign, first)?;
            if !rest.is_empty() {
                write!(f, ".{}", rest)?;
            }
            if adjusted > 0 {
                write!(f, "E+{}", adjusted)
            } else {
                write!(f, "E{}", adjusted)
            }
        }
    }
}

/// A KDL number.
///
/// Special values are their own variants, so `NaN` compares equal to itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Number {
    Integer { value: BigInt, radix: Radix },
    Decimal(Decimal),
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// A base-10 integer.
    #[must_use]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Number::Integer {
            value: value.into(),
            radix: Radix::Decimal,
        }
    }

    #[must_use]
    pub fn integer_with_radix(value: impl Into<BigInt>, radix: Radix) -> Self {
        Number::Integer {
            value: value.into(),
            radix,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Number::Decimal(_))
    }

    /// Returns `true` for the infinities and NaN.
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::PositiveInfinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// The radix of an integer; `None` for every other variant.
    #[must_use]
    pub const fn radix(&self) -> Option<Radix> {
        match self {
            Number::Integer { radix, .. } => Some(*radix),
            _ => None,
        }
    }

    /// Converts to `i64` when this is an integer that fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_doc::Number;
    ///
    /// assert_eq!(Number::from(42).as_i64(), Some(42));
    /// assert_eq!(Number::from(4.5).as_i64(), None);
    /// assert_eq!(Number::NaN.as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer { value, .. } => i64::try_from(value).ok(),
            _ => None,
        }
    }

    /// Converts to the nearest `f64`. Always succeeds.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer { value, .. } => value.to_string().parse().unwrap_or(f64::NAN),
            Number::Decimal(d) => d.to_f64(),
            Number::PositiveInfinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Renders the number as KDL source text.
    pub(crate) fn render(&self, respect_radix: bool, uppercase_hex: bool, exponent: char) -> String {
        match self {
            Number::Integer { value, radix } => {
                let radix = if respect_radix { *radix } else { Radix::Decimal };
                let mut digits = value.magnitude().to_str_radix(radix.value());
                if uppercase_hex && radix == Radix::Hexadecimal {
                    digits.make_ascii_uppercase();
                }
                let sign = if value.sign() == Sign::Minus { "-" } else { "" };
                format!("{}{}{}", sign, radix.prefix(), digits)
            }
            Number::Decimal(d) => {
                let text = d.to_string();
                if exponent == 'E' {
                    text
                } else {
                    text.replace('E', &exponent.to_string())
                }
            }
            Number::PositiveInfinity => "#inf".to_string(),
            Number::NegativeInfinity => "#-inf".to_string(),
            Number::NaN => "#nan".to_string(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true, false, 'E'))
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer { value, .. } => match i64::try_from(value) {
                Ok(i) => serializer.serialize_i64(i),
                Err(_) => match u64::try_from(value) {
                    Ok(u) => serializer.serialize_u64(u),
                    Err(_) => serializer.serialize_str(&value.to_string()),
                },
            },
            other => serializer.serialize_f64(other.as_f64()),
        }
    }
}

macro_rules! integer_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::integer(value)
                }
            }
        )*
    };
}

integer_from!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::integer(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

/// Finite floats become the shortest decimal that reads back to the same `f64`.
impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value.is_infinite() {
            if value > 0.0 {
                Number::PositiveInfinity
            } else {
                Number::NegativeInfinity
            }
        } else {
            match format!("{:e}", value).parse() {
                Ok(d) => Number::Decimal(d),
                Err(_) => Number::NaN,
            }
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(f64::from(value))
    }
}
