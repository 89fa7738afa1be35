//! Numeric transcoding in both directions.
//!
//! ## Reading
//!
//! A number literal arrives in one of four encodings (see
//! [`NumberLiteral`](crate::NumberLiteral)) and is offered to the matching
//! [`NumberForm`] conversion. Each conversion is optional: returning `None`
//! means the literal is out of range for the form, and the driver falls back
//! to the next more general conversion before giving up:
//!
//! ```text
//! hexadecimal -> integer -> big integer -> decimal
//! ```
//!
//! Big integers and decimals are handed over as their exact literal text so
//! the target type decides its own representation without precision loss.
//!
//! ## Writing
//!
//! [`NumberForm::into_number`] extracts a [`Number`] from a value, and a
//! [`NumberWriter`] renders it through the path dedicated to its variant, so a
//! single-precision value is never written with double-precision digits or
//! the other way round.
//!
//! ```rust
//! use json_form::{JsonWriter, Number, NumberWriter};
//!
//! let mut writer = JsonWriter::new();
//! writer.write_number(&Number::F32(0.1)).unwrap();
//! assert_eq!(writer.into_inner(), "0.1");
//!
//! let mut writer = JsonWriter::new();
//! writer.write_number(&Number::F64(0.1_f32 as f64)).unwrap();
//! assert_eq!(writer.into_inner(), "0.10000000149011612");
//! ```

use num_bigint::BigInt;
use std::fmt;

use crate::{Error, Result};

/// Form for number literals.
///
/// All conversions default to rejecting the literal, so a form only
/// implements the encodings its target can hold.
pub trait NumberForm {
    type Target;

    /// A decimal integer literal within `i64` range.
    fn integer_value(&self, value: i64) -> Option<Self::Target> {
        let _ = value;
        None
    }

    /// A hexadecimal literal together with the number of digits it was
    /// written with, leading zeros included.
    fn hexadecimal_value(&self, value: i64, digits: u32) -> Option<Self::Target> {
        let _ = (value, digits);
        None
    }

    /// An integer literal outside `i64` range, as exact decimal text.
    fn big_integer_value(&self, text: &str) -> Option<Self::Target> {
        let _ = text;
        None
    }

    /// A fractional or exponential literal, as exact text.
    fn decimal_value(&self, text: &str) -> Option<Self::Target> {
        let _ = text;
        None
    }

    /// Extracts the numeric representation to write for `value`.
    ///
    /// `Ok(None)` writes JSON `null`.
    fn into_number(&self, value: &Self::Target) -> Result<Option<Number>> {
        let _ = value;
        Err(Error::not_numeric(std::any::type_name::<Self::Target>()))
    }
}

/// Numeric representation of a value about to be written.
///
/// The variant selects the writer path: bounded and wide integers, single and
/// double precision floats, arbitrary-precision integers, and a fallback that
/// writes the number's own canonical decimal text.
///
/// # Examples
///
/// ```rust
/// use json_form::Number;
///
/// assert!(Number::from(7u8).is_integer());
/// assert!(Number::from(1.5f32).is_float());
/// assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    BigInt(BigInt),
    Decimal(String),
}

impl Number {
    /// Returns `true` for the integer variants, big integers included.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::I32(_) | Number::I64(_) | Number::BigInt(_))
    }

    /// Returns `true` for single and double precision floats.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Converts this number to an `i64` if it holds an integer in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_form::Number;
    ///
    /// assert_eq!(Number::I32(-4).as_i64(), Some(-4));
    /// assert_eq!(Number::from(u64::MAX).as_i64(), None);
    /// assert_eq!(Number::F64(4.0).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::I32(i) => Some(i64::from(*i)),
            Number::I64(i) => Some(*i),
            Number::BigInt(bi) => i64::try_from(bi).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I32(i) => write!(f, "{}", i),
            Number::I64(i) => write!(f, "{}", i),
            Number::F32(fl) => write!(f, "{:?}", fl),
            Number::F64(fl) => write!(f, "{:?}", fl),
            Number::BigInt(bi) => write!(f, "{}", bi),
            Number::Decimal(text) => f.write_str(text),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::I32(i32::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::I32(i32::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::I32(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::I64(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::I32(i32::from(value))
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::I32(i32::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::I64(i64::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::I64(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::F32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::F64(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

/// Text sink for numbers, one method per representation.
///
/// [`write_number`](Self::write_number) dispatches a [`Number`] to the method
/// matching its variant; implementations only provide the individual paths.
pub trait NumberWriter {
    fn write_i32(&mut self, value: i32) -> Result<()>;

    fn write_i64(&mut self, value: i64) -> Result<()>;

    fn write_f32(&mut self, value: f32) -> Result<()>;

    fn write_f64(&mut self, value: f64) -> Result<()>;

    fn write_big_integer(&mut self, value: &BigInt) -> Result<()>;

    /// Writes decimal text that is already a number literal.
    fn write_decimal(&mut self, text: &str) -> Result<()>;

    fn write_null(&mut self) -> Result<()>;

    fn write_number(&mut self, number: &Number) -> Result<()> {
        match number {
            Number::I32(i) => self.write_i32(*i),
            Number::I64(i) => self.write_i64(*i),
            Number::F32(f) => self.write_f32(*f),
            Number::F64(f) => self.write_f64(*f),
            Number::BigInt(bi) => self.write_big_integer(bi),
            Number::Decimal(text) => self.write_decimal(text),
        }
    }
}

/// Writes whatever `form` extracts from `value`, `null` included.
pub fn write_number_value<F, W>(form: &F, value: &F::Target, writer: &mut W) -> Result<()>
where
    F: NumberForm + ?Sized,
    W: NumberWriter + ?Sized,
{
    match form.into_number(value)? {
        Some(number) => writer.write_number(&number),
        None => writer.write_null(),
    }
}
