//! In-memory JSON literal trees.
//!
//! [`Literal`] is what the reference driver in [`decode`](crate::decode)
//! walks. It keeps everything a form may care about that a generic value model
//! would throw away:
//!
//! - object fields stay in arrival order and duplicates are kept, since
//!   refinement and duplicate-key policies depend on order
//! - numbers keep their literal encoding ([`NumberLiteral`]), including the
//!   digit count of hexadecimal literals
//! - `true` and `false` are bare-word identifiers, not a separate boolean kind
//!
//! Literal trees can be built with the [`literal!`](crate::literal!) macro or
//! deserialized from any serde data format:
//!
//! ```rust
//! use json_form::{literal, Literal, NumberLiteral};
//!
//! let tree: Literal = serde_json::from_str(r#"{"id": 7, "ok": true}"#).unwrap();
//! assert_eq!(tree, literal!({"id": 7, "ok": true}));
//!
//! let hex: NumberLiteral = "0x00FF".parse().unwrap();
//! assert_eq!(hex, NumberLiteral::Hexadecimal { value: 255, digits: 4 });
//! assert_eq!(hex.to_string(), "0x00FF");
//! ```

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Shape};

/// Map key serde_json uses to carry a raw number token when its
/// `arbitrary_precision` feature is on.
#[cfg(feature = "arbitrary_precision")]
const RAW_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// A parsed JSON literal.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Literal {
    #[default]
    Null,
    Identifier(String),
    String(String),
    Number(NumberLiteral),
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

/// The four textual encodings of a number literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberLiteral {
    /// Decimal integer within `i64` range.
    Integer(i64),
    /// Hexadecimal integer, as its 64-bit pattern, and the digits it was
    /// written with.
    Hexadecimal { value: i64, digits: u32 },
    /// Decimal integer outside `i64` range, as written.
    BigInteger(String),
    /// Number with a fraction or an exponent, as written.
    Decimal(String),
}

impl Literal {
    /// The syntactic category of this literal.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Literal::Null => Shape::Null,
            Literal::Identifier(_) => Shape::Identifier,
            Literal::String(_) => Shape::String,
            Literal::Number(_) => Shape::Number,
            Literal::Array(_) => Shape::Array,
            Literal::Object(_) => Shape::Object,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// If the literal is a string, returns its text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the literal is a bare word, returns it.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Literal::Identifier(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<&NumberLiteral> {
        match self {
            Literal::Number(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Literal]> {
        match self {
            Literal::Array(elements) => Some(elements),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&[(String, Literal)]> {
        match self {
            Literal::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the value of the first field named `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_form::literal;
    ///
    /// let tree = literal!({"a": 1, "a": 2});
    /// assert_eq!(tree.get("a"), Some(&literal!(1)));
    /// assert_eq!(tree.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.as_object()?
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

impl NumberLiteral {
    /// Returns `true` for every integer encoding.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !matches!(self, NumberLiteral::Decimal(_))
    }
}

impl FromStr for NumberLiteral {
    type Err = Error;

    /// Classifies the text of one number token.
    ///
    /// Decimal numbers follow the JSON grammar. Hexadecimal literals are
    /// `0x` followed by one to sixteen hex digits and take no sign.
    fn from_str(text: &str) -> Result<Self, Error> {
        let invalid = || Error::rejected(format!("invalid number literal {:?}", text));

        if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            if digits.is_empty()
                || digits.len() > 16
                || !digits.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return Err(invalid());
            }
            let bits = u64::from_str_radix(digits, 16).map_err(|_| invalid())?;
            return Ok(NumberLiteral::Hexadecimal {
                value: bits as i64,
                digits: digits.len() as u32,
            });
        }

        let bytes = text.as_bytes();
        let mut pos = usize::from(bytes.first() == Some(&b'-'));
        let int_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let int_len = pos - int_start;
        if int_len == 0 || (int_len > 1 && bytes[int_start] == b'0') {
            return Err(invalid());
        }

        let mut integral = true;
        if pos < bytes.len() && bytes[pos] == b'.' {
            integral = false;
            pos += 1;
            let frac_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == frac_start {
                return Err(invalid());
            }
        }
        if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
            integral = false;
            pos += 1;
            if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
                pos += 1;
            }
            let exp_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == exp_start {
                return Err(invalid());
            }
        }
        if pos != bytes.len() {
            return Err(invalid());
        }

        if !integral {
            return Ok(NumberLiteral::Decimal(text.to_string()));
        }
        match text.parse::<i64>() {
            Ok(i) => Ok(NumberLiteral::Integer(i)),
            Err(_) => Ok(NumberLiteral::BigInteger(text.to_string())),
        }
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLiteral::Integer(i) => write!(f, "{}", i),
            NumberLiteral::Hexadecimal { value, digits } => {
                write!(f, "0x{:0width$X}", *value as u64, width = *digits as usize)
            }
            NumberLiteral::BigInteger(text) | NumberLiteral::Decimal(text) => f.write_str(text),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Identifier(if value { "true" } else { "false" }.to_string())
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(NumberLiteral::Integer(i64::from(value)))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(NumberLiteral::Integer(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Number(NumberLiteral::Integer(i64::from(value)))
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Literal::Number(NumberLiteral::Integer(i)),
            Err(_) => Literal::Number(NumberLiteral::BigInteger(value.to_string())),
        }
    }
}

/// Finite values become decimal literals; `NaN` and the infinities become
/// the bare words `NaN`, `Infinity` and `-Infinity`.
impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Literal::Number(NumberLiteral::Decimal(format!("{:?}", value)))
        } else if value.is_nan() {
            Literal::Identifier("NaN".to_string())
        } else if value > 0.0 {
            Literal::Identifier("Infinity".to_string())
        } else {
            Literal::Identifier("-Infinity".to_string())
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<NumberLiteral> for Literal {
    fn from(value: NumberLiteral) -> Self {
        Literal::Number(value)
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(value: Vec<Literal>) -> Self {
        Literal::Array(value)
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LiteralVisitor;

        impl<'de> Visitor<'de> for LiteralVisitor {
            type Value = Literal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON literal")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Literal::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Literal::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Literal::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(i) => Literal::from(i),
                    Err(_) => Literal::Number(NumberLiteral::BigInteger(value.to_string())),
                })
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(i) => Literal::from(i),
                    Err(_) => Literal::Number(NumberLiteral::BigInteger(value.to_string())),
                })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Literal::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Literal::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Literal::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Literal::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Literal::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Literal::Array(elements))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(key) = map.next_key::<String>()? {
                    #[cfg(feature = "arbitrary_precision")]
                    if fields.is_empty() && key == RAW_NUMBER_TOKEN {
                        let token: String = map.next_value()?;
                        return token
                            .parse::<NumberLiteral>()
                            .map(Literal::Number)
                            .map_err(de::Error::custom);
                    }
                    let value = map.next_value()?;
                    fields.push((key, value));
                }
                Ok(Literal::Object(fields))
            }
        }

        deserializer.deserialize_any(LiteralVisitor)
    }
}
