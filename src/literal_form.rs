//! The identity form over [`Literal`] trees.

use num_bigint::BigInt;
use std::borrow::Cow;

use crate::{
    ArrayForm, ElementSink, Error, FieldForm, FieldSink, FieldVisitor, Form, IdentifierForm,
    Literal, Number, NumberForm, NumberLiteral, ObjectForm, Result, Shape, StringForm,
};

/// Decodes any literal into the [`Literal`] it came from, and writes literal
/// trees back out.
///
/// Every capability narrows to the form itself, and every number conversion
/// keeps its encoding, so `0x00FF` decodes to a hexadecimal literal of width
/// four rather than to the integer 255. JSON has no hexadecimal syntax, so
/// such literals are written as plain integers.
///
/// # Examples
///
/// ```rust
/// use json_form::{from_literal, literal, to_string, LiteralForm};
///
/// let tree = literal!({"tags": ["a", null], "n": 2});
/// let decoded = from_literal(&LiteralForm, tree.clone()).unwrap();
/// assert_eq!(decoded, Some(tree.clone()));
/// assert_eq!(to_string(&LiteralForm, &tree).unwrap(), r#"{"tags":["a",null],"n":2}"#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiteralForm;

impl Form for LiteralForm {
    type Target = Literal;
    type Array = Self;
    type Object = Self;
    type Numeric = Self;
    type Identifier = Self;
    type Text = Self;

    fn array_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn object_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn identifier_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn string_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn write_shape(&self, value: &Literal) -> Result<Shape> {
        Ok(value.shape())
    }
}

impl ArrayForm for LiteralForm {
    type Target = Literal;
    type Element = Literal;
    type ElementForm = Self;
    type Builder = Vec<Literal>;

    fn element_form(&self) -> &Self {
        self
    }

    fn array_builder(&self) -> Result<Vec<Literal>> {
        Ok(Vec::new())
    }

    fn append_element(
        &self,
        mut builder: Vec<Literal>,
        element: Option<Literal>,
    ) -> Result<Vec<Literal>> {
        builder.push(element.unwrap_or_default());
        Ok(builder)
    }

    fn build_array(&self, builder: Vec<Literal>) -> Result<Option<Literal>> {
        Ok(Some(Literal::Array(builder)))
    }

    fn write_elements<S>(&self, value: &Literal, sink: &mut S) -> Result<()>
    where
        S: ElementSink<Literal>,
    {
        let elements = value
            .as_array()
            .ok_or_else(|| Error::rejected(format!("{} literal is not an array", value.shape())))?;
        for element in elements {
            sink.element(Some(element))?;
        }
        Ok(())
    }
}

impl ObjectForm for LiteralForm {
    type Target = Literal;
    type Builder = Vec<(String, Literal)>;

    fn object_builder(&self) -> Result<Vec<(String, Literal)>> {
        Ok(Vec::new())
    }

    fn field<V>(&self, _key: &str, visitor: V) -> Result<V::Output>
    where
        V: FieldVisitor<Self>,
    {
        visitor.visit(self)
    }

    fn build_object(&self, builder: Vec<(String, Literal)>) -> Result<Option<Literal>> {
        Ok(Some(Literal::Object(builder)))
    }

    fn write_fields<S: FieldSink>(&self, value: &Literal, sink: &mut S) -> Result<()> {
        let fields = value
            .as_object()
            .ok_or_else(|| Error::rejected(format!("{} literal is not an object", value.shape())))?;
        for (key, field) in fields {
            sink.field(key, self, Some(field))?;
        }
        Ok(())
    }
}

impl FieldForm<LiteralForm> for LiteralForm {
    type Key = Literal;
    type KeyForm = Self;
    type Value = Literal;
    type ValueForm = Self;

    fn key_form(&self) -> &Self {
        self
    }

    fn value_form(&self) -> &Self {
        self
    }

    fn update_field(
        &self,
        mut builder: Vec<(String, Literal)>,
        key: Literal,
        value: Option<Literal>,
    ) -> Result<Vec<(String, Literal)>> {
        let Literal::String(key) = key else {
            return Err(Error::rejected(format!("{} object key", key.shape())));
        };
        builder.push((key, value.unwrap_or_default()));
        Ok(builder)
    }
}

impl NumberForm for LiteralForm {
    type Target = Literal;

    fn integer_value(&self, value: i64) -> Option<Literal> {
        Some(Literal::Number(NumberLiteral::Integer(value)))
    }

    fn hexadecimal_value(&self, value: i64, digits: u32) -> Option<Literal> {
        Some(Literal::Number(NumberLiteral::Hexadecimal { value, digits }))
    }

    fn big_integer_value(&self, text: &str) -> Option<Literal> {
        Some(Literal::Number(NumberLiteral::BigInteger(text.to_string())))
    }

    fn decimal_value(&self, text: &str) -> Option<Literal> {
        Some(Literal::Number(NumberLiteral::Decimal(text.to_string())))
    }

    fn into_number(&self, value: &Literal) -> Result<Option<Number>> {
        match value {
            Literal::Null => Ok(None),
            Literal::Number(NumberLiteral::Integer(i)) => Ok(Some(Number::I64(*i))),
            Literal::Number(NumberLiteral::Hexadecimal { value, .. }) => {
                Ok(Some(Number::I64(*value)))
            }
            Literal::Number(NumberLiteral::BigInteger(text)) => text
                .parse::<BigInt>()
                .map(|bi| Some(Number::BigInt(bi)))
                .map_err(|_| Error::not_numeric(text)),
            Literal::Number(NumberLiteral::Decimal(text)) => {
                Ok(Some(Number::Decimal(text.clone())))
            }
            other => Err(Error::not_numeric(format!("{} literal", other.shape()))),
        }
    }
}

impl IdentifierForm for LiteralForm {
    type Target = Literal;

    fn identifier_value(&self, identifier: &str) -> Option<Literal> {
        Some(Literal::Identifier(identifier.to_string()))
    }

    fn into_identifier<'a>(&self, value: &'a Literal) -> Result<Cow<'a, str>> {
        value
            .as_identifier()
            .map(Cow::Borrowed)
            .ok_or_else(|| Error::rejected(format!("{} literal is not an identifier", value.shape())))
    }
}

impl StringForm for LiteralForm {
    type Target = Literal;

    fn string_value(&self, value: String) -> Result<Literal> {
        Ok(Literal::String(value))
    }

    fn into_string<'a>(&self, value: &'a Literal) -> Result<Cow<'a, str>> {
        value
            .as_str()
            .map(Cow::Borrowed)
            .ok_or_else(|| Error::rejected(format!("{} literal is not a string", value.shape())))
    }
}
