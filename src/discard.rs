//! Forms that accept any literal and keep nothing.

use std::borrow::Cow;

use crate::{
    ArrayForm, ElementSink, FieldForm, FieldSink, FieldVisitor, Form, IdentifierForm, Number,
    NumberForm, ObjectForm, Result, Shape, StringForm,
};

/// Accepts every literal shape and decodes it to `()`.
///
/// Nested arrays and objects are still walked, so a malformed literal deep
/// inside a discarded value is seen by the driver, but nothing is kept.
/// Writing a discarded value emits `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Discard;

impl Form for Discard {
    type Target = ();
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

    fn write_shape(&self, _value: &()) -> Result<Shape> {
        Ok(Shape::Null)
    }
}

impl ArrayForm for Discard {
    type Target = ();
    type Element = ();
    type ElementForm = Self;
    type Builder = ();

    fn element_form(&self) -> &Self {
        self
    }

    fn array_builder(&self) -> Result<()> {
        Ok(())
    }

    fn append_element(&self, builder: (), _element: Option<()>) -> Result<()> {
        Ok(builder)
    }

    fn build_array(&self, builder: ()) -> Result<Option<()>> {
        Ok(Some(builder))
    }

    fn write_elements<S>(&self, _value: &(), _sink: &mut S) -> Result<()>
    where
        S: ElementSink<()>,
    {
        Ok(())
    }
}

impl ObjectForm for Discard {
    type Target = ();
    type Builder = ();

    fn object_builder(&self) -> Result<()> {
        Ok(())
    }

    fn field<V>(&self, _key: &str, visitor: V) -> Result<V::Output>
    where
        V: FieldVisitor<Self>,
    {
        visitor.visit(&IgnoredField)
    }

    fn build_object(&self, builder: ()) -> Result<Option<()>> {
        Ok(Some(builder))
    }

    fn write_fields<S: FieldSink>(&self, _value: &(), _sink: &mut S) -> Result<()> {
        Ok(())
    }
}

impl NumberForm for Discard {
    type Target = ();

    fn integer_value(&self, _value: i64) -> Option<()> {
        Some(())
    }

    fn hexadecimal_value(&self, _value: i64, _digits: u32) -> Option<()> {
        Some(())
    }

    fn big_integer_value(&self, _text: &str) -> Option<()> {
        Some(())
    }

    fn decimal_value(&self, _text: &str) -> Option<()> {
        Some(())
    }

    fn into_number(&self, _value: &()) -> Result<Option<Number>> {
        Ok(None)
    }
}

impl IdentifierForm for Discard {
    type Target = ();

    fn identifier_value(&self, _identifier: &str) -> Option<()> {
        Some(())
    }

    fn into_identifier<'a>(&self, _value: &'a ()) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed("null"))
    }
}

impl StringForm for Discard {
    type Target = ();

    fn string_value(&self, _value: String) -> Result<()> {
        Ok(())
    }
}

/// A field of any object form that decodes its key and value with
/// [`Discard`] and leaves the builder untouched.
///
/// Object forms return it from [`ObjectForm::field`] for keys they choose to
/// skip:
///
/// ```rust
/// use json_form::{FieldVisitor, IgnoredField, ObjectForm, Result};
///
/// struct Names;
///
/// impl ObjectForm for Names {
///     type Target = Vec<String>;
///     type Builder = Vec<String>;
///
///     fn object_builder(&self) -> Result<Vec<String>> {
///         Ok(Vec::new())
///     }
///
///     fn field<V: FieldVisitor<Self>>(&self, _key: &str, visitor: V) -> Result<V::Output> {
///         visitor.visit(&IgnoredField)
///     }
///
///     fn build_object(&self, names: Vec<String>) -> Result<Option<Vec<String>>> {
///         Ok(Some(names))
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnoredField;

impl<O: ObjectForm> FieldForm<O> for IgnoredField {
    type Key = ();
    type KeyForm = Discard;
    type Value = ();
    type ValueForm = Discard;

    fn key_form(&self) -> &Discard {
        &Discard
    }

    fn value_form(&self) -> &Discard {
        &Discard
    }

    fn update_field(&self, builder: O::Builder, _key: (), _value: Option<()>) -> Result<O::Builder> {
        Ok(builder)
    }
}
