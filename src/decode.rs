//! Reference driver over in-memory literal trees.
//!
//! [`decode`] walks a [`Literal`] and drives a form through the same protocol
//! a streaming parser would: it asks the form for the capability matching the
//! literal, runs the builder of arrays and objects one element or field at a
//! time, and finalizes. Builders travel by value between steps, so nothing
//! here needs the whole literal up front except the tree it was given.
//!
//! Failures inside nested literals come back as [`Error::Located`] carrying a
//! JSON Pointer to the element or field that failed.

use log::{debug, trace};

use crate::{
    ArrayForm, Error, FieldForm, FieldVisitor, Form, IdentifierForm, Literal, NumberForm,
    NumberLiteral, ObjectForm, Result, StringForm,
};

/// Decodes `literal` through `form`.
///
/// `null` decodes to `Ok(None)` for every form without consulting any of its
/// capabilities.
///
/// # Errors
///
/// Returns [`Error::Unresolved`] when the form has no capability for the
/// literal's shape, and whatever error a capability raised otherwise.
pub fn decode<F>(form: &F, literal: Literal) -> Result<Option<F::Target>>
where
    F: Form + ?Sized,
{
    match literal {
        Literal::Null => Ok(None),
        Literal::Array(elements) => decode_array(form.array_form()?, elements),
        Literal::Object(fields) => decode_object(form.object_form()?, fields),
        Literal::Number(number) => decode_number(form.number_form()?, number),
        Literal::Identifier(identifier) => form
            .identifier_form()?
            .identifier_value(&identifier)
            .map(Some)
            .ok_or_else(|| Error::rejected(format!("identifier `{identifier}`"))),
        Literal::String(text) => form.string_form()?.string_value(text).map(Some),
    }
}

fn decode_array<A>(form: &A, elements: Vec<Literal>) -> Result<Option<A::Target>>
where
    A: ArrayForm,
{
    trace!("array builder start, {} elements", elements.len());
    let mut builder = form.array_builder()?;
    for (index, element) in elements.into_iter().enumerate() {
        let element = decode(form.element_form(), element).map_err(|e| e.at_index(index))?;
        builder = form
            .append_element(builder, element)
            .map_err(|e| e.at_index(index))?;
    }
    let target = form.build_array(builder)?;
    trace!("array builder finish");
    Ok(target)
}

fn decode_object<O>(form: &O, fields: Vec<(String, Literal)>) -> Result<Option<O::Target>>
where
    O: ObjectForm,
{
    trace!("object builder start, {} fields", fields.len());
    let mut builder = form.object_builder()?;
    let mut refined: Option<O> = None;
    for (key, value) in fields {
        let active = refined.as_ref().unwrap_or(form);
        let apply = ApplyField {
            form: active,
            builder,
            key: &key,
            value,
        };
        let (next, refinement) = active.field(&key, apply).map_err(|e| e.at(&key))?;
        builder = next;
        if let Some(variant) = refinement {
            debug!("object form refined by field `{key}`");
            refined = Some(variant);
        }
    }
    let target = refined.as_ref().unwrap_or(form).build_object(builder)?;
    trace!("object builder finish");
    Ok(target)
}

/// Applies one field: decodes the key and value with the field's own forms,
/// asks for a refinement, then hands both to the builder.
struct ApplyField<'a, O: ObjectForm> {
    form: &'a O,
    builder: O::Builder,
    key: &'a str,
    value: Literal,
}

impl<'a, O: ObjectForm> FieldVisitor<O> for ApplyField<'a, O> {
    type Output = (O::Builder, Option<O>);

    fn visit<F>(self, field: &F) -> Result<Self::Output>
    where
        F: FieldForm<O>,
    {
        trace!("field `{}`", self.key);
        let key = decode(field.key_form(), Literal::String(self.key.to_string()))?
            .ok_or_else(|| Error::rejected("null object key"))?;
        let value = decode(field.value_form(), self.value)?;
        // refinement reads the pair before update_field takes ownership of it
        let refinement = field.refine_form(self.form, &key, value.as_ref());
        let builder = field.update_field(self.builder, key, value)?;
        Ok((builder, refinement))
    }
}

fn decode_number<N>(form: &N, literal: NumberLiteral) -> Result<Option<N::Target>>
where
    N: NumberForm,
{
    let converted = match &literal {
        NumberLiteral::Hexadecimal { value, digits } => form
            .hexadecimal_value(*value, *digits)
            .or_else(|| form.integer_value(*value))
            .or_else(|| widen_integer(form, &value.to_string())),
        NumberLiteral::Integer(value) => form
            .integer_value(*value)
            .or_else(|| widen_integer(form, &value.to_string())),
        NumberLiteral::BigInteger(text) => widen_integer(form, text),
        NumberLiteral::Decimal(text) => form.decimal_value(text),
    };
    converted
        .map(Some)
        .ok_or_else(|| Error::rejected(format!("number literal {literal}")))
}

fn widen_integer<N: NumberForm>(form: &N, text: &str) -> Option<N::Target> {
    form.big_integer_value(text)
        .or_else(|| form.decimal_value(text))
}
