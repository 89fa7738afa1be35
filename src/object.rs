//! Field-keyed object literals and refinement.
//!
//! An [`ObjectForm`] owns the builder of one object literal, while each key
//! resolves its own [`FieldForm`] with a key form and a value form of its own.
//! That is what lets one literal decode into a struct with heterogeneously
//! typed members: the object form hands the field form for a key to a
//! [`FieldVisitor`], which is generic over the field type, so every field keeps
//! its static types and no runtime type information is involved.
//!
//! ## Refinement
//!
//! After a field has been applied, [`FieldForm::refine_form`] may return a
//! different object form to use for the remaining fields of the same literal
//! and to build it. Variant forms are values of the same form type, usually an
//! enum with one case per variant, keyed by a discriminant such as `"type"`:
//!
//! ```text
//! {"type": "circle", "radius": 2}
//!   Any ── "type" ──> refine_form -> Circle ── "radius" (circle field) ──> build_object
//! ```
//!
//! Fields already applied are never revisited; refinement only changes how the
//! fields after it are decoded.

use crate::{Error, Form, Result, Shape};

/// Form for object literals.
pub trait ObjectForm: Sized {
    type Target;
    /// Accumulator for one object literal, shared by every refined variant.
    type Builder;

    /// Starts a new object literal.
    fn object_builder(&self) -> Result<Self::Builder>;

    /// Resolves the field form for `key` and passes it to `visitor`.
    ///
    /// Policy for unknown keys belongs to the implementation: reject them,
    /// or hand them to a catch-all field such as
    /// [`IgnoredField`](crate::IgnoredField).
    fn field<V>(&self, key: &str, visitor: V) -> Result<V::Output>
    where
        V: FieldVisitor<Self>;

    /// Finishes the literal. `Ok(None)` stands for a `null` object.
    fn build_object(&self, builder: Self::Builder) -> Result<Option<Self::Target>>;

    /// Pushes the fields of `value` into `sink`, in output order.
    fn write_fields<S: FieldSink>(&self, value: &Self::Target, sink: &mut S) -> Result<()> {
        let _ = (value, sink);
        Err(Error::unresolved::<Self::Target>(Shape::Object))
    }
}

/// Transcoding of one field of an object literal owned by `O`.
pub trait FieldForm<O: ObjectForm> {
    type Key;
    type KeyForm: Form<Target = Self::Key>;
    type Value;
    type ValueForm: Form<Target = Self::Value>;

    fn key_form(&self) -> &Self::KeyForm;

    fn value_form(&self) -> &Self::ValueForm;

    /// Applies one key/value pair; `None` is a JSON `null` value.
    fn update_field(
        &self,
        builder: O::Builder,
        key: Self::Key,
        value: Option<Self::Value>,
    ) -> Result<O::Builder>;

    /// Picks the object form for the rest of the literal, if it changes.
    ///
    /// The driver calls this once per field in arrival order and applies the
    /// result only once [`update_field`](Self::update_field) has accepted the
    /// same field.
    fn refine_form(&self, form: &O, key: &Self::Key, value: Option<&Self::Value>) -> Option<O> {
        let _ = (form, key, value);
        None
    }
}

/// Receives the field form resolved for a key.
pub trait FieldVisitor<O: ObjectForm> {
    type Output;

    fn visit<F>(self, field: &F) -> Result<Self::Output>
    where
        F: FieldForm<O>;
}

/// Receives the fields of an object being written.
pub trait FieldSink {
    /// Writes one field through `form`; a `None` value is written as `null`.
    fn field<F: Form>(&mut self, key: &str, form: &F, value: Option<&F::Target>) -> Result<()>;
}

/// A [`FieldForm`] assembled from a key form, a value form and an update
/// function.
///
/// # Examples
///
/// ```rust
/// use json_form::{Field, FieldForm, Literal, LiteralForm, Result};
///
/// type Fields = Vec<(String, Literal)>;
///
/// fn upper(mut fields: Fields, key: Literal, value: Option<Literal>) -> Result<Fields> {
///     let key = key.as_str().unwrap_or_default().to_uppercase();
///     fields.push((key, value.unwrap_or(Literal::Null)));
///     Ok(fields)
/// }
///
/// let field = Field::new(LiteralForm, LiteralForm, upper);
/// let fields =
///     FieldForm::<LiteralForm>::update_field(&field, Vec::new(), Literal::from("id"), None)
///         .unwrap();
/// assert_eq!(fields, vec![("ID".to_string(), Literal::Null)]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Field<KF, VF, U> {
    key_form: KF,
    value_form: VF,
    update: U,
}

impl<KF, VF, U> Field<KF, VF, U> {
    pub const fn new(key_form: KF, value_form: VF, update: U) -> Self {
        Field {
            key_form,
            value_form,
            update,
        }
    }
}

impl<O, KF, VF, U> FieldForm<O> for Field<KF, VF, U>
where
    O: ObjectForm,
    KF: Form,
    VF: Form,
    U: Fn(O::Builder, KF::Target, Option<VF::Target>) -> Result<O::Builder>,
{
    type Key = KF::Target;
    type KeyForm = KF;
    type Value = VF::Target;
    type ValueForm = VF;

    fn key_form(&self) -> &KF {
        &self.key_form
    }

    fn value_form(&self) -> &VF {
        &self.value_form
    }

    fn update_field(
        &self,
        builder: O::Builder,
        key: KF::Target,
        value: Option<VF::Target>,
    ) -> Result<O::Builder> {
        (self.update)(builder, key, value)
    }
}
