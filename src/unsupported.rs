//! Placeholder for capabilities a form does not provide.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::{
    ArrayForm, Error, FieldVisitor, Form, IdentifierForm, NumberForm, ObjectForm, Result, Shape,
    StringForm,
};

/// A form that resolves no shape at all.
///
/// Name it for every capability a form leaves out:
///
/// ```rust
/// use json_form::{Form, StringForm, Unsupported};
///
/// struct Name;
///
/// impl StringForm for Name {
///     type Target = String;
///
///     fn string_value(&self, value: String) -> json_form::Result<String> {
///         Ok(value)
///     }
/// }
///
/// impl Form for Name {
///     type Target = String;
///     type Array = Unsupported<String>;
///     type Object = Unsupported<String>;
///     type Numeric = Unsupported<String>;
///     type Identifier = Unsupported<String>;
///     type Text = Self;
///
///     fn string_form(&self) -> json_form::Result<&Self> {
///         Ok(self)
///     }
/// }
/// ```
///
/// Its builders are uninhabited, so no builder step can ever run on it.
pub struct Unsupported<T>(PhantomData<fn() -> T>);

impl<T> Unsupported<T> {
    #[must_use]
    pub const fn new() -> Self {
        Unsupported(PhantomData)
    }
}

impl<T> Default for Unsupported<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Unsupported<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Unsupported<T> {}

impl<T> fmt::Debug for Unsupported<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported<{}>", std::any::type_name::<T>())
    }
}

impl<T> Form for Unsupported<T> {
    type Target = T;
    type Array = Self;
    type Object = Self;
    type Numeric = Self;
    type Identifier = Self;
    type Text = Self;
}

impl<T> ArrayForm for Unsupported<T> {
    type Target = T;
    type Element = T;
    type ElementForm = Self;
    type Builder = Infallible;

    fn element_form(&self) -> &Self {
        self
    }

    fn array_builder(&self) -> Result<Infallible> {
        Err(Error::unresolved::<T>(Shape::Array))
    }

    fn append_element(&self, builder: Infallible, _element: Option<T>) -> Result<Infallible> {
        match builder {}
    }

    fn build_array(&self, builder: Infallible) -> Result<Option<T>> {
        match builder {}
    }
}

impl<T> ObjectForm for Unsupported<T> {
    type Target = T;
    type Builder = Infallible;

    fn object_builder(&self) -> Result<Infallible> {
        Err(Error::unresolved::<T>(Shape::Object))
    }

    fn field<V>(&self, _key: &str, _visitor: V) -> Result<V::Output>
    where
        V: FieldVisitor<Self>,
    {
        Err(Error::unresolved::<T>(Shape::Object))
    }

    fn build_object(&self, builder: Infallible) -> Result<Option<T>> {
        match builder {}
    }
}

impl<T> NumberForm for Unsupported<T> {
    type Target = T;
}

impl<T> IdentifierForm for Unsupported<T> {
    type Target = T;

    fn identifier_value(&self, _identifier: &str) -> Option<T> {
        None
    }
}

impl<T> StringForm for Unsupported<T> {
    type Target = T;

    fn string_value(&self, _value: String) -> Result<T> {
        Err(Error::unresolved::<T>(Shape::String))
    }
}
