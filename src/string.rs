//! String literals.

use std::borrow::Cow;

use crate::{Error, Result, Shape};

/// Form for string literals.
///
/// The driver hands over the already unescaped text; writers escape whatever
/// [`into_string`](Self::into_string) returns.
pub trait StringForm {
    type Target;

    /// Converts the text of a string literal.
    fn string_value(&self, value: String) -> Result<Self::Target>;

    /// The text to write as a string literal for `value`.
    fn into_string<'a>(&self, value: &'a Self::Target) -> Result<Cow<'a, str>> {
        let _ = value;
        Err(Error::unresolved::<Self::Target>(Shape::String))
    }
}
