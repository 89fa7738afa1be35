//! Bare-word literals.
//!
//! JSON's `true` and `false` are identifiers; extended grammars may allow
//! other bare words. An identifier form only converts words it knows and
//! rejects the rest by returning `None`.

use std::borrow::Cow;

use crate::{Error, Result, Shape};

/// Form for bare-word literals.
///
/// # Examples
///
/// ```rust
/// use json_form::IdentifierForm;
///
/// struct Switch;
///
/// impl IdentifierForm for Switch {
///     type Target = bool;
///
///     fn identifier_value(&self, identifier: &str) -> Option<bool> {
///         match identifier {
///             "on" | "true" => Some(true),
///             "off" | "false" => Some(false),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Switch.identifier_value("on"), Some(true));
/// assert_eq!(Switch.identifier_value("maybe"), None);
/// ```
pub trait IdentifierForm {
    type Target;

    /// Converts a bare word, or returns `None` when it is not accepted.
    fn identifier_value(&self, identifier: &str) -> Option<Self::Target>;

    /// The bare word to write for `value`.
    fn into_identifier<'a>(&self, value: &'a Self::Target) -> Result<Cow<'a, str>> {
        let _ = value;
        Err(Error::unresolved::<Self::Target>(Shape::Identifier))
    }
}
