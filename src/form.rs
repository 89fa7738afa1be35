//! Capability dispatch: the root [`Form`] trait.
//!
//! A form is an immutable descriptor that knows how to transcode one target
//! type. Which JSON literal shapes it accepts is answered by explicit queries,
//! one per shape, each returning the specialized form or
//! [`Error::Unresolved`]. Nothing is discovered at runtime through type
//! introspection: the specialized form types are named statically through the
//! associated types, and shapes a form does not support are named with
//! [`Unsupported`](crate::Unsupported).
//!
//! A form that itself implements a capability narrows to itself:
//!
//! ```rust
//! use json_form::{from_literal, literal, Form, NumberForm, Unsupported};
//!
//! struct Percent;
//!
//! impl NumberForm for Percent {
//!     type Target = u8;
//!
//!     fn integer_value(&self, value: i64) -> Option<u8> {
//!         u8::try_from(value).ok().filter(|v| *v <= 100)
//!     }
//! }
//!
//! impl Form for Percent {
//!     type Target = u8;
//!     type Array = Unsupported<u8>;
//!     type Object = Unsupported<u8>;
//!     type Numeric = Self;
//!     type Identifier = Unsupported<u8>;
//!     type Text = Unsupported<u8>;
//!
//!     fn number_form(&self) -> json_form::Result<&Self> {
//!         Ok(self)
//!     }
//! }
//!
//! assert_eq!(from_literal(&Percent, literal!(42)).unwrap(), Some(42));
//! assert!(from_literal(&Percent, literal!(420)).is_err());
//! assert!(from_literal(&Percent, literal!("42")).is_err());
//! ```

use std::sync::Arc;

use crate::{ArrayForm, Error, IdentifierForm, NumberForm, ObjectForm, Result, Shape, StringForm};

/// Capability-dispatch root for one target type.
///
/// Every query defaults to [`Error::Unresolved`]; implementations override
/// the queries for the shapes they support. Forms must not change state
/// while they are used, so one instance can serve any number of concurrent
/// parses and writes.
pub trait Form {
    /// The value type this form produces and consumes.
    type Target;
    /// Specialized form for array literals.
    type Array: ArrayForm<Target = Self::Target>;
    /// Specialized form for object literals.
    type Object: ObjectForm<Target = Self::Target>;
    /// Specialized form for number literals.
    type Numeric: NumberForm<Target = Self::Target>;
    /// Specialized form for bare-word literals, `true` and `false` included.
    type Identifier: IdentifierForm<Target = Self::Target>;
    /// Specialized form for string literals.
    type Text: StringForm<Target = Self::Target>;

    fn array_form(&self) -> Result<&Self::Array> {
        Err(Error::unresolved::<Self::Target>(Shape::Array))
    }

    fn object_form(&self) -> Result<&Self::Object> {
        Err(Error::unresolved::<Self::Target>(Shape::Object))
    }

    fn number_form(&self) -> Result<&Self::Numeric> {
        Err(Error::unresolved::<Self::Target>(Shape::Number))
    }

    fn identifier_form(&self) -> Result<&Self::Identifier> {
        Err(Error::unresolved::<Self::Target>(Shape::Identifier))
    }

    fn string_form(&self) -> Result<&Self::Text> {
        Err(Error::unresolved::<Self::Target>(Shape::String))
    }

    /// Chooses the literal shape used to write `value`.
    ///
    /// The default picks the first resolved capability in the order object,
    /// array, number, identifier, string. Forms accepting several shapes, or
    /// whose values can stand for JSON `null`, should override this.
    fn write_shape(&self, value: &Self::Target) -> Result<Shape> {
        let _ = value;
        if self.object_form().is_ok() {
            Ok(Shape::Object)
        } else if self.array_form().is_ok() {
            Ok(Shape::Array)
        } else if self.number_form().is_ok() {
            Ok(Shape::Number)
        } else if self.identifier_form().is_ok() {
            Ok(Shape::Identifier)
        } else {
            self.string_form().map(|_| Shape::String)
        }
    }
}

impl<F: Form + ?Sized> Form for Arc<F> {
    type Target = F::Target;
    type Array = F::Array;
    type Object = F::Object;
    type Numeric = F::Numeric;
    type Identifier = F::Identifier;
    type Text = F::Text;

    fn array_form(&self) -> Result<&Self::Array> {
        (**self).array_form()
    }

    fn object_form(&self) -> Result<&Self::Object> {
        (**self).object_form()
    }

    fn number_form(&self) -> Result<&Self::Numeric> {
        (**self).number_form()
    }

    fn identifier_form(&self) -> Result<&Self::Identifier> {
        (**self).identifier_form()
    }

    fn string_form(&self) -> Result<&Self::Text> {
        (**self).string_form()
    }

    fn write_shape(&self, value: &Self::Target) -> Result<Shape> {
        (**self).write_shape(value)
    }
}
