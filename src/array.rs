//! Incremental builder contract for array literals.
//!
//! Decoding an array runs one builder through the protocol:
//!
//! ```text
//! array_builder() -> append_element(b, e1) -> ... -> append_element(b, en) -> build_array(b)
//! ```
//!
//! Every step consumes the builder and returns the one to use next, so a
//! driver can park the builder between any two calls while it waits for more
//! input. Implementations may mutate in place and hand back the same value,
//! or return a fresh accumulator; callers always continue with the returned
//! value.

use crate::{Error, Form, Result, Shape};

/// Form for sequence literals with one shared element form.
pub trait ArrayForm {
    type Target;
    type Element;
    type ElementForm: Form<Target = Self::Element>;
    /// Accumulator for one array literal.
    type Builder;

    /// The form used to transcode every element.
    fn element_form(&self) -> &Self::ElementForm;

    /// Starts a new array literal.
    ///
    /// Fails when the target cannot be built incrementally.
    fn array_builder(&self) -> Result<Self::Builder>;

    /// Applies the next element; `None` is a JSON `null` element.
    fn append_element(
        &self,
        builder: Self::Builder,
        element: Option<Self::Element>,
    ) -> Result<Self::Builder>;

    /// Finishes the literal. `Ok(None)` stands for a `null` array.
    fn build_array(&self, builder: Self::Builder) -> Result<Option<Self::Target>>;

    /// Pushes the elements of `value` into `sink`, in order.
    fn write_elements<S>(&self, value: &Self::Target, sink: &mut S) -> Result<()>
    where
        S: ElementSink<Self::Element>,
    {
        let _ = (value, sink);
        Err(Error::unresolved::<Self::Target>(Shape::Array))
    }
}

/// Receives the elements of an array being written.
pub trait ElementSink<E> {
    /// Writes one element; `None` is written as `null`.
    fn element(&mut self, element: Option<&E>) -> Result<()>;
}
