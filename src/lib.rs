//! # json_form
//!
//! Statically typed transcoding between JSON literals and Rust values through
//! composable *forms*.
//!
//! ## What is a form?
//!
//! A form is an immutable descriptor of how one target type maps onto JSON
//! literal shapes. Instead of discovering a type's structure at runtime, a
//! parser or writer asks the form for a capability per shape (array, object,
//! number, identifier, string) and drives the returned specialized form:
//!
//! - **[`ArrayForm`]**: one element form and an incremental builder
//! - **[`ObjectForm`]** / **[`FieldForm`]**: a field form per key, each with
//!   its own key and value forms, and refinement of the object form by the
//!   fields seen so far
//! - **[`NumberForm`]**: conversions from four number encodings that keep
//!   precision, and [`NumberWriter`] paths for writing them back
//! - **[`IdentifierForm`]** and **[`StringForm`]**: bare words and strings
//!
//! Builders move by value through every step, so a streaming parser can stop
//! between any two elements and resume later with nothing but the builder.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! json_form = "0.1"
//! ```
//!
//! ### Decoding through a form
//!
//! ```rust
//! use json_form::{
//!     from_literal, literal, ArrayForm, Form, NumberForm, Result, Unsupported,
//! };
//!
//! struct Count;
//!
//! impl NumberForm for Count {
//!     type Target = u32;
//!
//!     fn integer_value(&self, value: i64) -> Option<u32> {
//!         u32::try_from(value).ok()
//!     }
//! }
//!
//! impl Form for Count {
//!     type Target = u32;
//!     type Array = Unsupported<u32>;
//!     type Object = Unsupported<u32>;
//!     type Numeric = Self;
//!     type Identifier = Unsupported<u32>;
//!     type Text = Unsupported<u32>;
//!
//!     fn number_form(&self) -> Result<&Self> {
//!         Ok(self)
//!     }
//! }
//!
//! /// Sums the counts of an array instead of collecting them.
//! struct Total;
//!
//! impl ArrayForm for Total {
//!     type Target = u64;
//!     type Element = u32;
//!     type ElementForm = Count;
//!     type Builder = u64;
//!
//!     fn element_form(&self) -> &Count {
//!         &Count
//!     }
//!
//!     fn array_builder(&self) -> Result<u64> {
//!         Ok(0)
//!     }
//!
//!     fn append_element(&self, sum: u64, count: Option<u32>) -> Result<u64> {
//!         Ok(sum + u64::from(count.unwrap_or(0)))
//!     }
//!
//!     fn build_array(&self, sum: u64) -> Result<Option<u64>> {
//!         Ok(Some(sum))
//!     }
//! }
//!
//! impl Form for Total {
//!     type Target = u64;
//!     type Array = Self;
//!     type Object = Unsupported<u64>;
//!     type Numeric = Unsupported<u64>;
//!     type Identifier = Unsupported<u64>;
//!     type Text = Unsupported<u64>;
//!
//!     fn array_form(&self) -> Result<&Self> {
//!         Ok(self)
//!     }
//! }
//!
//! assert_eq!(from_literal(&Total, literal!([1, 2, null, 4])).unwrap(), Some(7));
//! assert_eq!(from_literal(&Total, literal!(null)).unwrap(), None);
//!
//! let err = from_literal(&Total, literal!([1, (-2)])).unwrap_err();
//! assert_eq!(err.path(), Some("/1"));
//! ```
//!
//! ### Dynamic literals
//!
//! [`Literal`] is the in-memory literal tree the reference driver consumes.
//! Build it with the [`literal!`] macro, or from any serde data format:
//!
//! ```rust
//! use json_form::{from_deserializer, to_string, LiteralForm};
//!
//! let mut json = serde_json::Deserializer::from_str(r#"{"a": [1, 2.50, "x"]}"#);
//! let tree = from_deserializer(&LiteralForm, &mut json).unwrap().unwrap();
//! assert_eq!(to_string(&LiteralForm, &tree).unwrap(), r#"{"a":[1,2.5,"x"]}"#);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Forms take `&self` everywhere and can be shared between threads
//! - JSON `null` is carried as `None`, never as an error

pub mod array;
pub mod decode;
pub mod discard;
pub mod error;
pub mod form;
pub mod identifier;
pub mod literal;
pub mod literal_form;
pub mod macros;
pub mod number;
pub mod object;
pub mod options;
pub mod shape;
pub mod string;
pub mod unsupported;
pub mod writer;

pub use array::{ArrayForm, ElementSink};
pub use decode::decode;
pub use discard::{Discard, IgnoredField};
pub use error::{Error, Result};
pub use form::Form;
pub use identifier::IdentifierForm;
pub use literal::{Literal, NumberLiteral};
pub use literal_form::LiteralForm;
pub use number::{write_number_value, Number, NumberForm, NumberWriter};
pub use object::{Field, FieldForm, FieldSink, FieldVisitor, ObjectForm};
pub use options::WriteOptions;
pub use shape::Shape;
pub use string::StringForm;
pub use unsupported::Unsupported;
pub use writer::JsonWriter;

use serde::{Deserialize, Deserializer};
use std::io;

/// Decode a [`Literal`] tree through `form`.
///
/// # Examples
///
/// ```rust
/// use json_form::{from_literal, literal, LiteralForm};
///
/// let tree = literal!([1, "two"]);
/// assert_eq!(from_literal(&LiteralForm, tree.clone()).unwrap(), Some(tree));
/// ```
///
/// # Errors
///
/// Returns an error if the form does not resolve a shape present in the tree
/// or rejects one of its elements, fields or scalars.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_literal<F>(form: &F, literal: Literal) -> Result<Option<F::Target>>
where
    F: Form + ?Sized,
{
    decode(form, literal)
}

/// Read one literal from any serde `Deserializer` and decode it through `form`.
///
/// Numbers arrive through the deserializer's own number model. For
/// serde_json that is `u64`, `i64` or `f64`, so integers beyond the `u64`
/// range and decimals with more than 17 significant digits come back as the
/// nearest `f64`. Enable the `arbitrary_precision` feature to read such
/// numbers from serde_json with their digits intact.
///
/// # Examples
///
/// ```rust
/// use json_form::{from_deserializer, Literal, LiteralForm, NumberLiteral};
///
/// let mut json = serde_json::Deserializer::from_str("18446744073709551615");
/// let value = from_deserializer(&LiteralForm, &mut json).unwrap();
/// assert_eq!(
///     value,
///     Some(Literal::Number(NumberLiteral::BigInteger(
///         "18446744073709551615".to_string()
///     )))
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the deserializer fails, or as [`from_literal`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_deserializer<'de, F, D>(form: &F, deserializer: D) -> Result<Option<F::Target>>
where
    F: Form + ?Sized,
    D: Deserializer<'de>,
{
    let literal = Literal::deserialize(deserializer).map_err(|e| Error::custom(e.to_string()))?;
    decode(form, literal)
}

/// Write `value` through `form` as compact JSON.
///
/// # Examples
///
/// ```rust
/// use json_form::{literal, to_string, LiteralForm};
///
/// let tree = literal!({"x": 1, "y": [true, null]});
/// assert_eq!(to_string(&LiteralForm, &tree).unwrap(), r#"{"x":1,"y":[true,null]}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the form cannot decompose the value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<F>(form: &F, value: &F::Target) -> Result<String>
where
    F: Form + ?Sized,
{
    to_string_with_options(form, value, WriteOptions::default())
}

/// Write `value` through `form` as pretty-printed JSON.
///
/// # Examples
///
/// ```rust
/// use json_form::{literal, to_string_pretty, LiteralForm};
///
/// let tree = literal!({"x": 1});
/// assert_eq!(to_string_pretty(&LiteralForm, &tree).unwrap(), "{\n  \"x\": 1\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the form cannot decompose the value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<F>(form: &F, value: &F::Target) -> Result<String>
where
    F: Form + ?Sized,
{
    to_string_with_options(form, value, WriteOptions::pretty())
}

/// Write `value` through `form` with custom options.
///
/// # Errors
///
/// Returns an error if the form cannot decompose the value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<F>(form: &F, value: &F::Target, options: WriteOptions) -> Result<String>
where
    F: Form + ?Sized,
{
    let mut writer = JsonWriter::with_options(options);
    writer.write_value(form, Some(value))?;
    Ok(writer.into_inner())
}

/// Write `value` through `form` as compact JSON into an I/O stream.
///
/// # Examples
///
/// ```rust
/// use json_form::{literal, to_writer, LiteralForm};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &LiteralForm, &literal!([1, 2])).unwrap();
/// assert_eq!(buffer, b"[1,2]");
/// ```
///
/// # Errors
///
/// Returns an error if the form cannot decompose the value or writing to the
/// stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, F>(mut writer: W, form: &F, value: &F::Target) -> Result<()>
where
    W: io::Write,
    F: Form + ?Sized,
{
    let json = to_string(form, value)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
