//! Syntactic categories of JSON literals.

use std::fmt;

/// The syntactic category of a JSON token sequence.
///
/// Forms resolve one specialized capability per shape. `true` and `false`
/// are [`Shape::Identifier`] literals; only `null` is [`Shape::Null`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Array,
    Object,
    Number,
    Identifier,
    String,
    Null,
}

impl Shape {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::Array => "array",
            Shape::Object => "object",
            Shape::Number => "number",
            Shape::Identifier => "identifier",
            Shape::String => "string",
            Shape::Null => "null",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
