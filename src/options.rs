//! Configuration options for JSON output.
//!
//! ## Examples
//!
//! ```rust
//! use json_form::{literal, to_string_with_options, LiteralForm, WriteOptions};
//!
//! let tree = literal!({"x": 1, "y": [2]});
//!
//! let options = WriteOptions::pretty().with_indent(4);
//! let json = to_string_with_options(&LiteralForm, &tree, options).unwrap();
//! assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": [\n        2\n    ]\n}");
//! ```

/// Formatting options for [`JsonWriter`](crate::JsonWriter).
///
/// # Examples
///
/// ```rust
/// use json_form::WriteOptions;
///
/// // Compact output
/// let options = WriteOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with the default 2-space indentation
/// let options = WriteOptions::pretty();
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl WriteOptions {
    /// Creates default options (compact format, 2-space indent when pretty).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for output with one element or field per line.
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level.
    ///
    /// Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_form::WriteOptions;
    ///
    /// let options = WriteOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
