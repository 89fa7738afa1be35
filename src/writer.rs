//! JSON text output driven by forms.
//!
//! [`JsonWriter`] is the inverse of [`decode`](crate::decode): for each value
//! it asks the form which literal shape to emit
//! ([`Form::write_shape`]), then lets the matching capability decompose the
//! value into elements, fields, a [`Number`](crate::Number), an identifier or
//! a string.
//!
//! ```rust
//! use json_form::{literal, JsonWriter, LiteralForm, WriteOptions};
//!
//! let mut writer = JsonWriter::with_options(WriteOptions::pretty());
//! writer
//!     .write_value(&LiteralForm, Some(&literal!({"a": [1, 2]})))
//!     .unwrap();
//! assert_eq!(writer.into_inner(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
//! ```

use num_bigint::BigInt;

use crate::number::write_number_value;
use crate::{
    ArrayForm, ElementSink, Error, FieldSink, Form, IdentifierForm, NumberLiteral, NumberWriter,
    ObjectForm, Result, Shape, StringForm, WriteOptions,
};

/// Writes values as JSON text into an in-memory buffer.
#[derive(Debug, Default)]
pub struct JsonWriter {
    output: String,
    options: WriteOptions,
    depth: usize,
}

impl JsonWriter {
    /// Compact writer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(WriteOptions::default())
    }

    #[must_use]
    pub fn with_options(options: WriteOptions) -> Self {
        JsonWriter {
            output: String::with_capacity(256),
            options,
            depth: 0,
        }
    }

    /// Consumes the writer and returns the text written so far.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes `value` through `form`; `None` is written as `null`.
    ///
    /// # Errors
    ///
    /// Fails when the shape chosen by [`Form::write_shape`] is not resolved
    /// by the form, or when a capability cannot decompose the value. Errors
    /// raised inside arrays and objects carry the location of the element or
    /// field, as in decoding. On failure the buffer is left as it was before
    /// the call.
    pub fn write_value<F>(&mut self, form: &F, value: Option<&F::Target>) -> Result<()>
    where
        F: Form + ?Sized,
    {
        let start = self.output.len();
        let written = self.write_shaped(form, value);
        if written.is_err() {
            self.output.truncate(start);
        }
        written
    }

    fn write_shaped<F>(&mut self, form: &F, value: Option<&F::Target>) -> Result<()>
    where
        F: Form + ?Sized,
    {
        let Some(value) = value else {
            return self.write_null();
        };
        match form.write_shape(value)? {
            Shape::Null => self.write_null(),
            Shape::Array => self.write_array(form.array_form()?, value),
            Shape::Object => self.write_object(form.object_form()?, value),
            Shape::Number => write_number_value(form.number_form()?, value, self),
            Shape::Identifier => self.write_identifier(form.identifier_form()?, value),
            Shape::String => self.write_text(form.string_form()?, value),
        }
    }

    fn write_array<A: ArrayForm>(&mut self, form: &A, value: &A::Target) -> Result<()> {
        self.output.push('[');
        self.depth += 1;
        let mut sink = Elements {
            writer: &mut *self,
            form: form.element_form(),
            count: 0,
        };
        let written = form.write_elements(value, &mut sink);
        let count = sink.count;
        self.depth -= 1;
        written?;
        if count > 0 {
            self.write_newline();
        }
        self.output.push(']');
        Ok(())
    }

    fn write_object<O: ObjectForm>(&mut self, form: &O, value: &O::Target) -> Result<()> {
        self.output.push('{');
        self.depth += 1;
        let mut sink = Fields {
            writer: &mut *self,
            count: 0,
        };
        let written = form.write_fields(value, &mut sink);
        let count = sink.count;
        self.depth -= 1;
        written?;
        if count > 0 {
            self.write_newline();
        }
        self.output.push('}');
        Ok(())
    }

    fn write_identifier<I: IdentifierForm>(&mut self, form: &I, value: &I::Target) -> Result<()> {
        let identifier = form.into_identifier(value)?;
        match identifier.as_ref() {
            "true" | "false" | "null" => {
                self.output.push_str(&identifier);
                Ok(())
            }
            other => Err(Error::rejected(format!(
                "identifier `{other}` has no JSON spelling"
            ))),
        }
    }

    fn write_text<S: StringForm>(&mut self, form: &S, value: &S::Target) -> Result<()> {
        let text = form.into_string(value)?;
        self.write_string(&text);
        Ok(())
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            for _ in 0..self.depth * self.options.indent {
                self.output.push(' ');
            }
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c < ' ' => self.output.push_str(&format!("\\u{:04x}", c as u32)),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

impl NumberWriter for JsonWriter {
    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.output.push_str(&value.to_string());
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.output.push_str(&value.to_string());
        Ok(())
    }

    /// Shortest digits that read back as the same `f32`.
    fn write_f32(&mut self, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::not_numeric(value));
        }
        self.output.push_str(&format!("{value:?}"));
        Ok(())
    }

    /// Shortest digits that read back as the same `f64`.
    fn write_f64(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::not_numeric(value));
        }
        self.output.push_str(&format!("{value:?}"));
        Ok(())
    }

    fn write_big_integer(&mut self, value: &BigInt) -> Result<()> {
        self.output.push_str(&value.to_string());
        Ok(())
    }

    fn write_decimal(&mut self, text: &str) -> Result<()> {
        match text.parse::<NumberLiteral>() {
            Ok(NumberLiteral::Hexadecimal { .. }) | Err(_) => Err(Error::not_numeric(text)),
            Ok(_) => {
                self.output.push_str(text);
                Ok(())
            }
        }
    }

    fn write_null(&mut self) -> Result<()> {
        self.output.push_str("null");
        Ok(())
    }
}

struct Elements<'a, EF> {
    writer: &'a mut JsonWriter,
    form: &'a EF,
    count: usize,
}

impl<'a, EF: Form> ElementSink<EF::Target> for Elements<'a, EF> {
    fn element(&mut self, element: Option<&EF::Target>) -> Result<()> {
        if self.count > 0 {
            self.writer.output.push(',');
        }
        self.writer.write_newline();
        self.writer
            .write_value(self.form, element)
            .map_err(|e| e.at_index(self.count))?;
        self.count += 1;
        Ok(())
    }
}

struct Fields<'a> {
    writer: &'a mut JsonWriter,
    count: usize,
}

impl<'a> FieldSink for Fields<'a> {
    fn field<F: Form>(&mut self, key: &str, form: &F, value: Option<&F::Target>) -> Result<()> {
        if self.count > 0 {
            self.writer.output.push(',');
        }
        self.writer.write_newline();
        self.writer.write_string(key);
        self.writer
            .output
            .push_str(if self.writer.options.pretty { ": " } else { ":" });
        self.writer
            .write_value(form, value)
            .map_err(|e| e.at(key))?;
        self.count += 1;
        Ok(())
    }
}
