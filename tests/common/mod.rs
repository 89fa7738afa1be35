//! Forms shared by the integration tests.
#![allow(dead_code)]

use json_form::{
    ArrayForm, ElementSink, Error, Field, FieldForm, FieldSink, FieldVisitor, Form, IgnoredField,
    Literal, LiteralForm, Number, NumberForm, ObjectForm, Result, Shape, StringForm, Unsupported,
};
use std::borrow::Cow;

pub struct I64Form;

impl NumberForm for I64Form {
    type Target = i64;

    fn integer_value(&self, value: i64) -> Option<i64> {
        Some(value)
    }

    fn into_number(&self, value: &i64) -> Result<Option<Number>> {
        Ok(Some(Number::I64(*value)))
    }
}

impl Form for I64Form {
    type Target = i64;
    type Array = Unsupported<i64>;
    type Object = Unsupported<i64>;
    type Numeric = Self;
    type Identifier = Unsupported<i64>;
    type Text = Unsupported<i64>;

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

pub struct F64Form;

impl NumberForm for F64Form {
    type Target = f64;

    fn integer_value(&self, value: i64) -> Option<f64> {
        Some(value as f64)
    }

    fn big_integer_value(&self, text: &str) -> Option<f64> {
        text.parse().ok()
    }

    fn decimal_value(&self, text: &str) -> Option<f64> {
        text.parse().ok()
    }

    fn into_number(&self, value: &f64) -> Result<Option<Number>> {
        Ok(Some(Number::F64(*value)))
    }
}

impl Form for F64Form {
    type Target = f64;
    type Array = Unsupported<f64>;
    type Object = Unsupported<f64>;
    type Numeric = Self;
    type Identifier = Unsupported<f64>;
    type Text = Unsupported<f64>;

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

pub struct F32Form;

impl NumberForm for F32Form {
    type Target = f32;

    fn integer_value(&self, value: i64) -> Option<f32> {
        Some(value as f32)
    }

    fn decimal_value(&self, text: &str) -> Option<f32> {
        text.parse().ok()
    }

    fn into_number(&self, value: &f32) -> Result<Option<Number>> {
        Ok(Some(Number::F32(*value)))
    }
}

impl Form for F32Form {
    type Target = f32;
    type Array = Unsupported<f32>;
    type Object = Unsupported<f32>;
    type Numeric = Self;
    type Identifier = Unsupported<f32>;
    type Text = Unsupported<f32>;

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

pub struct TextForm;

impl StringForm for TextForm {
    type Target = String;

    fn string_value(&self, value: String) -> Result<String> {
        Ok(value)
    }

    fn into_string<'a>(&self, value: &'a String) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed(value))
    }
}

impl Form for TextForm {
    type Target = String;
    type Array = Unsupported<String>;
    type Object = Unsupported<String>;
    type Numeric = Unsupported<String>;
    type Identifier = Unsupported<String>;
    type Text = Self;

    fn string_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

/// Hexadecimal literals as upper-case text of their original width.
pub struct HexWord;

impl NumberForm for HexWord {
    type Target = String;

    fn hexadecimal_value(&self, value: i64, digits: u32) -> Option<String> {
        Some(format!("{:0width$X}", value, width = digits as usize))
    }
}

impl Form for HexWord {
    type Target = String;
    type Array = Unsupported<String>;
    type Object = Unsupported<String>;
    type Numeric = Self;
    type Identifier = Unsupported<String>;
    type Text = Unsupported<String>;

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

pub type Items<T> = Vec<Option<T>>;

/// Collects elements in place, nulls included.
pub struct VecForm<EF>(pub EF);

impl<EF: Form> ArrayForm for VecForm<EF> {
    type Target = Items<EF::Target>;
    type Element = EF::Target;
    type ElementForm = EF;
    type Builder = Items<EF::Target>;

    fn element_form(&self) -> &EF {
        &self.0
    }

    fn array_builder(&self) -> Result<Items<EF::Target>> {
        Ok(Vec::new())
    }

    fn append_element(
        &self,
        mut items: Items<EF::Target>,
        element: Option<EF::Target>,
    ) -> Result<Items<EF::Target>> {
        items.push(element);
        Ok(items)
    }

    fn build_array(&self, items: Items<EF::Target>) -> Result<Option<Items<EF::Target>>> {
        Ok(Some(items))
    }

    fn write_elements<S>(&self, value: &Items<EF::Target>, sink: &mut S) -> Result<()>
    where
        S: ElementSink<EF::Target>,
    {
        for item in value {
            sink.element(item.as_ref())?;
        }
        Ok(())
    }
}

impl<EF: Form> Form for VecForm<EF> {
    type Target = Items<EF::Target>;
    type Array = Self;
    type Object = Unsupported<Items<EF::Target>>;
    type Numeric = Unsupported<Items<EF::Target>>;
    type Identifier = Unsupported<Items<EF::Target>>;
    type Text = Unsupported<Items<EF::Target>>;

    fn array_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

/// Folds elements into a new accumulator value at every step.
pub struct SumForm;

impl ArrayForm for SumForm {
    type Target = i64;
    type Element = i64;
    type ElementForm = I64Form;
    type Builder = i64;

    fn element_form(&self) -> &I64Form {
        &I64Form
    }

    fn array_builder(&self) -> Result<i64> {
        Ok(0)
    }

    fn append_element(&self, sum: i64, element: Option<i64>) -> Result<i64> {
        sum.checked_add(element.unwrap_or(0))
            .ok_or_else(|| Error::rejected("sum overflow"))
    }

    fn build_array(&self, sum: i64) -> Result<Option<i64>> {
        Ok(Some(sum))
    }
}

impl Form for SumForm {
    type Target = i64;
    type Array = Self;
    type Object = Unsupported<i64>;
    type Numeric = Unsupported<i64>;
    type Identifier = Unsupported<i64>;
    type Text = Unsupported<i64>;

    fn array_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

/// Accepts even integers only.
pub struct EvenForm;

impl ArrayForm for EvenForm {
    type Target = Vec<i64>;
    type Element = i64;
    type ElementForm = I64Form;
    type Builder = Vec<i64>;

    fn element_form(&self) -> &I64Form {
        &I64Form
    }

    fn array_builder(&self) -> Result<Vec<i64>> {
        Ok(Vec::new())
    }

    fn append_element(&self, mut evens: Vec<i64>, element: Option<i64>) -> Result<Vec<i64>> {
        match element {
            Some(value) if value % 2 == 0 => {
                evens.push(value);
                Ok(evens)
            }
            Some(value) => Err(Error::rejected(format!("odd element {value}"))),
            None => Err(Error::custom("null element")),
        }
    }

    fn build_array(&self, evens: Vec<i64>) -> Result<Option<Vec<i64>>> {
        Ok(Some(evens))
    }
}

impl Form for EvenForm {
    type Target = Vec<i64>;
    type Array = Self;
    type Object = Unsupported<Vec<i64>>;
    type Numeric = Unsupported<Vec<i64>>;
    type Identifier = Unsupported<Vec<i64>>;
    type Text = Unsupported<Vec<i64>>;

    fn array_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

/// Exactly two integers.
pub struct PairForm;

impl ArrayForm for PairForm {
    type Target = (i64, i64);
    type Element = i64;
    type ElementForm = I64Form;
    type Builder = (usize, [i64; 2]);

    fn element_form(&self) -> &I64Form {
        &I64Form
    }

    fn array_builder(&self) -> Result<(usize, [i64; 2])> {
        Ok((0, [0; 2]))
    }

    fn append_element(
        &self,
        (len, mut slots): (usize, [i64; 2]),
        element: Option<i64>,
    ) -> Result<(usize, [i64; 2])> {
        let slot = slots
            .get_mut(len)
            .ok_or_else(|| Error::rejected("more than two elements"))?;
        *slot = element.ok_or_else(|| Error::rejected("null pair element"))?;
        Ok((len + 1, slots))
    }

    fn build_array(&self, (len, slots): (usize, [i64; 2])) -> Result<Option<(i64, i64)>> {
        if len != 2 {
            return Err(Error::rejected(format!("pair with {len} elements")));
        }
        Ok(Some((slots[0], slots[1])))
    }
}

impl Form for PairForm {
    type Target = (i64, i64);
    type Array = Self;
    type Object = Unsupported<(i64, i64)>;
    type Numeric = Unsupported<(i64, i64)>;
    type Identifier = Unsupported<(i64, i64)>;
    type Text = Unsupported<(i64, i64)>;

    fn array_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

/// One form narrowing to itself for two shapes.
pub struct ScalarForm;

impl NumberForm for ScalarForm {
    type Target = Scalar;

    fn integer_value(&self, value: i64) -> Option<Scalar> {
        Some(Scalar::Int(value))
    }

    fn into_number(&self, value: &Scalar) -> Result<Option<Number>> {
        match value {
            Scalar::Int(i) => Ok(Some(Number::I64(*i))),
            Scalar::Text(text) => Err(Error::not_numeric(text)),
        }
    }
}

impl StringForm for ScalarForm {
    type Target = Scalar;

    fn string_value(&self, value: String) -> Result<Scalar> {
        Ok(Scalar::Text(value))
    }

    fn into_string<'a>(&self, value: &'a Scalar) -> Result<Cow<'a, str>> {
        match value {
            Scalar::Text(text) => Ok(Cow::Borrowed(text)),
            Scalar::Int(i) => Err(Error::rejected(format!("{i} is not text"))),
        }
    }
}

impl Form for ScalarForm {
    type Target = Scalar;
    type Array = Unsupported<Scalar>;
    type Object = Unsupported<Scalar>;
    type Numeric = Self;
    type Identifier = Unsupported<Scalar>;
    type Text = Self;

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn string_form(&self) -> Result<&Self> {
        Ok(self)
    }

    fn write_shape(&self, value: &Scalar) -> Result<Shape> {
        Ok(match value {
            Scalar::Int(_) => Shape::Number,
            Scalar::Text(_) => Shape::String,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Figure {
    Circle {
        radius: f64,
    },
    Rect {
        width: f64,
        height: f64,
    },
    Unknown {
        kind: Option<String>,
        extras: Vec<(String, Literal)>,
    },
}

#[derive(Debug, Default)]
pub struct FigureParts {
    kind: Option<String>,
    radius: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    extras: Vec<(String, Literal)>,
}

/// Figure objects, refined by their `"type"` field.
///
/// `Any` keeps every field it does not know as a literal, `Circle` rejects
/// unknown fields and `Rect` ignores them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureForm {
    Any,
    Circle,
    Rect,
}

pub struct KindField;

impl FieldForm<FigureForm> for KindField {
    type Key = String;
    type KeyForm = TextForm;
    type Value = String;
    type ValueForm = TextForm;

    fn key_form(&self) -> &TextForm {
        &TextForm
    }

    fn value_form(&self) -> &TextForm {
        &TextForm
    }

    fn update_field(
        &self,
        mut parts: FigureParts,
        _key: String,
        value: Option<String>,
    ) -> Result<FigureParts> {
        parts.kind = value;
        Ok(parts)
    }

    fn refine_form(
        &self,
        _form: &FigureForm,
        _key: &String,
        value: Option<&String>,
    ) -> Option<FigureForm> {
        match value.map(String::as_str) {
            Some("circle") => Some(FigureForm::Circle),
            Some("rect") => Some(FigureForm::Rect),
            _ => None,
        }
    }
}

fn set_radius(mut parts: FigureParts, _key: String, value: Option<f64>) -> Result<FigureParts> {
    parts.radius = value;
    Ok(parts)
}

fn set_width(mut parts: FigureParts, _key: String, value: Option<f64>) -> Result<FigureParts> {
    parts.width = value;
    Ok(parts)
}

fn set_height(mut parts: FigureParts, _key: String, value: Option<f64>) -> Result<FigureParts> {
    parts.height = value;
    Ok(parts)
}

fn keep_extra(mut parts: FigureParts, key: String, value: Option<Literal>) -> Result<FigureParts> {
    parts.extras.push((key, value.unwrap_or_default()));
    Ok(parts)
}

impl ObjectForm for FigureForm {
    type Target = Figure;
    type Builder = FigureParts;

    fn object_builder(&self) -> Result<FigureParts> {
        Ok(FigureParts::default())
    }

    fn field<V>(&self, key: &str, visitor: V) -> Result<V::Output>
    where
        V: FieldVisitor<Self>,
    {
        match (self, key) {
            (_, "type") => visitor.visit(&KindField),
            (FigureForm::Circle, "radius") => {
                visitor.visit(&Field::new(TextForm, F64Form, set_radius))
            }
            (FigureForm::Circle, _) => Err(Error::rejected(format!("unknown circle field `{key}`"))),
            (FigureForm::Rect, "width") => visitor.visit(&Field::new(TextForm, F64Form, set_width)),
            (FigureForm::Rect, "height") => {
                visitor.visit(&Field::new(TextForm, F64Form, set_height))
            }
            (FigureForm::Rect, _) => visitor.visit(&IgnoredField),
            (FigureForm::Any, _) => visitor.visit(&Field::new(TextForm, LiteralForm, keep_extra)),
        }
    }

    fn build_object(&self, parts: FigureParts) -> Result<Option<Figure>> {
        let figure = match self {
            FigureForm::Circle => Figure::Circle {
                radius: parts
                    .radius
                    .ok_or_else(|| Error::rejected("circle without radius"))?,
            },
            FigureForm::Rect => Figure::Rect {
                width: parts
                    .width
                    .ok_or_else(|| Error::rejected("rect without width"))?,
                height: parts
                    .height
                    .ok_or_else(|| Error::rejected("rect without height"))?,
            },
            FigureForm::Any => Figure::Unknown {
                kind: parts.kind,
                extras: parts.extras,
            },
        };
        Ok(Some(figure))
    }

    fn write_fields<S: FieldSink>(&self, value: &Figure, sink: &mut S) -> Result<()> {
        match value {
            Figure::Circle { radius } => {
                sink.field("type", &TextForm, Some(&"circle".to_string()))?;
                sink.field("radius", &F64Form, Some(radius))
            }
            Figure::Rect { width, height } => {
                sink.field("type", &TextForm, Some(&"rect".to_string()))?;
                sink.field("width", &F64Form, Some(width))?;
                sink.field("height", &F64Form, Some(height))
            }
            Figure::Unknown { kind, extras } => {
                if let Some(kind) = kind {
                    sink.field("type", &TextForm, Some(kind))?;
                }
                for (key, extra) in extras {
                    sink.field(key, &LiteralForm, Some(extra))?;
                }
                Ok(())
            }
        }
    }
}

impl Form for FigureForm {
    type Target = Figure;
    type Array = Unsupported<Figure>;
    type Object = Self;
    type Numeric = Unsupported<Figure>;
    type Identifier = Unsupported<Figure>;
    type Text = Unsupported<Figure>;

    fn object_form(&self) -> Result<&Self> {
        Ok(self)
    }
}
