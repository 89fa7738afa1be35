//! Decoding a tagged union by refining the object form on its tag.
//!
//! Run with: cargo run --example tagged_union

use json_form::{
    from_deserializer, to_string_pretty, Error, Field, FieldForm, FieldSink, FieldVisitor, Form,
    IgnoredField, NumberForm, ObjectForm, Result, StringForm, Unsupported,
};
use std::borrow::Cow;

#[derive(Debug, PartialEq)]
enum Payment {
    Card { last4: String },
    Transfer { iban: String, days: u8 },
}

struct Text;

impl StringForm for Text {
    type Target = String;

    fn string_value(&self, value: String) -> Result<String> {
        Ok(value)
    }

    fn into_string<'a>(&self, value: &'a String) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed(value))
    }
}

impl Form for Text {
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

struct Days;

impl NumberForm for Days {
    type Target = u8;

    fn integer_value(&self, value: i64) -> Option<u8> {
        u8::try_from(value).ok().filter(|days| *days <= 30)
    }

    fn into_number(&self, value: &u8) -> Result<Option<json_form::Number>> {
        Ok(Some(json_form::Number::from(*value)))
    }
}

impl Form for Days {
    type Target = u8;
    type Array = Unsupported<u8>;
    type Object = Unsupported<u8>;
    type Numeric = Self;
    type Identifier = Unsupported<u8>;
    type Text = Unsupported<u8>;

    fn number_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

#[derive(Default)]
struct Parts {
    last4: Option<String>,
    iban: Option<String>,
    days: Option<u8>,
}

#[derive(Clone, Copy)]
enum PaymentForm {
    Untagged,
    Card,
    Transfer,
}

struct Kind;

impl FieldForm<PaymentForm> for Kind {
    type Key = String;
    type KeyForm = Text;
    type Value = String;
    type ValueForm = Text;

    fn key_form(&self) -> &Text {
        &Text
    }

    fn value_form(&self) -> &Text {
        &Text
    }

    fn update_field(&self, parts: Parts, _key: String, _value: Option<String>) -> Result<Parts> {
        Ok(parts)
    }

    fn refine_form(
        &self,
        _form: &PaymentForm,
        _key: &String,
        value: Option<&String>,
    ) -> Option<PaymentForm> {
        match value.map(String::as_str) {
            Some("card") => Some(PaymentForm::Card),
            Some("transfer") => Some(PaymentForm::Transfer),
            _ => None,
        }
    }
}

fn last4(mut parts: Parts, _key: String, value: Option<String>) -> Result<Parts> {
    parts.last4 = value;
    Ok(parts)
}

fn iban(mut parts: Parts, _key: String, value: Option<String>) -> Result<Parts> {
    parts.iban = value;
    Ok(parts)
}

fn days(mut parts: Parts, _key: String, value: Option<u8>) -> Result<Parts> {
    parts.days = value;
    Ok(parts)
}

impl ObjectForm for PaymentForm {
    type Target = Payment;
    type Builder = Parts;

    fn object_builder(&self) -> Result<Parts> {
        Ok(Parts::default())
    }

    fn field<V: FieldVisitor<Self>>(&self, key: &str, visitor: V) -> Result<V::Output> {
        match (self, key) {
            (_, "kind") => visitor.visit(&Kind),
            (PaymentForm::Card, "last4") => visitor.visit(&Field::new(Text, Text, last4)),
            (PaymentForm::Transfer, "iban") => visitor.visit(&Field::new(Text, Text, iban)),
            (PaymentForm::Transfer, "days") => visitor.visit(&Field::new(Text, Days, days)),
            (PaymentForm::Untagged, _) => Err(Error::rejected("`kind` must come first")),
            _ => visitor.visit(&IgnoredField),
        }
    }

    fn build_object(&self, parts: Parts) -> Result<Option<Payment>> {
        let missing = |name: &str| Error::rejected(format!("missing `{name}`"));
        match self {
            PaymentForm::Untagged => Err(missing("kind")),
            PaymentForm::Card => Ok(Some(Payment::Card {
                last4: parts.last4.ok_or_else(|| missing("last4"))?,
            })),
            PaymentForm::Transfer => Ok(Some(Payment::Transfer {
                iban: parts.iban.ok_or_else(|| missing("iban"))?,
                days: parts.days.unwrap_or(1),
            })),
        }
    }

    fn write_fields<S: FieldSink>(&self, value: &Payment, sink: &mut S) -> Result<()> {
        match value {
            Payment::Card { last4 } => {
                sink.field("kind", &Text, Some(&"card".to_string()))?;
                sink.field("last4", &Text, Some(last4))
            }
            Payment::Transfer { iban, days } => {
                sink.field("kind", &Text, Some(&"transfer".to_string()))?;
                sink.field("iban", &Text, Some(iban))?;
                sink.field("days", &Days, Some(days))
            }
        }
    }
}

impl Form for PaymentForm {
    type Target = Payment;
    type Array = Unsupported<Payment>;
    type Object = Self;
    type Numeric = Unsupported<Payment>;
    type Identifier = Unsupported<Payment>;
    type Text = Unsupported<Payment>;

    fn object_form(&self) -> Result<&Self> {
        Ok(self)
    }
}

fn decode(json: &str) -> Result<Option<Payment>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    from_deserializer(&PaymentForm::Untagged, &mut deserializer)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let card = decode(r#"{"kind": "card", "last4": "4242", "note": "ignored"}"#)?;
    println!("Decoded: {:?}", card);

    let transfer = decode(r#"{"kind": "transfer", "iban": "DE44500105175407324931", "days": 3}"#)?;
    println!("Decoded: {:?}", transfer);

    if let Some(transfer) = &transfer {
        println!("Written back:\n{}\n", to_string_pretty(&PaymentForm::Untagged, transfer)?);
    }

    match decode(r#"{"kind": "transfer", "iban": "X", "days": 90}"#) {
        Ok(_) => println!("Unexpectedly accepted 90 days"),
        Err(e) => println!("Rejected: {}", e),
    }

    match decode(r#"{"last4": "4242", "kind": "card"}"#) {
        Ok(_) => println!("Unexpectedly accepted an untagged prefix"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
