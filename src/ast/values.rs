use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A typed literal value in a query.
///
/// Values are rendered inline by the dialect layer, with product-specific
/// quoting and date/time literal syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value<'a> {
    /// The SQL `NULL`.
    Null,
    /// A boolean literal.
    Boolean(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating point number.
    Double(f64),
    /// A string literal.
    Text(Cow<'a, str>),
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day without a date part.
    Time(NaiveTime),
    /// A date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl<'a> Value<'a> {
    /// Creates a new string literal.
    pub fn text(value: impl Into<Cow<'a, str>>) -> Self {
        Value::Text(value.into())
    }

    /// `true` if the value is the SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string content, if the value is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Converts the borrowed content into an owned value.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(b),
            Value::Integer(i) => Value::Integer(i),
            Value::Double(d) => Value::Double(d),
            Value::Text(text) => Value::Text(Cow::Owned(text.into_owned())),
            Value::Date(d) => Value::Date(d),
            Value::Time(t) => Value::Time(t),
            Value::DateTime(dt) => Value::DateTime(dt),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Text(value.into())
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<NaiveDate> for Value<'_> {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveTime> for Value<'_> {
    fn from(value: NaiveTime) -> Self {
        Value::Time(value)
    }
}

impl From<DateTime<Utc>> for Value<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}
