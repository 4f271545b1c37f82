// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed argument values and the positional argument list handed to operations.

use std::any::Any;
use std::fmt;

use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;

/// Display format used for date/time values.
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A value produced by parsing a custom-typed argument.
///
/// Keeps the raw text alongside the parsed value so it can be displayed
/// without knowing the concrete type.
pub struct CustomValue {
    type_name: &'static str,
    raw: String,
    value: Box<dyn Any>,
}

impl CustomValue {
    pub fn new(type_name: &'static str, raw: impl Into<String>, value: Box<dyn Any>) -> Self {
        Self {
            type_name,
            raw: raw.into(),
            value,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("type_name", &self.type_name)
            .field("raw", &self.raw)
            .finish()
    }
}

/// A converted argument or an operation's returned value.
#[derive(Debug)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    Custom(CustomValue),
}

impl Value {
    /// Semantic type name of the held value, as shown in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::DateTime(_) => "datetime",
            Value::Custom(custom) => custom.type_name(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => {
                a.type_name == b.type_name && a.raw == b.raw
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Integer(number) => write!(f, "{}", number),
            Value::Float(number) => write!(f, "{}", number),
            Value::Boolean(flag) => write!(f, "{}", flag),
            Value::DateTime(date_time) => {
                write!(f, "{}", date_time.format(DATE_TIME_DISPLAY_FORMAT))
            }
            Value::Custom(custom) => f.write_str(custom.raw()),
        }
    }
}

/// Fully converted positional arguments for one invocation.
///
/// The typed accessors fail rather than panic so an operation body can use `?`.
#[derive(Debug, Default, PartialEq)]
pub struct Arguments(Vec<Value>);

impl Arguments {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    fn require(&self, index: usize) -> Result<&Value> {
        self.0
            .get(index)
            .ok_or_else(|| anyhow!("argument {} is missing", index + 1))
    }

    fn mismatch(index: usize, value: &Value, expected: &str) -> anyhow::Error {
        anyhow!(
            "argument {} is {}, not {}",
            index + 1,
            value.kind_name(),
            expected
        )
    }

    pub fn text(&self, index: usize) -> Result<&str> {
        match self.require(index)? {
            Value::Text(text) => Ok(text.as_str()),
            other => Err(Self::mismatch(index, other, "text")),
        }
    }

    pub fn integer(&self, index: usize) -> Result<i64> {
        match self.require(index)? {
            Value::Integer(number) => Ok(*number),
            other => Err(Self::mismatch(index, other, "integer")),
        }
    }

    pub fn float(&self, index: usize) -> Result<f64> {
        match self.require(index)? {
            Value::Float(number) => Ok(*number),
            other => Err(Self::mismatch(index, other, "float")),
        }
    }

    pub fn boolean(&self, index: usize) -> Result<bool> {
        match self.require(index)? {
            Value::Boolean(flag) => Ok(*flag),
            other => Err(Self::mismatch(index, other, "boolean")),
        }
    }

    pub fn date_time(&self, index: usize) -> Result<NaiveDateTime> {
        match self.require(index)? {
            Value::DateTime(date_time) => Ok(*date_time),
            other => Err(Self::mismatch(index, other, "datetime")),
        }
    }

    /// Borrow a custom-typed argument as its concrete type.
    pub fn custom<T: 'static>(&self, index: usize) -> Result<&T> {
        let value = self.require(index)?;
        match value {
            Value::Custom(custom) => custom.downcast_ref::<T>().ok_or_else(|| {
                anyhow!(
                    "argument {} holds a '{}', not the requested type",
                    index + 1,
                    custom.type_name()
                )
            }),
            other => Err(Self::mismatch(index, other, std::any::type_name::<T>())),
        }
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_typed_accessors() {
        let args = Arguments::new(vec![
            Value::Text("hello".to_string()),
            Value::Integer(42),
            Value::Float(1.5),
            Value::Boolean(true),
            Value::DateTime(midnight(2024, 1, 1)),
            Value::Custom(CustomValue::new("Celsius", "21", Box::new(21u8))),
        ]);

        assert_eq!(args.len(), 6);
        assert_eq!(args.text(0).unwrap(), "hello");
        assert_eq!(args.integer(1).unwrap(), 42);
        assert_eq!(args.float(2).unwrap(), 1.5);
        assert!(args.boolean(3).unwrap());
        assert_eq!(args.date_time(4).unwrap(), midnight(2024, 1, 1));
        assert_eq!(*args.custom::<u8>(5).unwrap(), 21);
    }

    #[test]
    fn test_accessor_mismatch_and_missing() {
        let args = Arguments::new(vec![Value::Text("hello".to_string())]);

        let err = args.integer(0).unwrap_err();
        assert_eq!(err.to_string(), "argument 1 is text, not integer");

        let err = args.text(3).unwrap_err();
        assert_eq!(err.to_string(), "argument 4 is missing");

        let custom = Arguments::new(vec![Value::Custom(CustomValue::new(
            "Celsius",
            "21",
            Box::new(21u8),
        ))]);
        assert!(custom.custom::<String>(0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Text("a b".to_string()).to_string(), "a b");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(
            Value::DateTime(midnight(2024, 1, 1)).to_string(),
            "2024-01-01 00:00:00"
        );
        assert_eq!(
            Value::Custom(CustomValue::new("Celsius", "21C", Box::new(21u8))).to_string(),
            "21C"
        );
    }
}
