// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Raw string to typed value conversion.
//!
//! Conversion is a closed table keyed by [`SemanticType`]: each type has one
//! parse strategy and nothing falls back to a generic "change type" path.
//! A call converts every position or none; the first rejected position ends
//! the call and anything converted before it is dropped.

use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::consts::{BUILTIN_DATE_FORMATS, BUILTIN_DATE_TIME_FORMATS};
use crate::engine::{Arguments, CustomValue, Value};
use crate::errors::InvokeError;
use crate::observability::messages::{engine::ArgumentRejected, StructuredLog};
use crate::registry::{OperationDescriptor, SemanticType};

/// Tunables for the conversion table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionPolicy {
    /// Extra `chrono` format strings tried after the built-in date/time formats.
    pub date_time_formats: Vec<String>,
}

/// Maps raw argument strings to typed values, one per declared parameter.
#[derive(Debug, Clone, Default)]
pub struct ArgumentConverter {
    policy: ConversionPolicy,
}

impl ArgumentConverter {
    pub fn new(policy: ConversionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ConversionPolicy {
        &self.policy
    }

    /// Convert `raw` against `operation`'s parameters.
    ///
    /// The count is checked before any position is parsed.
    pub fn convert(
        &self,
        operation: &OperationDescriptor,
        raw: &[String],
    ) -> Result<Arguments, InvokeError> {
        let parameters = operation.parameters();
        if raw.len() != parameters.len() {
            return Err(InvokeError::ArgumentCountMismatch {
                operation: operation.name().to_string(),
                expected: parameters.len(),
                actual: raw.len(),
            });
        }

        let mut values = Vec::with_capacity(parameters.len());
        for (index, (parameter, raw_value)) in parameters.iter().zip(raw).enumerate() {
            let semantic_type = parameter.semantic_type();
            match self.convert_value(semantic_type, raw_value) {
                Ok(value) => values.push(value),
                Err(reason) => {
                    ArgumentRejected {
                        parameter: parameter.name(),
                        semantic_type: semantic_type.name(),
                        value: raw_value,
                        reason: &reason,
                    }
                    .log();

                    return Err(InvokeError::ArgumentConversionError {
                        parameter: parameter.name().to_string(),
                        position: index + 1,
                        semantic_type: semantic_type.name().to_string(),
                        value: raw_value.clone(),
                        reason,
                    });
                }
            }
        }

        Ok(Arguments::new(values))
    }

    /// Parse one raw string using the strategy for `semantic_type`.
    pub fn convert_value(&self, semantic_type: &SemanticType, raw: &str) -> Result<Value, String> {
        match *semantic_type {
            SemanticType::Text => Ok(Value::Text(raw.to_string())),
            SemanticType::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| e.to_string()),
            SemanticType::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| e.to_string()),
            SemanticType::Boolean => parse_boolean(raw).map(Value::Boolean),
            SemanticType::DateTime => self.parse_date_time(raw).map(Value::DateTime),
            SemanticType::Custom { type_name, parse } => {
                let parse = parse.ok_or_else(|| {
                    format!("type '{}' has no parse-from-text entry point", type_name)
                })?;
                parse(raw).map(|value| Value::Custom(CustomValue::new(type_name, raw, value)))
            }
        }
    }

    fn parse_date_time(&self, raw: &str) -> Result<NaiveDateTime, String> {
        if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
            return Ok(date_time.naive_local());
        }

        for format in BUILTIN_DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(date_time);
            }
        }
        for format in BUILTIN_DATE_FORMATS {
            if let Some(date_time) = parse_date_at_midnight(raw, format) {
                return Ok(date_time);
            }
        }

        for format in &self.policy.date_time_formats {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(date_time);
            }
            // A format naming any time of day must parse as a full date/time;
            // `NaiveDate` would accept and then drop those fields.
            if !time_fields(format).any {
                if let Some(date_time) = parse_date_at_midnight(raw, format) {
                    return Ok(date_time);
                }
            }
        }

        Err("not a recognized date/time (expected e.g. 2024-01-01 or 2024-01-01T09:30:00)"
            .to_string())
    }
}

fn parse_date_at_midnight(raw: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(raw, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Time-of-day fields named by a `chrono` format string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TimeFields {
    /// Any hour, minute, second, fraction, AM/PM or timestamp field
    pub any: bool,
    pub hour: bool,
    pub minute: bool,
}

pub(crate) fn time_fields(format: &str) -> TimeFields {
    let mut fields = TimeFields::default();
    for item in StrftimeItems::new(format) {
        match item {
            Item::Numeric(Numeric::Hour | Numeric::Hour12, _) => {
                fields.any = true;
                fields.hour = true;
            }
            Item::Numeric(Numeric::Minute, _) => {
                fields.any = true;
                fields.minute = true;
            }
            Item::Numeric(Numeric::Timestamp, _) => {
                fields.any = true;
                fields.hour = true;
                fields.minute = true;
            }
            Item::Numeric(Numeric::Second | Numeric::Nanosecond, _)
            | Item::Fixed(
                Fixed::LowerAmPm
                | Fixed::UpperAmPm
                | Fixed::Nanosecond
                | Fixed::Nanosecond3
                | Fixed::Nanosecond6
                | Fixed::Nanosecond9,
            ) => fields.any = true,
            _ => {}
        }
    }
    fields
}

fn parse_boolean(raw: &str) -> Result<bool, String> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err("expected 'true' or 'false'".to_string())
    }
}
