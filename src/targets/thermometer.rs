// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::engine::value::DATE_TIME_DISPLAY_FORMAT;
use crate::engine::Value;
use crate::errors::ConstructionError;
use crate::registry::{Operations, ParameterDescriptor};
use crate::traits::Target;

/// A temperature reading with its scale, written as `21.5C`, `70F` or `300K`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    Celsius(f64),
    Fahrenheit(f64),
    Kelvin(f64),
}

impl Temperature {
    pub fn to_celsius(self) -> f64 {
        match self {
            Temperature::Celsius(c) => c,
            Temperature::Fahrenheit(f) => (f - 32.0) * 5.0 / 9.0,
            Temperature::Kelvin(k) => k - 273.15,
        }
    }

    pub fn to_fahrenheit(self) -> f64 {
        match self {
            Temperature::Fahrenheit(f) => f,
            other => other.to_celsius() * 9.0 / 5.0 + 32.0,
        }
    }
}

impl FromStr for Temperature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scale = s
            .chars()
            .last()
            .ok_or_else(|| "empty temperature".to_string())?;
        let magnitude = &s[..s.len() - scale.len_utf8()];
        let value: f64 = magnitude
            .parse()
            .map_err(|_| format!("'{}' is not a number", magnitude))?;

        match scale.to_ascii_uppercase() {
            'C' => Ok(Temperature::Celsius(value)),
            'F' => Ok(Temperature::Fahrenheit(value)),
            'K' if value < 0.0 => Err(format!("{}K is below absolute zero", value)),
            'K' => Ok(Temperature::Kelvin(value)),
            other => Err(format!("unknown scale '{}' (expected C, F or K)", other)),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Celsius(v) => write!(f, "{}C", v),
            Temperature::Fahrenheit(v) => write!(f, "{}F", v),
            Temperature::Kelvin(v) => write!(f, "{}K", v),
        }
    }
}

/// Thermometer target - exercises custom-typed parameters
pub struct Thermometer;

impl Target for Thermometer {
    const NAME: &'static str = "Thermometer";

    fn construct() -> Result<Self, ConstructionError> {
        Ok(Self)
    }

    fn declare(operations: &mut Operations<Self>) {
        operations
            .operation(
                "ToCelsius",
                [ParameterDescriptor::custom::<Temperature>("reading", "Temperature")],
                |_, args| {
                    let reading = args.custom::<Temperature>(0)?;
                    Ok(Some(Value::Float(reading.to_celsius())))
                },
            )
            .operation(
                "ToFahrenheit",
                [ParameterDescriptor::custom::<Temperature>("reading", "Temperature")],
                |_, args| {
                    let reading = args.custom::<Temperature>(0)?;
                    Ok(Some(Value::Float(reading.to_fahrenheit())))
                },
            )
            .operation(
                "Record",
                [
                    ParameterDescriptor::custom::<Temperature>("reading", "Temperature"),
                    ParameterDescriptor::date_time("at"),
                ],
                |_, args| {
                    let reading = args.custom::<Temperature>(0)?;
                    if reading.to_celsius().is_nan() {
                        bail!("reading is not a number");
                    }
                    Ok(Some(Value::Text(format!(
                        "Recorded {} at {}",
                        reading,
                        args.date_time(1)?.format(DATE_TIME_DISPLAY_FORMAT)
                    ))))
                },
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_table_driven() {
        struct TestCase {
            input: &'static str,
            expected: Result<Temperature, ()>,
        }

        let test_cases = vec![
            TestCase { input: "21.5C", expected: Ok(Temperature::Celsius(21.5)) },
            TestCase { input: "70f", expected: Ok(Temperature::Fahrenheit(70.0)) },
            TestCase { input: "300K", expected: Ok(Temperature::Kelvin(300.0)) },
            TestCase { input: "-40C", expected: Ok(Temperature::Celsius(-40.0)) },
            TestCase { input: "-1K", expected: Err(()) },
            TestCase { input: "21.5Q", expected: Err(()) },
            TestCase { input: "C", expected: Err(()) },
            TestCase { input: "", expected: Err(()) },
            TestCase { input: "warmC", expected: Err(()) },
        ];

        for test_case in test_cases {
            let actual = test_case.input.parse::<Temperature>().map_err(|_| ());
            assert_eq!(actual, test_case.expected, "input '{}'", test_case.input);
        }
    }

    #[test]
    fn test_scale_conversions() {
        assert_eq!(Temperature::Fahrenheit(212.0).to_celsius(), 100.0);
        assert_eq!(Temperature::Celsius(-40.0).to_fahrenheit(), -40.0);
        assert!((Temperature::Kelvin(273.15).to_celsius()).abs() < 1e-9);
    }

    #[test]
    fn test_display_matches_input_form() {
        assert_eq!(Temperature::Celsius(21.5).to_string(), "21.5C");
        assert_eq!(Temperature::Kelvin(300.0).to_string(), "300K");
    }
}
