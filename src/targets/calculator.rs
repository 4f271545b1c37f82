// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::bail;

use crate::engine::Value;
use crate::errors::ConstructionError;
use crate::registry::{Operations, ParameterDescriptor};
use crate::traits::Target;

/// Calculator target - numeric operations, including one that can fail
pub struct Calculator;

impl Target for Calculator {
    const NAME: &'static str = "Calculator";

    fn construct() -> Result<Self, ConstructionError> {
        Ok(Self)
    }

    fn declare(operations: &mut Operations<Self>) {
        operations
            .operation(
                "Add",
                [ParameterDescriptor::float("a"), ParameterDescriptor::float("b")],
                |_, args| Ok(Some(Value::Float(args.float(0)? + args.float(1)?))),
            )
            .operation(
                "Divide",
                [
                    ParameterDescriptor::integer("dividend"),
                    ParameterDescriptor::integer("divisor"),
                ],
                |_, args| {
                    let dividend = args.integer(0)?;
                    let divisor = args.integer(1)?;
                    if divisor == 0 {
                        bail!("division by zero");
                    }
                    match dividend.checked_div(divisor) {
                        Some(quotient) => Ok(Some(Value::Integer(quotient))),
                        None => bail!("{} / {} overflows", dividend, divisor),
                    }
                },
            )
            .operation(
                "Round",
                [ParameterDescriptor::float("value"), ParameterDescriptor::boolean("up")],
                |_, args| {
                    let value = args.float(0)?;
                    let rounded = if args.boolean(1)? { value.ceil() } else { value.floor() };
                    // 2^63 itself is out of range; -2^63 is i64::MIN.
                    if !(i64::MIN as f64..i64::MAX as f64).contains(&rounded) {
                        bail!("{} does not fit in an integer", value);
                    }
                    Ok(Some(Value::Integer(rounded as i64)))
                },
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, InvocationRequest};
    use crate::errors::ErrorKind;
    use crate::registry::Registry;

    fn invoke(operation: &str, arguments: &[&str]) -> Result<Option<Value>, ErrorKind> {
        let engine = Engine::new(Registry::builder().register::<Calculator>().build());
        engine
            .invoke(&InvocationRequest::new(
                "Calculator",
                operation,
                arguments.iter().map(|a| a.to_string()).collect(),
            ))
            .map(|invocation| invocation.returned)
            .map_err(|e| e.kind())
    }

    #[test]
    fn test_calculator_table_driven() {
        struct TestCase {
            name: &'static str,
            operation: &'static str,
            arguments: Vec<&'static str>,
            expected: Result<Option<Value>, ErrorKind>,
        }

        let test_cases = vec![
            TestCase { name: "add", operation: "Add", arguments: vec!["1.5", "2"], expected: Ok(Some(Value::Float(3.5))) },
            TestCase { name: "add negative", operation: "Add", arguments: vec!["-1", "-2"], expected: Ok(Some(Value::Float(-3.0))) },
            TestCase { name: "divide", operation: "Divide", arguments: vec!["7", "2"], expected: Ok(Some(Value::Integer(3))) },
            TestCase { name: "divide by zero", operation: "Divide", arguments: vec!["7", "0"], expected: Err(ErrorKind::InvocationFailure) },
            TestCase { name: "divide overflow", operation: "Divide", arguments: vec!["-9223372036854775808", "-1"], expected: Err(ErrorKind::InvocationFailure) },
            TestCase { name: "round up", operation: "Round", arguments: vec!["2.1", "true"], expected: Ok(Some(Value::Integer(3))) },
            TestCase { name: "round down", operation: "Round", arguments: vec!["2.9", "FALSE"], expected: Ok(Some(Value::Integer(2))) },
            TestCase { name: "round infinity", operation: "Round", arguments: vec!["inf", "true"], expected: Err(ErrorKind::InvocationFailure) },
            TestCase { name: "round just past i64 range", operation: "Round", arguments: vec!["9223372036854775808", "true"], expected: Err(ErrorKind::InvocationFailure) },
            TestCase { name: "round i64 minimum", operation: "Round", arguments: vec!["-9223372036854775808", "false"], expected: Ok(Some(Value::Integer(i64::MIN))) },
            TestCase { name: "round bad flag", operation: "Round", arguments: vec!["2.1", "yes"], expected: Err(ErrorKind::ArgumentConversionError) },
        ];

        for test_case in test_cases {
            let actual = invoke(test_case.operation, &test_case.arguments);
            assert_eq!(actual, test_case.expected, "Test case '{}'", test_case.name);
        }
    }
}
