// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::value::DATE_TIME_DISPLAY_FORMAT;
use crate::engine::Value;
use crate::errors::ConstructionError;
use crate::registry::{Operations, ParameterDescriptor};
use crate::traits::Target;

/// Sample target - one operation per arity, each echoing its arguments
pub struct SampleClass;

impl Target for SampleClass {
    const NAME: &'static str = "SampleClass";

    fn construct() -> Result<Self, ConstructionError> {
        Ok(Self)
    }

    fn declare(operations: &mut Operations<Self>) {
        operations
            .operation("MethodWithoutParameters", [], |_, _| {
                Ok(Some(Value::Text("MethodWithoutParameters called".to_string())))
            })
            .operation(
                "MethodWithOneParameter",
                [ParameterDescriptor::text("str")],
                |_, args| {
                    Ok(Some(Value::Text(format!(
                        "MethodWithOneParameter called with parameter: {}",
                        args.text(0)?
                    ))))
                },
            )
            .operation(
                "MethodWithMultipleParameters",
                [
                    ParameterDescriptor::text("str"),
                    ParameterDescriptor::integer("num"),
                    ParameterDescriptor::date_time("date"),
                ],
                |_, args| {
                    Ok(Some(Value::Text(format!(
                        "MethodWithMultipleParameters called with parameters: {}, {}, {}",
                        args.text(0)?,
                        args.integer(1)?,
                        args.date_time(2)?.format(DATE_TIME_DISPLAY_FORMAT)
                    ))))
                },
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{SemanticType, TargetDescriptor};

    #[test]
    fn test_declared_operations_in_order() {
        let descriptor = TargetDescriptor::of::<SampleClass>();
        let signatures: Vec<(&str, Vec<SemanticType>)> = descriptor
            .operations()
            .iter()
            .map(|op| {
                (
                    op.name(),
                    op.parameters().iter().map(|p| *p.semantic_type()).collect(),
                )
            })
            .collect();

        assert_eq!(
            signatures,
            vec![
                ("MethodWithoutParameters", vec![]),
                ("MethodWithOneParameter", vec![SemanticType::Text]),
                (
                    "MethodWithMultipleParameters",
                    vec![SemanticType::Text, SemanticType::Integer, SemanticType::DateTime]
                ),
            ]
        );
    }
}
