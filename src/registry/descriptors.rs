// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Immutable descriptors for targets, operations and parameters.
//!
//! Descriptors are produced once, while the registry is built, from each
//! [`Target`]'s declarations. Nothing mutates them afterwards: fields are
//! private and only exposed through read accessors.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use anyhow::anyhow;

use crate::engine::invoker::panic_message;
use crate::engine::{Arguments, Value};
use crate::errors::ConstructionError;
use crate::observability::messages::{registry::DuplicateOperationIgnored, StructuredLog};
use crate::traits::Target;

use super::same_name;

/// Entry point that parses raw text into a custom-typed value.
pub type ParseFn = fn(&str) -> Result<Box<dyn Any>, String>;

/// What an operation returns: an optional value, or the failure it raised.
pub type OperationResult = anyhow::Result<Option<Value>>;

type Factory = Box<dyn Fn() -> Result<Box<dyn Any>, ConstructionError>>;
type Callable = Box<dyn Fn(&mut dyn Any, &Arguments) -> OperationResult>;

/// The abstract type governing how a raw string is parsed.
#[derive(Clone, Copy)]
pub enum SemanticType {
    Text,
    Integer,
    Float,
    Boolean,
    DateTime,
    /// A type parsed through its own entry point. `parse` is `None` when the
    /// type offers no way to be built from text.
    Custom {
        type_name: &'static str,
        parse: Option<ParseFn>,
    },
}

impl SemanticType {
    pub fn name(&self) -> &'static str {
        match self {
            SemanticType::Text => "text",
            SemanticType::Integer => "integer",
            SemanticType::Float => "float",
            SemanticType::Boolean => "boolean",
            SemanticType::DateTime => "datetime",
            SemanticType::Custom { type_name, .. } => *type_name,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Custom { type_name, parse } => f
                .debug_struct("Custom")
                .field("type_name", type_name)
                .field("parseable", &parse.is_some())
                .finish(),
            other => f.write_str(other.name()),
        }
    }
}

impl PartialEq for SemanticType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                SemanticType::Custom { type_name: a, parse: pa },
                SemanticType::Custom { type_name: b, parse: pb },
            ) => a == b && pa.is_some() == pb.is_some(),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

fn parse_from_str<T>(raw: &str) -> Result<Box<dyn Any>, String>
where
    T: FromStr + 'static,
    T::Err: fmt::Display,
{
    raw.parse::<T>()
        .map(|value| Box::new(value) as Box<dyn Any>)
        .map_err(|e| e.to_string())
}

/// A single positional parameter. The name is only used in diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    semantic_type: SemanticType,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Text)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Integer)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Float)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Boolean)
    }

    pub fn date_time(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::DateTime)
    }

    /// A custom-typed parameter parsed through `T`'s [`FromStr`].
    pub fn custom<T>(name: impl Into<String>, type_name: &'static str) -> Self
    where
        T: FromStr + 'static,
        T::Err: fmt::Display,
    {
        Self::new(
            name,
            SemanticType::Custom {
                type_name,
                parse: Some(parse_from_str::<T>),
            },
        )
    }

    /// A custom-typed parameter with no parse entry point.
    ///
    /// Every conversion attempt for it fails.
    pub fn opaque(name: impl Into<String>, type_name: &'static str) -> Self {
        Self::new(
            name,
            SemanticType::Custom {
                type_name,
                parse: None,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semantic_type(&self) -> &SemanticType {
        &self.semantic_type
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.semantic_type)
    }
}

/// A named operation, its ordered parameters, and the callable bound to it.
pub struct OperationDescriptor {
    name: String,
    parameters: Vec<ParameterDescriptor>,
    callable: Callable,
}

impl OperationDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Run the operation against a target instance.
    pub(crate) fn call(&self, instance: &mut dyn Any, arguments: &Arguments) -> OperationResult {
        (self.callable)(instance, arguments)
    }
}

impl fmt::Debug for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Collects the operations a [`Target`] declares.
///
/// Handed to [`Target::declare`]; each declared closure receives the concrete
/// target type, never a type-erased instance.
pub struct Operations<T> {
    target: &'static str,
    descriptors: Vec<OperationDescriptor>,
    _target: PhantomData<fn(&mut T)>,
}

impl<T: 'static> Operations<T> {
    pub(crate) fn new(target: &'static str) -> Self {
        Self {
            target,
            descriptors: Vec::new(),
            _target: PhantomData,
        }
    }

    /// Declare an operation.
    ///
    /// A name that matches an already declared operation (ignoring case) is
    /// dropped with a warning; the first declaration wins.
    pub fn operation<P, F>(&mut self, name: &str, parameters: P, call: F) -> &mut Self
    where
        P: IntoIterator<Item = ParameterDescriptor>,
        F: Fn(&mut T, &Arguments) -> OperationResult + 'static,
    {
        if self.descriptors.iter().any(|op| same_name(&op.name, name)) {
            DuplicateOperationIgnored {
                target: self.target,
                operation: name,
            }
            .log();
            return self;
        }

        let target = self.target;
        let callable: Callable = Box::new(move |instance, arguments| {
            let instance = instance
                .downcast_mut::<T>()
                .ok_or_else(|| anyhow!("instance is not a '{}'", target))?;
            call(instance, arguments)
        });

        self.descriptors.push(OperationDescriptor {
            name: name.to_string(),
            parameters: parameters.into_iter().collect(),
            callable,
        });
        self
    }

    pub(crate) fn into_descriptors(self) -> Vec<OperationDescriptor> {
        self.descriptors
    }
}

/// A registered target: its name, its operations, and how to build an instance.
pub struct TargetDescriptor {
    name: String,
    operations: Vec<OperationDescriptor>,
    factory: Factory,
}

impl TargetDescriptor {
    /// Describe `T` from its declarations.
    pub fn of<T: Target>() -> Self {
        let mut operations = Operations::<T>::new(T::NAME);
        T::declare(&mut operations);

        Self {
            name: T::NAME.to_string(),
            operations: operations.into_descriptors(),
            factory: Box::new(|| T::construct().map(|target| Box::new(target) as Box<dyn Any>)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }

    /// Build a fresh instance. Every call yields a new, independent instance.
    ///
    /// A panic inside the target's constructor is reported as a
    /// [`ConstructionError`] rather than unwinding into the caller.
    pub(crate) fn construct(&self) -> Result<Box<dyn Any>, ConstructionError> {
        panic::catch_unwind(AssertUnwindSafe(|| (self.factory)())).unwrap_or_else(|payload| {
            Err(ConstructionError::new(
                &self.name,
                format!("construction panicked: {}", panic_message(payload.as_ref())),
            ))
        })
    }
}

impl fmt::Debug for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetDescriptor")
            .field("name", &self.name)
            .field("operations", &self.operations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Percent(u8);

    impl FromStr for Percent {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let digits = s
                .strip_suffix('%')
                .ok_or_else(|| format!("'{}' does not end with '%'", s))?;
            let value: u8 = digits.parse().map_err(|e| format!("{}", e))?;
            if value > 100 {
                return Err(format!("{} is above 100", value));
            }
            Ok(Percent(value))
        }
    }

    #[derive(Default)]
    struct Dial {
        turns: i64,
    }

    impl Target for Dial {
        const NAME: &'static str = "Dial";

        fn construct() -> Result<Self, ConstructionError> {
            Ok(Self::default())
        }

        fn declare(operations: &mut Operations<Self>) {
            operations
                .operation("Turn", [ParameterDescriptor::integer("by")], |dial, args| {
                    dial.turns += args.integer(0)?;
                    Ok(Some(Value::Integer(dial.turns)))
                })
                .operation("Reset", [], |dial, _| {
                    dial.turns = 0;
                    Ok(None)
                })
                .operation("turn", [], |_, _| Ok(None));
        }
    }

    #[test]
    fn test_semantic_type_names() {
        let test_cases = vec![
            (SemanticType::Text, "text"),
            (SemanticType::Integer, "integer"),
            (SemanticType::Float, "float"),
            (SemanticType::Boolean, "boolean"),
            (SemanticType::DateTime, "datetime"),
            (
                SemanticType::Custom {
                    type_name: "Percent",
                    parse: None,
                },
                "Percent",
            ),
        ];

        for (semantic_type, expected) in test_cases {
            assert_eq!(semantic_type.to_string(), expected);
        }
    }

    #[test]
    fn test_custom_parameter_uses_from_str() {
        let parameter = ParameterDescriptor::custom::<Percent>("level", "Percent");
        let parse = match parameter.semantic_type() {
            SemanticType::Custom { parse: Some(parse), .. } => *parse,
            other => panic!("expected a parseable custom type, got {:?}", other),
        };

        let parsed = parse("42%").unwrap();
        assert_eq!(parsed.downcast_ref::<Percent>(), Some(&Percent(42)));
        assert_eq!(parse("420%").unwrap_err(), "420 is above 100");
        assert!(parse("42").is_err());
    }

    #[test]
    fn test_opaque_parameter_has_no_entry_point() {
        let parameter = ParameterDescriptor::opaque("handle", "Handle");
        assert_eq!(
            parameter.semantic_type(),
            &SemanticType::Custom {
                type_name: "Handle",
                parse: None
            }
        );
        assert_eq!(parameter.to_string(), "handle: Handle");
    }

    #[test]
    fn test_target_descriptor_keeps_declaration_order() {
        let descriptor = TargetDescriptor::of::<Dial>();

        assert_eq!(descriptor.name(), "Dial");
        let names: Vec<&str> = descriptor.operations().iter().map(|op| op.name()).collect();
        // "turn" collides with "Turn" and is dropped
        assert_eq!(names, vec!["Turn", "Reset"]);
        assert_eq!(
            descriptor.operations()[0].parameters(),
            &[ParameterDescriptor::integer("by")]
        );
    }

    #[test]
    fn test_callable_runs_against_fresh_instances() {
        let descriptor = TargetDescriptor::of::<Dial>();
        let turn = &descriptor.operations()[0];
        let args = Arguments::new(vec![Value::Integer(3)]);

        for _ in 0..2 {
            let mut instance = descriptor.construct().unwrap();
            let result = turn.call(instance.as_mut(), &args).unwrap();
            assert_eq!(result, Some(Value::Integer(3)));
        }
    }

    #[test]
    fn test_callable_rejects_foreign_instance() {
        let descriptor = TargetDescriptor::of::<Dial>();
        let mut foreign: Box<dyn Any> = Box::new(String::from("not a dial"));

        let err = descriptor.operations()[1]
            .call(foreign.as_mut(), &Arguments::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "instance is not a 'Dial'");
    }
}
