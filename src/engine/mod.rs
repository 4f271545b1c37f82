// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The resolve -> convert -> invoke pipeline.
//!
//! One [`InvocationRequest`] walks the stages
//! `Requested -> TargetResolved -> OperationResolved -> ArgumentsConverted -> Invoked`.
//! Any stage may stop the walk with its [`InvokeError`]; nothing is retried and
//! the operation never runs with partially converted arguments.
//!
//! # Example
//! ```
//! use invoke_shell::engine::{Engine, InvocationRequest, Value};
//! use invoke_shell::registry::Registry;
//! use invoke_shell::targets::SampleClass;
//!
//! let registry = Registry::builder().register::<SampleClass>().build();
//! let engine = Engine::new(registry);
//!
//! let request = InvocationRequest::new(
//!     "SampleClass",
//!     "MethodWithOneParameter",
//!     vec!["hi".to_string()],
//! );
//! let invocation = engine.invoke(&request).unwrap();
//! assert_eq!(
//!     invocation.returned,
//!     Some(Value::Text("MethodWithOneParameter called with parameter: hi".to_string()))
//! );
//! ```

pub mod converter;
pub mod invoker;
pub mod resolver;
pub mod value;

pub use converter::{ArgumentConverter, ConversionPolicy};
pub use invoker::Invoker;
pub use resolver::Resolver;
pub use value::{Arguments, CustomValue, Value};

use std::fmt;
use std::time::Instant;

use crate::errors::InvokeError;
use crate::observability::messages::engine::{
    InvocationCompleted, InvocationFailed, InvocationStarted, StageReached,
};
use crate::observability::messages::StructuredLog;
use crate::registry::Registry;

/// One request from the shell. Built per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub target: String,
    pub operation: String,
    pub arguments: Vec<String>,
}

impl InvocationRequest {
    pub fn new(
        target: impl Into<String>,
        operation: impl Into<String>,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            target: target.into(),
            operation: operation.into(),
            arguments,
        }
    }
}

/// Record of a successful invocation.
///
/// Names are the registered spellings, not the spellings in the request.
#[derive(Debug)]
pub struct Invocation {
    pub target: String,
    pub operation: String,
    pub arguments: Arguments,
    /// Whatever the operation chose to return. Presentation is up to the caller.
    pub returned: Option<Value>,
}

/// Stages of the per-invocation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStage {
    Requested,
    TargetResolved,
    OperationResolved,
    ArgumentsConverted,
    Invoked,
}

impl fmt::Display for InvocationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvocationStage::Requested => "Requested",
            InvocationStage::TargetResolved => "TargetResolved",
            InvocationStage::OperationResolved => "OperationResolved",
            InvocationStage::ArgumentsConverted => "ArgumentsConverted",
            InvocationStage::Invoked => "Invoked",
        };
        f.write_str(name)
    }
}

/// Owns the registry snapshot and runs requests through the pipeline.
#[derive(Debug, Default)]
pub struct Engine {
    registry: Registry,
    converter: ArgumentConverter,
    invoker: Invoker,
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self::with_policy(registry, ConversionPolicy::default())
    }

    pub fn with_policy(registry: Registry, policy: ConversionPolicy) -> Self {
        Self {
            registry,
            converter: ArgumentConverter::new(policy),
            invoker: Invoker::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry)
    }

    /// Run one request to completion. Attempted exactly once.
    pub fn invoke(&self, request: &InvocationRequest) -> Result<Invocation, InvokeError> {
        let started = InvocationStarted {
            target: &request.target,
            operation: &request.operation,
            argument_count: request.arguments.len(),
        };
        let span = started.span("invoke");
        let _guard = span.enter();
        started.log();

        let start_time = Instant::now();
        let result = self.run(request);

        match &result {
            Ok(invocation) => InvocationCompleted {
                target: &invocation.target,
                operation: &invocation.operation,
                returned_value: invocation.returned.is_some(),
                duration: start_time.elapsed(),
            }
            .log(),
            Err(e) => InvocationFailed {
                target: &request.target,
                operation: &request.operation,
                kind: &e.kind().to_string(),
                error: e,
            }
            .log(),
        }

        result
    }

    fn run(&self, request: &InvocationRequest) -> Result<Invocation, InvokeError> {
        let stage = |stage: InvocationStage| {
            StageReached {
                stage: &stage.to_string(),
                target: &request.target,
                operation: &request.operation,
            }
            .log()
        };

        stage(InvocationStage::Requested);
        let resolver = self.resolver();

        let target = resolver.target(&request.target)?;
        stage(InvocationStage::TargetResolved);

        let operation = resolver.operation(target, &request.operation)?;
        stage(InvocationStage::OperationResolved);

        let arguments = self.converter.convert(operation, &request.arguments)?;
        stage(InvocationStage::ArgumentsConverted);

        let returned = self.invoker.invoke(target, operation, &arguments)?;
        stage(InvocationStage::Invoked);

        Ok(Invocation {
            target: target.name().to_string(),
            operation: operation.name().to_string(),
            arguments,
            returned,
        })
    }
}
