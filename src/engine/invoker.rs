// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;

use crate::engine::{Arguments, Value};
use crate::errors::InvokeError;
use crate::registry::{OperationDescriptor, TargetDescriptor};

/// Performs one call on a freshly constructed target instance.
///
/// Instances are never pooled: each call builds its own and drops it before
/// returning, so no state survives between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invoker;

impl Invoker {
    pub fn new() -> Self {
        Self
    }

    /// Construct `target`, then call `operation` with `arguments` in order.
    ///
    /// Failures raised by the operation (an `Err` or a panic) and a failure to
    /// construct the instance (an `Err` or a panic) are reported as
    /// [`InvokeError::InvocationFailure`].
    pub fn invoke(
        &self,
        target: &TargetDescriptor,
        operation: &OperationDescriptor,
        arguments: &Arguments,
    ) -> Result<Option<Value>, InvokeError> {
        let failure = |source: anyhow::Error| InvokeError::InvocationFailure {
            target: target.name().to_string(),
            operation: operation.name().to_string(),
            source,
        };

        let mut instance = target.construct().map_err(|e| failure(e.into()))?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            operation.call(instance.as_mut(), arguments)
        }));

        match outcome {
            Ok(Ok(returned)) => Ok(returned),
            Ok(Err(source)) => Err(failure(source)),
            Err(payload) => Err(failure(anyhow!(
                "operation panicked: {}",
                panic_message(payload.as_ref())
            ))),
        }
    }
}

/// Text carried by a panic payload, when it has any.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}
