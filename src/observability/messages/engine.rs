// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the invocation pipeline.
//!
//! This module contains message types for logging events related to:
//! * Invocation lifecycle (start, completion, failure)
//! * State machine transitions between pipeline stages
//! * Argument conversion failures
//! * Panics captured by the quiet panic hook

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An invocation request entered the pipeline.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use invoke_shell::observability::messages::engine::InvocationStarted;
///
/// let msg = InvocationStarted {
///     target: "SampleClass",
///     operation: "MethodWithOneParameter",
///     argument_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InvocationStarted<'a> {
    pub target: &'a str,
    pub operation: &'a str,
    pub argument_count: usize,
}

impl Display for InvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invoking '{}.{}' with {} raw argument(s)",
            self.target, self.operation, self.argument_count
        )
    }
}

impl StructuredLog for InvocationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            operation = self.operation,
            argument_count = self.argument_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation",
            span_name = name,
            target_name = self.target,
            operation = self.operation,
            argument_count = self.argument_count,
        )
    }
}

/// The per-invocation state machine moved to a new stage.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct StageReached<'a> {
    pub stage: &'a str,
    pub target: &'a str,
    pub operation: &'a str,
}

impl Display for StageReached<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}.{}' reached stage {}",
            self.target, self.operation, self.stage
        )
    }
}

impl StructuredLog for StageReached<'_> {
    fn log(&self) {
        tracing::debug!(
            stage = self.stage,
            target_name = self.target,
            operation = self.operation,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage",
            span_name = name,
            stage = self.stage,
            target_name = self.target,
            operation = self.operation,
        )
    }
}

/// A raw argument was rejected by its parameter's parser.
///
/// # Log Level
/// `warn!` - Caller error, reported back to the user
///
/// # Example
/// ```
/// use invoke_shell::observability::messages::engine::ArgumentRejected;
///
/// let msg = ArgumentRejected {
///     parameter: "num",
///     semantic_type: "integer",
///     value: "notanumber",
///     reason: "invalid digit found in string",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Argument 'num' rejected 'notanumber' as integer: invalid digit found in string"
/// );
/// ```
pub struct ArgumentRejected<'a> {
    pub parameter: &'a str,
    pub semantic_type: &'a str,
    pub value: &'a str,
    pub reason: &'a str,
}

impl Display for ArgumentRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Argument '{}' rejected '{}' as {}: {}",
            self.parameter, self.value, self.semantic_type, self.reason
        )
    }
}

impl StructuredLog for ArgumentRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            parameter = self.parameter,
            semantic_type = self.semantic_type,
            value = self.value,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "argument_rejected",
            span_name = name,
            parameter = self.parameter,
            semantic_type = self.semantic_type,
        )
    }
}

/// Invocation finished without a failure.
///
/// # Log Level
/// `info!` - Important operational event
pub struct InvocationCompleted<'a> {
    pub target: &'a str,
    pub operation: &'a str,
    pub returned_value: bool,
    pub duration: std::time::Duration,
}

impl Display for InvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}.{}' completed in {:?} (returned value: {})",
            self.target, self.operation, self.duration, self.returned_value
        )
    }
}

impl StructuredLog for InvocationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            operation = self.operation,
            returned_value = self.returned_value,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation_completed",
            span_name = name,
            target_name = self.target,
            operation = self.operation,
            duration = ?self.duration,
        )
    }
}

/// Invocation stopped with one of the failure kinds.
///
/// # Log Level
/// `warn!` - The failure is reported to the user by the shell
///
/// # Example
/// ```
/// use invoke_shell::observability::messages::engine::InvocationFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "division by zero");
/// let msg = InvocationFailed {
///     target: "Calculator",
///     operation: "Divide",
///     kind: "InvocationFailure",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct InvocationFailed<'a> {
    pub target: &'a str,
    pub operation: &'a str,
    pub kind: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}.{}' failed with {}: {}",
            self.target, self.operation, self.kind, self.error
        )
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            target_name = self.target,
            operation = self.operation,
            kind = self.kind,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "invocation_failed",
            span_name = name,
            target_name = self.target,
            operation = self.operation,
            kind = self.kind,
        )
    }
}

/// A panic was raised and handed to the quiet panic hook.
///
/// The panic itself is reported to the user as an invocation failure; this
/// event keeps the location for diagnostics only.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct PanicCaptured<'a> {
    pub message: &'a str,
    pub location: Option<&'a str>,
}

impl Display for PanicCaptured<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "Panic captured at {}: {}", location, self.message),
            None => write!(f, "Panic captured: {}", self.message),
        }
    }
}

impl StructuredLog for PanicCaptured<'_> {
    fn log(&self) {
        tracing::debug!(
            message_text = self.message,
            location = self.location.unwrap_or("<unknown>"),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "panic_captured",
            span_name = name,
            location = self.location.unwrap_or("<unknown>"),
        )
    }
}
