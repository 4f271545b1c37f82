// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by a single invocation.
//!
//! Every failure the engine can produce is resolved to exactly one of the
//! variants below before it reaches the caller. Each variant carries the
//! offending name or value so the shell can report it without a retry.

use std::fmt;
use thiserror::Error;

/// The failure taxonomy, without payload.
///
/// Useful for matching in tests and for mapping to process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TargetNotFound,
    OperationNotFound,
    ArgumentCountMismatch,
    ArgumentConversionError,
    InvocationFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TargetNotFound => "TargetNotFound",
            ErrorKind::OperationNotFound => "OperationNotFound",
            ErrorKind::ArgumentCountMismatch => "ArgumentCountMismatch",
            ErrorKind::ArgumentConversionError => "ArgumentConversionError",
            ErrorKind::InvocationFailure => "InvocationFailure",
        };
        f.write_str(name)
    }
}

/// Error returned by the resolve -> convert -> invoke pipeline.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// No registered target matches the requested name.
    #[error("Target '{name}' not found")]
    TargetNotFound { name: String },

    /// The resolved target has no operation with the requested name.
    #[error("Operation '{operation}' not found on target '{target}'")]
    OperationNotFound { target: String, operation: String },

    /// Raw argument count differs from the declared parameter count.
    #[error("Operation '{operation}' expects {expected} argument(s), got {actual}")]
    ArgumentCountMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// A raw argument could not be parsed into its parameter's semantic type.
    ///
    /// `position` is 1-based.
    #[error(
        "Argument {position} ('{parameter}'): cannot convert '{value}' to {semantic_type}: {reason}"
    )]
    ArgumentConversionError {
        parameter: String,
        position: usize,
        semantic_type: String,
        value: String,
        reason: String,
    },

    /// The operation itself failed while running.
    #[error("Operation '{operation}' on target '{target}' failed: {source}")]
    InvocationFailure {
        target: String,
        operation: String,
        #[source]
        source: anyhow::Error,
    },
}

impl InvokeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InvokeError::TargetNotFound { .. } => ErrorKind::TargetNotFound,
            InvokeError::OperationNotFound { .. } => ErrorKind::OperationNotFound,
            InvokeError::ArgumentCountMismatch { .. } => ErrorKind::ArgumentCountMismatch,
            InvokeError::ArgumentConversionError { .. } => ErrorKind::ArgumentConversionError,
            InvokeError::InvocationFailure { .. } => ErrorKind::InvocationFailure,
        }
    }

    /// Process exit status for this failure. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::TargetNotFound => 2,
            ErrorKind::OperationNotFound => 3,
            ErrorKind::ArgumentCountMismatch => 4,
            ErrorKind::ArgumentConversionError => 5,
            ErrorKind::InvocationFailure => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_exit_code_table_driven() {
        struct TestCase {
            error: InvokeError,
            kind: ErrorKind,
            exit_code: i32,
            message: &'static str,
        }

        let test_cases = vec![
            TestCase {
                error: InvokeError::TargetNotFound {
                    name: "NoSuchClass".to_string(),
                },
                kind: ErrorKind::TargetNotFound,
                exit_code: 2,
                message: "Target 'NoSuchClass' not found",
            },
            TestCase {
                error: InvokeError::OperationNotFound {
                    target: "SampleClass".to_string(),
                    operation: "Nope".to_string(),
                },
                kind: ErrorKind::OperationNotFound,
                exit_code: 3,
                message: "Operation 'Nope' not found on target 'SampleClass'",
            },
            TestCase {
                error: InvokeError::ArgumentCountMismatch {
                    operation: "MethodWithMultipleParameters".to_string(),
                    expected: 3,
                    actual: 2,
                },
                kind: ErrorKind::ArgumentCountMismatch,
                exit_code: 4,
                message: "Operation 'MethodWithMultipleParameters' expects 3 argument(s), got 2",
            },
            TestCase {
                error: InvokeError::ArgumentConversionError {
                    parameter: "num".to_string(),
                    position: 2,
                    semantic_type: "integer".to_string(),
                    value: "notanumber".to_string(),
                    reason: "invalid digit found in string".to_string(),
                },
                kind: ErrorKind::ArgumentConversionError,
                exit_code: 5,
                message: "Argument 2 ('num'): cannot convert 'notanumber' to integer: invalid digit found in string",
            },
            TestCase {
                error: InvokeError::InvocationFailure {
                    target: "Calculator".to_string(),
                    operation: "Divide".to_string(),
                    source: anyhow::anyhow!("division by zero"),
                },
                kind: ErrorKind::InvocationFailure,
                exit_code: 6,
                message: "Operation 'Divide' on target 'Calculator' failed: division by zero",
            },
        ];

        for test_case in test_cases {
            assert_eq!(test_case.error.kind(), test_case.kind);
            assert_eq!(test_case.error.exit_code(), test_case.exit_code);
            assert_ne!(test_case.error.exit_code(), 0);
            assert_eq!(test_case.error.to_string(), test_case.message);
        }
    }

    #[test]
    fn test_invocation_failure_exposes_source() {
        let error = InvokeError::InvocationFailure {
            target: "Calculator".to_string(),
            operation: "Divide".to_string(),
            source: anyhow::anyhow!("division by zero"),
        };

        let source = std::error::Error::source(&error).expect("source should be set");
        assert_eq!(source.to_string(), "division by zero");
    }
}
