// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registry construction.
//!
//! This module contains message types for logging events related to:
//! * Targets accepted into the registry
//! * Targets left out (not constructible, duplicate name, hidden by config)
//! * Operations dropped because their name was already declared

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Target accepted into the registry.
///
/// # Log Level
/// `debug!` - Startup detail
pub struct TargetRegistered<'a> {
    pub target: &'a str,
    pub operation_count: usize,
}

impl Display for TargetRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered target '{}' with {} operation(s)",
            self.target, self.operation_count
        )
    }
}

impl StructuredLog for TargetRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            target_name = self.target,
            operation_count = self.operation_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "target_registered",
            span_name = name,
            target_name = self.target,
            operation_count = self.operation_count,
        )
    }
}

/// Target left out of the registry.
///
/// # Log Level
/// `warn!` - The target will not be invocable
///
/// # Example
/// ```
/// use invoke_shell::observability::messages::registry::TargetExcluded;
///
/// let msg = TargetExcluded {
///     target: "Vault",
///     reason: "Cannot construct target 'Vault': missing key",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Target 'Vault' excluded from registry: Cannot construct target 'Vault': missing key"
/// );
/// ```
pub struct TargetExcluded<'a> {
    pub target: &'a str,
    pub reason: &'a str,
}

impl Display for TargetExcluded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Target '{}' excluded from registry: {}",
            self.target, self.reason
        )
    }
}

impl StructuredLog for TargetExcluded<'_> {
    fn log(&self) {
        tracing::warn!(
            target_name = self.target,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "target_excluded",
            span_name = name,
            target_name = self.target,
            reason = self.reason,
        )
    }
}

/// A later operation declaration reused an earlier name and was dropped.
///
/// # Log Level
/// `warn!` - Declaration mistake in a target
pub struct DuplicateOperationIgnored<'a> {
    pub target: &'a str,
    pub operation: &'a str,
}

impl Display for DuplicateOperationIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Operation '{}' is declared more than once on target '{}'; keeping the first declaration",
            self.operation, self.target
        )
    }
}

impl StructuredLog for DuplicateOperationIgnored<'_> {
    fn log(&self) {
        tracing::warn!(
            target_name = self.target,
            operation = self.operation,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_operation",
            span_name = name,
            target_name = self.target,
            operation = self.operation,
        )
    }
}

/// Registry snapshot is complete.
///
/// # Log Level
/// `info!` - Startup milestone
pub struct RegistryBuilt {
    pub target_count: usize,
}

impl Display for RegistryBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registry built with {} target(s)", self.target_count)
    }
}

impl StructuredLog for RegistryBuilt {
    fn log(&self) {
        tracing::info!(target_count = self.target_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registry_built",
            span_name = name,
            target_count = self.target_count,
        )
    }
}
