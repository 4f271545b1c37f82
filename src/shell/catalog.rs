// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Catalog printing: every target, its operations and their parameters.

use std::io::{self, Write};

use crate::registry::{OperationDescriptor, Registry, TargetDescriptor};

/// Write every registered target, in registration order.
pub fn write_catalog<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    if registry.is_empty() {
        return writeln!(out, "No targets are registered.");
    }

    writeln!(out, "Available targets:")?;
    for target in registry.targets() {
        write_target(target, out)?;
    }
    Ok(())
}

/// Write one target followed by its operations, one per line.
pub fn write_target<W: Write>(target: &TargetDescriptor, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", target.name())?;
    if target.operations().is_empty() {
        return writeln!(out, "  (no operations)");
    }
    for operation in target.operations() {
        writeln!(out, "  {}", signature(operation))?;
    }
    Ok(())
}

/// `Name(param: type, ...)`
pub fn signature(operation: &OperationDescriptor) -> String {
    let parameters: Vec<String> = operation
        .parameters()
        .iter()
        .map(|parameter| parameter.to_string())
        .collect();
    format!("{}({})", operation.name(), parameters.join(", "))
}
