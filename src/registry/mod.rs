// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The finite, ordered set of invocable targets known to the process.
//!
//! A [`Registry`] is built once at startup from an explicit registration list
//! supplied by the integrator, then treated as a read-only snapshot for the
//! rest of the process lifetime.
//!
//! # Example
//! ```
//! use invoke_shell::registry::Registry;
//! use invoke_shell::targets::SampleClass;
//!
//! let registry = Registry::builder().register::<SampleClass>().build();
//! assert_eq!(registry.len(), 1);
//! assert_eq!(registry.targets()[0].name(), "SampleClass");
//! ```

mod builder;
mod descriptors;

pub use builder::RegistryBuilder;
pub use descriptors::{
    OperationDescriptor, OperationResult, Operations, ParameterDescriptor, ParseFn, SemanticType,
    TargetDescriptor,
};

/// Case-insensitive name comparison used for every registry lookup.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Immutable snapshot of registered targets, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    targets: Vec<TargetDescriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_targets(targets: Vec<TargetDescriptor>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[TargetDescriptor] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_ignores_case() {
        let test_cases = vec![
            ("SampleClass", "sampleclass", true),
            ("SampleClass", "SAMPLECLASS", true),
            ("Größe", "GRÖSSE", false),
            ("Ärger", "ärger", true),
            ("SampleClass", "Sample", false),
            ("Sample", "SampleClass", false),
            ("", "", true),
        ];

        for (a, b, expected) in test_cases {
            assert_eq!(same_name(a, b), expected, "same_name({:?}, {:?})", a, b);
        }
    }
}
