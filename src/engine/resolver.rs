// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Name resolution against the registry snapshot.
//!
//! Both lookups are exact matches that ignore case. There is no prefix or
//! fuzzy fallback: a query either names exactly one target (or operation) or
//! the lookup fails.

use crate::errors::InvokeError;
use crate::registry::{same_name, OperationDescriptor, Registry, TargetDescriptor};

/// Pure lookups over a [`Registry`]. Holds no state beyond the borrow.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r Registry,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Find the target registered under `name`.
    pub fn target(&self, name: &str) -> Result<&'r TargetDescriptor, InvokeError> {
        self.registry
            .targets()
            .iter()
            .find(|target| same_name(target.name(), name))
            .ok_or_else(|| InvokeError::TargetNotFound {
                name: name.to_string(),
            })
    }

    /// Find the operation named `name` on an already resolved target.
    pub fn operation<'t>(
        &self,
        target: &'t TargetDescriptor,
        name: &str,
    ) -> Result<&'t OperationDescriptor, InvokeError> {
        target
            .operations()
            .iter()
            .find(|operation| same_name(operation.name(), name))
            .ok_or_else(|| InvokeError::OperationNotFound {
                target: target.name().to_string(),
                operation: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::targets::{Calculator, SampleClass};

    fn registry() -> Registry {
        Registry::builder()
            .register::<SampleClass>()
            .register::<Calculator>()
            .build()
    }

    #[test]
    fn test_target_lookup_table_driven() {
        struct TestCase {
            query: &'static str,
            expected: Result<&'static str, ErrorKind>,
        }

        let test_cases = vec![
            TestCase { query: "SampleClass", expected: Ok("SampleClass") },
            TestCase { query: "sampleclass", expected: Ok("SampleClass") },
            TestCase { query: "CALCULATOR", expected: Ok("Calculator") },
            // No prefix matching, in either direction
            TestCase { query: "Sample", expected: Err(ErrorKind::TargetNotFound) },
            TestCase { query: "SampleClassX", expected: Err(ErrorKind::TargetNotFound) },
            TestCase { query: "", expected: Err(ErrorKind::TargetNotFound) },
            TestCase { query: "NoSuchClass", expected: Err(ErrorKind::TargetNotFound) },
        ];

        let registry = registry();
        let resolver = Resolver::new(&registry);

        for test_case in test_cases {
            let actual = resolver
                .target(test_case.query)
                .map(|target| target.name())
                .map_err(|e| e.kind());
            assert_eq!(actual, test_case.expected, "query '{}'", test_case.query);
        }
    }

    #[test]
    fn test_target_not_found_names_query() {
        let registry = registry();
        let err = Resolver::new(&registry).target("NoSuchClass").unwrap_err();

        match err {
            InvokeError::TargetNotFound { name } => assert_eq!(name, "NoSuchClass"),
            other => panic!("expected TargetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_operation_lookup() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let sample = resolver.target("SampleClass").unwrap();

        let operation = resolver
            .operation(sample, "methodwithmultipleparameters")
            .unwrap();
        assert_eq!(operation.name(), "MethodWithMultipleParameters");

        let err = resolver.operation(sample, "MethodWith").unwrap_err();
        match err {
            InvokeError::OperationNotFound { target, operation } => {
                assert_eq!(target, "SampleClass");
                assert_eq!(operation, "MethodWith");
            }
            other => panic!("expected OperationNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = Registry::default();
        let err = Resolver::new(&registry).target("SampleClass").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TargetNotFound);
    }
}
