// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::registry::{RegistryBuilt, TargetExcluded, TargetRegistered};
use crate::observability::messages::StructuredLog;
use crate::traits::Target;

use super::{same_name, Registry, TargetDescriptor};

/// Collects target registrations and produces a [`Registry`].
///
/// Registration order is listing order. `build` never fails: targets that
/// cannot be default-constructed, that reuse an earlier name, or that the
/// configuration hides are left out with a warning.
#[derive(Default)]
pub struct RegistryBuilder {
    registrations: Vec<TargetDescriptor>,
    excluded: Vec<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `T` as invocable.
    pub fn register<T: Target>(mut self) -> Self {
        self.registrations.push(TargetDescriptor::of::<T>());
        self
    }

    /// Hide targets by name (ignoring case), regardless of registration.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Registry {
        let mut targets: Vec<TargetDescriptor> = Vec::with_capacity(self.registrations.len());

        for descriptor in self.registrations {
            if self.excluded.iter().any(|name| same_name(name, descriptor.name())) {
                TargetExcluded {
                    target: descriptor.name(),
                    reason: "excluded by configuration",
                }
                .log();
                continue;
            }

            if targets.iter().any(|t| same_name(t.name(), descriptor.name())) {
                TargetExcluded {
                    target: descriptor.name(),
                    reason: "a target with the same name is already registered",
                }
                .log();
                continue;
            }

            // Probe once: a target that cannot be default-constructed is not invocable.
            if let Err(e) = descriptor.construct() {
                TargetExcluded {
                    target: descriptor.name(),
                    reason: &e.to_string(),
                }
                .log();
                continue;
            }

            TargetRegistered {
                target: descriptor.name(),
                operation_count: descriptor.operations().len(),
            }
            .log();
            targets.push(descriptor);
        }

        RegistryBuilt {
            target_count: targets.len(),
        }
        .log();

        Registry::from_targets(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConstructionError;
    use crate::registry::Operations;

    struct Alpha;
    struct Beta;
    struct Broken;
    struct AlphaAgain;
    struct Fragile;

    impl Target for Alpha {
        const NAME: &'static str = "Alpha";
        fn construct() -> Result<Self, ConstructionError> {
            Ok(Alpha)
        }
        fn declare(operations: &mut Operations<Self>) {
            operations.operation("Run", [], |_, _| Ok(None));
        }
    }

    impl Target for Beta {
        const NAME: &'static str = "Beta";
        fn construct() -> Result<Self, ConstructionError> {
            Ok(Beta)
        }
        fn declare(_operations: &mut Operations<Self>) {}
    }

    impl Target for Broken {
        const NAME: &'static str = "Broken";
        fn construct() -> Result<Self, ConstructionError> {
            Err(ConstructionError::new(Self::NAME, "requires a connection string"))
        }
        fn declare(operations: &mut Operations<Self>) {
            operations.operation("Run", [], |_, _| Ok(None));
        }
    }

    impl Target for Fragile {
        const NAME: &'static str = "Fragile";
        fn construct() -> Result<Self, ConstructionError> {
            panic!("no backing store")
        }
        fn declare(operations: &mut Operations<Self>) {
            operations.operation("Run", [], |_, _| Ok(None));
        }
    }

    impl Target for AlphaAgain {
        const NAME: &'static str = "ALPHA";
        fn construct() -> Result<Self, ConstructionError> {
            Ok(AlphaAgain)
        }
        fn declare(_operations: &mut Operations<Self>) {}
    }

    fn names(registry: &Registry) -> Vec<&str> {
        registry.targets().iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_build_table_driven() {
        struct TestCase {
            name: &'static str,
            builder: RegistryBuilder,
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty",
                builder: RegistryBuilder::new(),
                expected: vec![],
            },
            TestCase {
                name: "registration order is kept",
                builder: RegistryBuilder::new().register::<Beta>().register::<Alpha>(),
                expected: vec!["Beta", "Alpha"],
            },
            TestCase {
                name: "non-constructible target is excluded",
                builder: RegistryBuilder::new()
                    .register::<Alpha>()
                    .register::<Broken>()
                    .register::<Beta>(),
                expected: vec!["Alpha", "Beta"],
            },
            TestCase {
                name: "panicking constructor is excluded",
                builder: RegistryBuilder::new()
                    .register::<Fragile>()
                    .register::<Alpha>(),
                expected: vec!["Alpha"],
            },
            TestCase {
                name: "duplicate name keeps the first registration",
                builder: RegistryBuilder::new()
                    .register::<Alpha>()
                    .register::<AlphaAgain>(),
                expected: vec!["Alpha"],
            },
            TestCase {
                name: "configuration exclusion ignores case",
                builder: RegistryBuilder::new()
                    .register::<Alpha>()
                    .register::<Beta>()
                    .exclude(["beta"]),
                expected: vec!["Alpha"],
            },
        ];

        for test_case in test_cases {
            let registry = test_case.builder.build();
            assert_eq!(
                names(&registry),
                test_case.expected,
                "Test case '{}'",
                test_case.name
            );
        }
    }

    #[test]
    fn test_listing_is_stable_across_calls() {
        let registry = Registry::builder()
            .register::<Alpha>()
            .register::<Beta>()
            .build();

        assert_eq!(names(&registry), names(&registry));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
