// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConstructionError;
use crate::registry::Operations;

/// A unit that can be driven by name from the command line.
///
/// Implementing this trait is what marks a type as invocable: the registry
/// never discovers targets on its own, the integrator hands each one to
/// [`RegistryBuilder::register`](crate::registry::RegistryBuilder::register).
///
/// # Example
/// ```
/// use invoke_shell::engine::Value;
/// use invoke_shell::errors::ConstructionError;
/// use invoke_shell::registry::{Operations, ParameterDescriptor};
/// use invoke_shell::traits::Target;
///
/// #[derive(Default)]
/// struct Greeter;
///
/// impl Target for Greeter {
///     const NAME: &'static str = "Greeter";
///
///     fn construct() -> Result<Self, ConstructionError> {
///         Ok(Self)
///     }
///
///     fn declare(operations: &mut Operations<Self>) {
///         operations.operation("Hello", [ParameterDescriptor::text("who")], |_, args| {
///             Ok(Some(Value::Text(format!("hello, {}", args.text(0)?))))
///         });
///     }
/// }
/// ```
pub trait Target: Sized + 'static {
    /// Name the target is registered and resolved under.
    const NAME: &'static str;

    /// Build a fresh default instance.
    ///
    /// Called once per invocation. A target whose construction fails while the
    /// registry is built is left out of the registry.
    fn construct() -> Result<Self, ConstructionError>;

    /// Declare the operations exposed on this target, in listing order.
    fn declare(operations: &mut Operations<Self>);
}
