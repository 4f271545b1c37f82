// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in demonstration targets, registered by the `invoke` binary.

pub mod calculator;
pub mod sample;
pub mod thermometer;

pub use calculator::Calculator;
pub use sample::SampleClass;
pub use thermometer::{Temperature, Thermometer};

use crate::registry::RegistryBuilder;

/// Register every built-in target, in listing order.
pub fn register_builtin(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .register::<SampleClass>()
        .register::<Calculator>()
        .register::<Thermometer>()
}
