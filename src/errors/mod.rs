// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod construction;
mod invocation;

pub use config::ConfigError;
pub use construction::ConstructionError;
pub use invocation::{ErrorKind, InvokeError};
