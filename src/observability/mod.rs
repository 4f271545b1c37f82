// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with `Display` and
//! [`messages::StructuredLog`] implementations so log lines are not scattered
//! as magic strings through the engine. [`init_tracing`] installs the
//! subscriber; it writes to stderr so stdout carries only program output.
//!
//! # Usage
//!
//! ```rust
//! use invoke_shell::observability::messages::registry::TargetExcluded;
//! use invoke_shell::observability::messages::StructuredLog;
//!
//! TargetExcluded {
//!     target: "Vault",
//!     reason: "excluded by configuration",
//! }
//! .log();
//! ```

pub mod messages;
mod subscriber;

pub use subscriber::{filter_directive, init_tracing, install_panic_hook};
