// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it as a `tracing` event with its fields attached.
//!
//! # Organization
//!
//! * `registry` - target registration and exclusion
//! * `engine` - resolution, conversion and invocation events
//! * `shell` - configuration and interactive front end events
//!
//! # Usage Pattern
//!
//! ```rust
//! use invoke_shell::observability::messages::engine::InvocationStarted;
//! use invoke_shell::observability::messages::StructuredLog;
//!
//! let msg = InvocationStarted {
//!     target: "SampleClass",
//!     operation: "MethodWithoutParameters",
//!     argument_count: 0,
//! };
//!
//! let span = msg.span("invocation");
//! let _guard = span.enter();
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod engine;
pub mod registry;
pub mod shell;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
