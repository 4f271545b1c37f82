// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the command line and interactive front end.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration resolved at startup.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    /// File the configuration came from, or `None` for built-in defaults
    pub path: Option<&'a str>,
    pub excluded_targets: usize,
    pub date_time_formats: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.path {
            Some(path) => write!(f, "Loaded configuration from '{}'", path),
            None => write!(f, "Using default configuration"),
        }
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path.unwrap_or("<defaults>"),
            excluded_targets = self.excluded_targets,
            date_time_formats = self.date_time_formats,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path.unwrap_or("<defaults>"),
        )
    }
}

/// An interactive answer was not a usable selection and the question is asked again.
///
/// # Log Level
/// `debug!` - Expected user behaviour
pub struct SelectionRejected<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub choices: usize,
}

impl Display for SelectionRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected '{}' for {} (choices: 1-{})",
            self.answer, self.question, self.choices
        )
    }
}

impl StructuredLog for SelectionRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            question = self.question,
            answer = self.answer,
            choices = self.choices,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "selection_rejected",
            span_name = name,
            question = self.question,
        )
    }
}
