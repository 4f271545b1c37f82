// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A target could not produce a default instance.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Cannot construct target '{target}': {reason}")]
pub struct ConstructionError {
    pub target: String,
    pub reason: String,
}

impl ConstructionError {
    pub fn new(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reason: reason.into(),
        }
    }
}
