// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the config schema
    #[error("Failed to parse YAML config '{}': {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file is not valid TOML for the config schema
    #[error("Failed to parse TOML config '{}': {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file extension does not name a supported format
    #[error(
        "Unsupported config file '{}': expected a .yaml, .yml or .toml extension",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    /// A single field holds an unusable value
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },

    /// One or more fields failed validation
    #[error("Configuration validation failed: {}", join_issues(.0))]
    Validation(Vec<ConfigError>),
}

fn join_issues(issues: &[ConfigError]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
