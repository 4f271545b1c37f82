// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Every section is checked and all problems are collected before returning,
//! so one run reports every bad field instead of the first one:
//!
//! 1. **Logging**: the level must parse as a `tracing_subscriber` filter directive
//! 2. **Targets**: excluded names must not be blank
//! 3. **Conversion**: each date/time format must be a non-empty, well-formed `chrono` format,
//!    and one naming an hour must also name a minute

use chrono::format::{Item, StrftimeItems};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::engine::converter::time_fields;
use crate::errors::ConfigError;

/// Check a loaded configuration.
///
/// # Returns
/// * `Ok(())` if every field is usable
/// * `Err(ConfigError::Validation)` listing every problem found
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut issues = Vec::new();

    if let Err(e) = EnvFilter::try_new(&config.logging.level) {
        issues.push(ConfigError::Invalid {
            field: "logging.level".to_string(),
            reason: format!("'{}' is not a log filter: {}", config.logging.level, e),
        });
    }

    for (index, name) in config.targets.exclude.iter().enumerate() {
        if name.trim().is_empty() {
            issues.push(ConfigError::Invalid {
                field: format!("targets.exclude[{}]", index),
                reason: "target name is empty".to_string(),
            });
        }
    }

    for (index, format) in config.conversion.date_time_formats.iter().enumerate() {
        if let Err(reason) = check_date_time_format(format) {
            issues.push(ConfigError::Invalid {
                field: format!("conversion.date_time_formats[{}]", index),
                reason,
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(issues))
    }
}

fn check_date_time_format(format: &str) -> Result<(), String> {
    if format.trim().is_empty() {
        return Err("format is empty".to_string());
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(format!("'{}' is not a valid chrono format", format));
    }
    let fields = time_fields(format);
    if fields.hour && !fields.minute {
        return Err(format!("'{}' names an hour without a minute", format));
    }
    Ok(())
}
