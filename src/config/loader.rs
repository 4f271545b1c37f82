// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{CONFIG_ENV_VAR, DEFAULT_LOG_LEVEL, DEFAULT_PROMPT};
use crate::config::validation::validate_config;
use crate::engine::ConversionPolicy;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for the invocation shell.
///
/// Every section is optional; an absent file behaves like an empty one.
/// Unknown keys are rejected so typos surface instead of being ignored.
///
/// # Fields
/// * `logging` - Default log filter for the tracing subscriber
/// * `targets` - Registry adjustments applied at startup
/// * `conversion` - Extra parse formats for the conversion table
/// * `shell` - Interactive front end settings
///
/// # Example
/// ```yaml
/// logging:
///   level: warn
/// targets:
///   exclude: ["Thermometer"]
/// conversion:
///   date_time_formats: ["%d/%m/%Y"]
/// shell:
///   prompt: "invoke> "
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub targets: TargetsConfig,
    pub conversion: ConversionConfig,
    pub shell: ShellConfig,
}

/// Default log filter. `--verbose` and `RUST_LOG` take precedence.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `warn` or `invoke_shell=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Registry adjustments.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TargetsConfig {
    /// Target names (ignoring case) left out of the registry
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// `chrono` format strings tried after the built-in date/time layouts
    pub date_time_formats: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Locate and load the configuration for this process.
    ///
    /// `cli_path` wins over the `INVOKE_CONFIG` environment variable. With
    /// neither set, the defaults are used and nothing is read from disk.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => load_and_validate_config(path),
            None => Ok(Config::default()),
        }
    }

    /// The conversion table settings derived from this config.
    pub fn conversion_policy(&self) -> ConversionPolicy {
        ConversionPolicy {
            date_time_formats: self.conversion.date_time_formats.clone(),
        }
    }
}

/// Load a configuration file, choosing the parser from the file extension.
///
/// `.yaml` and `.yml` are read as YAML, `.toml` as TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let format = match extension.as_deref() {
        Some("yaml") | Some("yml") => Format::Yaml,
        Some("toml") => Format::Toml,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty YAML document deserializes to unit, not to a map
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        Format::Toml => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

enum Format {
    Yaml,
    Toml,
}

/// Load configuration from file and validate it.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}
