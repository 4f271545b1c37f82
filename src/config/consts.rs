/// Log level used when neither the config file, `--verbose` nor `RUST_LOG` says otherwise.
/// Failures are already reported on stderr by the shell, so only errors are logged.
pub const DEFAULT_LOG_LEVEL: &str = "error";
/// Prompt printed before each interactive question
pub const DEFAULT_PROMPT: &str = "> ";
/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "INVOKE_CONFIG";

/// Date/time layouts always accepted for `datetime` parameters, after RFC 3339.
pub const BUILTIN_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
/// Date-only layouts; the value is taken at midnight
pub const BUILTIN_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];
