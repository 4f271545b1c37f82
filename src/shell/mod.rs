// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command line and interactive front end.
//!
//! The shell only produces `(target, operation, raw arguments)` triples and
//! renders what the [`Engine`] returns. Exit codes:
//!
//! * `0` - the operation ran
//! * `1` - catalog or help display, interactive input ended, configuration failure
//! * `2..=6` - the failure kinds of [`InvokeError`](crate::errors::InvokeError)

pub mod catalog;
pub mod interactive;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::engine::{Engine, InvocationRequest};
use crate::errors::ErrorKind;
use crate::observability::{init_tracing, install_panic_hook};
use crate::observability::messages::{shell::ConfigLoaded, StructuredLog};
use crate::registry::{same_name, Registry};
use crate::targets::register_builtin;

use catalog::{write_catalog, write_target};
use interactive::{collect_request, Collected};

pub const EXIT_SUCCESS: i32 = 0;
/// Display-only runs and aborted sessions
pub const EXIT_USAGE: i32 = 1;

/// Word that switches to the prompt-driven flow when given without an operation
pub const INTERACTIVE_COMMAND: &str = "interactive";

/// Invoke an operation on a registered target by name
#[derive(Parser, Debug)]
#[command(name = "invoke", version)]
#[command(about = "Invoke an operation on a registered target by name")]
#[command(after_help = "Run without arguments to list every target, or `invoke interactive` to be prompted.")]
pub struct Cli {
    /// Configuration file (.yaml, .yml or .toml); defaults to $INVOKE_CONFIG
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Target name, or `interactive`
    pub target: Option<String>,

    /// Operation name on the target
    pub operation: Option<String>,

    /// Raw arguments, one per parameter
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Run the binary: load configuration, build the registry, dispatch.
///
/// Returns the process exit code. `Err` is reserved for failures outside the
/// invocation taxonomy, such as an unreadable configuration file.
pub fn run(cli: Cli) -> Result<i32> {
    let config = Config::resolve(cli.config.as_deref())?;
    init_tracing(&config.logging.level, cli.verbose)?;
    install_panic_hook();

    let config_path = cli
        .config
        .as_ref()
        .map(|path| path.display().to_string())
        .or_else(|| std::env::var(crate::config::consts::CONFIG_ENV_VAR).ok());
    ConfigLoaded {
        path: config_path.as_deref(),
        excluded_targets: config.targets.exclude.len(),
        date_time_formats: config.conversion.date_time_formats.len(),
    }
    .log();

    let registry = register_builtin(Registry::builder())
        .exclude(config.targets.exclude.iter().cloned())
        .build();
    let shell = Shell::new(
        Engine::with_policy(registry, config.conversion_policy()),
        config.shell.prompt.clone(),
    );

    let stdin = io::stdin();
    let code = shell.dispatch(
        cli.target.as_deref(),
        cli.operation.as_deref(),
        &cli.args,
        &mut stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(code)
}

/// Routes one command line to the catalog, the interactive flow or the engine.
#[derive(Debug)]
pub struct Shell {
    engine: Engine,
    prompt: String,
}

impl Shell {
    pub fn new(engine: Engine, prompt: impl Into<String>) -> Self {
        Self {
            engine,
            prompt: prompt.into(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Handle one command line and return its exit code.
    pub fn dispatch<R: BufRead, W: Write, E: Write>(
        &self,
        target: Option<&str>,
        operation: Option<&str>,
        args: &[String],
        input: &mut R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<i32> {
        let registry = self.engine.registry();

        let Some(target) = target else {
            write_catalog(registry, out)?;
            return Ok(EXIT_USAGE);
        };

        let Some(operation) = operation else {
            return match self.engine.resolver().target(target) {
                Ok(descriptor) => {
                    write_target(descriptor, out)?;
                    Ok(EXIT_USAGE)
                }
                Err(_) if same_name(target, INTERACTIVE_COMMAND) => self.interactive(input, out, err),
                Err(e) => {
                    writeln!(err, "error: {}", e)?;
                    write_catalog(registry, out)?;
                    Ok(e.exit_code())
                }
            };
        };

        let request = InvocationRequest::new(target, operation, args.to_vec());
        self.execute(&request, out, err)
    }

    fn interactive<R: BufRead, W: Write, E: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<i32> {
        match collect_request(self.engine.registry(), &self.prompt, input, out)? {
            Collected::Request(request) => self.execute(&request, out, err),
            Collected::NoChoices(message) => {
                writeln!(out, "{}", message)?;
                Ok(EXIT_USAGE)
            }
            Collected::InputEnded => {
                writeln!(out)?;
                writeln!(err, "error: input ended before the invocation was complete")?;
                Ok(EXIT_USAGE)
            }
        }
    }

    /// Run the pipeline and render its outcome.
    fn execute<W: Write, E: Write>(
        &self,
        request: &InvocationRequest,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<i32> {
        match self.engine.invoke(request) {
            Ok(invocation) => {
                if let Some(value) = invocation.returned {
                    writeln!(out, "{}", value)?;
                }
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                writeln!(err, "error: {}", e)?;
                match e.kind() {
                    ErrorKind::TargetNotFound => write_catalog(self.engine.registry(), out)?,
                    ErrorKind::OperationNotFound => {
                        if let Ok(target) = self.engine.resolver().target(&request.target) {
                            write_target(target, out)?;
                        }
                    }
                    _ => {}
                }
                Ok(e.exit_code())
            }
        }
    }
}
