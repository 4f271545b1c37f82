// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::panic;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::engine::invoker::panic_message;
use crate::observability::messages::{engine::PanicCaptured, StructuredLog};

/// Directive used when `--verbose` is passed.
const VERBOSE_DIRECTIVE: &str = "debug";

/// Pick the filter directive: `--verbose` wins over the configured level.
///
/// `RUST_LOG`, when set, overrides both inside [`init_tracing`].
pub fn filter_directive(configured: &str, verbose: bool) -> &str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        configured
    }
}

/// Install the global `tracing` subscriber.
///
/// Events go to stderr so they never mix with operation output on stdout.
pub fn init_tracing(configured_level: &str, verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(configured_level, verbose)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(())
}

/// Replace the default panic hook with one that only emits a `debug!` event.
///
/// Panics raised by targets are already reported as invocation failures, so
/// the default hook's `thread panicked at` line and backtrace stay off stderr.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        PanicCaptured {
            message: panic_message(info.payload()),
            location: location.as_deref(),
        }
        .log();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_panic_hook_routes_payload_to_debug_event() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        install_panic_hook();
        let outcome = tracing::subscriber::with_default(subscriber, || {
            panic::catch_unwind(|| panic!("internal detail x=42"))
        });

        assert!(outcome.is_err());
        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("DEBUG"), "logged: {}", logged);
        assert!(logged.contains("internal detail x=42"), "logged: {}", logged);
        assert!(logged.contains("subscriber.rs"), "logged: {}", logged);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("warn", false), "warn");
        assert_eq!(filter_directive("warn", true), "debug");
        assert_eq!(filter_directive("invoke_shell=trace", false), "invoke_shell=trace");
    }
}
