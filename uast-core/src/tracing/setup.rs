//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `UAST_LOG` environment variable for per-subsystem log levels.
/// Format: `UAST_LOG=uast_core=debug,uast_go=info`
///
/// Falls back to `fallback` (usually `log.filter` from config), then to
/// `uast=info`, when `UAST_LOG` is unset or invalid.
///
/// Events are written to stderr; stdout belongs to the transport.
/// Calling this more than once has no further effect.
pub fn init_tracing(fallback: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
