//! Logging bootstrap for binaries built on the library.
//!
//! The library itself only emits `tracing` events; nothing inside it installs a
//! subscriber. Clients call [`init_logging`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `masterblog=debug`.
pub const LOG_ENV: &str = "MASTERBLOG_LOG";

/// Installs a stderr `fmt` subscriber.
///
/// `MASTERBLOG_LOG` wins when set and valid; otherwise `fallback_level` is
/// used. Calling this more than once is harmless: later calls are ignored and
/// report `false`.
pub fn init_logging(fallback_level: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .is_ok()
}
