//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

static INIT: Once = Once::new();

/// Initialize logging for the plugin.
///
/// Reads the `NSRL_LOG` environment variable for per-target log levels,
/// e.g. `NSRL_LOG=nsrl_lookup=debug,nsrl_reduce=info`. Falls back to
/// `nsrl=info` if unset or invalid. Output goes to stderr so stdout stays
/// free for job results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter, false);
    });
}

/// Initialize logging with an explicit filter string, optionally as JSON.
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter, json));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    // Another subscriber may already be installed by the embedding runner.
    let _ = result;
}
