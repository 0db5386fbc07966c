//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "DIGEN_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
///
/// Target matching is by prefix, so `digen` covers every `digen_*` crate.
pub const DEFAULT_FILTER: &str = "digen=warn";

/// Initialize the tracing subscriber.
///
/// Reads [`LOG_ENV`] for filter directives, e.g.
/// `DIGEN_LOG=digen_search=debug,digen_harness=info`.
/// Output goes to stderr; stdout is reserved for the report.
///
/// Idempotent. If another global subscriber is already installed, that one
/// stays in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
