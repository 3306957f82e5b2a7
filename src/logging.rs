//! Diagnostic logging to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "QUOTE_ALIGN_LOG";

/// Install the global subscriber.
///
/// The filter comes from `QUOTE_ALIGN_LOG`, then `RUST_LOG`, then `warn`
/// (`info` with `--verbose`). Calling it twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
