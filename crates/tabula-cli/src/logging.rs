//! Log output for the CLI.
//!
//! Filtered by `RUST_LOG` (e.g. `RUST_LOG=tabula=debug`); without it the
//! level is `warn`, or `debug` when verbose. Logs go to stderr so converted
//! output on stdout can be piped.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, before any conversion.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}
