//! Diagnostic logging.
//!
//! Progress and summaries go to stdout through `cli::report`; warnings and
//! debug traces go to stderr through `tracing`.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "wordloc=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let ansi = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(ansi),
        )
        .try_init();
}
