//! Subscriber setup for binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter for a `-v` count. `RUST_LOG` wins when no flag is given.
pub fn env_filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install a stderr `fmt` subscriber. Returns `false` if one was already set.
pub fn init_logging(verbosity: u8) -> bool {
    fmt()
        .with_env_filter(env_filter_for(verbosity))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
