//! Diagnostic logging for yaml-get.
//!
//! Stdout carries only the looked-up value, so every log line goes to
//! stderr. Lookup failures are logged at debug level, below the fixed `warn`
//! filter, so a normal run writes nothing to stderr.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for the crate's events. The environment is never consulted.
pub const FILTER_DIRECTIVE: &str = "yaml_get=warn";

/// Install the global stderr subscriber.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(FILTER_DIRECTIVE)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
