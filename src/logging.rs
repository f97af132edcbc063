//! Diagnostic logging setup
//!
//! Status lines go to stdout through the [`crate::ui`] reporters; `tracing`
//! events go to stderr. `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool, quiet: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, quiet).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
