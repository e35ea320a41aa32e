//! Tracing setup for the `monty` binary

use crate::interpreter::constants::{DEFAULT_LOG_FILTER, LOG_ENV};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging.
///
/// The filter comes from `MONTY_LOG` (e.g. `MONTY_LOG=monty=trace`). When it
/// is unset logging is off, so stderr carries nothing but diagnostics.
/// Calling this more than once is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
