//! Diagnostic logging for the terminal host.
//!
//! Engine events go to stderr so stdout only carries game output. The level
//! defaults to `warn` and follows `RUST_LOG` when set, e.g.
//! `RUST_LOG=holecard_engine=debug holecard deal`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. A second call (or a subscriber installed
/// by a test harness) is left in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
