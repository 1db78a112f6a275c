//! Tracing subscriber initialisation.
//!
//! Logs go to stderr through `tracing-subscriber`'s fmt layer, keeping
//! stdout free for command output. Verbosity is controlled with the
//! standard `RUST_LOG` environment variable and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. A second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
