//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process: JSON logs with timestamps,
/// filterable via `RUST_LOG`, defaulting to `info`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
