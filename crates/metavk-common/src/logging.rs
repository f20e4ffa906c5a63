use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable consulted for the log filter.
pub const LOG_ENV: &str = "METAVK_LOG";

/// Initialize structured logging with environment filter.
/// Set METAVK_LOG=debug (or trace, info, warn, error) for verbosity control.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A host application may already own the global subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init();
}
