use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PLAYGROUND_LOG=debug`.
pub const LOG_ENV: &str = "PLAYGROUND_LOG";

/// Install the stderr subscriber. Quiet (`warn`) unless [`LOG_ENV`] says
/// otherwise.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
