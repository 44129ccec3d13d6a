use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BUGFLOW_LOG=debug`
pub const LOG_ENV: &str = "BUGFLOW_LOG";

/// Install the global subscriber
///
/// Logs go to stderr so stdout only carries command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
