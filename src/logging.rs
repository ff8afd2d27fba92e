use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `FINSTATE_LOG=debug`.
pub(crate) const LOG_ENV: &str = "FINSTATE_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber. Only called for non-interactive commands,
/// the terminal UI owns the screen.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
