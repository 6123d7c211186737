// 📝 Logging setup
// RUST_LOG drives the filter; defaults to "info".

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
