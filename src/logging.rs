use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber.
///
/// The filter comes from `SNIPCARD_LOG`, then `RUST_LOG`, then `default_level`.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env("SNIPCARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
