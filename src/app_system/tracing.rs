/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used. The
/// subscriber prints uptime timestamps in the compact format. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
///
/// ```bash
/// RUST_LOG=debug cargo run                       # every lookup
/// RUST_LOG=order_lookup::actors=debug cargo run  # service handlers only
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
