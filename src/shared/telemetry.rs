use tracing_subscriber::{EnvFilter, fmt};

/// Installs the `RUST_LOG`-driven fmt subscriber. Later calls leave the first
/// subscriber in place.
pub fn init() {
    let _ = fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
}

/// Same filter as [`init`], writing through the test harness so output is captured.
/// Safe to call from every test.
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
