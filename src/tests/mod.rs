//! Crate-level tests exercising the public API end to end.


/// Initialize tracing output for tests.
///
/// Respects `RUST_LOG`; defaults to `debug` so compile events show up when a
/// test fails. Safe to call from every test.
pub(crate) fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Try to initialize, ignore error if already initialized
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
