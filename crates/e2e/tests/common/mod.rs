// Shared helpers for integration tests

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes tracing once per test binary.
///
/// Respects RUST_LOG; silent by default.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
