//! Process-wide logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Called once from `main`, never at library load, so embedders and tests
/// keep control of their own output. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
