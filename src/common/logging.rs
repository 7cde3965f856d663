// Tracing setup for hosts that embed the engine

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .ok();
}
