//! Tracing setup for embedders.

use tracing_subscriber::EnvFilter;

/// Installs a global tracing subscriber with an env-filter.
///
/// The `RUST_LOG` environment variable wins when set; otherwise
/// `default_filter` applies. Safe to call more than once: later calls are
/// no-ops.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing("info");
        init_tracing("debug");
        // Should not panic
    }
}
