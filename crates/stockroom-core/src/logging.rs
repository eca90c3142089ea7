//! Logging initialization
//!
//! Provides a single initialization point for the tracing stack shared by
//! the server binary and tests that want log output.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at process startup; later calls are no-ops. A `RUST_LOG`
/// environment filter overrides the per-profile default.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    EnvFilter::new("stockroom_core=debug,stockroom_web=debug")
                }))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();
        }
    });
}
