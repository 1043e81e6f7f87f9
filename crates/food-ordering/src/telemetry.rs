//! Tracing setup for binaries and tests embedding the facade.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::OrderingError;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "food_ordering=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), OrderingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| OrderingError::Telemetry(e.to_string()))
}
