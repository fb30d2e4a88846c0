use bank_system_api::error::{ApiError, ApiResult};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(default_level: &str) -> ApiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ApiError::InternalError(format!("Failed to initialize tracing: {e}")))
}
