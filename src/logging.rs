//! Logger initialization.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Install a compact stderr logger; `RUST_LOG` overrides the default level.
///
/// Stdout is left untouched so the generated config can be piped.
pub fn init_logger(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init()
        .map_err(|e| AppError::config_error(format!("Failed to initialize logger: {}", e)))
}
