//! Tracing subscriber bootstrap

use salestrail_domain::{LoggingConfig, Result, SalesTrailError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a full filter directive (e.g.
/// `salestrail_core=debug,info`). Takes precedence over the configured level.
pub const LOG_ENV_VAR: &str = "SALESTRAIL_LOG";

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns `SalesTrailError::Config` for an invalid level directive and
/// `SalesTrailError::Internal` if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    installed.map_err(|e| SalesTrailError::Internal(format!("tracing already initialized: {e}")))
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        SalesTrailError::Config(format!("invalid log level {:?}: {e}", config.level))
    })
}
