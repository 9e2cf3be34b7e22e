//! Structured logging with tracing
//!
//! Configures the tracing subscriber for the demo binary. The filter comes
//! from the `WIREBOX_LOG` environment variable when set, falling back to the
//! level given on the command line.

use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use wirebox_domain::error::{Error, Result};

/// Initialize logging with the provided default level
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_env("WIREBOX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let stdout = fmt::layer().with_target(true);
    Registry::default().with(filter).with(stdout).init();

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {}. Use trace, debug, info, warn, or error",
                level
            ),
        }),
    }
}
