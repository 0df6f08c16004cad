//! Logging setup built on `tracing`.
//!
//! The pipeline logs run start and summary at info, per-entry work and decode
//! fallbacks at debug. Logs go to stderr; stdout is reserved for the
//! completion summary.

use crate::error::PackError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log level
pub const LOG_ENV_VAR: &str = "BLOGPACK_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
        }
    }
}

/// Initialize the logging system.
///
/// Precedence: `BLOGPACK_LOG` environment variable, then the configured
/// level, then the `info` default.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), PackError> {
    let config = config.cloned().unwrap_or_default();

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| PackError::LoggingInit(format!("invalid log level: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| PackError::LoggingInit(e.to_string()))
}
