//! Logging configuration and tracing subscriber setup

use serde::Deserialize;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::ValidationError;

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "WELLNESS_AGE_LOG";

static INIT: Once = Once::new();

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `wellness_age=debug`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter {
                filter: self.filter.clone(),
                reason: e.to_string(),
            })
    }

    /// Install the global tracing subscriber.
    ///
    /// `WELLNESS_AGE_LOG` wins over the configured filter. Only the first
    /// call has any effect.
    pub fn init(&self) {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(&self.filter));

            let registry = tracing_subscriber::registry().with(filter);
            // try_init: a host application may already own the global subscriber
            let _ = if self.json {
                registry
                    .with(fmt::layer().json().with_target(true))
                    .try_init()
            } else {
                registry
                    .with(fmt::layer().with_target(true).with_line_number(true))
                    .try_init()
            };
        });
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "wellness_age=info".to_string()
}
