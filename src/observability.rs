//! Structured logging configuration.
//!
//! Logs go to stderr so that stdout stays free for settings output.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Tracing configuration options.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl TracingConfig {
    /// Filter for this configuration, unless `RUST_LOG` overrides it.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Initialize tracing with the given configuration.
///
/// # Panics
///
/// Panics if a global subscriber has already been initialized in this process.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter = config.env_filter();

    if config.json {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);

        Registry::default().with(env_filter).with(fmt_layer).init();
    }

    tracing::debug!(
        "Tracing initialized: level={}, json={}",
        config.level,
        config.json
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_config_default() {
        let config = TracingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.json);
    }

    #[test]
    fn test_tracing_config_custom() {
        let config = TracingConfig {
            level: "debug".to_string(),
            json: true,
        };
        assert_eq!(config.level, "debug");
        assert!(config.json);
    }
}
