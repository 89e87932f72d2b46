//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter driven by `LoggingConfig`.
//! `RUST_LOG` takes precedence over the configured level when set.

use crate::core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`
///
/// Returns `false` when a subscriber was already installed, which happens
/// when an embedding viewer sets up its own logging first.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format.as_str() {
        "compact" => builder.compact().try_init().is_ok(),
        _ => builder.pretty().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = %config.format, "logging initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
