//! Tracing subscriber initialisation

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install a global `tracing` subscriber built from the logging configuration
///
/// `RUST_LOG`, when set, takes precedence over `config.level`. Returns `false`
/// if a global subscriber was already installed, in which case nothing changes.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig {
            level: "not a valid directive ==".to_string(),
            format: LogFormat::Compact,
            colored: false,
            source_location: false,
        };
        // The first call may lose to another test's subscriber; the second never installs.
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
