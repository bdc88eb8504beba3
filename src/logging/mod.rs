// Logging module - tracing subscriber setup
//
// Stdout always gets a human-readable fmt layer. When file logging is enabled,
// a second layer writes JSON lines through a non-blocking rolling appender.
//
// Precedence: RUST_LOG env var > config file level > default "info"

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when RUST_LOG is unset
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("ds_showcase={},axum=info", config.level)
}

/// Rolling appender for the configured rotation
fn file_appender(config: &LoggingConfig) -> RollingFileAppender {
    match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the life of the process.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(config).into());

    if config.file_enabled {
        if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
            eprintln!(
                "Warning: Could not create log directory {:?}: {}",
                config.file_dir, e
            );
        } else {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config));

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();

            return Some(guard);
        }
    }

    // No file logging, or the directory could not be created
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_directive_uses_configured_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directive(&config), "ds_showcase=debug,axum=info");
        assert!(default_directive(&config).parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_file_appender_writes_under_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file_dir: dir.path().to_path_buf(),
            file_rotation: LogRotation::Never,
            ..LoggingConfig::default()
        };

        let mut appender = file_appender(&config);
        appender.write_all(b"line\n").unwrap();
        appender.flush().unwrap();

        assert!(dir.path().join("ds-showcase").is_file());
    }
}
