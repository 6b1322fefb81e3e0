//! File logging setup.
//!
//! The TUI owns the terminal, so logs go to ${TELE_HOME}/logs/tele.log.
//! `TELE_LOG` takes an `EnvFilter` directive and wins over the config's
//! `log_level`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Env var holding a log filter directive.
pub const LOG_ENV: &str = "TELE_LOG";

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "tele.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing to `log_dir`.
///
/// Returns `None` if a global subscriber was already installed.
pub fn init_in(log_dir: &Path, config: &Config) -> Result<Option<WorkerGuard>> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    // Dropping the guard here shuts the unused writer down.
    Ok(installed.is_ok().then_some(guard))
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_init_creates_log_directory() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        let _guard = init_in(&log_dir, &Config::default()).unwrap();

        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = Config {
            log_level: "not a [valid directive".to_string(),
            ..Config::default()
        };
        // Must not panic; the exact fallback is an implementation detail of EnvFilter.
        let _ = env_filter(&config);
    }
}
