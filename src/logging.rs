//! File-based tracing setup.
//!
//! The TUI owns the alternate screen, so log output goes to a file under
//! the platform data dir (or `TASKDECK_LOG_DIR`) instead of stderr.
//! Logging is optional: any failure here leaves the app running without
//! a subscriber. Safe to call more than once; only the first call takes
//! effect.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

const LOG_FILE_NAME: &str = "taskdeck.log";

/// Resolve the directory the log file lives in.
fn log_dir(config: &Config) -> Option<PathBuf> {
    config
        .log_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("taskdeck")))
}

/// Install the global tracing subscriber writing to the log file.
pub fn init(config: &Config) {
    let Some(dir) = log_dir(config) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("TASKDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn init_creates_the_log_file_in_the_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new().with_log_dir(dir.path());
        init(&config);
        assert!(dir.path().join(LOG_FILE_NAME).exists());
    }

    #[test]
    #[serial]
    fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new().with_log_dir(dir.path());
        init(&config);
        init(&config);
    }
}
