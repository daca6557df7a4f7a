//! Runtime configuration.
//!
//! Everything is environment-driven with sensible defaults; the resulting
//! value is owned by `main` and passed down explicitly.
//!
//! | Variable            | Meaning                          | Default                 |
//! |---------------------|----------------------------------|-------------------------|
//! | `TASKDECK_API_URL`  | Base URL of the todo backend     | `http://localhost:3000` |
//! | `TASKDECK_LOG`      | Tracing filter directive         | `info`                  |
//! | `TASKDECK_LOG_DIR`  | Directory for the log file       | platform data dir       |

use std::path::PathBuf;

/// Default backend base URL (the classic json-server port).
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the todo backend
    pub api_base_url: String,
    /// Tracing filter directive (e.g. `info`, `taskdeck=debug`)
    pub log_filter: String,
    /// Directory for the log file; falls back to the platform data dir
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_filter: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the environment, keeping defaults for
    /// anything unset or blank.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TASKDECK_API_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        if let Ok(filter) = std::env::var("TASKDECK_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }
        if let Ok(dir) = std::env::var("TASKDECK_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.log_dir = Some(PathBuf::from(dir));
            }
        }
        config
    }

    /// Override the backend base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the tracing filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Override the log directory.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("TASKDECK_API_URL");
        std::env::remove_var("TASKDECK_LOG");
        std::env::remove_var("TASKDECK_LOG_DIR");
    }

    #[test]
    #[serial]
    fn from_env_defaults_when_unset() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_filter, "info");
        assert!(config.log_dir.is_none());
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        clear_env();
        std::env::set_var("TASKDECK_API_URL", "http://10.0.0.2:4000");
        std::env::set_var("TASKDECK_LOG", "taskdeck=debug");
        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://10.0.0.2:4000");
        assert_eq!(config.log_filter, "taskdeck=debug");
        clear_env();
    }

    #[test]
    #[serial]
    fn blank_env_values_keep_defaults() {
        clear_env();
        std::env::set_var("TASKDECK_API_URL", "  ");
        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        clear_env();
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::new()
            .with_api_base_url("http://example.test")
            .with_log_filter("debug")
            .with_log_dir("/tmp/taskdeck-test");
        assert_eq!(config.api_base_url, "http://example.test");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_dir.as_deref(), Some(std::path::Path::new("/tmp/taskdeck-test")));
    }
}
