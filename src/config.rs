//! Runtime configuration.
//!
//! Settings resolve in three layers: built-in defaults, then `TRIAGEM_*`
//! environment variables, then command-line overrides.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::{parse_positive, parse_url};
use crate::cli::CliOverrides;
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_FILE_MB: u64 = 10;

pub const ENV_URL: &str = "TRIAGEM_URL";
pub const ENV_TIMEOUT: &str = "TRIAGEM_TIMEOUT_SECS";
pub const ENV_MAX_FILE_MB: &str = "TRIAGEM_MAX_FILE_MB";
pub const ENV_LOG: &str = "TRIAGEM_LOG";

/// Path of the analysis endpoint relative to the base URL.
const ANALYZE_PATH: &str = "/analyze";

/// Resolved application configuration.
///
/// # Example
///
/// ```ignore
/// use triagem::config::AppConfig;
///
/// let config = AppConfig::from_env()?
///     .with_base_url("http://127.0.0.1:5000")
///     .with_field("origem", "tui");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Service base URL, without the `/analyze` path
    pub base_url: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Largest file accepted in file mode, in megabytes
    pub max_file_mb: u64,
    /// Extra form fields sent with every submission
    pub extra_fields: Vec<(String, String)>,
    /// Where log lines go
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_file_mb: DEFAULT_MAX_FILE_MB,
            extra_fields: Vec::new(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_file_mb(mut self, mb: u64) -> Self {
        self.max_file_mb = mb;
        self
    }

    /// Append a pass-through form field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_fields.push((name.into(), value.into()));
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_URL) {
            config.base_url = parse_url(ENV_URL, &url)?;
        }
        if let Some(secs) = get(ENV_TIMEOUT) {
            config.timeout = Duration::from_secs(parse_positive(ENV_TIMEOUT, &secs)?);
        }
        if let Some(mb) = get(ENV_MAX_FILE_MB) {
            config.max_file_mb = parse_positive(ENV_MAX_FILE_MB, &mb)?;
        }
        if let Some(path) = get(ENV_LOG) {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn apply_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(url) = cli.url {
            self.base_url = url;
        }
        if let Some(secs) = cli.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(mb) = cli.max_file_mb {
            self.max_file_mb = mb;
        }
        if let Some(path) = cli.log_file {
            self.log_file = PathBuf::from(path);
        }
        self.extra_fields.extend(cli.fields);
        self
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ANALYZE_PATH)
    }

    /// File size cap in bytes.
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_mb.saturating_mul(1024 * 1024)
    }
}

/// `<data dir>/triagem/triagem.log`, or the working directory if there is no
/// data dir.
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("triagem"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("triagem.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.max_file_mb, 10);
        assert!(config.extra_fields.is_empty());
        assert!(config.log_file.ends_with("triagem.log"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AppConfig::new()
            .with_base_url("http://api:8000")
            .with_timeout(Duration::from_secs(3))
            .with_max_file_mb(1)
            .with_field("origem", "tui")
            .with_log_file("/tmp/t.log");
        assert_eq!(config.base_url, "http://api:8000");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_file_bytes(), 1024 * 1024);
        assert_eq!(config.extra_fields, vec![("origem".to_string(), "tui".to_string())]);
        assert_eq!(config.log_file, PathBuf::from("/tmp/t.log"));
    }

    #[test]
    fn test_analyze_url_handles_trailing_slash() {
        assert_eq!(
            AppConfig::new().with_base_url("http://x:5000/").analyze_url(),
            "http://x:5000/analyze"
        );
        assert_eq!(AppConfig::new().analyze_url(), "http://localhost:5000/analyze");
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_URL, "https://triagem.example.com"),
            (ENV_TIMEOUT, "15"),
            (ENV_MAX_FILE_MB, "2"),
            (ENV_LOG, "/var/log/triagem.log"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://triagem.example.com");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.max_file_mb, 2);
        assert_eq!(config.log_file, PathBuf::from("/var/log/triagem.log"));
    }

    #[test]
    fn test_from_lookup_empty_values_are_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[(ENV_URL, "  "), (ENV_TIMEOUT, "")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_from_lookup_rejects_invalid() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_TIMEOUT, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_TIMEOUT));
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = lookup(&[(ENV_URL, "http://env:1"), (ENV_MAX_FILE_MB, "3")]);
        let config = AppConfig::from_lookup(env)
            .unwrap()
            .apply_cli(CliOverrides {
                url: Some("http://cli:2".to_string()),
                fields: vec![("a".to_string(), "b".to_string())],
                ..Default::default()
            });
        assert_eq!(config.base_url, "http://cli:2");
        assert_eq!(config.max_file_mb, 3);
        assert_eq!(config.extra_fields, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_URL, "http://from-env:9000");
        std::env::remove_var(ENV_TIMEOUT);
        let config = AppConfig::from_env();
        std::env::remove_var(ENV_URL);

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://from-env:9000");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_value_is_an_error() {
        std::env::set_var(ENV_MAX_FILE_MB, "-1");
        let result = AppConfig::from_env();
        std::env::remove_var(ENV_MAX_FILE_MB);
        assert!(result.is_err());
    }
}
