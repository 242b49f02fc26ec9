use crate::constants::{env_vars, hosts};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_base_url, validate_runtime};

/// Where the "current season" comes from.
///
/// The two sources can disagree around season boundaries and during
/// lockouts, so a deployment picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeasonSource {
    /// Read `seasons/current` from the stats API.
    #[default]
    Remote,
    /// Derive the season from today's date.
    Local,
}

impl FromStr for SeasonSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(SeasonSource::Remote),
            "local" => Ok(SeasonSource::Local),
            other => Err(AppError::config_error(format!(
                "Unknown season source '{other}' (expected 'remote' or 'local')"
            ))),
        }
    }
}

impl fmt::Display for SeasonSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonSource::Remote => write!(f, "remote"),
            SeasonSource::Local => write!(f, "local"),
        }
    }
}

/// Configuration structure for the client and the command-line tool.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the versioned stats API. Endpoint suffixes are appended verbatim.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL of the stat-leader report host.
    #[serde(default = "default_stats_base_url")]
    pub stats_base_url: String,
    /// Base URL of the bulk player directory host.
    #[serde(default = "default_records_base_url")]
    pub records_base_url: String,
    /// Per-request timeout in seconds. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default)]
    pub season_source: SeasonSource,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_base_url() -> String {
    hosts::API_BASE_URL.to_string()
}

fn default_stats_base_url() -> String {
    hosts::STATS_BASE_URL.to_string()
}

fn default_records_base_url() -> String {
    hosts::RECORDS_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            stats_base_url: default_stats_base_url(),
            records_base_url: default_records_base_url(),
            http_timeout_seconds: default_http_timeout(),
            season_source: SeasonSource::default(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `NHL_API_BASE_URL` - Override the stats API base URL
    /// - `NHL_STATS_BASE_URL` - Override the leaders report base URL
    /// - `NHL_RECORDS_BASE_URL` - Override the player directory base URL
    /// - `NHL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `NHL_SEASON_SOURCE` - `remote` or `local`
    /// - `NHL_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `NHL_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::STATS_BASE_URL) {
            self.stats_base_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::RECORDS_BASE_URL) {
            self.records_base_url = url;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(source) = std::env::var(env_vars::SEASON_SOURCE) {
            self.season_source = source.parse()?;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_base_url("api_base_url", &self.api_base_url)?;
        validate_base_url("stats_base_url", &self.stats_base_url)?;
        validate_base_url("records_base_url", &self.records_base_url)?;
        validate_runtime(self.http_timeout_seconds, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        if Path::new(&config_path).exists() {
            println!("\nConfig Location: {config_path}");
        } else {
            println!("\nNo configuration file found at {config_path}, using defaults");
        }
        println!("────────────────────────────────────");
        println!("Stats API:        {}", config.api_base_url);
        println!("Leaders host:     {}", config.stats_base_url);
        println!("Player directory: {}", config.records_base_url);
        println!("HTTP Timeout:     {} seconds", config.http_timeout_seconds);
        println!("Season source:    {}", config.season_source);
        match &config.log_file_path {
            Some(custom_path) => println!("Log File:         {custom_path}"),
            None => println!("Log File:         {log_dir}/nhl_stats.log (default)"),
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_base_url = "http://localhost:8080/api/v1/"
http_timeout_seconds = 5
season_source = "local"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1/");
        assert_eq!(config.stats_base_url, hosts::STATS_BASE_URL);
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.season_source, SeasonSource::Local);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("nhl_stats");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config = Config {
            season_source: SeasonSource::Local,
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("season_source = \"local\""));

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let invalid_configs = vec![
            Config {
                api_base_url: String::new(),
                ..Config::default()
            },
            Config {
                stats_base_url: "www.nhl.com/stats/rest/".to_string(),
                ..Config::default()
            },
            Config {
                http_timeout_seconds: 0,
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    fn test_season_source_parsing() {
        assert_eq!("remote".parse::<SeasonSource>().unwrap(), SeasonSource::Remote);
        assert_eq!(" LOCAL ".parse::<SeasonSource>().unwrap(), SeasonSource::Local);
        assert!("lockout".parse::<SeasonSource>().is_err());
    }

    #[test]
    fn test_get_paths() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("nhl_stats"));
        assert!(config_path.ends_with("config.toml"));
        assert!(Config::get_log_dir_path().ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var(env_vars::API_BASE_URL, "http://127.0.0.1:9000/api/v1/");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
            std::env::set_var(env_vars::SEASON_SOURCE, "local");
        }

        let mut config = Config::default();
        let result = config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::API_BASE_URL);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::SEASON_SOURCE);
        }

        assert!(result.is_ok());
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/api/v1/");
        assert_eq!(config.http_timeout_seconds, 7);
        assert_eq!(config.season_source, SeasonSource::Local);
        assert_eq!(config.stats_base_url, hosts::STATS_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_invalid_season_source_env_is_rejected() {
        unsafe {
            std::env::set_var(env_vars::SEASON_SOURCE, "sometimes");
        }

        let mut config = Config::default();
        let result = config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::SEASON_SOURCE);
        }

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
