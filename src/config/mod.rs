use crate::constants::{DEFAULT_API_BASE_URL, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the client.
/// Handles loading, saving, and managing the API credential and connection settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Static API key sent with every request in the `ApiKey` header.
    pub api_key: String,
    /// Base address of the Eventor API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds. Requests block indefinitely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            log_file_path: None,
            http_timeout_seconds: None,
        }
    }
}

impl Config {
    /// Creates a configuration for the default Eventor address with the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            ..Config::default()
        }
    }

    /// Loads configuration from the default config file location.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `EVENTOR_API_KEY` - Override API key
    /// - `EVENTOR_API_URL` - Override API base URL
    /// - `EVENTOR_LOG_FILE` - Override log file path
    /// - `EVENTOR_HTTP_TIMEOUT` - HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - No key available, unreadable file or failed validation
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else if std::env::var(env_vars::API_KEY).is_ok() {
            Config::default()
        } else {
            return Err(AppError::config_error(format!(
                "No configuration found at {config_path}. Set {} or run with --set-api-key",
                env_vars::API_KEY
            )));
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `EVENTOR_*` environment overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_key,
            &self.api_base_url,
            &self.log_file_path,
            self.http_timeout_seconds,
        )
    }

    /// Base URL with any trailing slash removed.
    pub fn normalized_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let visible: String = self
            .api_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let hidden = self.api_key.chars().count().saturating_sub(4);
        format!("{}{visible}", "*".repeat(hidden))
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
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
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - The API key is masked
    /// - Handles case when no config file exists
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", config.masked_api_key());
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            match config.http_timeout_seconds {
                Some(seconds) => println!("{seconds} seconds"),
                None => println!("none"),
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips any trailing
    /// slash from the base URL.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.normalized_base_url().to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying env overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
