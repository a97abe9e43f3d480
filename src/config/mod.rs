//! Configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{info, warn};

/// Configuration for the task view client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Origin of the REST backend, e.g. "http://localhost:5000"
    pub api_origin: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_origin: "http://localhost:5000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Create a new configuration with a custom backend origin
    pub fn new(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: api_origin.into(),
            ..Default::default()
        }
    }

    /// Load configuration from file, environment variables, or defaults
    pub fn load() -> crate::Result<Self> {
        // Try to load from config file specified in environment variable
        if let Ok(config_path) = env::var("TASK_VIEW_CONFIG") {
            info!("Loading config from TASK_VIEW_CONFIG: {}", config_path);
            return Self::from_file(&config_path);
        }

        // Try default config file locations
        let default_paths = vec![
            "config.yaml",
            "config.toml",
            "config/config.yaml",
            "config/config.toml",
        ];

        for path in default_paths {
            if Path::new(path).exists() {
                info!("Loading config from: {}", path);
                return Self::from_file(path);
            }
        }

        // Try environment variables
        if let Ok(config) = Self::from_env() {
            info!("Loaded config from environment variables");
            return Ok(config);
        }

        // Fall back to defaults
        warn!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| {
                crate::TaskViewError::ConfigError(format!("Failed to load config file: {}", e))
            })?;

        let config: Config = settings.try_deserialize().map_err(|e| {
            crate::TaskViewError::ConfigError(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();
        let mut found_any = false;

        if let Ok(val) = env::var("TASK_VIEW_API_ORIGIN") {
            config.api_origin = val;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_VIEW_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = val.parse().map_err(|e| {
                crate::TaskViewError::ConfigError(format!("Invalid REQUEST_TIMEOUT_SECS: {}", e))
            })?;
            found_any = true;
        }

        if !found_any {
            return Err(crate::TaskViewError::ConfigError(
                "No environment variables found".to_string(),
            ));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.api_origin.is_empty() {
            return Err(crate::TaskViewError::ConfigError(
                "API origin must not be empty".to_string(),
            ));
        }

        if !self.api_origin.starts_with("http://") && !self.api_origin.starts_with("https://") {
            return Err(crate::TaskViewError::ConfigError(
                "API origin must be an http(s) URL".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(crate::TaskViewError::ConfigError(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
