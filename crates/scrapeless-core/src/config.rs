//! Configuration management for the Scrapeless tools
//!
//! Loads configuration with priority:
//! 1. scrapeless.toml (or specified config file)
//! 2. Environment variables (fallback)
//! 3. Defaults

use crate::auth::{ApiToken, SCRAPELESS_API_KEY_ENV};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "scrapeless.toml";
pub const DEFAULT_BASE_URL: &str = "https://api.scrapeless.com";
pub const SCRAPELESS_BASE_URL_ENV: &str = "SCRAPELESS_BASE_URL";

/// Scrapeless configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapelessConfig {
    /// API token (can reference env var with ${VAR_NAME})
    pub api_key: Option<String>,

    /// Base URL of the Scrapeless API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Interval between status checks for asynchronous vendor jobs
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Logging / tracing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub service_name: Option<String>,

    /// Emit log lines as JSON instead of the human-readable format
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ScrapelessConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ScrapelessConfig {
    /// Load configuration from scrapeless.toml in the current directory or a parent.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse configuration from TOML text and resolve env references.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: ScrapelessConfig = toml::from_str(contents)?;
        config.resolve_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Use the config file when one exists, otherwise environment and defaults only.
    pub fn load_or_env(path: Option<&Path>) -> Result<Self> {
        if path.is_some() {
            return Self::load_from(path);
        }

        match Self::find_config_file() {
            Ok(found) => Self::load_from(Some(&found)),
            Err(_) => {
                tracing::debug!("No {} found, using environment", CONFIG_FILE_NAME);
                Ok(Self::from_env())
            }
        }
    }

    /// Configuration built from environment variables and defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.resolve_env_vars();
        config
    }

    /// Find scrapeless.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!("{} not found", CONFIG_FILE_NAME))
    }

    /// Resolve ${VAR_NAME} references and apply environment fallbacks
    fn resolve_env_vars(&mut self) {
        self.api_key = match self.api_key.as_deref() {
            Some(key) => Self::resolve_env_var(key).filter(|k| !k.is_empty()),
            None => None,
        }
        .or_else(|| env::var(SCRAPELESS_API_KEY_ENV).ok());

        if let Some(resolved) = Self::resolve_env_var(&self.base_url) {
            self.base_url = resolved;
        }
        if self.base_url == DEFAULT_BASE_URL {
            if let Ok(url) = env::var(SCRAPELESS_BASE_URL_ENV) {
                self.base_url = url;
            }
        }
    }

    /// Resolve a single ${VAR_NAME} reference
    fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!("base_url must not be empty"));
        }
        if self.poll_interval_ms == 0 {
            return Err(anyhow!("poll_interval_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Resolve the API token, failing with the standard configuration error
    /// when neither the config file nor the environment provides one.
    pub fn api_token(&self) -> crate::Result<ApiToken> {
        ApiToken::resolve(self.api_key.as_deref(), SCRAPELESS_API_KEY_ENV)
    }

    /// Create test-friendly defaults (no environment lookup)
    pub fn test_defaults() -> Self {
        Self {
            api_key: Some("test-api-key".to_string()),
            base_url: "http://127.0.0.1:0".to_string(),
            poll_interval_ms: 10,
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}
