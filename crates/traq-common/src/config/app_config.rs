//! Application configuration structs
//!
//! Loads configuration from environment variables. The server base URL is
//! read once at startup and treated as immutable for the process lifetime.

use serde::Deserialize;
use std::env;
use url::Url;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Configured traQ server identity
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL all generated links and images point at
    pub base_url: Url,
}

impl ServerConfig {
    /// Host component of the configured base URL
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.base_url.host_str()
    }
}

// Default value functions
fn default_app_name() -> String {
    "traq-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// carry values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = env::var("TRAQ_SERVER_URL")
            .map_err(|_| ConfigError::MissingVar("TRAQ_SERVER_URL"))?;
        let base_url = Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidValue("TRAQ_SERVER_URL", e.to_string()))?;
        if base_url.host_str().is_none() {
            return Err(ConfigError::InvalidValue(
                "TRAQ_SERVER_URL",
                "URL has no host".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig { base_url },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
