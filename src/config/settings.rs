//! Configuration settings structures for pushgate
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "pushgate".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_api_url() -> String {
    "https://api.pushover.net/1/messages.json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggerSettings {
    /// Validates the logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationError {
                    field: "logger.level".to_string(),
                    message: format!(
                        "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                        self.level
                    ),
                });
            }
        }

        match self.format.as_str() {
            "pretty" | "json" => Ok(()),
            _ => Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: pretty, json",
                    self.format
                ),
            }),
        }
    }
}

// ============================================================================
// Dispatch Configuration
// ============================================================================

/// Dispatch profile determining which credential and option variables are
/// read from the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Full optional-field surface via `PUSHOVER_*` variables
    #[default]
    Full,
    /// Body-only messages via `APP_TOKEN` / `RECIPIENT_TOKEN`
    Minimal,
}

impl Profile {
    /// Diagnostic written when required credentials are missing.
    ///
    /// The wording names both required variables for the active profile and
    /// is fixed: callers match on it verbatim.
    pub fn missing_credentials_message(&self) -> &'static str {
        match self {
            Profile::Full => {
                "PUSHOVER_APP_TOKEN and PUSHOVER_RECIPIENT_TOKEN environment variables must be set"
            }
            Profile::Minimal => "APP_TOKEN and RECIPIENT_TOKEN environment variables must be set",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Full => "full",
            Profile::Minimal => "minimal",
        }
    }
}

/// Notification dispatch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Which environment variable surface to read credentials and message
    /// options from
    #[serde(default)]
    pub profile: Profile,

    /// Pushover message API endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            api_url: default_api_url(),
        }
    }
}

impl DispatchConfig {
    /// Validates the dispatch configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "dispatch.api_url".to_string(),
                message: "API URL cannot be empty".to_string(),
            });
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                field: "dispatch.api_url".to_string(),
                message: "API URL must use http or https".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Notification dispatch configuration
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Settings {
    /// Validates the loaded settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.dispatch.validate()?;
        Ok(())
    }
}
