//! Configuration management for the onboarding client.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the onboarding client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination for submissions. `None` is a valid state: submits then end
    /// in a configuration error instead of a network call.
    pub onboard_url: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ONBOARD_URL`: Submission endpoint; empty is the same as unset
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print anything, and a missing file is fine
        let _ = dotenvy::dotenv();

        let onboard_url = env::var("ONBOARD_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        if let Some(url) = &onboard_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "ONBOARD_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            onboard_url,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            onboard_url: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
