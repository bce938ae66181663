//! Configuration management for the Contact Desk.
//!
//! This module handles loading and validating configuration from environment variables.
//! The .env file is read through `dotenvy`, which never prints to stdout (the MCP channel).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Form identifier the capture service files submissions under.
pub const DEFAULT_FORM_NAME: &str = "contato";

/// The studio's WhatsApp number, country code first.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5548984650120";

/// Base URL of the messaging deep links.
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Configuration for the Contact Desk.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site URL whose root path accepts form posts
    pub form_endpoint_url: String,

    /// Value sent in the `form-name` field (default: "contato")
    pub form_name: String,

    /// Target number for the messaging deep link
    pub whatsapp_number: String,

    /// Messaging deep link base URL (default: "https://wa.me")
    pub messaging_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Launch the platform URL handler for deep links (default: false)
    pub open_links: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `FORM_ENDPOINT_URL`: Site URL that receives form posts
    ///
    /// Optional environment variables:
    /// - `FORM_NAME`: Form identifier (default: "contato")
    /// - `WHATSAPP_NUMBER`: Deep link target, digits only (default: studio number)
    /// - `MESSAGING_BASE_URL`: Deep link base (default: "https://wa.me")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds, at least 1 (default: 10)
    /// - `OPEN_LINKS`: "true" to launch the system browser (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let form_endpoint_url = env::var("FORM_ENDPOINT_URL")
            .map_err(|_| ConfigError::MissingVar("FORM_ENDPOINT_URL".to_string()))?;
        Self::require_http_url("FORM_ENDPOINT_URL", &form_endpoint_url)?;

        let form_name = env::var("FORM_NAME").unwrap_or_else(|_| DEFAULT_FORM_NAME.to_string());
        if form_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FORM_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let whatsapp_number =
            env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
        if whatsapp_number.len() < 10 || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "WHATSAPP_NUMBER".to_string(),
                reason: format!("Must be at least 10 digits, got: {}", whatsapp_number),
            });
        }

        let messaging_base_url = env::var("MESSAGING_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_MESSAGING_BASE_URL.to_string());
        Self::require_http_url("MESSAGING_BASE_URL", &messaging_base_url)?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }
        let open_links = Self::parse_env_bool("OPEN_LINKS", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            form_endpoint_url,
            form_name,
            whatsapp_number,
            messaging_base_url,
            request_timeout,
            open_links,
            log_level,
        })
    }

    fn require_http_url(var_name: &str, value: &str) -> ConfigResult<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
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

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            form_endpoint_url: String::new(),
            form_name: DEFAULT_FORM_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            messaging_base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
            request_timeout: 10,
            open_links: false,
            log_level: "error".to_string(),
        }
    }
}
