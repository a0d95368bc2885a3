//! Configuration management for the contact book driver.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,

    /// Also print the address book as pretty JSON (default: false)
    pub print_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
    /// - `CONTACT_BOOK_PRINT_JSON`: true/false/1/0 (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level("LOG_LEVEL", &val)?,
            Err(_) => Config::default().log_level,
        };
        let print_json = Self::parse_env_bool("CONTACT_BOOK_PRINT_JSON", false)?;

        Ok(Config {
            log_level,
            print_json,
        })
    }

    /// Normalize and check a log level name.
    fn parse_log_level(var_name: &str, val: &str) -> ConfigResult<String> {
        let level = val.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            });
        }
        Ok(level)
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true, false, 1 or 0, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            print_json: false,
        }
    }
}
