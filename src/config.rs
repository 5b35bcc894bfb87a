//! Configuration
//!
//! Settings come from the environment. Parsing goes through a key lookup so
//! it can be exercised without touching the process environment.

use std::path::PathBuf;

use thiserror::Error;

pub const LOG_LEVEL_VAR: &str = "SCOOPS_LOG_LEVEL";
pub const DEVELOPMENT_LOGGING_VAR: &str = "SCOOPS_DEVELOPMENT_LOGGING";
pub const CATALOG_PATH_VAR: &str = "SCOOPS_CATALOG_PATH";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be one of {}, got {value:?}", LOG_LEVELS.join(", "))]
    InvalidLogLevel { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lowercase level name, used as the crate's tracing directive
    pub log_level: String,
    /// Human-oriented multi-line log output
    pub development_logging: bool,
    /// Catalog used when the command line doesn't name one
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            development_logging: false,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            let level = value.trim().to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value,
                });
            }
            config.log_level = level;
        }

        if let Some(value) = lookup(DEVELOPMENT_LOGGING_VAR) {
            config.development_logging = parse_flag(DEVELOPMENT_LOGGING_VAR, value)?;
        }

        config.catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
