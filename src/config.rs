use log::Level;
use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_SIGNUP_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub signup_endpoint: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            signup_endpoint: DEFAULT_SIGNUP_ENDPOINT.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from environment variables captured at compile time
    pub fn from_env() -> Self {
        Self {
            signup_endpoint: option_env!("SIGNUP_ENDPOINT")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(DEFAULT_SIGNUP_ENDPOINT)
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }

    pub fn signup_endpoint(&self) -> &str {
        &self.signup_endpoint
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
