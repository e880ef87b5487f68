//! Environment-driven configuration for the tribes services.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3020;
pub const DEFAULT_DATA_PATH: &str = "people-data.json";
pub const DEFAULT_SITE_NAME: &str = "techtribes.je";
pub const DEFAULT_TWITTER_PROFILE_URL: &str = "https://twitter.com/";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON document seeding the in-memory directory and feeds
    pub data_path: PathBuf,
    pub site_name: String,
    /// Base URL that unknown twitter handles are redirected to
    pub twitter_profile_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            site_name: DEFAULT_SITE_NAME.to_string(),
            twitter_profile_url: DEFAULT_TWITTER_PROFILE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load a `.env` file if present, then read the configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PEOPLE_SERVICE_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PEOPLE_SERVICE_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty_var("PEOPLE_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            data_path: non_empty_var("PEOPLE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            site_name: non_empty_var("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            twitter_profile_url: non_empty_var("TWITTER_PROFILE_URL")
                .unwrap_or_else(|| DEFAULT_TWITTER_PROFILE_URL.to_string()),
        })
    }

    /// External profile URL for a twitter handle.
    pub fn twitter_profile(&self, handle: &str) -> String {
        format!("{}/{}", self.twitter_profile_url.trim_end_matches('/'), handle)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "PEOPLE_SERVICE_HOST",
        "PEOPLE_SERVICE_PORT",
        "PEOPLE_DATA_PATH",
        "SITE_NAME",
        "TWITTER_PROFILE_URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("PEOPLE_SERVICE_PORT", "8081");
        env::set_var("SITE_NAME", "example.org");
        env::set_var("PEOPLE_DATA_PATH", "");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.site_name, "example.org");
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        env::set_var("PEOPLE_SERVICE_PORT", "not-a-port");

        let err = AppConfig::from_env().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PEOPLE_SERVICE_PORT",
                value: "not-a-port".to_string()
            }
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_without_env_file() {
        clear_env();
        env::set_var("SITE_NAME", "example.org");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.site_name, "example.org");
        clear_env();
    }

    #[test]
    fn test_twitter_profile_url() {
        let config = AppConfig::default();
        assert_eq!(config.twitter_profile("annj"), "https://twitter.com/annj");

        let config = AppConfig {
            twitter_profile_url: "https://x.example".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.twitter_profile("annj"), "https://x.example/annj");
    }
}
