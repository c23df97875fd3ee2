//! Backend connection settings.
//!
//! Resolution order: defaults, then the JSON file named by
//! `LEAGUE_CONFIG_PATH`, then `LEAGUE_API_URL` / `LEAGUE_API_TIMEOUT_SECS`.

use std::{env, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "LEAGUE_CONFIG_PATH";
pub const API_URL_ENV: &str = "LEAGUE_API_URL";
pub const API_TIMEOUT_ENV: &str = "LEAGUE_API_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config from {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Base of the REST API, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl LeagueConfig {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_ENV).map(|p| p.trim().to_string()) {
            Some(path) if !path.is_empty() => {
                let content = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
                Self::from_json(&content).map_err(|e| ConfigError::Parse {
                    origin: format!("{CONFIG_PATH_ENV}='{path}'"),
                    message: e.to_string(),
                })?
            }
            _ => Self::default(),
        };

        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            config.timeout_secs = raw.trim().parse().map_err(|e| ConfigError::Parse {
                origin: API_TIMEOUT_ENV.to_string(),
                message: format!("'{raw}': {e}"),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = LeagueConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LeagueConfig::default());
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_env_overrides() {
        let config = LeagueConfig::from_lookup(lookup_from(&[
            (API_URL_ENV, " http://league.test/api "),
            (API_TIMEOUT_ENV, "30"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://league.test/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_file_then_env_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_url": "https://file.test/api", "timeout_secs": 5}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = LeagueConfig::from_lookup(lookup_from(&[(CONFIG_PATH_ENV, path.as_str())])).unwrap();
        assert_eq!(config.base_url, "https://file.test/api");
        assert_eq!(config.timeout_secs, 5);

        let config = LeagueConfig::from_lookup(lookup_from(&[
            (CONFIG_PATH_ENV, path.as_str()),
            (API_TIMEOUT_ENV, "12"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://file.test/api");
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"timeout_secs": 3}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = LeagueConfig::from_lookup(lookup_from(&[(CONFIG_PATH_ENV, path.as_str())])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = LeagueConfig::from_lookup(lookup_from(&[(CONFIG_PATH_ENV, "/nonexistent/league.json")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_values() {
        let err = LeagueConfig::from_lookup(lookup_from(&[(API_TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = LeagueConfig::from_lookup(lookup_from(&[(API_TIMEOUT_ENV, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LeagueConfig::from_lookup(lookup_from(&[(API_URL_ENV, "ftp://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
