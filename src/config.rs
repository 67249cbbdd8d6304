//! Client configuration
//!
//! Settings can come from code (builder), the environment, or a YAML file:
//!
//! ```yaml
//! api_key: "..."
//! base_url: "https://api.collegefootballdata.com"
//! timeout_secs: 20
//! user_agent: "my-app/1.0"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public CFBD API host
pub const DEFAULT_BASE_URL: &str = "https://api.collegefootballdata.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "CFBD_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "CFBD_BASE_URL";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::CfbdClient`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// API key (required before a client can be built)
    pub api_key: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Request timeout
    #[serde(rename = "timeout_secs", deserialize_with = "duration_from_secs")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read `CFBD_API_KEY` and `CFBD_BASE_URL` from the environment
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse YAML: {e}")))?;
        config.parsed_base_url()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Validate and parse the base URL
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(url)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

fn default_user_agent() -> String {
    format!("cfbd-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn duration_from_secs<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.user_agent.starts_with("cfbd-rs/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080")
            .api_key("key")
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent/1.0")
            .build();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_config_from_yaml() {
        let config = ClientConfig::from_yaml_str(
            "api_key: abc\ntimeout_secs: 12\nbase_url: https://example.com\n",
        )
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.base_url, "https://example.com");
        assert!(config.user_agent.starts_with("cfbd-rs/"));
    }

    #[test]
    fn test_config_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: from-file").unwrap();

        let config = ClientConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_missing_file() {
        let err = ClientConfig::from_yaml_file("/nonexistent/cfbd.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_config_rejects_bad_url() {
        let err = ClientConfig::from_yaml_str("base_url: not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));

        let config = ClientConfig::builder().base_url("ftp://example.com").build();
        assert!(matches!(
            config.parsed_base_url(),
            Err(Error::Config { .. })
        ));
    }
}
